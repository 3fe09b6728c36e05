//! Guidance cycle orchestration.
//!
//! Flow: snapshot prefs → career phase (model call, parse, tag-checked
//! commit) → skill phase chained on a non-empty career set.
//!
//! A model failure in either phase commits an empty set for that phase and
//! the cycle still reports Ok; the session is never left loading. A cycle
//! whose tag has been superseded stops without touching state.

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::guidance::builder::{recommendation_request, skill_gap_request};
use crate::guidance::parser::{parse_recommendations, parse_skill_suggestions, ParseError};
use crate::llm_client::{ModelClient, RequestSpec};
use crate::session::Session;

/// How one phase of a cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseOutcome {
    /// Results parsed and committed.
    Completed,
    /// The model answered with an empty set.
    Empty,
    /// The call or parse failed; an empty set was committed.
    Failed,
    /// The phase never ran.
    Skipped,
    /// A newer cycle took over before this one could commit.
    Superseded,
}

/// Summary of one generation cycle.
#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    pub cycle: u64,
    pub careers: PhaseOutcome,
    pub career_count: usize,
    pub skills: PhaseOutcome,
    pub skill_count: usize,
}

impl CycleReport {
    fn without_skills(cycle: u64, careers: PhaseOutcome, career_count: usize) -> Self {
        CycleReport {
            cycle,
            careers,
            career_count,
            skills: PhaseOutcome::Skipped,
            skill_count: 0,
        }
    }
}

/// Runs one full guidance cycle against the session.
///
/// The profile must carry at least one interest or skill; that check
/// happens before a new cycle tag is taken, so a rejected request never
/// supersedes a cycle in flight.
pub async fn run_cycle(
    session: &Session,
    model: &dyn ModelClient,
) -> Result<CycleReport, AppError> {
    let prefs = session.prefs_snapshot().await;
    if !prefs.profile.has_guidance_terms() {
        return Err(AppError::Validation(
            "Please add at least one interest or skill to generate recommendations.".to_string(),
        ));
    }

    let cycle = session.begin_cycle().await;
    info!("Starting guidance cycle {} for session {}", cycle, session.id);

    let spec = recommendation_request(&prefs.profile, prefs.language);
    let (careers_outcome, recommendations) =
        call_phase(model, &spec, parse_recommendations, "Career").await;

    let career_count = recommendations.len();
    if !session.commit_careers(cycle, recommendations.clone()).await {
        info!("Guidance cycle {cycle} superseded before career commit");
        return Ok(CycleReport::without_skills(cycle, PhaseOutcome::Superseded, 0));
    }

    if recommendations.is_empty() {
        return Ok(CycleReport::without_skills(cycle, careers_outcome, 0));
    }

    if !session.begin_skill_phase(cycle).await {
        return Ok(CycleReport {
            skills: PhaseOutcome::Superseded,
            ..CycleReport::without_skills(cycle, careers_outcome, career_count)
        });
    }

    let spec = skill_gap_request(&recommendations, &prefs.profile, prefs.language);
    let (skills_outcome, suggestions) =
        call_phase(model, &spec, parse_skill_suggestions, "Skill").await;

    let skill_count = suggestions.len();
    if !session.commit_skills(cycle, suggestions).await {
        info!("Guidance cycle {cycle} superseded before skill commit");
        return Ok(CycleReport {
            skills: PhaseOutcome::Superseded,
            ..CycleReport::without_skills(cycle, careers_outcome, career_count)
        });
    }

    info!("Guidance cycle {cycle} finished: {career_count} careers, {skill_count} skill suggestions");

    Ok(CycleReport {
        cycle,
        careers: careers_outcome,
        career_count,
        skills: skills_outcome,
        skill_count,
    })
}

/// Calls the model and decodes one phase. Failures collapse to an empty
/// set so the caller always has something to commit.
async fn call_phase<T>(
    model: &dyn ModelClient,
    spec: &RequestSpec,
    parse: impl Fn(&str) -> Result<Vec<T>, ParseError>,
    phase: &str,
) -> (PhaseOutcome, Vec<T>) {
    match model.call(spec).await {
        Ok(text) => match parse(&text) {
            Ok(items) if items.is_empty() => (PhaseOutcome::Empty, items),
            Ok(items) => (PhaseOutcome::Completed, items),
            Err(e) => {
                warn!("{phase} phase returned malformed output: {e}");
                (PhaseOutcome::Failed, Vec::new())
            }
        },
        Err(e) => {
            warn!("{phase} phase model call failed: {e}");
            (PhaseOutcome::Failed, Vec::new())
        }
    }
}
