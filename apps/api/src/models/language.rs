use serde::{Deserialize, Serialize};

/// Output languages accepted by the API. Variant names match the wire
/// strings exactly, so the plain derive is the whole codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Bengali,
    Telugu,
    Marathi,
    Tamil,
    Urdu,
    Gujarati,
    Kannada,
    Malayalam,
    Odia,
    Punjabi,
    Assamese,
}

impl Language {
    pub const ALL: [Language; 13] = [
        Language::English,
        Language::Hindi,
        Language::Bengali,
        Language::Telugu,
        Language::Marathi,
        Language::Tamil,
        Language::Urdu,
        Language::Gujarati,
        Language::Kannada,
        Language::Malayalam,
        Language::Odia,
        Language::Punjabi,
        Language::Assamese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Bengali => "Bengali",
            Language::Telugu => "Telugu",
            Language::Marathi => "Marathi",
            Language::Tamil => "Tamil",
            Language::Urdu => "Urdu",
            Language::Gujarati => "Gujarati",
            Language::Kannada => "Kannada",
            Language::Malayalam => "Malayalam",
            Language::Odia => "Odia",
            Language::Punjabi => "Punjabi",
            Language::Assamese => "Assamese",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
