//! Static UI strings for the supported languages.
//!
//! English is the complete base table. Every other language overrides a
//! subset of keys and falls back to English for the rest, so lookups never
//! miss. Hindi is the only fully localized table besides English.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::language::Language;

/// UI string keys, serialized in camelCase to match the client names.
/// Ordered by declaration so serialized tables keep a stable key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TranslationKey {
    Welcome,
    Subtitle,
    Profile,
    Recommendations,
    Skills,
    Chat,
    Submit,
    Loading,
    Share,
    MarketOutlook,
    Salary,
    Match,
    FullName,
    EducationLevel,
    PreferredLocation,
    Interests,
    EnterName,
    LocationPlaceholder,
    InterestPlaceholder,
    SkillPlaceholder,
    ChatPlaceholder,
    FilterPlaceholder,
    LearnSkills,
    SkillsGap,
    RecommendedResources,
    FindingResources,
    GenerateFirst,
}

impl TranslationKey {
    pub const ALL: [TranslationKey; 27] = [
        TranslationKey::Welcome,
        TranslationKey::Subtitle,
        TranslationKey::Profile,
        TranslationKey::Recommendations,
        TranslationKey::Skills,
        TranslationKey::Chat,
        TranslationKey::Submit,
        TranslationKey::Loading,
        TranslationKey::Share,
        TranslationKey::MarketOutlook,
        TranslationKey::Salary,
        TranslationKey::Match,
        TranslationKey::FullName,
        TranslationKey::EducationLevel,
        TranslationKey::PreferredLocation,
        TranslationKey::Interests,
        TranslationKey::EnterName,
        TranslationKey::LocationPlaceholder,
        TranslationKey::InterestPlaceholder,
        TranslationKey::SkillPlaceholder,
        TranslationKey::ChatPlaceholder,
        TranslationKey::FilterPlaceholder,
        TranslationKey::LearnSkills,
        TranslationKey::SkillsGap,
        TranslationKey::RecommendedResources,
        TranslationKey::FindingResources,
        TranslationKey::GenerateFirst,
    ];
}

/// Resolves one key for a language, falling back to English when the
/// language has no localized string for it.
pub fn translate(language: Language, key: TranslationKey) -> &'static str {
    let localized = match language {
        Language::English => return english(key),
        Language::Hindi => Some(hindi(key)),
        Language::Bengali => bengali(key),
        Language::Telugu => telugu(key),
        Language::Marathi => marathi(key),
        Language::Tamil => tamil(key),
        Language::Urdu => urdu(key),
        Language::Gujarati => gujarati(key),
        Language::Kannada => kannada(key),
        Language::Malayalam => malayalam(key),
        Language::Odia => odia(key),
        Language::Punjabi => punjabi(key),
        Language::Assamese => assamese(key),
    };
    localized.unwrap_or_else(|| english(key))
}

/// Full resolved table for one language.
pub fn string_table(language: Language) -> BTreeMap<TranslationKey, &'static str> {
    TranslationKey::ALL
        .iter()
        .map(|&key| (key, translate(language, key)))
        .collect()
}

fn english(key: TranslationKey) -> &'static str {
    use TranslationKey::*;
    match key {
        Welcome => "Welcome to PathWeaver",
        Subtitle => "AI-Powered Career Navigator",
        Profile => "My Profile",
        Recommendations => "Career Paths",
        Skills => "Skill Up",
        Chat => "AI Mentor",
        Submit => "Analyze Career",
        Loading => "AI is analyzing your future...",
        Share => "Share",
        MarketOutlook => "Market Outlook",
        Salary => "Salary (INR)",
        Match => "Match",
        FullName => "Full Name",
        EducationLevel => "Education Level",
        PreferredLocation => "Preferred Location (City/State)",
        Interests => "Interests",
        EnterName => "Enter your name",
        LocationPlaceholder => "e.g. Bangalore, Mumbai, Remote",
        InterestPlaceholder => "e.g. Coding, Design, Space",
        SkillPlaceholder => "e.g. Python, Public Speaking",
        ChatPlaceholder => "Ask about careers, courses, or advice...",
        FilterPlaceholder => "Filter by title...",
        LearnSkills => "Learn Skills",
        SkillsGap => "SKILLS GAP:",
        RecommendedResources => "Recommended Topics/Resources",
        FindingResources => "Finding learning resources...",
        GenerateFirst => "Generate career recommendations first to see skill paths!",
    }
}

fn hindi(key: TranslationKey) -> &'static str {
    use TranslationKey::*;
    match key {
        Welcome => "पाथवीवर में आपका स्वागत है",
        Subtitle => "एआई-संचालित करियर नेविगेटर",
        Profile => "मेरी प्रोफाइल",
        Recommendations => "करियर सुझाव",
        Skills => "कौशल विकास",
        Chat => "एआई मेंटर",
        Submit => "करियर विश्लेषण करें",
        Loading => "एआई विश्लेषण कर रहा है...",
        Share => "साझा करें",
        MarketOutlook => "बाजार दृष्टिकोण",
        Salary => "वेतन (INR)",
        Match => "मेल",
        FullName => "पूरा नाम",
        EducationLevel => "शिक्षा स्तर",
        PreferredLocation => "पसंदीदा स्थान",
        Interests => "रुचियां",
        EnterName => "अपना नाम दर्ज करें",
        LocationPlaceholder => "जैसे बैंगलोर, मुंबई",
        InterestPlaceholder => "जैसे कोडिंग, क्रिकेट",
        SkillPlaceholder => "जैसे पायथन, अंग्रेजी",
        ChatPlaceholder => "करियर या कोर्स के बारे में पूछें...",
        FilterPlaceholder => "शीर्षक से खोजें...",
        LearnSkills => "कौशल सीखें",
        SkillsGap => "कौशल अंतराल:",
        RecommendedResources => "अनुशंसित संसाधन",
        FindingResources => "संसाधन खोज रहे हैं...",
        GenerateFirst => "कौशल देखने के लिए पहले करियर विश्लेषण करें!",
    }
}

fn bengali(key: TranslationKey) -> Option<&'static str> {
    use TranslationKey::*;
    let localized = match key {
        Welcome => "PathWeaver-এ স্বাগতম",
        Profile => "আমার প্রোফাইল",
        Recommendations => "ক্যারিয়ার পাথ",
        Skills => "দক্ষতা বৃদ্ধি",
        Chat => "এআই মেন্টর",
        Submit => "বিশ্লেষণ করুন",
        Loading => "বিশ্লেষণ করা হচ্ছে...",
        FullName => "সম্পূর্ণ নাম",
        EducationLevel => "শিক্ষাগত যোগ্যতা",
        PreferredLocation => "পছন্দের জায়গা",
        Interests => "আগ্রহ",
        EnterName => "আপনার নাম লিখুন",
        LocationPlaceholder => "যেমন কলকাতা, ঢাকা",
        ChatPlaceholder => "ক্যারিয়ার সম্পর্কে জিজ্ঞাসা করুন...",
        LearnSkills => "দক্ষতা শিখুন",
        _ => return None,
    };
    Some(localized)
}

fn telugu(key: TranslationKey) -> Option<&'static str> {
    use TranslationKey::*;
    let localized = match key {
        Welcome => "PathWeaverకి స్వాగతం",
        Profile => "నా ప్రొఫైల్",
        Recommendations => "కారియర్ మార్గాలు",
        Skills => "నైపుణ్యాలు",
        Chat => "AI మెంటర్",
        Submit => "విశ్లేషించండి",
        FullName => "పూర్తి పేరు",
        EducationLevel => "చదువు",
        PreferredLocation => "ప్రాంతం",
        Interests => "ఆసక్తులు",
        EnterName => "మీ పేరు రాయండి",
        LocationPlaceholder => "ఉదా. హైదరాబాద్",
        ChatPlaceholder => "మీ సందేహాలను అడగండి...",
        LearnSkills => "నైపుణ్యాలను నేర్చుకోండి",
        _ => return None,
    };
    Some(localized)
}

fn marathi(key: TranslationKey) -> Option<&'static str> {
    use TranslationKey::*;
    let localized = match key {
        Welcome => "PathWeaver मध्ये स्वागत आहे",
        Profile => "माझी प्रोफाइल",
        Recommendations => "करिअर मार्ग",
        Skills => "कौशल्य",
        Chat => "AI मार्गदर्शक",
        Submit => "विश्लेषण करा",
        FullName => "पूर्ण नाव",
        EducationLevel => "शिक्षण",
        PreferredLocation => "पसंतीचे ठिकाण",
        Interests => "आवडी",
        EnterName => "तुमचे नाव टाका",
        LocationPlaceholder => "उदा. पुणे, मुंबई",
        ChatPlaceholder => "करिअरबद्दल विचारा...",
        LearnSkills => "कौशल्य शिका",
        _ => return None,
    };
    Some(localized)
}

fn tamil(key: TranslationKey) -> Option<&'static str> {
    use TranslationKey::*;
    let localized = match key {
        Welcome => "PathWeaver-க்கு வரவேற்கிறோம்",
        Profile => "சுயவிவரம்",
        Recommendations => "வேலை வாய்ப்புகள்",
        Skills => "திறன்கள்",
        Chat => "AI வழிகாட்டி",
        Submit => "பகுப்பாய்வு",
        FullName => "முழு பெயர்",
        EducationLevel => "கல்வி",
        PreferredLocation => "விருப்பமான இடம்",
        Interests => "விருப்பங்கள்",
        EnterName => "உங்கள் பெயரை உள்ளிடவும்",
        LocationPlaceholder => "எ.கா. சென்னை",
        ChatPlaceholder => "வேலை வாய்ப்பு பற்றி கேட்கவும்...",
        LearnSkills => "திறன்களைக் கற்கவும்",
        _ => return None,
    };
    Some(localized)
}

fn gujarati(key: TranslationKey) -> Option<&'static str> {
    use TranslationKey::*;
    let localized = match key {
        Welcome => "PathWeaver માં આપનું સ્વાગત છે",
        Profile => "મારી પ્રોફાઇલ",
        Submit => "વિશ્લેષણ કરો",
        FullName => "પૂરું નામ",
        Interests => "રસ",
        ChatPlaceholder => "કારકિર્દી વિશે પૂછો...",
        _ => return None,
    };
    Some(localized)
}

fn kannada(key: TranslationKey) -> Option<&'static str> {
    use TranslationKey::*;
    let localized = match key {
        Welcome => "PathWeaver ಗೆ ಸ್ವಾಗತ",
        Profile => "ನನ್ನ ಪ್ರೊಫೈಲ್",
        Submit => "ವಿಶ್ಲೇಷಿಸಿ",
        FullName => "ಪೂರ್ಣ ಹೆಸರು",
        Interests => "ಆಸಕ್ತಿಗಳು",
        ChatPlaceholder => "ವೃತ್ತಿಜೀವನದ ಬಗ್ಗೆ ಕೇಳಿ...",
        _ => return None,
    };
    Some(localized)
}

fn malayalam(key: TranslationKey) -> Option<&'static str> {
    use TranslationKey::*;
    let localized = match key {
        Welcome => "PathWeaver-ലേക്ക് സ്വാഗതം",
        Profile => "എന്റെ പ്രൊഫൈൽ",
        Submit => "വിശകലനം ചെയ്യുക",
        FullName => "മുഴുവൻ പേര്",
        Interests => "താൽപ്പര്യങ്ങൾ",
        ChatPlaceholder => "കരിയറിനെക്കുറിച്ച് ചോദിക്കുക...",
        _ => return None,
    };
    Some(localized)
}

fn urdu(key: TranslationKey) -> Option<&'static str> {
    use TranslationKey::*;
    let localized = match key {
        Welcome => "PathWeaver میں خوش آمدید",
        Profile => "میری پروفائل",
        Submit => "تجزیہ کریں",
        FullName => "پورا نام",
        Interests => "دلچسپیاں",
        ChatPlaceholder => "کیریئر کے بارے میں پوچھیں...",
        _ => return None,
    };
    Some(localized)
}

fn odia(key: TranslationKey) -> Option<&'static str> {
    use TranslationKey::*;
    let localized = match key {
        Welcome => "PathWeaver କୁ ସ୍ୱାଗତ",
        Profile => "ମୋର ପ୍ରୋଫାଇଲ୍",
        Submit => "ବିଶ୍ଳେଷଣ କରନ୍ତୁ",
        FullName => "ପୂର୍ଣ୍ଣ ନାମ",
        Interests => "ଆଗ୍ରହ",
        _ => return None,
    };
    Some(localized)
}

fn punjabi(key: TranslationKey) -> Option<&'static str> {
    use TranslationKey::*;
    let localized = match key {
        Welcome => "PathWeaver ਵਿੱਚ ਜੀ ਆਇਆਂ ਨੂੰ",
        Profile => "ਮੇਰੀ ਪ੍ਰੋਫਾਈਲ",
        Submit => "ਵਿਸ਼ਲੇਸ਼ਣ ਕਰੋ",
        FullName => "ਪੂਰਾ ਨਾਮ",
        Interests => "ਦਿਲਚਸਪੀਆਂ",
        _ => return None,
    };
    Some(localized)
}

fn assamese(key: TranslationKey) -> Option<&'static str> {
    use TranslationKey::*;
    let localized = match key {
        Welcome => "PathWeaver লৈ স্বাগতম",
        Profile => "মোৰ প্ৰফাইল",
        Submit => "বিশ্লেষণ কৰক",
        FullName => "সম্পূৰ্ণ নাম",
        Interests => "আগ্ৰহ",
        _ => return None,
    };
    Some(localized)
}

/// Motivational quote shown on the landing view.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

pub const MOTIVATIONAL_QUOTES: [Quote; 6] = [
    Quote {
        text: "Arise, awake, and stop not till the goal is reached.",
        author: "Swami Vivekananda",
    },
    Quote {
        text: "You have to dream before your dreams can come true.",
        author: "A.P.J. Abdul Kalam",
    },
    Quote {
        text: "Education is the most powerful weapon which you can use to change the world.",
        author: "Nelson Mandela",
    },
    Quote {
        text: "Success is not the key to happiness. Happiness is the key to success.",
        author: "Albert Schweitzer",
    },
    Quote {
        text: "The future belongs to those who believe in the beauty of their dreams.",
        author: "Eleanor Roosevelt",
    },
    Quote {
        text: "Don't watch the clock; do what it does. Keep going.",
        author: "Sam Levenson",
    },
];
