//! Locale-keyed UI strings.
//!
//! Each locale has its own exhaustive `match` over [`TextKey`], so adding a key
//! without translating it for every locale is a compile error.

use crate::types::Locale;

/// Every translatable string the application shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextKey {
    // Header / footer
    AppName,
    Tagline,
    EmergencyContact,
    HelplineContact,

    // Hero
    HeroTitle,
    HeroSubtitle,
    FeatureAlwaysAvailable,
    FeatureMultiLanguage,
    FeaturePersonalCare,
    StartChat,

    // Chat widget
    ChatHeading,
    ChatSubheading,
    ChatTitle,
    Greeting,
    Placeholder,
    Listening,
    Send,
    VoiceUnavailable,

    // Dashboard
    OutbreaksTitle,
    HealthCentersTitle,
    LevelHigh,
    LevelMedium,
    LevelLow,
    HoursOpen,
    HoursLimited,

    // Vaccination schedule
    VaccinationTitle,
    StatusUpcoming,
    StatusCompleted,
    StatusOverdue,

    // Badges
    AchievementsTitle,
    OverallProgress,
    Earned,
    Locked,
}

/// Resolve `key` for `locale`.
pub fn text(locale: Locale, key: TextKey) -> &'static str {
    match locale {
        Locale::En => en(key),
        Locale::Hi => hi(key),
        Locale::Or => or(key),
    }
}

/// Canned assistant replies for `locale`. Never empty.
pub fn canned_replies(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::En => &EN_REPLIES,
        Locale::Hi => &HI_REPLIES,
        Locale::Or => &OR_REPLIES,
    }
}

const EN_REPLIES: [&str; 4] = [
    "That's a great question about your health. Let me help you with that.",
    "Based on current health guidelines, here's what I recommend...",
    "It's important to consult with a healthcare professional for personalized advice.",
    "I can provide general health information. For specific concerns, please visit a doctor.",
];

const HI_REPLIES: [&str; 4] = [
    "यह आपके स्वास्थ्य के बारे में एक बेहतरीन सवाल है। मैं इसमें आपकी मदद करता हूं।",
    "वर्तमान स्वास्थ्य दिशानिर्देशों के आधार पर, यहां मेरी सिफारिश है...",
    "व्यक्तिगत सलाह के लिए स्वास्थ्य पेशेवर से सलाह लेना महत्वपूर्ण है।",
    "मैं सामान्य स्वास्थ्य जानकारी प्रदान कर सकता हूं। विशिष्ट चिंताओं के लिए कृपया डॉक्टर से मिलें।",
];

const OR_REPLIES: [&str; 4] = [
    "ଏହା ଆପଣଙ୍କ ସ୍ୱାସ୍ଥ୍ୟ ବିଷୟରେ ଏକ ଉତ୍କୃଷ୍ଟ ପ୍ରଶ୍ନ। ମୁଁ ଏଥିରେ ଆପଣଙ୍କୁ ସାହାଯ୍ୟ କରିବି।",
    "ବର୍ତ୍ତମାନ ସ୍ୱାସ୍ଥ୍ୟ ନିର୍ଦ୍ଦେଶାବଳୀ ଆଧାରରେ, ଏଠାରେ ମୋର ସୁପାରିଶ...",
    "ବ୍ୟକ୍ତିଗତ ପରାମର୍ଶ ପାଇଁ ସ୍ୱାସ୍ଥ୍ୟ ପେଶାଦାରଙ୍କ ସହିତ ପରାମର୍ଶ କରିବା ଗୁରୁତ୍ୱପୂର୍ଣ୍ଣ।",
    "ମୁଁ ସାଧାରଣ ସ୍ୱାସ୍ଥ୍ୟ ସୂଚନା ପ୍ରଦାନ କରିପାରିବି। ନିର୍ଦ୍ଦିଷ୍ଟ ଚିନ୍ତା ପାଇଁ ଦୟାକରି ଡାକ୍ତରଙ୍କୁ ଭେଟନ୍ତୁ।",
];

fn en(key: TextKey) -> &'static str {
    match key {
        TextKey::AppName => "Medi Mitra",
        TextKey::Tagline => "Your trusted AI companion for better health and wellness.",
        TextKey::EmergencyContact => "Emergency: 108",
        TextKey::HelplineContact => "Health Helpline: 1075",
        TextKey::HeroTitle => "Your AI-Powered Health Companion",
        TextKey::HeroSubtitle => "Get instant health guidance, track your wellness journey, and stay informed about health alerts in your area.",
        TextKey::FeatureAlwaysAvailable => "24/7 Available",
        TextKey::FeatureMultiLanguage => "Multi-language Support",
        TextKey::FeaturePersonalCare => "Personalized Care",
        TextKey::StartChat => "Start Chat",
        TextKey::ChatHeading => "Chat with Your AI Health Assistant",
        TextKey::ChatSubheading => "Get instant answers to your health questions with voice and text support in multiple languages.",
        TextKey::ChatTitle => "AI Health Assistant",
        TextKey::Greeting => "Hello! I'm your AI health assistant. How can I help you today?",
        TextKey::Placeholder => "Ask me about your health...",
        TextKey::Listening => "Listening...",
        TextKey::Send => "Send",
        TextKey::VoiceUnavailable => "Voice input is not available here.",
        TextKey::OutbreaksTitle => "Current Outbreak Alerts",
        TextKey::HealthCentersTitle => "Nearby Health Centers",
        TextKey::LevelHigh => "High",
        TextKey::LevelMedium => "Medium",
        TextKey::LevelLow => "Low",
        TextKey::HoursOpen => "24/7 Open",
        TextKey::HoursLimited => "Limited Hours",
        TextKey::VaccinationTitle => "Vaccination Schedule",
        TextKey::StatusUpcoming => "Upcoming",
        TextKey::StatusCompleted => "Completed",
        TextKey::StatusOverdue => "Overdue",
        TextKey::AchievementsTitle => "Your Achievements",
        TextKey::OverallProgress => "Overall Progress",
        TextKey::Earned => "Earned",
        TextKey::Locked => "Locked",
    }
}

fn hi(key: TextKey) -> &'static str {
    match key {
        TextKey::AppName => "मेडी मित्रा",
        TextKey::Tagline => "बेहतर स्वास्थ्य और कल्याण के लिए आपका विश्वसनीय AI साथी।",
        TextKey::EmergencyContact => "आपातकाल: 108",
        TextKey::HelplineContact => "स्वास्थ्य हेल्पलाइन: 1075",
        TextKey::HeroTitle => "आपका AI-संचालित स्वास्थ्य साथी",
        TextKey::HeroSubtitle => "तुरंत स्वास्थ्य मार्गदर्शन प्राप्त करें, अपनी कल्याण यात्रा को ट्रैक करें, और अपने क्षेत्र में स्वास्थ्य अलर्ट के बारे में सूचित रहें।",
        TextKey::FeatureAlwaysAvailable => "24/7 उपलब्ध",
        TextKey::FeatureMultiLanguage => "बहु-भाषा समर्थन",
        TextKey::FeaturePersonalCare => "व्यक्तिगत देखभाल",
        TextKey::StartChat => "चैट शुरू करें",
        TextKey::ChatHeading => "अपने AI स्वास्थ्य सहायक से चैट करें",
        TextKey::ChatSubheading => "कई भाषाओं में आवाज और टेक्स्ट समर्थन के साथ अपने स्वास्थ्य प्रश्नों के तुरंत उत्तर प्राप्त करें।",
        TextKey::ChatTitle => "AI स्वास्थ्य सहायक",
        TextKey::Greeting => "नमस्ते! मैं आपका AI स्वास्थ्य सहायक हूं। मैं आज आपकी कैसे मदद कर सकता हूं?",
        TextKey::Placeholder => "अपने स्वास्थ्य के बारे में पूछें...",
        TextKey::Listening => "सुन रहा हूं...",
        TextKey::Send => "भेजें",
        TextKey::VoiceUnavailable => "यहां आवाज इनपुट उपलब्ध नहीं है।",
        TextKey::OutbreaksTitle => "वर्तमान प्रकोप अलर्ट",
        TextKey::HealthCentersTitle => "आस-पास के स्वास्थ्य केंद्र",
        TextKey::LevelHigh => "उच्च",
        TextKey::LevelMedium => "मध्यम",
        TextKey::LevelLow => "कम",
        TextKey::HoursOpen => "24/7 खुला",
        TextKey::HoursLimited => "सीमित घंटे",
        TextKey::VaccinationTitle => "टीकाकरण अनुसूची",
        TextKey::StatusUpcoming => "आगामी",
        TextKey::StatusCompleted => "पूर्ण",
        TextKey::StatusOverdue => "देर से",
        TextKey::AchievementsTitle => "आपकी उपलब्धियां",
        TextKey::OverallProgress => "समग्र प्रगति",
        TextKey::Earned => "अर्जित",
        TextKey::Locked => "बंद",
    }
}

fn or(key: TextKey) -> &'static str {
    match key {
        TextKey::AppName => "ମେଡି ମିତ୍ର",
        TextKey::Tagline => "ଉନ୍ନତ ସ୍ୱାସ୍ଥ୍ୟ ଏବଂ କଲ୍ୟାଣ ପାଇଁ ଆପଣଙ୍କର ବିଶ୍ୱସ୍ତ AI ସାଥୀ।",
        TextKey::EmergencyContact => "ଜରୁରୀକାଳୀନ: 108",
        TextKey::HelplineContact => "ସ୍ୱାସ୍ଥ୍ୟ ହେଲ୍ପଲାଇନ: 1075",
        TextKey::HeroTitle => "ଆପଣଙ୍କର AI-ଶକ୍ତିଶାଳୀ ସ୍ୱାସ୍ଥ୍ୟ ସାଥୀ",
        TextKey::HeroSubtitle => "ତୁରନ୍ତ ସ୍ୱାସ୍ଥ୍ୟ ନିର୍ଦ୍ଦେଶନା ପାଆନ୍ତୁ, ଆପଣଙ୍କର କଲ୍ୟାଣ ଯାତ୍ରାକୁ ଟ୍ରାକ କରନ୍ତୁ, ଏବଂ ଆପଣଙ୍କ ଅଞ୍ଚଳରେ ସ୍ୱାସ୍ଥ୍ୟ ଚେତାବନୀ ବିଷୟରେ ସୂଚିତ ରହନ୍ତୁ।",
        TextKey::FeatureAlwaysAvailable => "24/7 ଉପଲବ୍ଧ",
        TextKey::FeatureMultiLanguage => "ବହୁ-ଭାଷା ସମର୍ଥନ",
        TextKey::FeaturePersonalCare => "ବ୍ୟକ୍ତିଗତ ଯତ୍ନ",
        TextKey::StartChat => "ଚାଟ ଆରମ୍ଭ କରନ୍ତୁ",
        TextKey::ChatHeading => "ଆପଣଙ୍କର AI ସ୍ୱାସ୍ଥ୍ୟ ସହାୟକଙ୍କ ସହିତ ଚାଟ କରନ୍ତୁ",
        TextKey::ChatSubheading => "ଏକାଧିକ ଭାଷାରେ ଧ୍ୱନି ଏବଂ ପାଠ ସମର୍ଥନ ସହିତ ଆପଣଙ୍କର ସ୍ୱାସ୍ଥ୍ୟ ପ୍ରଶ୍ନଗୁଡ଼ିକର ତୁରନ୍ତ ଉତ୍ତର ପାଆନ୍ତୁ।",
        TextKey::ChatTitle => "AI ସ୍ୱାସ୍ଥ୍ୟ ସହାୟକ",
        TextKey::Greeting => "ନମସ୍କାର! ମୁଁ ଆପଣଙ୍କର AI ସ୍ୱାସ୍ଥ୍ୟ ସହାୟକ। ଆଜି ମୁଁ ଆପଣଙ୍କୁ କିପରି ସାହାଯ୍ୟ କରିପାରିବି?",
        TextKey::Placeholder => "ଆପଣଙ୍କ ସ୍ୱାସ୍ଥ୍ୟ ବିଷୟରେ ପଚାରନ୍ତୁ...",
        TextKey::Listening => "ଶୁଣୁଛି...",
        TextKey::Send => "ପଠାନ୍ତୁ",
        TextKey::VoiceUnavailable => "ଏଠାରେ ସ୍ୱର ଇନପୁଟ ଉପଲବ୍ଧ ନାହିଁ।",
        TextKey::OutbreaksTitle => "ବର୍ତ୍ତମାନ ରୋଗ ବିସ୍ତାର ଚେତାବନୀ",
        TextKey::HealthCentersTitle => "ନିକଟସ୍ଥ ସ୍ୱାସ୍ଥ୍ୟ କେନ୍ଦ୍ର",
        TextKey::LevelHigh => "ଉଚ୍ଚ",
        TextKey::LevelMedium => "ମଧ୍ୟମ",
        TextKey::LevelLow => "କମ",
        TextKey::HoursOpen => "24/7 ଖୋଲା",
        TextKey::HoursLimited => "ସୀମିତ ଘଣ୍ଟା",
        TextKey::VaccinationTitle => "ଟିକାକରଣ କାର୍ଯ୍ୟସୂଚୀ",
        TextKey::StatusUpcoming => "ଆଗାମୀ",
        TextKey::StatusCompleted => "ସମ୍ପୂର୍ଣ୍ଣ",
        TextKey::StatusOverdue => "ବିଳମ୍ବିତ",
        TextKey::AchievementsTitle => "ଆପଣଙ୍କର ସଫଳତା",
        TextKey::OverallProgress => "ସାମଗ୍ରିକ ପ୍ରଗତି",
        TextKey::Earned => "ଅର୍ଜିତ",
        TextKey::Locked => "ବନ୍ଦ",
    }
}
