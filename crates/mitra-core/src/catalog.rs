//! Fixed demo datasets: outbreak alerts, nearby health centers, the
//! vaccination schedule and achievement badges.
//!
//! The data is compile-time constant. [`CatalogSnapshot`] joins it with the
//! locale's labels so a front end can render it without its own lookups.

use chrono::NaiveDate;
use serde::Serialize;

use crate::i18n::{text, TextKey};
use crate::types::Locale;

// =============================================================================
// Shared
// =============================================================================

/// Visual emphasis for a status pill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Default,
    Success,
    Warning,
    Destructive,
}

// =============================================================================
// Outbreaks
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    High,
    Medium,
    Low,
}

impl AlertLevel {
    pub fn variant(&self) -> Variant {
        match self {
            AlertLevel::High => Variant::Destructive,
            AlertLevel::Medium => Variant::Warning,
            AlertLevel::Low => Variant::Success,
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match self {
            AlertLevel::High => text(locale, TextKey::LevelHigh),
            AlertLevel::Medium => text(locale, TextKey::LevelMedium),
            AlertLevel::Low => text(locale, TextKey::LevelLow),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Increasing,
    Stable,
    Decreasing,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Outbreak {
    pub id: u32,
    pub disease: &'static str,
    pub location: &'static str,
    pub level: AlertLevel,
    pub cases: u32,
    pub trend: Trend,
}

pub const OUTBREAKS: &[Outbreak] = &[
    Outbreak {
        id: 1,
        disease: "Dengue",
        location: "Central District",
        level: AlertLevel::High,
        cases: 45,
        trend: Trend::Increasing,
    },
    Outbreak {
        id: 2,
        disease: "Common Cold",
        location: "Northern Areas",
        level: AlertLevel::Medium,
        cases: 128,
        trend: Trend::Stable,
    },
    Outbreak {
        id: 3,
        disease: "Food Poisoning",
        location: "Market Area",
        level: AlertLevel::Low,
        cases: 12,
        trend: Trend::Decreasing,
    },
];

// =============================================================================
// Health centers
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningHours {
    AlwaysOpen,
    Limited,
}

impl OpeningHours {
    pub fn label(&self, locale: Locale) -> &'static str {
        match self {
            OpeningHours::AlwaysOpen => text(locale, TextKey::HoursOpen),
            OpeningHours::Limited => text(locale, TextKey::HoursLimited),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HealthCenter {
    pub id: u32,
    pub name: &'static str,
    pub distance_km: f32,
    pub contact: &'static str,
    pub hours: OpeningHours,
    pub services: &'static [&'static str],
}

pub const HEALTH_CENTERS: &[HealthCenter] = &[
    HealthCenter {
        id: 1,
        name: "City Primary Health Center",
        distance_km: 0.8,
        contact: "+91 98765 43210",
        hours: OpeningHours::AlwaysOpen,
        services: &["General Medicine", "Vaccination", "Emergency"],
    },
    HealthCenter {
        id: 2,
        name: "Community Health Clinic",
        distance_km: 1.2,
        contact: "+91 98765 43211",
        hours: OpeningHours::Limited,
        services: &["Pediatrics", "Women Health", "Lab Tests"],
    },
    HealthCenter {
        id: 3,
        name: "Government Hospital",
        distance_km: 2.1,
        contact: "+91 98765 43212",
        hours: OpeningHours::AlwaysOpen,
        services: &["All Specialties", "ICU", "Surgery"],
    },
];

// =============================================================================
// Vaccinations
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VaccinationStatus {
    Upcoming,
    Completed,
    Overdue,
}

impl VaccinationStatus {
    pub fn variant(&self) -> Variant {
        match self {
            VaccinationStatus::Completed => Variant::Success,
            VaccinationStatus::Upcoming => Variant::Default,
            VaccinationStatus::Overdue => Variant::Destructive,
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match self {
            VaccinationStatus::Upcoming => text(locale, TextKey::StatusUpcoming),
            VaccinationStatus::Completed => text(locale, TextKey::StatusCompleted),
            VaccinationStatus::Overdue => text(locale, TextKey::StatusOverdue),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Vaccination {
    pub id: u32,
    pub vaccine: &'static str,
    pub age_group: &'static str,
    /// ISO-8601 calendar date.
    pub due_date: &'static str,
    pub status: VaccinationStatus,
    pub location: &'static str,
    pub description: &'static str,
}

impl Vaccination {
    pub fn due_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.due_date, "%Y-%m-%d").ok()
    }

    /// Due date written for `locale`. Falls back to the stored text if it
    /// does not parse.
    pub fn due_date_display(&self, locale: Locale) -> String {
        self.due_date()
            .map(|date| locale.format_date(date))
            .unwrap_or_else(|| self.due_date.to_string())
    }
}

pub const VACCINATIONS: &[Vaccination] = &[
    Vaccination {
        id: 1,
        vaccine: "COVID-19 Booster",
        age_group: "Adult",
        due_date: "2024-02-15",
        status: VaccinationStatus::Upcoming,
        location: "City Health Center",
        description: "Annual booster dose for continued protection",
    },
    Vaccination {
        id: 2,
        vaccine: "Influenza (Flu)",
        age_group: "Adult",
        due_date: "2024-01-20",
        status: VaccinationStatus::Overdue,
        location: "Community Clinic",
        description: "Seasonal flu vaccination",
    },
    Vaccination {
        id: 3,
        vaccine: "Hepatitis B",
        age_group: "Adult",
        due_date: "2023-12-10",
        status: VaccinationStatus::Completed,
        location: "Government Hospital",
        description: "Hepatitis B protection series",
    },
    Vaccination {
        id: 4,
        vaccine: "Tetanus (Td)",
        age_group: "Adult",
        due_date: "2024-06-30",
        status: VaccinationStatus::Upcoming,
        location: "Primary Health Center",
        description: "10-year tetanus booster",
    },
];

// =============================================================================
// Badges
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeKind {
    HealthChampion,
    PreventionMaster,
    WellnessWarrior,
    KnowledgeSeeker,
    CommunityHelper,
    StreakKeeper,
}

impl BadgeKind {
    pub fn name(&self, locale: Locale) -> &'static str {
        use BadgeKind::*;
        match (locale, self) {
            (Locale::En, HealthChampion) => "Health Champion",
            (Locale::En, PreventionMaster) => "Prevention Master",
            (Locale::En, WellnessWarrior) => "Wellness Warrior",
            (Locale::En, KnowledgeSeeker) => "Knowledge Seeker",
            (Locale::En, CommunityHelper) => "Community Helper",
            (Locale::En, StreakKeeper) => "Streak Keeper",

            (Locale::Hi, HealthChampion) => "स्वास्थ्य चैंपियन",
            (Locale::Hi, PreventionMaster) => "रोकथाम मास्टर",
            (Locale::Hi, WellnessWarrior) => "कल्याण योद्धा",
            (Locale::Hi, KnowledgeSeeker) => "ज्ञान खोजी",
            (Locale::Hi, CommunityHelper) => "समुदायिक सहायक",
            (Locale::Hi, StreakKeeper) => "निरंतरता रक्षक",

            (Locale::Or, HealthChampion) => "ସ୍ୱାସ୍ଥ୍ୟ ଚାମ୍ପିୟନ",
            (Locale::Or, PreventionMaster) => "ପ୍ରତିରୋଧ ମାଷ୍ଟର",
            (Locale::Or, WellnessWarrior) => "କଲ୍ୟାଣ ଯୋଦ୍ଧା",
            (Locale::Or, KnowledgeSeeker) => "ଜ୍ଞାନ ଅନ୍ୱେଷକ",
            (Locale::Or, CommunityHelper) => "ସମୁଦାୟ ସହାୟକ",
            (Locale::Or, StreakKeeper) => "ଧାରାବାହିକତା ରକ୍ଷକ",
        }
    }

    pub fn description(&self, locale: Locale) -> &'static str {
        use BadgeKind::*;
        match (locale, self) {
            (Locale::En, HealthChampion) => "Completed 10 health assessments",
            (Locale::En, PreventionMaster) => "Learned about disease prevention",
            (Locale::En, WellnessWarrior) => "Maintained healthy habits for 30 days",
            (Locale::En, KnowledgeSeeker) => "Completed all educational modules",
            (Locale::En, CommunityHelper) => "Shared health tips with friends",
            (Locale::En, StreakKeeper) => "Used the app daily for 7 days",

            (Locale::Hi, HealthChampion) => "10 स्वास्थ्य मूल्यांकन पूरे किए",
            (Locale::Hi, PreventionMaster) => "रोग रोकथाम के बारे में सीखा",
            (Locale::Hi, WellnessWarrior) => "30 दिनों तक स्वस्थ आदतें बनाए रखीं",
            (Locale::Hi, KnowledgeSeeker) => "सभी शैक्षिक मॉड्यूल पूरे किए",
            (Locale::Hi, CommunityHelper) => "दोस्तों के साथ स्वास्थ्य सुझाव साझा किए",
            (Locale::Hi, StreakKeeper) => "7 दिनों तक रोजाना ऐप का उपयोग किया",

            (Locale::Or, HealthChampion) => "10ଟି ସ୍ୱାସ୍ଥ୍ୟ ମୂଲ୍ୟାଙ୍କନ ସମ୍ପୂର୍ଣ୍ଣ କଲେ",
            (Locale::Or, PreventionMaster) => "ରୋଗ ପ୍ରତିରୋଧ ବିଷୟରେ ଶିଖିଲେ",
            (Locale::Or, WellnessWarrior) => "30 ଦିନ ପାଇଁ ସୁସ୍ଥ ଅଭ୍ୟାସ ବଜାୟ ରଖିଲେ",
            (Locale::Or, KnowledgeSeeker) => "ସମସ୍ତ ଶିକ୍ଷାଗତ ମଡ୍ୟୁଲ ସମ୍ପୂର୍ଣ୍ଣ କଲେ",
            (Locale::Or, CommunityHelper) => "ବନ୍ଧୁଙ୍କ ସହିତ ସ୍ୱାସ୍ଥ୍ୟ ଟିପ୍ସ ଅଂଶୀଦାର କଲେ",
            (Locale::Or, StreakKeeper) => "7 ଦିନ ନିତିଦିନ ଆପ ବ୍ୟବହାର କଲେ",
        }
    }

    /// Localized `(name, description)`.
    pub fn label(&self, locale: Locale) -> (&'static str, &'static str) {
        (self.name(locale), self.description(locale))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub kind: BadgeKind,
    pub earned: bool,
    /// Accent color shown when earned.
    pub color: &'static str,
}

pub const BADGES: &[Badge] = &[
    Badge {
        kind: BadgeKind::HealthChampion,
        earned: true,
        color: "yellow",
    },
    Badge {
        kind: BadgeKind::PreventionMaster,
        earned: true,
        color: "blue",
    },
    Badge {
        kind: BadgeKind::WellnessWarrior,
        earned: true,
        color: "red",
    },
    Badge {
        kind: BadgeKind::KnowledgeSeeker,
        earned: false,
        color: "purple",
    },
    Badge {
        kind: BadgeKind::CommunityHelper,
        earned: false,
        color: "green",
    },
    Badge {
        kind: BadgeKind::StreakKeeper,
        earned: false,
        color: "orange",
    },
];

/// Earned-versus-total badge count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BadgeProgress {
    pub earned: usize,
    pub total: usize,
}

impl BadgeProgress {
    pub fn of(badges: &[Badge]) -> Self {
        Self {
            earned: badges.iter().filter(|b| b.earned).count(),
            total: badges.len(),
        }
    }

    /// Percentage in `0.0..=100.0`. An empty set counts as zero progress.
    pub fn percent(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.earned as f32 / self.total as f32 * 100.0
    }
}

// =============================================================================
// Localized snapshot
// =============================================================================

#[derive(Clone, Debug, Serialize)]
pub struct Labeled<T: Serialize> {
    #[serde(flatten)]
    pub item: T,
    pub label: &'static str,
    pub variant: Option<Variant>,
}

#[derive(Clone, Debug, Serialize)]
pub struct LocalizedVaccination {
    #[serde(flatten)]
    pub entry: Labeled<Vaccination>,
    pub due_date_display: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct LocalizedBadge {
    #[serde(flatten)]
    pub badge: Badge,
    pub name: &'static str,
    pub description: &'static str,
    pub state: &'static str,
}

/// Every dataset, labeled for one locale.
#[derive(Clone, Debug, Serialize)]
pub struct CatalogSnapshot {
    pub locale: Locale,
    pub outbreaks_title: &'static str,
    pub outbreaks: Vec<Labeled<Outbreak>>,
    pub health_centers_title: &'static str,
    pub health_centers: Vec<Labeled<HealthCenter>>,
    pub vaccinations_title: &'static str,
    pub vaccinations: Vec<LocalizedVaccination>,
    pub achievements_title: &'static str,
    pub progress_label: &'static str,
    pub progress: BadgeProgress,
    pub badges: Vec<LocalizedBadge>,
}

impl CatalogSnapshot {
    pub fn for_locale(locale: Locale) -> Self {
        let outbreaks = OUTBREAKS
            .iter()
            .map(|o| Labeled {
                item: o.clone(),
                label: o.level.label(locale),
                variant: Some(o.level.variant()),
            })
            .collect();

        let health_centers = HEALTH_CENTERS
            .iter()
            .map(|c| Labeled {
                item: c.clone(),
                label: c.hours.label(locale),
                variant: None,
            })
            .collect();

        let vaccinations = VACCINATIONS
            .iter()
            .map(|v| LocalizedVaccination {
                entry: Labeled {
                    item: v.clone(),
                    label: v.status.label(locale),
                    variant: Some(v.status.variant()),
                },
                due_date_display: v.due_date_display(locale),
            })
            .collect();

        let badges = BADGES
            .iter()
            .map(|b| {
                let (name, description) = b.kind.label(locale);
                let state = if b.earned {
                    text(locale, TextKey::Earned)
                } else {
                    text(locale, TextKey::Locked)
                };
                LocalizedBadge {
                    badge: b.clone(),
                    name,
                    description,
                    state,
                }
            })
            .collect();

        Self {
            locale,
            outbreaks_title: text(locale, TextKey::OutbreaksTitle),
            outbreaks,
            health_centers_title: text(locale, TextKey::HealthCentersTitle),
            health_centers,
            vaccinations_title: text(locale, TextKey::VaccinationTitle),
            vaccinations,
            achievements_title: text(locale, TextKey::AchievementsTitle),
            progress_label: text(locale, TextKey::OverallProgress),
            progress: BadgeProgress::of(BADGES),
            badges,
        }
    }
}
