use serde::Serialize;

/// Survey dataset held in memory: a header row plus string cells.
/// Loaded once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Capability check: a metric only runs when every column it needs exists.
    pub fn has_columns(&self, names: &[&str]) -> bool {
        names.iter().all(|name| self.column_index(name).is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupEntry {
    pub group: String,
    pub mean: f64,
}

/// Grouped means in presentation order: descending by mean for top-N
/// metrics, first-encounter order otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GroupSummary {
    pub entries: Vec<GroupEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub y_label: String,
    pub summary: GroupSummary,
}

/// Compact payload for the summary API; absent metrics drop out of the JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveySummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_countries_by_drinks: Option<GroupSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_smokes_by_gender: Option<GroupSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlcoholFrequency {
    Daily,
    Weekly,
    Occasionally,
    #[default]
    Other,
}

impl AlcoholFrequency {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("Daily") => Self::Daily,
            Some("Weekly") => Self::Weekly,
            Some("Occasionally") => Self::Occasionally,
            _ => Self::Other,
        }
    }
}

/// Shared by the two yes-or-nothing questions (withdrawal, sleep trouble).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YesNo {
    Yes,
    #[default]
    Other,
}

impl YesNo {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("Yes") => Self::Yes,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CigarettesPerDay {
    MoreThanTen,
    SixToTen,
    OneToFive,
    #[default]
    Other,
}

impl CigarettesPerDay {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("More than 10") => Self::MoreThanTen,
            Some("6-10") => Self::SixToTen,
            Some("1-5") => Self::OneToFive,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StressLevel {
    High,
    Moderate,
    #[default]
    Other,
}

impl StressLevel {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("High") => Self::High,
            Some("Moderate") => Self::Moderate,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SocialSupport {
    NoSupport,
    SomeSupport,
    #[default]
    Other,
}

impl SocialSupport {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("No Support") => Self::NoSupport,
            Some("Some Support") => Self::SomeSupport,
            _ => Self::Other,
        }
    }
}

/// The six assessment answers. Built leniently from raw form values:
/// anything unrecognized or missing lands on the zero-point variant, so
/// scoring never has to reject input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnswerSet {
    pub alcohol_frequency: AlcoholFrequency,
    pub withdrawal_symptoms: YesNo,
    pub cigarettes_per_day: CigarettesPerDay,
    pub stress_level: StressLevel,
    pub sleep_trouble: YesNo,
    pub social_support: SocialSupport,
}

impl AnswerSet {
    pub fn from_raw(
        alcohol: Option<&str>,
        withdrawal: Option<&str>,
        cigarettes: Option<&str>,
        stress: Option<&str>,
        sleep: Option<&str>,
        support: Option<&str>,
    ) -> Self {
        Self {
            alcohol_frequency: AlcoholFrequency::from_raw(alcohol),
            withdrawal_symptoms: YesNo::from_raw(withdrawal),
            cigarettes_per_day: CigarettesPerDay::from_raw(cigarettes),
            stress_level: StressLevel::from_raw(stress),
            sleep_trouble: YesNo::from_raw(sleep),
            social_support: SocialSupport::from_raw(support),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Low => "Great! You seem to have healthy habits, keep maintaining them.",
            Self::Moderate => "You may want to monitor your habits and seek support if needed.",
            Self::High => {
                "It looks like you may be at risk. Please consider reaching out for professional help."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: u32,
    pub band: RiskBand,
    pub message: String,
}
