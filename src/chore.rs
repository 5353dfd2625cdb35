use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a chore recurs. Tags the configuration does not recognise are carried through
/// verbatim as `Other` and styled like `Daily`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Individual,
    Other(String),
}

impl Frequency {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "Daily" => Frequency::Daily,
            "Weekly" => Frequency::Weekly,
            "Monthly" => Frequency::Monthly,
            "Individual" => Frequency::Individual,
            other => Frequency::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Individual => "Individual",
            Frequency::Other(tag) => tag.as_str(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Frequency::Other(_))
    }

    /// Which data columns a chore row of this frequency highlights.
    pub fn fill_pattern(&self) -> FillPattern {
        match self {
            Frequency::Weekly => FillPattern::WeeklyOnly,
            Frequency::Monthly => FillPattern::MonthlyOnly,
            Frequency::Individual => FillPattern::FirstFourDays,
            Frequency::Daily | Frequency::Other(_) => FillPattern::AllWeekdays,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Frequency {
    fn from(value: String) -> Self {
        Frequency::parse(&value)
    }
}

impl From<Frequency> for String {
    fn from(value: Frequency) -> Self {
        value.as_str().to_string()
    }
}

/// Data columns of the grid, left to right.
pub const DAY_COLUMNS: [&str; 9] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Weekly",
    "Monthly",
];

pub const WEEKLY_COLUMN: usize = 7;
pub const MONTHLY_COLUMN: usize = 8;
const INDIVIDUAL_DAYS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillPattern {
    AllWeekdays,
    WeeklyOnly,
    MonthlyOnly,
    FirstFourDays,
}

impl FillPattern {
    /// Whether data column `column` (0-based, Sunday first) is active for this pattern.
    pub fn covers(self, column: usize) -> bool {
        match self {
            FillPattern::AllWeekdays => column < WEEKLY_COLUMN,
            FillPattern::WeeklyOnly => column == WEEKLY_COLUMN,
            FillPattern::MonthlyOnly => column == MONTHLY_COLUMN,
            FillPattern::FirstFourDays => column < INDIVIDUAL_DAYS,
        }
    }

    pub fn mask(self) -> [bool; DAY_COLUMNS.len()] {
        std::array::from_fn(|column| self.covers(column))
    }
}

/// One chore as flattened out of the chore list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoreRecord {
    pub room: String,
    pub chore: String,
    pub frequency: Frequency,
}

impl ChoreRecord {
    pub fn new(room: impl Into<String>, chore: impl Into<String>, frequency: Frequency) -> Self {
        Self {
            room: room.into(),
            chore: chore.into(),
            frequency,
        }
    }
}
