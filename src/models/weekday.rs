use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week a timetable entry recurs on.
///
/// The declaration order is the display order (Monday first), so the derived
/// `Ord` can be used directly when grouping entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.name()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        Weekday::ALL.into_iter().find(|d| d.name() == s)
    }

    /// Helper: parse user input, full name or three-letter abbreviation,
    /// in any case ("monday", "Mon", "SUN").
    pub fn from_input(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        if lower.len() < 3 {
            return None;
        }
        Weekday::ALL.into_iter().find(|d| {
            let name = d.name().to_lowercase();
            name == lower || &name[..3] == lower.as_str()
        })
    }

    pub fn today() -> Self {
        use chrono::Datelike;
        chrono::Local::now().weekday().into()
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(d: chrono::Weekday) -> Self {
        Weekday::ALL[d.num_days_from_monday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
