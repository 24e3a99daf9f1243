use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// A day of the week a `Reminder` can fire on.
///
/// Serialized as the English full name, e.g. `"Monday"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Day::Sunday => "Sunday",
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }
}

impl From<Weekday> for Day {
    fn from(wday: Weekday) -> Self {
        match wday {
            Weekday::Sun => Day::Sunday,
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
        }
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Unknown day: `{0}`. Expected one of Sunday, Monday, Tuesday, Wednesday, Thursday, Friday or Saturday")]
pub struct InvalidDayError(String);

impl FromStr for Day {
    type Err = InvalidDayError;

    /// Case insensitive, accepts both full names and three letter abbreviations
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Day::ALL
            .iter()
            .find(|day| {
                let name = day.name().to_lowercase();
                name == needle || name[..3] == needle
            })
            .copied()
            .ok_or_else(|| InvalidDayError(s.to_string()))
    }
}

/// Parses a list of day names, dropping duplicates but keeping the first-seen order
pub fn parse_days<S: AsRef<str>>(days: &[S]) -> Result<Vec<Day>, InvalidDayError> {
    let mut parsed = Vec::with_capacity(days.len());
    for day in days {
        let day = day.as_ref().parse::<Day>()?;
        if !parsed.contains(&day) {
            parsed.push(day);
        }
    }
    Ok(parsed)
}
