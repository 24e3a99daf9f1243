use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Wall clock time with minute granularity, formatted as `HH:MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    hours: u32,
    minutes: u32,
}

impl TimeOfDay {
    pub fn new(hours: u32, minutes: u32) -> Option<Self> {
        if hours < 24 && minutes < 60 {
            Some(Self { hours, minutes })
        } else {
            None
        }
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid time: `{0}`. Expected 24-hour HH:MM")]
pub struct InvalidTimeError(String);

impl FromStr for TimeOfDay {
    type Err = InvalidTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || InvalidTimeError(s.to_string());

        let (hours, minutes) = s.trim().split_once(':').ok_or_else(err)?;
        let all_digits = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(hours) || hours.len() > 2 || !all_digits(minutes) || minutes.len() != 2 {
            return Err(err());
        }

        let hours = hours.parse::<u32>().map_err(|_| err())?;
        let minutes = minutes.parse::<u32>().map_err(|_| err())?;
        Self::new(hours, minutes).ok_or_else(err)
    }
}
