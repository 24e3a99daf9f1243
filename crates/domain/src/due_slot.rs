use crate::{Day, TimeOfDay};
use chrono::prelude::*;
use chrono_tz::Tz;

/// The weekday and minute a recurring `Reminder` fires at.
///
/// A slot is always derived from a single instant so the day and the
/// time can never disagree around midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueSlot {
    pub day: Day,
    pub time: TimeOfDay,
}

impl DueSlot {
    /// The slot containing the timestamp (millis) in the given timezone.
    /// Seconds are truncated, not rounded.
    pub fn at(timestamp_millis: i64, tz: &Tz) -> Option<Self> {
        let now = DateTime::<Utc>::from_timestamp_millis(timestamp_millis)?.with_timezone(tz);
        let time = TimeOfDay::new(now.hour(), now.minute())?;

        Some(Self {
            day: now.weekday().into(),
            time,
        })
    }
}
