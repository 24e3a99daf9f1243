mod day;
mod due_slot;
mod reminder;
mod shared;
mod time_of_day;

pub use day::{parse_days, Day, InvalidDayError};
pub use due_slot::DueSlot;
pub use reminder::{NewReminder, Reminder, ReminderUpdate};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use time_of_day::{InvalidTimeError, TimeOfDay};

pub use chrono_tz::Tz;
