mod base;
mod reminder;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use reminder::ReminderClient;
pub use reminder::{CreateReminderInput, UpdateReminderInput};
use status::StatusClient;
use std::sync::Arc;

pub use nudge_api_structs::dtos::*;
pub use nudge_api_structs::send_due_reminders::DueRemindersDTO as DueReminders;
pub use nudge_api_structs::ErrorResponse;

// Domain
pub use nudge_api_structs::dtos::ReminderDTO as Reminder;
pub use nudge_domain::{Day, TimeOfDay, Tz, ID};

/// Nudge SDK
///
/// The SDK contains methods for interacting with the Nudge server API.
#[derive(Clone)]
pub struct NudgeSDK {
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl NudgeSDK {
    /// `address` is the api root, e.g. `http://localhost:5000/api/v1`
    pub fn new<T: Into<String>>(address: T) -> Self {
        let base = Arc::new(BaseClient::new(address.into()));
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { reminder, status }
    }
}
