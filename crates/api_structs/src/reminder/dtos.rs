use nudge_domain::{Day, Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub user_id: i64,
    pub reminder_type: String,
    /// HH:MM
    pub reminder_time: String,
    pub reminder_days: Vec<Day>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            user_id: reminder.user_id,
            reminder_type: reminder.reminder_type,
            reminder_time: reminder.reminder_time.to_string(),
            reminder_days: reminder.reminder_days,
            is_active: reminder.is_active,
            created_at: reminder.created_at,
            updated_at: reminder.updated_at,
        }
    }
}
