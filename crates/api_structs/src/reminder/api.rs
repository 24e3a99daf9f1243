use crate::dtos::ReminderDTO;
use nudge_domain::Reminder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub success: bool,
    pub reminder: ReminderDTO,
}

impl ReminderResponse {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            success: true,
            reminder: ReminderDTO::new(reminder),
        }
    }
}

/// Every reminder operation is a `POST` of this body to the same endpoint,
/// the `action` decides what happens.
pub mod reminders {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub user_id: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub reminder_id: Option<String>,
        /// One of `get`, `create`, `update`, `delete` or `check`
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub action: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub reminder_data: Option<ReminderData>,
    }

    /// Fields are validated by the operation they are sent to. An update
    /// ignores absent and empty fields.
    #[derive(Debug, Default, Clone, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ReminderData {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub reminder_type: Option<String>,
        /// HH:MM
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub reminder_time: Option<String>,
        /// Weekday names, e.g. `["Monday", "Wednesday"]`
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub reminder_days: Option<Vec<String>>,
        /// Only used by updates, new reminders are always active
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub is_active: Option<bool>,
    }
}

pub mod get_reminders {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub reminders: Vec<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminders: Vec<Reminder>) -> Self {
            Self {
                success: true,
                reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
            }
        }
    }
}

pub mod create_reminder {
    use super::*;

    pub type APIResponse = ReminderResponse;
}

pub mod update_reminder {
    use super::*;

    pub type APIResponse = ReminderResponse;
}

pub mod delete_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub message: String,
    }

    impl APIResponse {
        pub fn new() -> Self {
            Self {
                success: true,
                message: "Reminder deleted successfully".into(),
            }
        }
    }

    impl Default for APIResponse {
        fn default() -> Self {
            Self::new()
        }
    }
}

pub mod check_due_reminders {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub due_reminders: Vec<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(due_reminders: Vec<Reminder>) -> Self {
            Self {
                success: true,
                due_reminders: due_reminders.into_iter().map(ReminderDTO::new).collect(),
            }
        }
    }
}

/// Sent to the reminders webhook every minute there are reminders due
pub mod send_due_reminders {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DueRemindersDTO {
        pub due_reminders: Vec<ReminderDTO>,
        /// The instant the reminders were matched against
        pub checked_at: i64,
    }

    impl DueRemindersDTO {
        pub fn new(due_reminders: Vec<Reminder>, checked_at: i64) -> Self {
            Self {
                due_reminders: due_reminders.into_iter().map(ReminderDTO::new).collect(),
                checked_at,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nudge_domain::{Day, NewReminder, ID};
    use serde_json::json;

    fn reminder() -> Reminder {
        NewReminder::new(
            42,
            "water".into(),
            "8:30".parse().unwrap(),
            vec![Day::Monday, Day::Wednesday],
            1000,
        )
        .into_reminder(ID::default())
    }

    #[test]
    fn reminders_are_rendered_in_camel_case() {
        let reminder = reminder();
        let id = reminder.id.to_string();
        let res = serde_json::to_value(create_reminder::APIResponse::new(reminder)).unwrap();

        assert_eq!(
            res,
            json!({
                "success": true,
                "reminder": {
                    "id": id,
                    "userId": 42,
                    "reminderType": "water",
                    "reminderTime": "08:30",
                    "reminderDays": ["Monday", "Wednesday"],
                    "isActive": true,
                    "createdAt": 1000,
                    "updatedAt": 1000
                }
            })
        );
    }

    #[test]
    fn due_reminders_use_the_due_reminders_key() {
        let res = serde_json::to_value(check_due_reminders::APIResponse::new(vec![])).unwrap();
        assert_eq!(res, json!({ "success": true, "dueReminders": [] }));
    }

    #[test]
    fn request_body_fields_are_optional() {
        let body: reminders::RequestBody = serde_json::from_value(json!({})).unwrap();
        assert!(body.action.is_none());
        assert!(body.user_id.is_none());

        let body: reminders::RequestBody = serde_json::from_value(json!({
            "action": "update",
            "reminderId": "abc",
            "reminderData": { "reminderDays": [] }
        }))
        .unwrap();
        assert_eq!(body.action.as_deref(), Some("update"));
        assert_eq!(body.reminder_id.as_deref(), Some("abc"));
        let data = body.reminder_data.unwrap();
        assert_eq!(data.reminder_days, Some(vec![]));
        assert!(data.reminder_type.is_none());
    }
}
