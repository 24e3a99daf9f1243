use crate::{APIResponse, BaseClient};
use nudge_api_structs::reminders::{ReminderData, RequestBody};
use nudge_api_structs::*;
use nudge_domain::{Day, TimeOfDay, ID};
use reqwest::StatusCode;
use std::sync::Arc;

const REMINDERS_PATH: &str = "reminders";

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateReminderInput {
    pub user_id: i64,
    pub reminder_type: String,
    pub reminder_time: TimeOfDay,
    pub reminder_days: Vec<Day>,
}

/// `None` fields are left unchanged
#[derive(Default)]
pub struct UpdateReminderInput {
    pub reminder_id: ID,
    pub reminder_type: Option<String>,
    pub reminder_time: Option<TimeOfDay>,
    pub reminder_days: Option<Vec<Day>>,
    pub is_active: Option<bool>,
}

fn day_names(days: Vec<Day>) -> Vec<String> {
    days.into_iter().map(|day| day.to_string()).collect()
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    async fn send<T: for<'de> serde::Deserialize<'de>>(&self, body: RequestBody) -> APIResponse<T> {
        self.base
            .post(body, REMINDERS_PATH.into(), StatusCode::OK)
            .await
    }

    pub async fn get(&self, user_id: i64) -> APIResponse<get_reminders::APIResponse> {
        self.send(RequestBody {
            action: Some("get".into()),
            user_id: Some(user_id),
            ..Default::default()
        })
        .await
    }

    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        self.send(RequestBody {
            action: Some("create".into()),
            user_id: Some(input.user_id),
            reminder_data: Some(ReminderData {
                reminder_type: Some(input.reminder_type),
                reminder_time: Some(input.reminder_time.to_string()),
                reminder_days: Some(day_names(input.reminder_days)),
                is_active: None,
            }),
            ..Default::default()
        })
        .await
    }

    pub async fn update(
        &self,
        input: UpdateReminderInput,
    ) -> APIResponse<update_reminder::APIResponse> {
        self.send(RequestBody {
            action: Some("update".into()),
            reminder_id: Some(input.reminder_id.to_string()),
            reminder_data: Some(ReminderData {
                reminder_type: input.reminder_type,
                reminder_time: input.reminder_time.map(|time| time.to_string()),
                reminder_days: input.reminder_days.map(day_names),
                is_active: input.is_active,
            }),
            ..Default::default()
        })
        .await
    }

    pub async fn delete(&self, reminder_id: &ID) -> APIResponse<delete_reminder::APIResponse> {
        self.send(RequestBody {
            action: Some("delete".into()),
            reminder_id: Some(reminder_id.to_string()),
            ..Default::default()
        })
        .await
    }

    /// Reminders firing in the current minute on the server
    pub async fn check_due(&self) -> APIResponse<check_due_reminders::APIResponse> {
        self.send(RequestBody {
            action: Some("check".into()),
            ..Default::default()
        })
        .await
    }
}
