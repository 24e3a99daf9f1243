use crate::error::NudgeError;
use crate::shared::{
    guard::Guard,
    usecase::{execute, UseCase},
};
use actix_web::HttpResponse;
use nudge_api_structs::create_reminder::*;
use nudge_api_structs::reminders::ReminderData;
use nudge_domain::{
    parse_days, InvalidDayError, InvalidTimeError, NewReminder, Reminder, TimeOfDay,
};
use nudge_infra::{NudgeContext, StoreError};

pub async fn create_reminder_handler(
    user_id: Option<i64>,
    data: Option<ReminderData>,
    ctx: &NudgeContext,
) -> Result<HttpResponse, NudgeError> {
    let (user_id, data) = match (user_id, data) {
        (Some(user_id), Some(data)) => (user_id, data),
        _ => {
            return Err(NudgeError::BadClientData(
                "User ID and reminder data are required for creating a reminder".into(),
            ))
        }
    };

    let usecase = CreateReminderUseCase {
        user_id,
        reminder_type: Guard::against_blank(data.reminder_type),
        reminder_time: Guard::against_blank(data.reminder_time),
        reminder_days: data.reminder_days.unwrap_or_default(),
    };

    execute(usecase, ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(NudgeError::from)
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub user_id: i64,
    pub reminder_type: Option<String>,
    pub reminder_time: Option<String>,
    pub reminder_days: Vec<String>,
}

#[derive(Debug)]
pub enum UseCaseError {
    MissingFields,
    InvalidTime(InvalidTimeError),
    InvalidDays(InvalidDayError),
    StorageError(StoreError),
}

impl From<UseCaseError> for NudgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingFields => Self::BadClientData(
                "Reminder type, time and at least one day are required for creating a reminder"
                    .into(),
            ),
            UseCaseError::InvalidTime(e) => Self::BadClientData(e.to_string()),
            UseCaseError::InvalidDays(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError(e) => Self::StorageError {
                error: "Failed to create reminder".into(),
                details: e.to_string(),
            },
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &NudgeContext) -> Result<Self::Response, Self::Error> {
        let (reminder_type, reminder_time) = match (&self.reminder_type, &self.reminder_time) {
            (Some(reminder_type), Some(reminder_time)) if !self.reminder_days.is_empty() => {
                (reminder_type.clone(), reminder_time)
            }
            _ => return Err(UseCaseError::MissingFields),
        };
        let reminder_time = reminder_time
            .parse::<TimeOfDay>()
            .map_err(UseCaseError::InvalidTime)?;
        let reminder_days =
            parse_days(self.reminder_days.as_slice()).map_err(UseCaseError::InvalidDays)?;

        let reminder = NewReminder::new(
            self.user_id,
            reminder_type,
            reminder_time,
            reminder_days,
            ctx.sys.get_timestamp_millis(),
        );

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map_err(UseCaseError::StorageError)
    }
}
