use crate::error::NudgeError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::HttpResponse;
use nudge_api_structs::check_due_reminders::*;
use nudge_domain::{DueSlot, Reminder};
use nudge_infra::{NudgeContext, StoreError};

pub async fn check_due_reminders_handler(ctx: &NudgeContext) -> Result<HttpResponse, NudgeError> {
    let usecase = CheckDueRemindersUseCase {
        at: ctx.sys.get_timestamp_millis(),
    };

    execute(usecase, ctx)
        .await
        .map(|due| HttpResponse::Ok().json(APIResponse::new(due.reminders)))
        .map_err(NudgeError::from)
}

/// Finds the active reminders firing in the minute of `at` in the
/// configured timezone
#[derive(Debug)]
pub struct CheckDueRemindersUseCase {
    /// Millis. Callers read the clock once and pass the instant here
    pub at: i64,
}

#[derive(Debug)]
pub struct DueReminders {
    /// The instant that was matched against, in millis
    pub checked_at: i64,
    pub slot: DueSlot,
    pub reminders: Vec<Reminder>,
}

#[derive(Debug)]
pub enum UseCaseError {
    ClockOutOfRange(i64),
    StorageError(StoreError),
}

impl From<UseCaseError> for NudgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ClockOutOfRange(_) => Self::InternalError,
            UseCaseError::StorageError(e) => Self::StorageError {
                error: "Failed to check reminders".into(),
                details: e.to_string(),
            },
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CheckDueRemindersUseCase {
    type Response = DueReminders;

    type Error = UseCaseError;

    const NAME: &'static str = "CheckDueReminders";

    async fn execute(&mut self, ctx: &NudgeContext) -> Result<Self::Response, Self::Error> {
        let checked_at = self.at;
        let slot = DueSlot::at(checked_at, &ctx.config.timezone)
            .ok_or(UseCaseError::ClockOutOfRange(checked_at))?;

        let reminders = ctx
            .repos
            .reminders
            .find_due(&slot)
            .await
            .map_err(UseCaseError::StorageError)?;

        Ok(DueReminders {
            checked_at,
            slot,
            reminders,
        })
    }
}
