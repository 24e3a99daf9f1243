use crate::error::NudgeError;
use crate::shared::{
    guard::Guard,
    usecase::{execute, UseCase},
};
use actix_web::HttpResponse;
use nudge_api_structs::delete_reminder::*;
use nudge_domain::{Reminder, ID};
use nudge_infra::{NudgeContext, StoreError};

pub async fn delete_reminder_handler(
    reminder_id: Option<String>,
    ctx: &NudgeContext,
) -> Result<HttpResponse, NudgeError> {
    let reminder_id = match Guard::against_blank(reminder_id) {
        Some(reminder_id) => Guard::against_malformed_id(&reminder_id)?,
        None => {
            return Err(NudgeError::BadClientData(
                "Reminder ID is required for deleting a reminder".into(),
            ))
        }
    };

    let usecase = DeleteReminderUseCase { reminder_id };

    execute(usecase, ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::new()))
        .map_err(NudgeError::from)
}

#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError(StoreError),
}

impl From<UseCaseError> for NudgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::StorageError(e) => Self::StorageError {
                error: "Failed to delete reminder".into(),
                details: e.to_string(),
            },
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &NudgeContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.reminders.delete(&self.reminder_id).await {
            Ok(Some(reminder)) => Ok(reminder),
            Ok(None) => Err(UseCaseError::NotFound(self.reminder_id.clone())),
            Err(e) => Err(UseCaseError::StorageError(e)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nudge_domain::{Day, NewReminder};

    #[actix_web::main]
    #[test]
    async fn deleted_reminder_is_gone_for_good() {
        let ctx = NudgeContext::create_inmemory();
        let reminder = ctx
            .repos
            .reminders
            .insert(&NewReminder::new(
                7,
                "stretch".into(),
                "17:00".parse().unwrap(),
                vec![Day::Friday],
                0,
            ))
            .await
            .unwrap();

        let mut usecase = DeleteReminderUseCase {
            reminder_id: reminder.id.clone(),
        };
        let deleted = usecase.execute(&ctx).await.unwrap();
        assert_eq!(deleted.id, reminder.id);
        assert!(ctx.repos.reminders.find_by_user(7).await.unwrap().is_empty());

        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::NotFound(_))
        ));
    }
}
