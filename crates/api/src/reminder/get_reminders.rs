use crate::error::NudgeError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::HttpResponse;
use nudge_api_structs::get_reminders::*;
use nudge_domain::Reminder;
use nudge_infra::{NudgeContext, StoreError};

pub async fn get_reminders_handler(
    user_id: Option<i64>,
    ctx: &NudgeContext,
) -> Result<HttpResponse, NudgeError> {
    let user_id = user_id.ok_or_else(|| {
        NudgeError::BadClientData("User ID is required for getting reminders".into())
    })?;

    let usecase = GetRemindersUseCase { user_id };

    execute(usecase, ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(NudgeError::from)
}

/// All reminders of a user, newest first
#[derive(Debug)]
pub struct GetRemindersUseCase {
    pub user_id: i64,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError(StoreError),
}

impl From<UseCaseError> for NudgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError(e) => Self::StorageError {
                error: "Failed to retrieve reminders".into(),
                details: e.to_string(),
            },
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminders";

    async fn execute(&mut self, ctx: &NudgeContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reminders
            .find_by_user(self.user_id)
            .await
            .map_err(UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nudge_domain::{Day, NewReminder};

    async fn insert(ctx: &NudgeContext, user_id: i64, reminder_type: &str, created_at: i64) {
        ctx.repos
            .reminders
            .insert(&NewReminder::new(
                user_id,
                reminder_type.into(),
                "12:00".parse().unwrap(),
                vec![Day::Sunday],
                created_at,
            ))
            .await
            .unwrap();
    }

    #[actix_web::main]
    #[test]
    async fn returns_the_users_reminders_newest_first() {
        let ctx = NudgeContext::create_inmemory();
        insert(&ctx, 1, "old", 100).await;
        insert(&ctx, 2, "someone else", 150).await;
        insert(&ctx, 1, "new", 200).await;

        let mut usecase = GetRemindersUseCase { user_id: 1 };
        let reminders = usecase.execute(&ctx).await.unwrap();
        let types = reminders
            .iter()
            .map(|r| r.reminder_type.as_str())
            .collect::<Vec<_>>();
        assert_eq!(types, vec!["new", "old"]);

        // Reads do not change anything
        assert_eq!(usecase.execute(&ctx).await.unwrap(), reminders);
    }

    #[actix_web::main]
    #[test]
    async fn unknown_user_has_no_reminders() {
        let ctx = NudgeContext::create_inmemory();
        let mut usecase = GetRemindersUseCase { user_id: 404 };
        assert!(usecase.execute(&ctx).await.unwrap().is_empty());
    }
}
