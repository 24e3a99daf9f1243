use crate::error::NudgeError;
use crate::shared::{
    guard::Guard,
    usecase::{execute, UseCase},
};
use actix_web::HttpResponse;
use nudge_api_structs::reminders::ReminderData;
use nudge_api_structs::update_reminder::*;
use nudge_domain::{
    parse_days, InvalidDayError, InvalidTimeError, Reminder, ReminderUpdate, TimeOfDay, ID,
};
use nudge_infra::{NudgeContext, StoreError};

pub async fn update_reminder_handler(
    reminder_id: Option<String>,
    data: Option<ReminderData>,
    ctx: &NudgeContext,
) -> Result<HttpResponse, NudgeError> {
    let (reminder_id, data) = match (Guard::against_blank(reminder_id), data) {
        (Some(reminder_id), Some(data)) => (reminder_id, data),
        _ => {
            return Err(NudgeError::BadClientData(
                "Reminder ID and reminder data are required for updating a reminder".into(),
            ))
        }
    };

    let usecase = UpdateReminderUseCase {
        reminder_id: Guard::against_malformed_id(&reminder_id)?,
        reminder_type: Guard::against_blank(data.reminder_type),
        reminder_time: Guard::against_blank(data.reminder_time),
        reminder_days: data.reminder_days.filter(|days| !days.is_empty()),
        is_active: data.is_active,
    };

    execute(usecase, ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(NudgeError::from)
}

/// Changes the given fields of a reminder. Absent fields keep their value.
#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub reminder_id: ID,
    pub reminder_type: Option<String>,
    pub reminder_time: Option<String>,
    pub reminder_days: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidTime(InvalidTimeError),
    InvalidDays(InvalidDayError),
    NotFound(ID),
    StorageError(StoreError),
}

impl From<UseCaseError> for NudgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidTime(e) => Self::BadClientData(e.to_string()),
            UseCaseError::InvalidDays(e) => Self::BadClientData(e.to_string()),
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::StorageError(e) => Self::StorageError {
                error: "Failed to update reminder".into(),
                details: e.to_string(),
            },
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &NudgeContext) -> Result<Self::Response, Self::Error> {
        let mut update = ReminderUpdate::new(ctx.sys.get_timestamp_millis());
        update.reminder_type = self.reminder_type.clone();
        update.is_active = self.is_active;
        if let Some(reminder_time) = &self.reminder_time {
            let reminder_time = reminder_time
                .parse::<TimeOfDay>()
                .map_err(UseCaseError::InvalidTime)?;
            update.reminder_time = Some(reminder_time);
        }
        if let Some(reminder_days) = &self.reminder_days {
            let reminder_days =
                parse_days(reminder_days.as_slice()).map_err(UseCaseError::InvalidDays)?;
            update.reminder_days = Some(reminder_days);
        }

        match ctx
            .repos
            .reminders
            .update_fields(&self.reminder_id, &update)
            .await
        {
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
    use nudge_infra::StaticTimeSys;
    use std::sync::Arc;

    async fn setup() -> (NudgeContext, Reminder) {
        let mut ctx = NudgeContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys(1000));
        let reminder = ctx
            .repos
            .reminders
            .insert(&NewReminder::new(
                42,
                "water".into(),
                "08:30".parse().unwrap(),
                vec![Day::Monday, Day::Wednesday],
                1000,
            ))
            .await
            .unwrap();
        (ctx, reminder)
    }

    fn usecase(reminder_id: &ID) -> UpdateReminderUseCase {
        UpdateReminderUseCase {
            reminder_id: reminder_id.clone(),
            reminder_type: None,
            reminder_time: None,
            reminder_days: None,
            is_active: None,
        }
    }

    #[actix_web::main]
    #[test]
    async fn updates_only_given_fields() {
        let (mut ctx, reminder) = setup().await;
        ctx.sys = Arc::new(StaticTimeSys(5000));

        let mut usecase = usecase(&reminder.id);
        usecase.reminder_time = Some("9:15".into());
        let updated = usecase.execute(&ctx).await.unwrap();

        assert_eq!(updated.id, reminder.id);
        assert_eq!(updated.reminder_time.to_string(), "09:15");
        assert_eq!(updated.reminder_type, "water");
        assert_eq!(updated.reminder_days, vec![Day::Monday, Day::Wednesday]);
        assert!(updated.is_active);
        assert_eq!(updated.created_at, 1000);
        assert_eq!(updated.updated_at, 5000);
    }

    #[actix_web::main]
    #[test]
    async fn updated_at_always_moves_forward() {
        let (ctx, reminder) = setup().await;

        let mut usecase = usecase(&reminder.id);
        usecase.is_active = Some(false);
        let updated = usecase.execute(&ctx).await.unwrap();
        assert!(!updated.is_active);
        assert_eq!(updated.updated_at, 1001);

        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(updated.updated_at, 1002);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_invalid_fields_without_touching_the_reminder() {
        let (ctx, reminder) = setup().await;

        let mut usecase = usecase(&reminder.id);
        usecase.reminder_type = Some("tea".into());
        usecase.reminder_days = Some(vec!["Someday".into()]);
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidDays(_))
        ));

        let stored = ctx.repos.reminders.find_by_user(42).await.unwrap();
        assert_eq!(stored[0].reminder_type, "water");
        assert_eq!(stored[0].updated_at, 1000);
    }

    #[actix_web::main]
    #[test]
    async fn unknown_reminder_is_not_found() {
        let (ctx, _) = setup().await;

        let mut usecase = usecase(&ID::default());
        usecase.reminder_type = Some("tea".into());
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::NotFound(_))
        ));
    }
}
