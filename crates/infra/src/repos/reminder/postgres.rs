use super::IReminderRepo;
use crate::repos::shared::repo::StoreError;
use nudge_domain::{
    parse_days, Day, DueSlot, NewReminder, Reminder, ReminderUpdate, TimeOfDay, ID,
};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    id: Uuid,
    user_id: i64,
    reminder_type: String,
    reminder_time: String,
    reminder_days: Vec<String>,
    is_active: bool,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ReminderRaw> for Reminder {
    type Error = StoreError;

    fn try_from(raw: ReminderRaw) -> Result<Self, Self::Error> {
        let corrupt = |reason: String| StoreError::CorruptRecord {
            id: raw.id.to_string(),
            reason,
        };
        let reminder_time = raw
            .reminder_time
            .parse::<TimeOfDay>()
            .map_err(|e| corrupt(e.to_string()))?;
        let reminder_days =
            parse_days(raw.reminder_days.as_slice()).map_err(|e| corrupt(e.to_string()))?;

        Ok(Reminder {
            id: raw.id.into(),
            user_id: raw.user_id,
            reminder_type: raw.reminder_type,
            reminder_time,
            reminder_days,
            is_active: raw.is_active,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        })
    }
}

fn to_reminders(rows: Vec<ReminderRaw>) -> Result<Vec<Reminder>, StoreError> {
    rows.into_iter().map(Reminder::try_from).collect()
}

fn day_names(reminder_days: &[Day]) -> Vec<String> {
    reminder_days.iter().map(|day| day.to_string()).collect()
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &NewReminder) -> Result<Reminder, StoreError> {
        let raw: ReminderRaw = sqlx::query_as(
            r#"
            INSERT INTO reminders
            (user_id, reminder_type, reminder_time, reminder_days, is_active, created_at, updated_at)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(reminder.user_id)
        .bind(&reminder.reminder_type)
        .bind(reminder.reminder_time.to_string())
        .bind(day_names(&reminder.reminder_days))
        .bind(reminder.is_active)
        .bind(reminder.created_at)
        .bind(reminder.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Reminder::try_from(raw)
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Reminder>, StoreError> {
        let rows: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.user_id = $1
            ORDER BY r.created_at DESC, r.seq DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        to_reminders(rows)
    }

    async fn find_due(&self, slot: &DueSlot) -> Result<Vec<Reminder>, StoreError> {
        let rows: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.is_active = TRUE
                AND r.reminder_days @> ARRAY[$1]::TEXT[]
                AND r.reminder_time = $2
            ORDER BY r.created_at DESC, r.seq DESC
            "#,
        )
        .bind(slot.day.to_string())
        .bind(slot.time.to_string())
        .fetch_all(&self.pool)
        .await?;

        to_reminders(rows)
    }

    async fn update_fields(
        &self,
        reminder_id: &ID,
        update: &ReminderUpdate,
    ) -> Result<Option<Reminder>, StoreError> {
        let raw: Option<ReminderRaw> = sqlx::query_as(
            r#"
            UPDATE reminders
            SET reminder_type = COALESCE($2, reminder_type),
            reminder_time = COALESCE($3, reminder_time),
            reminder_days = COALESCE($4, reminder_days),
            is_active = COALESCE($5, is_active),
            updated_at = GREATEST($6, updated_at + 1)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(*reminder_id.inner_ref())
        .bind(update.reminder_type.as_deref())
        .bind(update.reminder_time.map(|time| time.to_string()))
        .bind(update.reminder_days.as_deref().map(day_names))
        .bind(update.is_active)
        .bind(update.updated_at)
        .fetch_optional(&self.pool)
        .await?;

        raw.map(Reminder::try_from).transpose()
    }

    async fn delete(&self, reminder_id: &ID) -> Result<Option<Reminder>, StoreError> {
        let raw: Option<ReminderRaw> = sqlx::query_as(
            r#"
            DELETE FROM reminders AS r
            WHERE r.id = $1
            RETURNING *
            "#,
        )
        .bind(*reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        raw.map(Reminder::try_from).transpose()
    }
}
