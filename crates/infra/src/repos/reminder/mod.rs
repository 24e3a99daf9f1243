mod inmemory;
mod postgres;

use crate::repos::shared::repo::StoreError;
pub use inmemory::InMemoryReminderRepo;
use nudge_domain::{DueSlot, NewReminder, Reminder, ReminderUpdate, ID};
pub use postgres::PostgresReminderRepo;

/// Typed access to the stored `Reminder`s. Implementations hold no business
/// logic and never retry, failures are handed straight back to the caller.
#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    /// Stores the `NewReminder`, the store assigns the `ID`
    async fn insert(&self, reminder: &NewReminder) -> Result<Reminder, StoreError>;
    /// Newest first
    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Reminder>, StoreError>;
    /// Active `Reminder`s firing in the given slot
    async fn find_due(&self, slot: &DueSlot) -> Result<Vec<Reminder>, StoreError>;
    /// Returns `None` if there is no `Reminder` with the given `ID`
    async fn update_fields(
        &self,
        reminder_id: &ID,
        update: &ReminderUpdate,
    ) -> Result<Option<Reminder>, StoreError>;
    /// Returns the deleted `Reminder` or `None` if there was nothing to delete
    async fn delete(&self, reminder_id: &ID) -> Result<Option<Reminder>, StoreError>;
}

#[cfg(test)]
mod tests {
    use crate::{setup_context, NudgeContext};
    use nudge_domain::{Day, DueSlot, NewReminder, Reminder, ReminderUpdate, TimeOfDay, ID};
    use uuid::Uuid;

    // Tests might share a database, so every test works on its own user
    fn random_user_id() -> i64 {
        (Uuid::new_v4().as_u128() % 1_000_000_000_000) as i64
    }

    fn time(s: &str) -> TimeOfDay {
        s.parse().expect("Valid time")
    }

    fn new_reminder(user_id: i64, reminder_time: &str, days: Vec<Day>, now: i64) -> NewReminder {
        NewReminder::new(user_id, "water".into(), time(reminder_time), days, now)
    }

    async fn due_for_user(ctx: &NudgeContext, user_id: i64, slot: DueSlot) -> Vec<Reminder> {
        ctx.repos
            .reminders
            .find_due(&slot)
            .await
            .expect("To find due reminders")
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect()
    }

    fn ids(reminders: &[Reminder]) -> Vec<ID> {
        reminders.iter().map(|r| r.id.clone()).collect()
    }

    #[tokio::test]
    async fn create_and_delete() {
        let ctx = setup_context().await.expect("To create context");
        let user_id = random_user_id();

        // Insert
        let draft = new_reminder(user_id, "08:30", vec![Day::Monday], 1000);
        let reminder = ctx
            .repos
            .reminders
            .insert(&draft)
            .await
            .expect("To insert reminder");
        assert_eq!(reminder.user_id, user_id);
        assert_eq!(reminder.reminder_time, time("08:30"));
        assert_eq!(reminder.reminder_days, vec![Day::Monday]);
        assert!(reminder.is_active);
        assert_eq!(reminder.created_at, 1000);
        assert_eq!(reminder.updated_at, 1000);

        // Find
        let res = ctx.repos.reminders.find_by_user(user_id).await.unwrap();
        assert_eq!(res, vec![reminder.clone()]);

        // Delete
        let res = ctx.repos.reminders.delete(&reminder.id).await.unwrap();
        assert_eq!(res, Some(reminder.clone()));
        assert!(ctx
            .repos
            .reminders
            .find_by_user(user_id)
            .await
            .unwrap()
            .is_empty());

        // Delete again
        assert!(ctx
            .repos
            .reminders
            .delete(&reminder.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn inserted_reminders_get_unique_ids() {
        let ctx = setup_context().await.expect("To create context");
        let user_id = random_user_id();
        let draft = new_reminder(user_id, "08:30", vec![Day::Monday], 1000);

        let r1 = ctx.repos.reminders.insert(&draft).await.unwrap();
        let r2 = ctx.repos.reminders.insert(&draft).await.unwrap();
        assert_ne!(r1.id, r2.id);
    }

    #[tokio::test]
    async fn find_by_user_is_newest_first() {
        let ctx = setup_context().await.expect("To create context");
        let user_id = random_user_id();
        let other_user_id = random_user_id();

        let oldest = ctx
            .repos
            .reminders
            .insert(&new_reminder(user_id, "08:00", vec![Day::Monday], 1000))
            .await
            .unwrap();
        let newest = ctx
            .repos
            .reminders
            .insert(&new_reminder(user_id, "09:00", vec![Day::Monday], 3000))
            .await
            .unwrap();
        let middle = ctx
            .repos
            .reminders
            .insert(&new_reminder(user_id, "10:00", vec![Day::Monday], 2000))
            .await
            .unwrap();
        // Same creation time as `middle` but inserted later
        let middle_later = ctx
            .repos
            .reminders
            .insert(&new_reminder(user_id, "11:00", vec![Day::Monday], 2000))
            .await
            .unwrap();
        ctx.repos
            .reminders
            .insert(&new_reminder(other_user_id, "08:00", vec![Day::Monday], 1000))
            .await
            .unwrap();

        let res = ctx.repos.reminders.find_by_user(user_id).await.unwrap();
        assert_eq!(ids(&res), ids(&[newest, middle_later, middle, oldest]));

        // Reading twice gives the same sequence
        let res_again = ctx.repos.reminders.find_by_user(user_id).await.unwrap();
        assert_eq!(res, res_again);
    }

    #[tokio::test]
    async fn update_fields() {
        let ctx = setup_context().await.expect("To create context");
        let user_id = random_user_id();
        let reminder = ctx
            .repos
            .reminders
            .insert(&new_reminder(user_id, "08:30", vec![Day::Monday], 1000))
            .await
            .unwrap();

        let mut update = ReminderUpdate::new(2000);
        update.reminder_days = Some(vec![Day::Tuesday, Day::Friday]);
        update.is_active = Some(false);
        let updated = ctx
            .repos
            .reminders
            .update_fields(&reminder.id, &update)
            .await
            .unwrap()
            .expect("Reminder to exist");

        assert_eq!(updated.id, reminder.id);
        assert_eq!(updated.reminder_days, vec![Day::Tuesday, Day::Friday]);
        assert!(!updated.is_active);
        assert_eq!(updated.reminder_type, reminder.reminder_type);
        assert_eq!(updated.reminder_time, reminder.reminder_time);
        assert_eq!(updated.created_at, 1000);
        assert_eq!(updated.updated_at, 2000);

        // Same clock value again still moves updated_at forward
        let updated = ctx
            .repos
            .reminders
            .update_fields(&reminder.id, &ReminderUpdate::new(2000))
            .await
            .unwrap()
            .expect("Reminder to exist");
        assert_eq!(updated.updated_at, 2001);

        let stored = ctx.repos.reminders.find_by_user(user_id).await.unwrap();
        assert_eq!(stored, vec![updated]);

        // Unknown reminder
        assert!(ctx
            .repos
            .reminders
            .update_fields(&ID::default(), &ReminderUpdate::new(3000))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn find_due() {
        let ctx = setup_context().await.expect("To create context");
        let user_id = random_user_id();

        let monday_wednesday = ctx
            .repos
            .reminders
            .insert(&new_reminder(
                user_id,
                "08:30",
                vec![Day::Monday, Day::Wednesday],
                1000,
            ))
            .await
            .unwrap();
        let monday_other_time = ctx
            .repos
            .reminders
            .insert(&new_reminder(user_id, "08:31", vec![Day::Monday], 1000))
            .await
            .unwrap();
        let inactive = ctx
            .repos
            .reminders
            .insert(&new_reminder(user_id, "08:30", vec![Day::Monday], 1000))
            .await
            .unwrap();
        let mut deactivate = ReminderUpdate::new(2000);
        deactivate.is_active = Some(false);
        ctx.repos
            .reminders
            .update_fields(&inactive.id, &deactivate)
            .await
            .unwrap();

        let res = due_for_user(&ctx, user_id, DueSlot {
            day: Day::Monday,
            time: time("08:30"),
        })
        .await;
        assert_eq!(ids(&res), ids(&[monday_wednesday.clone()]));

        let res = due_for_user(&ctx, user_id, DueSlot {
            day: Day::Wednesday,
            time: time("08:30"),
        })
        .await;
        assert_eq!(ids(&res), ids(&[monday_wednesday]));

        let res = due_for_user(&ctx, user_id, DueSlot {
            day: Day::Monday,
            time: time("08:31"),
        })
        .await;
        assert_eq!(ids(&res), ids(&[monday_other_time]));

        let res = due_for_user(&ctx, user_id, DueSlot {
            day: Day::Tuesday,
            time: time("08:30"),
        })
        .await;
        assert!(res.is_empty());
    }
}
