use super::IReminderRepo;
use crate::repos::shared::{inmemory_repo::*, repo::StoreError};
use nudge_domain::{DueSlot, NewReminder, Reminder, ReminderUpdate, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &NewReminder) -> Result<Reminder, StoreError> {
        let reminder = reminder.clone().into_reminder(ID::new());
        insert(&reminder, &self.reminders);
        Ok(reminder)
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Reminder>, StoreError> {
        let mut reminders = find_by(&self.reminders, |reminder| reminder.user_id == user_id);
        // Latest inserted first when created at the same time, `sort_by` is stable
        reminders.reverse();
        reminders.sort_by(|r1, r2| r2.created_at.cmp(&r1.created_at));
        Ok(reminders)
    }

    async fn find_due(&self, slot: &DueSlot) -> Result<Vec<Reminder>, StoreError> {
        Ok(find_by(&self.reminders, |reminder| reminder.is_due_at(slot)))
    }

    async fn update_fields(
        &self,
        reminder_id: &ID,
        update: &ReminderUpdate,
    ) -> Result<Option<Reminder>, StoreError> {
        Ok(update_one(reminder_id, &self.reminders, |reminder| {
            reminder.apply(update)
        }))
    }

    async fn delete(&self, reminder_id: &ID) -> Result<Option<Reminder>, StoreError> {
        Ok(delete(reminder_id, &self.reminders))
    }
}
