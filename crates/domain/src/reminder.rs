use crate::{
    shared::entity::{Entity, ID},
    Day, DueSlot, TimeOfDay,
};

/// A `Reminder` is a recurring notification owned by a single user.
/// It fires every week on each of its `reminder_days` at `reminder_time`
/// as long as it is active.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    /// Assigned by the store on creation
    pub id: ID,
    /// The chat user owning this `Reminder`
    pub user_id: i64,
    /// Free form category, e.g. "water" or "meditation"
    pub reminder_type: String,
    pub reminder_time: TimeOfDay,
    /// Never empty for a `Reminder` created through the lifecycle operations
    pub reminder_days: Vec<Day>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Reminder {
    /// Whether the `Reminder` should fire in the given slot
    pub fn is_due_at(&self, slot: &DueSlot) -> bool {
        self.is_active && self.reminder_time == slot.time && self.reminder_days.contains(&slot.day)
    }

    /// Applies the fields present in the update. `updated_at` never moves
    /// backwards and always changes.
    pub fn apply(&mut self, update: &ReminderUpdate) {
        if let Some(reminder_type) = &update.reminder_type {
            self.reminder_type = reminder_type.clone();
        }
        if let Some(reminder_time) = update.reminder_time {
            self.reminder_time = reminder_time;
        }
        if let Some(reminder_days) = &update.reminder_days {
            self.reminder_days = reminder_days.clone();
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        self.updated_at = std::cmp::max(update.updated_at, self.updated_at + 1);
    }
}

/// A validated `Reminder` which has not been given an `ID` by the store yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewReminder {
    pub user_id: i64,
    pub reminder_type: String,
    pub reminder_time: TimeOfDay,
    pub reminder_days: Vec<Day>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl NewReminder {
    /// New reminders start out active with `created_at` equal to `updated_at`
    pub fn new(
        user_id: i64,
        reminder_type: String,
        reminder_time: TimeOfDay,
        reminder_days: Vec<Day>,
        now: i64,
    ) -> Self {
        Self {
            user_id,
            reminder_type,
            reminder_time,
            reminder_days,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn into_reminder(self, id: ID) -> Reminder {
        Reminder {
            id,
            user_id: self.user_id,
            reminder_type: self.reminder_type,
            reminder_time: self.reminder_time,
            reminder_days: self.reminder_days,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Partial update of a `Reminder`. `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderUpdate {
    pub reminder_type: Option<String>,
    pub reminder_time: Option<TimeOfDay>,
    pub reminder_days: Option<Vec<Day>>,
    pub is_active: Option<bool>,
    pub updated_at: i64,
}

impl ReminderUpdate {
    pub fn new(updated_at: i64) -> Self {
        Self {
            reminder_type: None,
            reminder_time: None,
            reminder_days: None,
            is_active: None,
            updated_at,
        }
    }
}
