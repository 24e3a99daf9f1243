use crate::{reminder::CheckDueRemindersUseCase, shared::usecase::execute};
use actix_web::rt::time::{interval, sleep_until, Instant};
use nudge_api_structs::send_due_reminders::DueRemindersDTO;
use nudge_infra::{ISys, NudgeContext};
use std::time::Duration;
use tracing::{error, info, warn};

const MINUTE_MILLIS: i64 = 60 * 1000;

pub fn get_start_delay(now_ts: usize, secs_before_min: usize) -> usize {
    let secs_to_next_minute = 60 - (now_ts / 1000) % 60;
    if secs_to_next_minute > secs_before_min {
        secs_to_next_minute - secs_before_min
    } else {
        secs_to_next_minute + (60 - secs_before_min)
    }
}

/// Remembers the last minute that was handled so a late or doubled tick
/// never sends the same minute twice
#[derive(Debug, Default)]
struct MinuteGuard {
    last_minute: Option<i64>,
}

impl MinuteGuard {
    fn claim(&mut self, minute: i64) -> bool {
        if matches!(self.last_minute, Some(last) if minute <= last) {
            return false;
        }
        self.last_minute = Some(minute);
        true
    }

    /// Reads the clock once and returns that instant if its minute was not
    /// handled yet. The same instant is both claimed and matched against.
    fn next_instant(&mut self, sys: &dyn ISys) -> Option<i64> {
        let now = sys.get_timestamp_millis();
        let minute = now.div_euclid(MINUTE_MILLIS);
        if !self.claim(minute) {
            warn!("Due reminders for minute {} were already handled", minute);
            return None;
        }
        Some(now)
    }
}

/// Checks for due reminders once a minute, 30 seconds into the minute
pub fn start_due_reminders_job(ctx: NudgeContext) {
    actix_web::rt::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let secs_to_next_run = get_start_delay(now as usize, 30);
        let start = Instant::now() + Duration::from_secs(secs_to_next_run as u64);

        sleep_until(start).await;
        let mut minutely_interval = interval(Duration::from_secs(60));
        let mut guard = MinuteGuard::default();
        loop {
            minutely_interval.tick().await;
            if let Some(at) = guard.next_instant(ctx.sys.as_ref()) {
                actix_web::rt::spawn(send_due_reminders(ctx.clone(), at));
            }
        }
    });
}

async fn send_due_reminders(ctx: NudgeContext, at: i64) {
    let due = match execute(CheckDueRemindersUseCase { at }, &ctx).await {
        Ok(res) => res,
        Err(_) => return,
    };
    if due.reminders.is_empty() {
        return;
    }
    info!(
        "{} reminders due on {} at {}",
        due.reminders.len(),
        due.slot.day,
        due.slot.time
    );

    let webhook = match &ctx.config.reminders_webhook {
        Some(webhook) => webhook,
        None => return,
    };

    let client = awc::Client::default();
    let mut req = client.post(webhook.url.as_str());
    if let Some(key) = &webhook.key {
        req = req.insert_header(("nudge-webhook-key", key.as_str()));
    }
    match req
        .send_json(&DueRemindersDTO::new(due.reminders, due.checked_at))
        .await
    {
        Ok(res) if !res.status().is_success() => {
            warn!("Reminders webhook responded with status: {}", res.status())
        }
        Ok(_) => {}
        Err(e) => error!("Error informing client of due reminders: {:?}", e),
    }
}
