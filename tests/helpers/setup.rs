use nudge_api::Application;
use nudge_infra::{Config, NudgeContext, StaticTimeSys};
use nudge_sdk::{NudgeSDK, Tz};
use std::sync::Arc;

pub struct TestApp {
    pub config: Config,
}

// Mon Jan 04 2021 08:30:00 UTC
pub const MONDAY_0830_UTC: i64 = 1609749000000;

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, NudgeSDK, String) {
    spawn_app_at(MONDAY_0830_UTC).await
}

/// Every test gets its own in memory store and a clock frozen at `now`,
/// reminders are matched in UTC
pub async fn spawn_app_at(now: i64) -> (TestApp, NudgeSDK, String) {
    let mut ctx = NudgeContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.config.timezone = Tz::UTC;
    ctx.config.reminders_webhook = None;
    ctx.sys = Arc::new(StaticTimeSys(now));

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { config };
    let sdk = NudgeSDK::new(address.clone());
    (app, sdk, address)
}
