mod check_due_reminders;
mod create_reminder;
mod delete_reminder;
mod dispatch;
mod get_reminders;
mod update_reminder;

use crate::error::NudgeError;
use actix_web::{http::Method, web};
pub use check_due_reminders::CheckDueRemindersUseCase;
use dispatch::{reminders_controller, reminders_preflight_controller};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/reminders")
            .app_data(json_config())
            .route(web::post().to(reminders_controller))
            .route(web::method(Method::OPTIONS).to(reminders_preflight_controller)),
    );
}

/// Bodies that are not valid JSON get the same error envelope as every
/// other rejected request
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| {
            NudgeError::BadClientData(format!("Invalid request body: {}", err)).into()
        })
}
