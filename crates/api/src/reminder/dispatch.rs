use super::{
    check_due_reminders::check_due_reminders_handler, create_reminder::create_reminder_handler,
    delete_reminder::delete_reminder_handler, get_reminders::get_reminders_handler,
    update_reminder::update_reminder_handler,
};
use crate::error::NudgeError;
use actix_web::{http::header, web, HttpResponse};
use futures::FutureExt;
use nudge_api_structs::reminders::RequestBody;
use nudge_infra::NudgeContext;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::str::FromStr;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Get,
    Create,
    Update,
    Delete,
    Check,
}

impl FromStr for Action {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(Self::Get),
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            "check" => Ok(Self::Check),
            _ => Err(()),
        }
    }
}

pub async fn reminders_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<NudgeContext>,
) -> Result<HttpResponse, NudgeError> {
    match AssertUnwindSafe(dispatch(body.into_inner(), &ctx))
        .catch_unwind()
        .await
    {
        Ok(res) => res,
        Err(panic) => {
            error!(
                "Handling a reminders request panicked: {}",
                panic_message(panic.as_ref())
            );
            Err(NudgeError::InternalError)
        }
    }
}

/// Answers CORS preflight requests that did not carry an `Origin`
pub async fn reminders_preflight_controller() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type, Authorization"))
        .body("ok")
}

async fn dispatch(body: RequestBody, ctx: &NudgeContext) -> Result<HttpResponse, NudgeError> {
    let action = match body.action.as_deref() {
        None | Some("") => return Err(NudgeError::BadClientData("Action is required".into())),
        Some(action) => action
            .parse::<Action>()
            .map_err(|_| NudgeError::BadClientData("Invalid action".into()))?,
    };

    match action {
        Action::Get => get_reminders_handler(body.user_id, ctx).await,
        Action::Create => create_reminder_handler(body.user_id, body.reminder_data, ctx).await,
        Action::Update => update_reminder_handler(body.reminder_id, body.reminder_data, ctx).await,
        Action::Delete => delete_reminder_handler(body.reminder_id, ctx).await,
        Action::Check => check_due_reminders_handler(ctx).await,
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown"
    }
}
