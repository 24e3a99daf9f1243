use actix_web::{web, HttpResponse};
use nudge_api_structs::get_service_health::*;
use nudge_infra::NudgeContext;

async fn status(ctx: web::Data<NudgeContext>) -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        message: "Yo! We are up!\r\n".into(),
        timezone: ctx.config.timezone.name().into(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}
