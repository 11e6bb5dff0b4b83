use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::webhook::run_action,
        handlers::webhook::list_actions,
        handlers::health::health,
    ),
    components(
        schemas(
            ActionCall,
            Tracker,
            LatestMessage,
            TrackerEvent,
            Event,
            Button,
            BotMessage,
            ActionResponse,
            ActionInfo,
            HealthResponse,
        )
    ),
    tags(
        (name = "actions", description = "对话动作接口"),
        (name = "health", description = "健康检查")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
