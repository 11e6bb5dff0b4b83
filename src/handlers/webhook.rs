use crate::actions::ActionRegistry;
use crate::models::{ActionCall, ActionInfo};
use actix_web::{HttpResponse, ResponseError, Result, web};

/// 对话主机的动作调用入口
#[utoipa::path(
    post,
    path = "/webhook",
    tag = "actions",
    request_body = ActionCall,
    responses(
        (status = 200, description = "动作执行完成", body = crate::models::ActionResponse),
        (status = 400, description = "请求体格式错误"),
        (status = 404, description = "动作未注册")
    )
)]
pub async fn run_action(
    registry: web::Data<ActionRegistry>,
    call: web::Json<ActionCall>,
) -> Result<HttpResponse> {
    match registry.execute(&call).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

/// 列出已注册的动作
#[utoipa::path(
    get,
    path = "/actions",
    tag = "actions",
    responses(
        (status = 200, description = "已注册动作列表", body = Vec<ActionInfo>)
    )
)]
pub async fn list_actions(registry: web::Data<ActionRegistry>) -> Result<HttpResponse> {
    let actions: Vec<ActionInfo> = registry
        .names()
        .into_iter()
        .map(|name| ActionInfo {
            name: name.to_string(),
        })
        .collect();
    Ok(HttpResponse::Ok().json(actions))
}

pub fn webhook_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/webhook", web::post().to(run_action))
        .route("/actions", web::get().to(list_actions));
}
