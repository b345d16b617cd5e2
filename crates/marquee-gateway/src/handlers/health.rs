use crate::model::{HealthResponse, MessageResponse};
use axum::Json;

pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("hola mundo"))
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
