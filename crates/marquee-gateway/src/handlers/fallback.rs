use axum::http::StatusCode;
use axum::response::Html;

pub async fn fallback_handler() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html("<h1>404</h1>"))
}
