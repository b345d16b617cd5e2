use axum::middleware;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_movie_handler, delete_movie_handler, fallback_handler, get_movie_handler,
    health_handler, list_movies_handler, root_handler, update_movie_handler,
};
use crate::origin::{guard_origin, OriginPolicy};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the router: movie routes, a catch-all 404, and the origin
    /// allow-list in front of everything.
    pub fn router(state: AppState, policy: OriginPolicy) -> Router {
        let cors = policy.cors_layer();
        let policy = Arc::new(policy);

        Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_handler))
            .route("/movies", get(list_movies_handler).post(create_movie_handler))
            .route(
                "/movies/{id}",
                get(get_movie_handler)
                    .patch(update_movie_handler)
                    .delete(delete_movie_handler),
            )
            .fallback(fallback_handler)
            .with_state(state)
            .layer(cors)
            .layer(middleware::from_fn_with_state(policy, guard_origin))
            .layer(TraceLayer::new_for_http())
    }
}
