//! HTTP gateway exposing the movie catalog as a REST resource.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod origin;
pub mod state;
pub mod telemetry;

pub use app::App;
pub use origin::OriginPolicy;
pub use state::AppState;
