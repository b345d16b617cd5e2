mod health;
mod movie;

pub use health::HealthResponse;
pub use movie::{ListQuery, MessageResponse, ValidationErrorResponse};
