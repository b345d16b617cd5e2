mod fallback;
mod health;
mod movie;

pub use fallback::fallback_handler;
pub use health::{health_handler, root_handler};
pub use movie::{
    create_movie_handler, delete_movie_handler, get_movie_handler, list_movies_handler,
    update_movie_handler,
};
