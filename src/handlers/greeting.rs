//! # Greeting Handlers
//!
//! Static greetings. Each returns a JSON string body, e.g. `"Good night!"`.

use axum::{extract::Path, Json};

/// GET /
pub async fn hello_world() -> Json<&'static str> {
    Json("Hello, World!")
}

/// GET /night
pub async fn hello_night_world() -> Json<&'static str> {
    Json("Good night!")
}

/// GET /night/{id}
///
/// `id` is taken as-is; any text is accepted.
pub async fn good_night(Path(id): Path<String>) -> Json<String> {
    Json(format!("{id}さん、「早く寝てね」"))
}
