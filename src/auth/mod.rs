use std::path::Path;

use axum::{routing::get_service, Router};
use tower_http::services::ServeFile;

use crate::state::AppState;

pub mod dto;
pub mod handlers;
pub mod password;
pub mod repo;

/// Registration and login, with the matching form pages on GET.
pub fn router(public_dir: &str) -> Router<AppState> {
    let page = |name: &str| ServeFile::new(Path::new(public_dir).join(name));
    Router::new()
        .route(
            "/register",
            get_service(page("register.html")).post(handlers::register),
        )
        .route(
            "/login",
            get_service(page("login.html")).post(handlers::login),
        )
}
