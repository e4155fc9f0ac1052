use axum::Router;
use util::state::AppState;

pub mod middleware;
pub mod pages;
pub mod response;
pub mod routes;

/// The JSON API under `/api` plus the HTML pages, without outer middleware.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::routes(app_state.clone()))
        .merge(pages::page_routes(app_state))
}
