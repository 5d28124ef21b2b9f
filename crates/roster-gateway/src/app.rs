use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_employee_handler, delete_employee_by_code_handler, delete_employee_by_id_handler,
    health_handler, list_employees_handler, update_employee_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .nest(
                "/api/employees",
                Router::new()
                    .route("/", post(create_employee_handler).get(list_employees_handler))
                    .route("/by-id/{id}", delete(delete_employee_by_id_handler))
                    .route(
                        "/{employee_code}",
                        put(update_employee_handler).delete(delete_employee_by_code_handler),
                    ),
            )
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state)
    }
}
