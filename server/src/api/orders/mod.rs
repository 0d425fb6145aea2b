//! Order API 模块

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", order_routes())
}

fn order_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::admin_list).post(handler::create))
        .route("/user", get(handler::list_own))
        .route("/user/{id}", patch(handler::mark_delivered))
        .route("/{id}", patch(handler::admin_set_status))
}
