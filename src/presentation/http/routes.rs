use super::{
    handlers::{board, contacts, health, users},
    middleware::{request_id::request_id_middleware, user::require_user},
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};

pub fn create_router(state: AppState) -> Router {
    let user_routes = Router::new()
        .route(
            "/api/v1/users/me",
            get(users::get_me)
                .patch(users::update_me)
                .delete(users::delete_me),
        )
        .route(
            "/api/v1/users/me/profile-picture",
            put(users::upload_profile_picture),
        )
        // Contacts
        .route(
            "/api/v1/contacts",
            get(contacts::list_contacts).post(contacts::create_contact),
        )
        .route(
            "/api/v1/contacts/{id}",
            get(contacts::get_contact)
                .put(contacts::update_contact)
                .delete(contacts::delete_contact),
        )
        // Board
        .route(
            "/api/v1/board/columns",
            get(board::list_columns).post(board::create_column),
        )
        .route(
            "/api/v1/board/columns/{id}",
            get(board::get_column)
                .put(board::update_column)
                .delete(board::delete_column),
        )
        .route("/api/v1/board/cards", post(board::create_card))
        .route(
            "/api/v1/board/cards/{id}",
            get(board::get_card)
                .put(board::update_card)
                .delete(board::delete_card),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_user));

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Registration (unprotected)
        .route("/api/v1/users", post(users::create_user))
        .merge(user_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
