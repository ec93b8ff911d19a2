//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with
//! their OpenAPI specifications, and Swagger UI is configured to provide
//! interactive API documentation at `/docs`.

use axum::{response::Redirect, routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// # Registered Endpoints
/// - `GET /user` - List all users
/// - `GET /user/{user_id}/favorites` - List a user's favorites
/// - `POST /favorite/user/{user_id}/planet/{planet_id}` - Favorite a planet
/// - `DELETE /favorite/user/{user_id}/planet/{planet_id}` - Unfavorite a planet
/// - `POST /favorite/user/{user_id}/people/{people_id}` - Favorite a person
/// - `DELETE /favorite/user/{user_id}/people/{people_id}` - Unfavorite a person
/// - `GET /planet`, `GET /planet/{planet_id}`, `POST /planet` - Planet catalog
/// - `GET /people`, `GET /people/{people_id}`, `POST /people` - People catalog
///
/// The OpenAPI specification is available at `/docs/openapi.json`, with
/// interactive documentation served at `/docs`. The root path redirects there,
/// so every endpoint can be discovered from `/`.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be merged
/// into the main application router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Galactic archive API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet catalog API routes"),
        (name = controller::people::PEOPLE_TAG, description = "People catalog API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_people,
            controller::favorite::remove_favorite_people
        ))
        .routes(routes!(
            controller::planet::get_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(
            controller::people::get_people,
            controller::people::create_person
        ))
        .routes(routes!(controller::people::get_person))
        .split_for_parts();

    let routes = routes
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
        .route("/", get(|| async { Redirect::temporary("/docs") }));

    routes
}
