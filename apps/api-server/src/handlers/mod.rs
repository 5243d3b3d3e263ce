//! HTTP handlers and route configuration.

mod health;
mod users;

use actix_web::web;

use crate::middleware::error::{form_config, json_config};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/users")
                .app_data(json_config())
                .app_data(form_config())
                // Literal segments must be registered before `/{id}`.
                .route("/all", web::get().to(users::list_users))
                .route("/new", web::post().to(users::create_user))
                .route("/{id}", web::get().to(users::get_user)),
        );
}
