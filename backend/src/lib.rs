pub mod routes;
pub mod store;
pub mod cors;
pub mod config;
pub mod error;
pub mod catchers;
pub use shared::{models::*, error::*};

use rocket::{Build, Rocket, routes, catchers};
use tracing::info;
use crate::{
    catchers::{bad_request, internal_error, not_found},
    config::ServerConfig,
    cors::CORS,
    routes::{all_options, cast_vote, create_poll, get_results, list_active_polls, set_status, AppState},
};

pub fn build_rocket(state: AppState, config: &ServerConfig) -> Rocket<Build> {
    let rocket = rocket::build()
        .attach(CORS::new(config.cors_origin_prefix.clone()))
        .manage(state)
        .mount(
            "/",
            routes![
                create_poll,
                cast_vote,
                get_results,
                list_active_polls,
                set_status,
                all_options
            ],
        )
        .register("/", catchers![bad_request, not_found, internal_error]);

    for route in rocket.routes() {
        info!("📋 {} {}", route.method, route.uri);
    }

    rocket
}
