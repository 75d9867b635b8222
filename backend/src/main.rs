use backend::{build_rocket, config::ServerConfig, routes::AppState};
use tracing::info;

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting poll server");

    let config = ServerConfig::from_lookup(|key| secret_store.get(key));
    let rocket = build_rocket(AppState::new(), &config);

    Ok(rocket.into())
}
