use std::sync::Arc;

use tracing::{error, info};

use crate::config::Config;
use crate::data::loader::{UnitsLoader, UnitsSource};
use crate::error::ServerError;

pub mod api;
pub mod gzip;
pub mod manifest;
pub mod page;
pub mod routes;
pub mod static_files;

use manifest::{AssetPaths, AssetResolver, ManifestAssetResolver};

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub units: Arc<dyn UnitsSource>,
    pub assets: AssetPaths,
}

impl AppState {
    pub fn new(config: Config, units: Arc<dyn UnitsSource>, assets: AssetPaths) -> Self {
        AppState {
            config: Arc::new(config),
            units,
            assets,
        }
    }
}

/// Load unit data, then serve until Ctrl-C. Blocks the calling thread.
pub fn run_server(config: Config) -> Result<(), ServerError> {
    let loader = UnitsLoader::new(config.units_config());
    let data = loader
        .load_units()
        .map_err(|err| ServerError::Data(err.to_string()))?;
    info!(units = data.units.len(), skipped = data.skipped, "units ready");

    let assets = ManifestAssetResolver::new(&config.manifest_path).resolve();
    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(config, Arc::new(loader), assets);
    let app = routes::build_router(state);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(ServerError::Runtime)?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: bind_addr.clone(),
                source,
            })?;
        info!("sft server listening on http://{bind_addr}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(ServerError::Serve)
    })
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            error!(error = %err, "unable to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
