use std::sync::Arc;

use anyhow::{Context, Result};
use portal_auth::{
    AuthGateway, FileTokenStore, HttpAuthGateway, HttpAuthGatewayConfig, MemoryTokenStore,
    MockAuthGateway, TokenStore,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::{Cli, GatewayKind, PortalConfig};
use crate::controller::PortalController;
use crate::scenario::{load_script, run_scenario, steps_from_cli};

pub type DynPortalController = PortalController<Arc<dyn AuthGateway>, Box<dyn TokenStore>>;

/// Logs go to stderr; stdout carries the rendered document.
pub fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

pub fn build_gateway(config: &PortalConfig) -> Result<Arc<dyn AuthGateway>> {
    let gateway: Arc<dyn AuthGateway> = match config.gateway {
        GatewayKind::Http => Arc::new(
            HttpAuthGateway::new(HttpAuthGatewayConfig {
                api_base: config.api_base.clone(),
                request_timeout_ms: config.request_timeout_ms,
            })
            .context("failed to build auth gateway")?,
        ),
        GatewayKind::Mock => Arc::new(MockAuthGateway::new(config.mock_otp.clone())),
    };
    Ok(gateway)
}

pub fn build_token_store(config: &PortalConfig) -> Box<dyn TokenStore> {
    match &config.token_store {
        Some(path) => Box::new(FileTokenStore::new(path)),
        None => Box::new(MemoryTokenStore::new()),
    }
}

/// Resolves configuration, plays the requested scenario and returns the
/// final rendered document.
pub async fn run_cli(cli: &Cli) -> Result<String> {
    let config = PortalConfig::resolve(cli)?;
    tracing::debug!(
        gateway = ?config.gateway,
        locale = config.locale.as_str(),
        "portal configuration resolved"
    );
    let steps = match &cli.script {
        Some(path) => load_script(path)?,
        None => steps_from_cli(cli),
    };

    let mut controller: DynPortalController = PortalController::new(
        config.locale,
        build_gateway(&config)?,
        build_token_store(&config),
    );
    run_scenario(&mut controller, &steps).await?;
    tracing::info!(
        screen = controller.state().screen().as_str(),
        steps = steps.len(),
        "scenario finished"
    );
    Ok(controller.render_html())
}
