//! Host for the portal state machine: configuration, the controller that
//! executes reducer effects, and scripted sessions rendered to HTML.

pub mod bootstrap;
pub mod config;
pub mod controller;
pub mod document;
pub mod scenario;

pub use bootstrap::{build_gateway, build_token_store, init_tracing, run_cli, DynPortalController};
pub use config::{Cli, ConfigError, FileConfig, GatewayKind, PortalConfig};
pub use controller::{DispatchOutcome, PortalController};
pub use document::{PortalDocument, Region};
pub use scenario::{load_script, run_scenario, steps_from_cli, ScenarioError, ScenarioStep};
