//! Order Gateway entry point
//!
//! Loads `config/{env}.yaml`, initializes logging, and serves the
//! order API. The store is process memory only; every order is gone
//! on restart.

use std::sync::Arc;

use order_gateway::config::AppConfig;
use order_gateway::gateway;
use order_gateway::logging::init_logging;
use order_gateway::store::OrderStore;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(&get_env())?;
    let _guard = init_logging(&config);

    let port = get_port_override().unwrap_or(config.gateway.port);

    let store = Arc::new(OrderStore::new());
    gateway::run_server(&config.gateway.host, port, store).await
}
