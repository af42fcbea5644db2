use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;
use csvq_config_file::DevConfigToml;
use csvq_dev_server::api::{run_server, DevServerConfig};
use csvq_dev_server::proxy::ProxyRule;
use csvq_router::Router;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a csvq.toml dev config; defaults apply without one.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the configured port.
    #[arg(long)]
    port: Option<u16>,

    /// Skip opening a browser tab on startup.
    #[arg(long)]
    no_open: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).unwrap();
            toml::from_str::<DevConfigToml>(&text).unwrap()
        }
        None => DevConfigToml::default(),
    };

    let proxy_rules: Vec<ProxyRule> = config
        .proxy
        .iter()
        .map(|rule| ProxyRule::new(&rule.prefix, &rule.target))
        .collect();
    let aliases: BTreeMap<String, String> = config.resolve.alias.clone();

    let config = DevServerConfig {
        port: args.port.unwrap_or(config.port),
        open: config.open && !args.no_open,
        router: Router::with_default_routes(),
        proxy_rules,
        aliases,
    };
    run_server(config).await;
}
