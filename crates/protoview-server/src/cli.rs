use clap::Parser;
use protoview_config::{ServerConfig, DEFAULT_HOST, DEFAULT_PORT};

#[derive(Parser, Debug)]
#[command(name = "protoview-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serves model metadata for the Proto Corp 3D model viewer", long_about = None)]
pub struct Cli {
    #[arg(long, default_value = DEFAULT_HOST, help = "Address to bind")]
    pub host: String,

    #[arg(short, long, default_value_t = DEFAULT_PORT, help = "Port to listen on")]
    pub port: u16,

    #[arg(
        long = "allowed-origin",
        value_name = "ORIGIN",
        help = "Origin allowed to make credentialed cross-origin requests (repeatable)"
    )]
    pub allowed_origins: Vec<String>,
}

impl Cli {
    /// Converts parsed arguments into a server config, keeping the default
    /// origin when none were given.
    pub fn into_config(self) -> ServerConfig {
        let config = ServerConfig::new(self.host, self.port);
        if self.allowed_origins.is_empty() {
            return config;
        }
        config.with_allowed_origins(self.allowed_origins)
    }
}
