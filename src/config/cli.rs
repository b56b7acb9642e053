use crate::config::toml_config::ServerConfig;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "pyramid-word")]
#[command(about = "HTTP service that tells whether a word is a pyramid word")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path the endpoint is served on
    #[arg(long)]
    pub route: Option<String>,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, overlaid by the config file, overlaid by command-line flags.
    pub fn resolve(&self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };

        // 命令列參數覆蓋設定檔
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(route) = &self.route {
            config.server.route = route.clone();
        }
        if self.json_logs {
            config.logging.format = LogFormat::Json;
        }
        config.logging.verbose |= self.verbose;

        // 驗證配置
        config.validate()?;
        Ok(config)
    }
}
