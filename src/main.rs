use clap::Parser;
use pyramid_word::adapters::http;
use pyramid_word::utils::logger;
use pyramid_word::CliConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 合併預設值、設定檔與命令列參數，並驗證

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    logger::init_logger(config.logging.verbose, config.logging.format);

    tracing::info!("Starting pyramid-word service");
    tracing::debug!("Resolved config: {:?}", config);

    // 啟動 HTTP 服務，直到收到關閉訊號
    if let Err(e) = http::serve(&config.server).await {
        tracing::error!("❌ Server failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
