use clap::Parser;
use zugzwang::core::ConfigProvider;
use zugzwang::utils::error::ErrorSeverity;
use zugzwang::utils::{logger, validation::Validate};
use zugzwang::{
    CliConfig, GameLauncher, LauncherError, LocalStorage, LoggingHandler, SetupClient,
    TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting zugzwang");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli).await {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ Starting the game failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        // 輸出用戶友好的錯誤信息
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(cli: &CliConfig) -> Result<(), LauncherError> {
    // 載入並驗證配置
    let file = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            Some(file)
        }
        None => None,
    };

    let settings = cli.resolve(file);
    settings.validate()?;

    let storage = LocalStorage::new(settings.storage_path.clone());
    let ws_endpoint = settings.ws_endpoint().to_string();
    let launcher = GameLauncher::new(SetupClient::new(settings.clone()), storage, ws_endpoint);

    // 未提供的欄位以上次儲存的值補上
    let profile = launcher
        .resolve_profile(settings.name.clone(), settings.elo)
        .await;

    if cli.setup_only {
        let game = launcher.start(&profile).await?;
        println!("{}", game.game_id);
        tracing::info!("🎮 Game ready at {}", game.socket_url);
        return Ok(());
    }

    let mut handler = LoggingHandler::default();
    let game = launcher.start_and_play(&profile, &mut handler).await?;

    println!("✅ Game {} finished", game.game_id);
    tracing::info!(
        "Game {} session ended after {} messages",
        game.game_id,
        handler.messages()
    );
    Ok(())
}
