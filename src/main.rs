use clap::Parser;
use contract_pdf::utils::{logger, validation::Validate};
use contract_pdf::{try_load_renderer, CliConfig, ConvertConfig, Orchestrator, SystemRunner};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting contract-pdf");
    tracing::debug!("CLI config: {:?}", cli);

    // 載入並驗證配置；只有明確傳入錯誤配置時才以非零狀態結束
    let config = match cli.load_convert_config().and_then(|config: ConvertConfig| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let files = config.contract_files(&cli.dir);
    let renderer = try_load_renderer();
    let orchestrator = Orchestrator::standard(renderer, SystemRunner, &config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = orchestrator.run(&files, &mut out);
    out.flush()?;

    match &summary.completed_with {
        Some(label) => tracing::info!("✅ Finished with {}", label),
        None => tracing::info!("📄 Manual instructions printed"),
    }

    Ok(())
}
