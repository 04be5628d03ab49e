use anyhow::Context;
use clap::Parser;
use lesson_drills::config::LogFormat;
use lesson_drills::utils::logger;
use lesson_drills::{CliConfig, DrillRunner, StdConsole};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 載入並驗證設定
    let settings = match config.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    };

    // 初始化日誌
    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose, settings.log_level()),
        LogFormat::Json => logger::init_json_logger(config.verbose, settings.log_level()),
    }
    tracing::debug!("CLI config: {:?}", config);

    let now = chrono::Local::now().naive_local();
    let runner = DrillRunner::new(config.command.into_drill(&settings, now));
    let mut console = StdConsole::stdio();

    if let Err(e) = runner.run(&mut console) {
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let code = e.severity().exit_code();
        if code > 0 {
            std::process::exit(code);
        }
    }

    std::io::stdout()
        .flush()
        .context("failed to flush drill output")?;
    Ok(())
}
