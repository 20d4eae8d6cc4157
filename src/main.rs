use access_proxy::utils::error::ErrorSeverity;
use access_proxy::utils::{logger, validation::Validate};
use access_proxy::{
    CliConfig, ConsoleOutput, Event, LogFormat, Proxy, RealSubject, SharedOutput, Subject,
};
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置並合併設定檔
    let settings = match config.validate().and_then(|_| config.resolve()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(
                "Configuration failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
            };
            std::process::exit(exit_code);
        }
    };

    tracing::info!(
        allow = settings.allow,
        repeat = settings.repeat,
        "Starting access-proxy client"
    );

    let output: SharedOutput = Arc::new(ConsoleOutput::new());
    let real_subject = RealSubject::new(output.clone());
    let proxy = Proxy::with_policy(real_subject, settings.policy(), output.clone());

    output.emit(Event::ClientRequest);
    for _ in 0..settings.repeat {
        proxy.request();
    }

    std::io::stdout().flush().context("failed to flush stdout")?;
    Ok(())
}
