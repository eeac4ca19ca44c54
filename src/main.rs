use bias_audit::{analyzer, cli, config, error, output, scanner};
use bias_audit_common::view::{button_label, AuditView, APP_TITLE};
use bias_audit_common::{parse_audit_response, ResultSummary};
use analyzer::{AuditClient, AuditSession, TracingObserver};
use clap::Parser;
use cli::{Cli, Commands};
use config::{validate_endpoint, Config};
use error::Result;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Audit { image, endpoint, save } => {
            println!("🔍 {}\n", APP_TITLE);

            let config = Config::load_or_default();
            let endpoint = match endpoint {
                Some(endpoint) => {
                    validate_endpoint(&endpoint)?;
                    endpoint
                }
                None => config.get_endpoint(),
            };
            let client = AuditClient::new(endpoint, config.timeout())?;
            tracing::debug!(endpoint = client.endpoint(), timeout = ?config.timeout(), "audit client configured");
            let mut session = AuditSession::new(client, TracingObserver);

            if let Some(path) = image {
                let image = scanner::load_image(&path)?;
                println!(
                    "✔ {} ({}, {} bytes)\n",
                    image.file_name,
                    image.mime_type,
                    image.bytes.len()
                );
                session.select_file(image);
            }

            let pb = session.state().file().map(|_| output::spinner());
            let state = session.submit().await;
            if let Some(pb) = pb {
                pb.finish_and_clear();
            }

            println!("{}", output::format_view(&state.view()));

            if let (Some(path), Some(result)) = (save, state.result()) {
                let json = serde_json::to_string_pretty(&result.to_value())?;
                std::fs::write(&path, json)?;
                println!("\n✔ 結果を保存: {}", path.display());
            }

            if state.error().is_some() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Render { input } => {
            let content = std::fs::read_to_string(&input)?;
            let result = parse_audit_response(&content)?;

            let view = AuditView {
                button_label: button_label(false),
                button_disabled: false,
                error: None,
                result: Some(ResultSummary::from_result(&result)),
            };
            println!("{}", output::format_view(&view));
        }

        Commands::Config { set_endpoint, set_timeout, clear_timeout, show } => {
            let mut config = Config::load_or_default();
            let mut changed = false;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                changed = true;
                println!("✔ エンドポイントを設定しました");
            }

            if let Some(secs) = set_timeout {
                config.timeout_seconds = Some(secs);
                changed = true;
                println!("✔ タイムアウトを{}秒に設定しました", secs);
            }

            if clear_timeout {
                config.timeout_seconds = None;
                changed = true;
                println!("✔ タイムアウトを解除しました");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  エンドポイント: {}", config.get_endpoint());
                match config.timeout_seconds {
                    Some(secs) => println!("  タイムアウト: {}秒", secs),
                    None => println!("  タイムアウト: なし"),
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "bias_audit=debug" } else { "bias_audit=warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
