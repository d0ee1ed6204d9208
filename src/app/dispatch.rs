use crate::cli::commands::{Cli, Commands};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::app::status::render_status;
use virtum::Config;
use virtum::core::{ChatEngine, JitteredMetrics, MetricsSource};

/// Answer one message, or read messages from stdin until EOF or `/quit`.
///
/// Every reply in a session goes through one engine, so the interactive
/// loop shares its recent-reply history across turns.
async fn run_chat(config: &Config, message: Option<String>) -> Result<()> {
    let metrics = JitteredMetrics::new(config.metrics.clone());
    let engine = ChatEngine::new(&config.chat);

    if let Some(message) = message {
        let reply = engine
            .respond(&message, &metrics.snapshot())
            .context("generate chat reply")?;
        println!("{reply}");
        return Ok(());
    }

    println!("Ask about your heart rate, steps, water, blood pressure, oxygen or temperature.");
    println!("Type /quit to exit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("read chat input")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "/quit" || line == "/exit" {
            break;
        }

        match engine.respond(line, &metrics.snapshot()) {
            Ok(reply) => println!("\n{reply}\n"),
            Err(error) => eprintln!("Could not answer: {error}"),
        }
    }
    Ok(())
}

fn print_metrics(config: &Config) -> Result<()> {
    let snapshot = JitteredMetrics::new(config.metrics.clone()).snapshot();
    let json = serde_json::to_string_pretty(&snapshot).context("serialize metrics snapshot")?;
    println!("{json}");
    Ok(())
}

pub async fn dispatch(cli: Cli, config: Arc<Config>) -> Result<()> {
    match cli.command {
        Commands::Serve { port, host } => {
            let port = port.unwrap_or(config.gateway.port);
            let host = host.unwrap_or_else(|| config.gateway.host.clone());
            if port == 0 {
                info!("Starting Virtum API on {host} (random port)");
            } else {
                info!("Starting Virtum API on {host}:{port}");
            }
            virtum::transport::gateway::run_gateway(&host, port, Arc::clone(&config)).await
        }

        Commands::Chat { message } => run_chat(&config, message).await,

        Commands::Metrics => print_metrics(&config),

        Commands::Status => {
            println!("{}", render_status(&config));
            Ok(())
        }
    }
}
