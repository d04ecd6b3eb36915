mod cli;
mod demo;
mod error;
mod logging;
mod modules;

use std::process::ExitCode;

use aibos_core::prelude::*;
use aibos_core::{Kernel, KernelConfig};
use clap::Parser;
use serde_json::Value;

use crate::cli::{AppsCommand, CliArgs, Commands, ServicesCommand};
use crate::error::Result;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    if args.ping {
        println!("pong");
        return ExitCode::SUCCESS;
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: CliArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => KernelConfig::from_path(path)?,
        None => KernelConfig::default(),
    };
    logging::init(&config.log_level);

    let bundle = modules::bundled(&config);
    let kernel = Kernel::with_config(config);
    let report = kernel.boot(&bundle.modules).await?;
    for failure in &report.hook_failures {
        log::warn!("Listeners of '{}' are not active: {}", failure.app_id, failure.message);
    }

    let lanes = kernel.lanes();
    match args.command {
        None => {
            println!(
                "Booted {} app(s) with {} service(s).",
                kernel.apps().len(),
                kernel.services().len()
            );
        }
        Some(Commands::Apps { command: AppsCommand::List }) => {
            let apps = kernel.apps().list();
            if apps.is_empty() {
                println!("No apps installed.");
            }
            for app in apps {
                println!(
                    "  - {} v{}: {} ({} service(s))",
                    app.id,
                    app.version,
                    app.manifest.name,
                    app.manifest.services.len()
                );
            }
        }
        Some(Commands::Services { command: ServicesCommand::List }) => {
            let services = kernel.services().list();
            if services.is_empty() {
                println!("No services registered.");
            }
            for service in services {
                println!(
                    "  - {} [{}] {}",
                    service.key(),
                    service.owner_id(),
                    service.description().unwrap_or("")
                );
            }
        }
        Some(Commands::Call { key, input }) => {
            let input: Value = serde_json::from_str(&input)?;
            let output = lanes.services().call(&key, input).await?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Some(Commands::Emit { event_type, payload }) => {
            let payload: Value = serde_json::from_str(&payload)?;
            let (subscription, journals) = demo::watch_journals(&lanes);
            lanes.events().publish(&event_type, payload)?;
            subscription.dispose();
            println!(
                "Emitted {} ({} journal(s) drafted).",
                event_type,
                journals.load(std::sync::atomic::Ordering::SeqCst)
            );
        }
        Some(Commands::Demo) => {
            let journals = demo::run(&lanes, &bundle.stock).await?;
            println!("Demo complete: {journals} journal(s) drafted.");
        }
    }

    kernel.shutdown().await;
    Ok(())
}
