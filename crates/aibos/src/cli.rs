use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// AIBOS: plugin host for business modules
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Print "pong" and exit without booting
    #[arg(long)]
    pub ping: bool,

    /// Kernel configuration file (.json, .toml, .yaml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect installed apps
    Apps {
        #[command(subcommand)]
        command: AppsCommand,
    },
    /// Inspect registered services
    Services {
        #[command(subcommand)]
        command: ServicesCommand,
    },
    /// Call a service with a JSON input
    Call {
        /// Service key, e.g. accounting.getCOAList
        key: String,
        /// Input as a JSON document
        #[arg(default_value = "{}")]
        input: String,
    },
    /// Emit an event with a JSON payload
    Emit {
        /// Event type, e.g. HELLO_EVENT
        event_type: String,
        #[arg(default_value = "{}")]
        payload: String,
    },
    /// Post one document in every business module and show the journals drafted
    Demo,
}

#[derive(Subcommand, Debug)]
pub enum AppsCommand {
    /// List installed apps in boot order
    List,
}

#[derive(Subcommand, Debug)]
pub enum ServicesCommand {
    /// List registered service keys with their owners
    List,
}
