#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! `EnviroSense` API server binary.
//!
//! ```text
//! enviro_sense_server [--bind 0.0.0.0] [--port 8080] [--static-dir app/dist]
//! enviro_sense_server --interactive
//! ```
//!
//! Flags override `BIND_ADDR`, `PORT`, and `STATIC_DIR`. Chat assistant
//! settings are read from the environment only.

use std::path::PathBuf;

use clap::Parser;
use enviro_sense_server::{ServerConfig, interactive, run_server};

#[derive(Parser)]
#[command(name = "enviro_sense_server", about = "Serve the EnviroSense API")]
struct Cli {
    /// Address to bind
    #[arg(long)]
    bind: Option<String>,
    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,
    /// Directory of the built frontend
    #[arg(long)]
    static_dir: Option<PathBuf>,
    /// Prompt for bind address and port before starting
    #[arg(long, short)]
    interactive: bool,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    let env = ServerConfig::from_env();

    let config = ServerConfig {
        bind_addr: cli.bind.unwrap_or(env.bind_addr),
        port: cli.port.unwrap_or(env.port),
        static_dir: cli.static_dir.unwrap_or(env.static_dir),
    };

    if cli.interactive {
        interactive::run(config).await
    } else {
        run_server(config).await
    }
}
