//! Interactive mode for the server.
//!
//! Prompts the user for bind address and port before starting the server.

use dialoguer::{Confirm, Input};

use crate::ServerConfig;

/// Runs the server in interactive mode, prompting for configuration.
///
/// Starts from `defaults` (normally read from the environment), asks for a
/// bind address and port, and delegates to [`super::run_server`]. An
/// unparsable port keeps the default.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the underlying server fails to
/// start.
#[allow(clippy::future_not_send)]
pub async fn run(defaults: ServerConfig) -> std::io::Result<()> {
    println!("EnviroSense Server");
    println!();

    let bind_addr: String = Input::new()
        .with_prompt("Bind address")
        .default(defaults.bind_addr.clone())
        .interact_text()
        .unwrap_or_else(|_| defaults.bind_addr.clone());

    let port_str: String = Input::new()
        .with_prompt("Port")
        .default(defaults.port.to_string())
        .interact_text()
        .unwrap_or_else(|_| defaults.port.to_string());

    let port = port_str.trim().parse().unwrap_or_else(|_| {
        println!("Invalid port {port_str:?}, using {}", defaults.port);
        defaults.port
    });

    if !Confirm::new()
        .with_prompt(format!("Start server on {bind_addr}:{port}?"))
        .default(true)
        .interact()
        .unwrap_or(true)
    {
        println!("Cancelled.");
        return Ok(());
    }

    super::run_server(ServerConfig {
        bind_addr,
        port,
        ..defaults
    })
    .await
}
