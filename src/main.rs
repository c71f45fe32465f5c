//! rovctl - Terminal Rover Teleoperation Pad
//!
//! Drives a WebSocket-controlled rover from the terminal: arrow keys and an
//! on-screen button pad map to five plain-text motion commands.

use anyhow::Result;
use clap::{Arg, Command};
use rovctl::ui::TerminalUI;
use rovctl::{Application, Endpoint};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for development (RUST_LOG=debug etc.)
    env_logger::init();

    // Parse command-line arguments
    let matches = Command::new("rovctl")
        .version(rovctl::VERSION)
        .about("A terminal teleoperation pad for WebSocket-controlled rovers")
        .long_about(
            "rovctl connects to a rover controller at ws://HOST:PORT/ and sends \
             plain-text motion commands (forward, backward, turnLeft, turnRight, \
             stop) as you hold the arrow keys or the on-screen pad buttons.",
        )
        .arg(
            Arg::new("host")
                .help("Hostname or address of the rover controller")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .help("Control socket port on the rover controller")
                .value_parser(clap::value_parser!(u16))
                .default_value("81"),
        )
        .get_matches();

    let host = matches
        .get_one::<String>("host")
        .expect("host argument is required");
    let port = *matches
        .get_one::<u16>("port")
        .expect("port has a default value");

    // Initialize the Application and start the interactive event loop
    let endpoint = Endpoint::new(host.clone(), port);
    let ui_renderer = Box::new(TerminalUI::new()?);
    let mut app = Application::new(endpoint, ui_renderer);

    app.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_constant() {
        // Ensure version is accessible
        assert!(!rovctl::VERSION.is_empty());
    }
}
