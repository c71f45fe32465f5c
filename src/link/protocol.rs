//! Protocol definitions shared between the app loop and the link worker.

use crate::bridge::Command;
use std::fmt;

/// Where the rover controller listens. The original deployment serves the
/// control socket on port 81 next to its HTTP UI.
pub const DEFAULT_PORT: u16 = 81;

/// Fixed endpoint for the single outbound connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// WebSocket URL for the handshake.
    pub fn url(&self) -> String {
        format!("ws://{}:{}/", self.host, self.port)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

/// Commands sent from the app loop to the link worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkCommand {
    /// Transmit a motion command as a text frame. Silently dropped when the
    /// link is not open.
    Send(Command),
    /// Close the socket (best effort) and exit the worker.
    Shutdown,
}

/// Observations emitted by the link worker back to the app loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkEvent {
    /// The handshake completed and commands will be transmitted.
    Open,
    /// The remote end closed the connection. Terminal for the session.
    Closed,
    /// Connect or transport failure. Terminal for the session.
    Error(String),
}

/// Lifecycle of the single outbound connection, as seen by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Connecting,
    Open,
    Closed,
    Errored,
}

impl LinkState {
    /// Fold a worker observation into the displayed state.
    pub fn apply(self, event: &LinkEvent) -> LinkState {
        match event {
            LinkEvent::Open => LinkState::Open,
            LinkEvent::Closed => LinkState::Closed,
            LinkEvent::Error(_) => LinkState::Errored,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LinkState::Connecting => "connecting",
            LinkState::Open => "open",
            LinkState::Closed => "closed",
            LinkState::Errored => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_uses_ws_scheme_and_port() {
        let endpoint = Endpoint::new("rover.local", DEFAULT_PORT);
        assert_eq!(endpoint.url(), "ws://rover.local:81/");
        assert_eq!(endpoint.to_string(), "ws://rover.local:81/");
    }

    #[test]
    fn link_state_transitions_follow_events() {
        let state = LinkState::Connecting;
        assert_eq!(state.apply(&LinkEvent::Open), LinkState::Open);
        assert_eq!(
            LinkState::Open.apply(&LinkEvent::Closed),
            LinkState::Closed
        );
        assert_eq!(
            LinkState::Open.apply(&LinkEvent::Error("refused".into())),
            LinkState::Errored
        );
    }

    #[test]
    fn link_state_labels() {
        assert_eq!(LinkState::Connecting.label(), "connecting");
        assert_eq!(LinkState::Open.label(), "open");
        assert_eq!(LinkState::Closed.label(), "closed");
        assert_eq!(LinkState::Errored.label(), "error");
    }
}
