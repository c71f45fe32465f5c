//! Outbound link subsystem: endpoint description, worker protocol, and the
//! WebSocket worker task.

pub mod protocol;
pub mod worker;

pub use protocol::{Endpoint, LinkCommand, LinkEvent, LinkState, DEFAULT_PORT};
pub use worker::link_worker_loop;
