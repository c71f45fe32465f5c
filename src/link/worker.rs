//! WebSocket link worker.
//!
//! Owns the single outbound connection for the whole session. The app loop
//! never touches the socket directly; it queues `LinkCommand`s and consumes
//! `LinkEvent` observations. Connection failures are terminal: there is no
//! retry, no backoff, and sends against a link that is not open (still
//! connecting, closed, or errored) degrade to silent no-ops.

use crate::link::protocol::{Endpoint, LinkCommand, LinkEvent};
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Run the link worker processing commands from the app loop.
///
/// Connects exactly once at startup. After the link goes down, for whatever
/// reason, the worker stays alive only to swallow queued sends until the app
/// shuts it down.
pub async fn link_worker_loop(
    mut rx: Receiver<LinkCommand>,
    tx: Sender<LinkEvent>,
    endpoint: Endpoint,
) {
    let url = endpoint.url();

    let connect = tokio_tungstenite::connect_async(url.as_str());
    tokio::pin!(connect);

    // Commands issued while the handshake is still in flight are dropped,
    // exactly as if the link were already down. Only commands issued while
    // the link is open ever reach the wire.
    let connected = loop {
        tokio::select! {
            result = &mut connect => break result,
            cmd = rx.recv() => match cmd {
                Some(LinkCommand::Send(command)) => {
                    log::debug!("dropping command (link not open): {command}");
                }
                Some(LinkCommand::Shutdown) | None => return,
            },
        }
    };

    match connected {
        Ok((mut stream, _response)) => {
            // Anything still queued raced the end of the handshake; it was
            // issued before the link was open and never counts as sent.
            while let Ok(cmd) = rx.try_recv() {
                match cmd {
                    LinkCommand::Send(command) => {
                        log::debug!("dropping command (link not open): {command}");
                    }
                    LinkCommand::Shutdown => {
                        let _ = stream.close(None).await;
                        return;
                    }
                }
            }

            log::info!("link open: {url}");
            if tx.send(LinkEvent::Open).await.is_err() {
                return;
            }
            if let SessionEnd::Shutdown = pump_open_link(&mut stream, &mut rx, &tx).await {
                let _ = stream.close(None).await;
                return;
            }
        }
        Err(error) => {
            log::error!("link connect failed ({url}): {error}");
            if tx.send(LinkEvent::Error(error.to_string())).await.is_err() {
                return;
            }
        }
    }

    drain_dead_link(&mut rx).await;
}

enum SessionEnd {
    /// The app loop asked us to stop; the caller closes the socket.
    Shutdown,
    /// The link dropped underneath us; the caller falls through to draining.
    LinkDown,
}

async fn pump_open_link(
    stream: &mut WsStream,
    rx: &mut Receiver<LinkCommand>,
    tx: &Sender<LinkEvent>,
) -> SessionEnd {
    loop {
        tokio::select! {
            cmd = rx.recv() => match cmd {
                Some(LinkCommand::Send(command)) => {
                    match stream.send(Message::Text(command.as_str().into())).await {
                        Ok(()) => log::info!("sent command: {command}"),
                        Err(error) => {
                            log::error!("link send failed: {error}");
                            let _ = tx.send(LinkEvent::Error(error.to_string())).await;
                            return SessionEnd::LinkDown;
                        }
                    }
                }
                Some(LinkCommand::Shutdown) | None => return SessionEnd::Shutdown,
            },
            inbound = stream.next() => match inbound {
                // No inbound protocol exists; frames are drained only so that
                // close and error conditions surface.
                Some(Ok(message)) => {
                    if message.is_close() {
                        log::info!("link closed by remote");
                        let _ = tx.send(LinkEvent::Closed).await;
                        return SessionEnd::LinkDown;
                    }
                }
                Some(Err(error)) => {
                    log::error!("link error: {error}");
                    let _ = tx.send(LinkEvent::Error(error.to_string())).await;
                    return SessionEnd::LinkDown;
                }
                None => {
                    log::info!("link closed by remote");
                    let _ = tx.send(LinkEvent::Closed).await;
                    return SessionEnd::LinkDown;
                }
            },
        }
    }
}

/// Swallow queued sends after the link has gone down, keeping the command
/// channel drained until shutdown.
async fn drain_dead_link(rx: &mut Receiver<LinkCommand>) {
    while let Some(cmd) = rx.recv().await {
        match cmd {
            LinkCommand::Send(command) => {
                log::debug!("dropping command (link not open): {command}");
            }
            LinkCommand::Shutdown => return,
        }
    }
}
