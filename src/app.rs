//! Application orchestration layer
//!
//! Wires the input thread, the bridge, the link worker, and the UI together.
//! The loop here is the single consumer of all events: input actions and link
//! observations are processed strictly one at a time, so the bridge state
//! never needs synchronization.

use crate::bridge::Bridge;
use crate::error::{Result, RovctlError};
use crate::input::{InputAction, InputService};
use crate::link::{link_worker_loop, Endpoint, LinkCommand, LinkEvent};
use crate::ui::{UIRenderer, ViewState};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;

/// How often the input thread wakes to check for shutdown.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Collect terminal input on a dedicated blocking thread, forwarding actions
/// to the app loop. Exits once it has forwarded a quit, when the loop drops
/// the receiver, or when the shutdown flag is raised.
fn spawn_input_thread(
    tx: mpsc::UnboundedSender<InputAction>,
    shutdown: Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut input = InputService::new();
        while !shutdown.load(Ordering::SeqCst) {
            match input.poll_action(Some(INPUT_POLL_INTERVAL)) {
                Ok(Some(action)) => {
                    let done = action == InputAction::Quit;
                    if tx.send(action).is_err() || done {
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    log::error!("input collection failed: {err}");
                    break;
                }
            }
        }
    })
}

/// Application orchestrator - owns the bridge and coordinates components
pub struct Application {
    endpoint: Endpoint,
    ui_renderer: Box<dyn UIRenderer>,
    bridge: Bridge,
}

impl Application {
    pub fn new(endpoint: Endpoint, ui_renderer: Box<dyn UIRenderer>) -> Self {
        Self {
            endpoint,
            ui_renderer,
            bridge: Bridge::new(),
        }
    }

    /// Run the application until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        self.ui_renderer.initialize()?;
        let result = self.run_loop().await;
        self.ui_renderer.cleanup()?;
        result
    }

    async fn run_loop(&mut self) -> Result<()> {
        let (width, height) = self.ui_renderer.get_terminal_size()?;
        let mut view_state = ViewState::new(&self.endpoint, width, height);

        let (link_tx, link_cmd_rx) = mpsc::channel::<LinkCommand>(16);
        let (link_event_tx, mut link_event_rx) = mpsc::channel::<LinkEvent>(16);
        let link_worker = tokio::spawn(link_worker_loop(
            link_cmd_rx,
            link_event_tx,
            self.endpoint.clone(),
        ));

        let shutdown = Arc::new(AtomicBool::new(false));
        let (input_tx, mut input_rx) = mpsc::unbounded_channel::<InputAction>();
        let input_thread = spawn_input_thread(input_tx, Arc::clone(&shutdown));

        self.ui_renderer.render(&view_state)?;

        let mut link_events_open = true;
        let mut running = true;
        while running {
            tokio::select! {
                action = input_rx.recv() => match action {
                    Some(action) => {
                        running = self
                            .handle_action(action, &mut view_state, &link_tx)
                            .await?;
                    }
                    None => break,
                },
                event = link_event_rx.recv(), if link_events_open => match event {
                    Some(event) => view_state.apply_link_event(&event),
                    None => link_events_open = false,
                },
            }
            self.ui_renderer.render(&view_state)?;
        }

        shutdown.store(true, Ordering::SeqCst);
        let _ = link_tx.send(LinkCommand::Shutdown).await;
        let _ = link_worker.await;
        let _ = input_thread.join();
        Ok(())
    }

    /// Process one input action - returns false if the app should quit.
    ///
    /// Every state-changing input yields exactly one command handed to the
    /// link worker; ignored inputs (auto-repeat, unmapped keys, clicks outside
    /// the pad) yield none.
    async fn handle_action(
        &mut self,
        action: InputAction,
        view_state: &mut ViewState,
        link_tx: &mpsc::Sender<LinkCommand>,
    ) -> Result<bool> {
        let outgoing = match action {
            InputAction::Quit => return Ok(false),
            InputAction::KeyDown { key, repeat } => self.bridge.on_key_down(key, repeat),
            InputAction::KeyUp { key } => self.bridge.on_key_up(key),
            InputAction::PointerDown { column, row } => match view_state.hit_test(column, row) {
                Some(cmd) => {
                    view_state.pressed_button = Some(cmd);
                    self.bridge.on_button_press(cmd)
                }
                None => None,
            },
            InputAction::PointerUp => {
                // Release only counts if a pad button was actually held.
                if view_state.pressed_button.take().is_some() {
                    self.bridge.on_button_release()
                } else {
                    None
                }
            }
            InputAction::Resize { width, height } => {
                view_state.update_terminal_size(width, height);
                None
            }
        };

        if let Some(command) = outgoing {
            view_state.record_sent(command);
            link_tx
                .send(LinkCommand::Send(command))
                .await
                .map_err(|_| RovctlError::link("link worker unavailable"))?;
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::Command;
    use crate::link::DEFAULT_PORT;
    use crate::ui::pad_button_rects;
    use ratatui::crossterm::event::KeyCode;

    fn test_app() -> (Application, ViewState, mpsc::Sender<LinkCommand>, mpsc::Receiver<LinkCommand>) {
        let endpoint = Endpoint::new("localhost", DEFAULT_PORT);
        let renderer = Box::new(crate::ui::MockUIRenderer::new());
        let app = Application::new(endpoint.clone(), renderer);
        let view_state = ViewState::new(&endpoint, 80, 24);
        let (tx, rx) = mpsc::channel(16);
        (app, view_state, tx, rx)
    }

    #[tokio::test]
    async fn key_press_sends_one_command() {
        let (mut app, mut view_state, tx, mut rx) = test_app();

        let running = app
            .handle_action(
                InputAction::KeyDown {
                    key: KeyCode::Up,
                    repeat: false,
                },
                &mut view_state,
                &tx,
            )
            .await
            .unwrap();

        assert!(running);
        assert_eq!(rx.try_recv().unwrap(), LinkCommand::Send(Command::Forward));
        assert!(rx.try_recv().is_err(), "exactly one command per event");
        assert_eq!(view_state.last_sent, Some(Command::Forward));
    }

    #[tokio::test]
    async fn repeat_press_sends_nothing() {
        let (mut app, mut view_state, tx, mut rx) = test_app();

        app.handle_action(
            InputAction::KeyDown {
                key: KeyCode::Up,
                repeat: false,
            },
            &mut view_state,
            &tx,
        )
        .await
        .unwrap();
        rx.try_recv().unwrap();

        app.handle_action(
            InputAction::KeyDown {
                key: KeyCode::Up,
                repeat: true,
            },
            &mut view_state,
            &tx,
        )
        .await
        .unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn pointer_press_on_button_drives_and_release_stops() {
        let (mut app, mut view_state, tx, mut rx) = test_app();

        // Click the center of the turn-right button.
        let (cmd, rect) = pad_button_rects(view_state.pad_area())[2];
        assert_eq!(cmd, Command::TurnRight);

        app.handle_action(
            InputAction::PointerDown {
                column: rect.x + rect.width / 2,
                row: rect.y + rect.height / 2,
            },
            &mut view_state,
            &tx,
        )
        .await
        .unwrap();
        assert_eq!(rx.try_recv().unwrap(), LinkCommand::Send(Command::TurnRight));

        app.handle_action(InputAction::PointerUp, &mut view_state, &tx)
            .await
            .unwrap();
        assert_eq!(rx.try_recv().unwrap(), LinkCommand::Send(Command::Stop));
        assert_eq!(view_state.pressed_button, None);
    }

    #[tokio::test]
    async fn pointer_activity_outside_pad_is_ignored() {
        let (mut app, mut view_state, tx, mut rx) = test_app();

        app.handle_action(
            InputAction::PointerDown { column: 0, row: 0 },
            &mut view_state,
            &tx,
        )
        .await
        .unwrap();
        assert!(rx.try_recv().is_err());

        // A stray release with no held button must not emit a stop.
        app.handle_action(InputAction::PointerUp, &mut view_state, &tx)
            .await
            .unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn quit_action_stops_the_loop() {
        let (mut app, mut view_state, tx, mut rx) = test_app();

        let running = app
            .handle_action(InputAction::Quit, &mut view_state, &tx)
            .await
            .unwrap();
        assert!(!running);
        assert!(rx.try_recv().is_err(), "quit sends no command");
    }

    #[tokio::test]
    async fn resize_updates_view_without_sending() {
        let (mut app, mut view_state, tx, mut rx) = test_app();

        app.handle_action(
            InputAction::Resize {
                width: 120,
                height: 40,
            },
            &mut view_state,
            &tx,
        )
        .await
        .unwrap();
        assert_eq!(view_state.terminal_width, 120);
        assert!(rx.try_recv().is_err());
    }
}
