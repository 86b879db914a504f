//! Generic runtime for application orchestration.
//!
//! The Runtime drives the event loop, coordinating between:
//! - [`App`]: pure state machine
//! - [`Driver`]: platform-specific I/O
//!
//! Every state mutation happens on this single loop: input events and
//! server messages are folded one at a time, so `apply_*` operations are
//! never entered concurrently and each render observes a complete state.

use vigil_proto::SimulateAttack;

use crate::{App, AppAction, AppEvent, Driver};

/// Generic runtime that orchestrates App and Driver.
pub struct Runtime<D>
where
    D: Driver,
{
    driver: D,
    app: App,
    endpoint: String,
}

impl<D> Runtime<D>
where
    D: Driver,
{
    /// Create a new runtime with the given driver and endpoint base URL.
    pub fn new(driver: D, endpoint: String) -> Self {
        let app = App::new(endpoint.clone());
        Self { driver, app, endpoint }
    }

    /// Run the main event loop.
    ///
    /// 1. Polls for input events from the driver
    /// 2. Drains pending server messages in receipt order
    /// 3. Executes the actions the app produced
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;
        self.connect().await?;

        loop {
            let actions = self.driver.poll_event(&mut self.app).await?;
            let mut should_quit = self.process_actions(actions).await?;

            if !should_quit {
                while let Some(message) = self.driver.recv_message() {
                    let actions = self.app.handle(AppEvent::from(message));
                    if self.process_actions(actions).await? {
                        should_quit = true;
                        break;
                    }
                }
            }

            if should_quit {
                break;
            }
        }

        self.driver.stop();
        Ok(())
    }

    /// Process actions returned by the App. Returns `true` if should quit.
    async fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => return Ok(true),
                AppAction::Connect { endpoint: _ } => self.connect().await?,
                AppAction::SimulateAttack { attack_type } => {
                    self.driver.send_command(SimulateAttack { attack_type });
                },
            }
        }
        Ok(false)
    }

    /// Connect to the server.
    ///
    /// A failed attempt is downgraded to a status-bar message: session state
    /// stays intact (merely stale) and the user can retry.
    async fn connect(&mut self) -> Result<(), D::Error> {
        let actions = self.app.handle(AppEvent::Connecting);
        self.render_actions(actions)?;

        let events = match self.driver.connect(&self.endpoint).await {
            Ok(()) => vec![AppEvent::Connected],
            Err(e) => {
                tracing::warn!(error = %e, "failed to connect");
                vec![AppEvent::Disconnected, AppEvent::Error { message: e.to_string() }]
            },
        };

        for event in events {
            let actions = self.app.handle(event);
            self.render_actions(actions)?;
        }
        Ok(())
    }

    /// Execute render actions from events that cannot produce anything else.
    fn render_actions(&mut self, actions: Vec<AppAction>) -> Result<(), D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit
                | AppAction::Connect { .. }
                | AppAction::SimulateAttack { .. } => {
                    tracing::warn!(?action, "unexpected action during connection handling");
                },
            }
        }
        Ok(())
    }

    /// Get a reference to the App.
    pub fn app(&self) -> &App {
        &self.app
    }
}
