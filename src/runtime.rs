//! Blocking event loop tying the state machine to its collaborators.
//!
//! One iteration handles exactly one input event: wait for it, run the pure
//! transition, execute the resulting actions, redraw. Nothing is queued.
//!
//! Collaborator failures during the session are logged and the loop carries
//! on: a secret that could not be delivered or a favorites write that failed
//! must not take the vault down. Only display and input failures end the loop.

use crate::app::{handle_event, Action, AppState, InputEvent};
use crate::domain::error::Result;
use crate::infrastructure::{InputSource, KeystrokeSink};
use crate::storage::Storage;
use crate::ui::{render, Display};

/// Owns the session state and the boxed collaborators.
pub struct Runtime {
    state: AppState,
    storage: Box<dyn Storage>,
    display: Box<dyn Display>,
    input: Box<dyn InputSource>,
    sink: Box<dyn KeystrokeSink>,
}

impl Runtime {
    /// Assembles a runtime.
    #[must_use]
    pub fn new(
        state: AppState,
        storage: Box<dyn Storage>,
        display: Box<dyn Display>,
        input: Box<dyn InputSource>,
        sink: Box<dyn KeystrokeSink>,
    ) -> Self {
        Self {
            state,
            storage,
            display,
            input,
            sink,
        }
    }

    /// Current session state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Runs until the input source closes.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Terminal`](crate::VaultError::Terminal) if drawing
    /// or reading input fails.
    pub fn run(&mut self) -> Result<()> {
        let _span = tracing::info_span!("run").entered();

        self.redraw()?;
        while let Some(event) = self.next_event()? {
            let (needs_render, actions) = handle_event(&mut self.state, event);
            self.execute(&actions);
            if needs_render {
                self.redraw()?;
            }
        }

        tracing::info!("input closed, leaving");
        Ok(())
    }

    /// Waits for the next event that is not idle. `None` once input is closed.
    ///
    /// # Errors
    ///
    /// Returns the input collaborator's error.
    pub fn next_event(&mut self) -> Result<Option<InputEvent>> {
        loop {
            if self.input.closed() {
                return Ok(None);
            }
            match self.input.poll()? {
                InputEvent::Idle => continue,
                event => return Ok(Some(event)),
            }
        }
    }

    /// Performs the side effects of one transition, in order.
    pub fn execute(&mut self, actions: &[Action]) {
        for action in actions {
            match *action {
                Action::TypeSecret(id) => {
                    let Some(entry) = self.state.store.get(id) else {
                        tracing::warn!(id = id.index(), "no entry to type");
                        continue;
                    };
                    tracing::debug!(name = entry.name(), "typing secret");
                    match self.sink.emit(entry.secret()) {
                        Ok(()) => tracing::info!("secret delivered"),
                        Err(e) => tracing::warn!(error = %e, "secret not delivered"),
                    }
                }
                Action::PersistFavorites => {
                    if let Err(e) = self.state.favorites.persist(self.storage.as_mut(), &self.state.store) {
                        tracing::error!(error = %e, "failed to persist favorites");
                    }
                }
            }
        }
    }

    fn redraw(&mut self) -> Result<()> {
        self.state.sync_filter();
        render(&self.state, self.display.as_mut())
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
