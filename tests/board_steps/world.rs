//! Shared world state for board BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskflow::{
    board::{
        adapters::InMemoryBoardStorage,
        domain::{Board, DropOutcome},
        services::{BoardEngine, BoardStore},
    },
    confirm::adapters::ScriptedConfirmationHost,
    notify::adapters::RecordingNotifier,
};

/// Store type used by the BDD world.
pub type TestStore =
    BoardStore<InMemoryBoardStorage, ScriptedConfirmationHost, RecordingNotifier, DefaultClock>;

/// Engine type used by the BDD world.
pub type TestEngine =
    BoardEngine<InMemoryBoardStorage, ScriptedConfirmationHost, RecordingNotifier, DefaultClock>;

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub storage: InMemoryBoardStorage,
    pub confirmer: ScriptedConfirmationHost,
    pub notifier: RecordingNotifier,
    pub store: Option<Arc<TestStore>>,
    pub engine: Option<TestEngine>,
    pub created_board: Option<Board>,
    pub last_drop: Option<DropOutcome>,
}

impl BoardWorld {
    /// Creates a world whose host confirms unless told otherwise.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: InMemoryBoardStorage::new(),
            confirmer: ScriptedConfirmationHost::always_confirm(),
            notifier: RecordingNotifier::new(),
            store: None,
            engine: None,
            created_board: None,
            last_drop: None,
        }
    }

    /// Returns the loaded store.
    ///
    /// # Errors
    ///
    /// Returns an error if no store has been loaded yet.
    pub fn store(&self) -> Result<&Arc<TestStore>, eyre::Report> {
        self.store
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing store in scenario world"))
    }

    /// Returns the open board engine.
    ///
    /// # Errors
    ///
    /// Returns an error if no board has been opened.
    pub fn engine(&self) -> Result<&TestEngine, eyre::Report> {
        self.engine
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing open board in scenario world"))
    }

    /// Returns the open board engine for mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if no board has been opened.
    pub fn engine_mut(&mut self) -> Result<&mut TestEngine, eyre::Report> {
        self.engine
            .as_mut()
            .ok_or_else(|| eyre::eyre!("missing open board in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Splits a comma-separated step argument.
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
