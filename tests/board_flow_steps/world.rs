//! Shared world state for board flow BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::{InMemoryAuthGateway, InMemoryTaskStore},
    ports::UserIdentity,
    services::TaskBoard,
};

/// Store type used by the BDD world.
pub type TestStore = InMemoryTaskStore<InMemoryAuthGateway, DefaultClock>;

/// Board type used by the BDD world.
pub type TestBoard = TaskBoard<TestStore, InMemoryAuthGateway, DefaultClock>;

/// Scenario world for board flow behaviour tests.
pub struct BoardFlowWorld {
    pub gateway: Arc<InMemoryAuthGateway>,
    pub board: TestBoard,
}

impl BoardFlowWorld {
    /// Creates a world with a signed-out gateway and an empty board.
    #[must_use]
    pub fn new() -> Self {
        let gateway = Arc::new(InMemoryAuthGateway::new());
        let store = Arc::new(InMemoryTaskStore::new(
            Arc::clone(&gateway),
            Arc::new(DefaultClock),
        ));
        let board = TaskBoard::new(store, Arc::clone(&gateway), Arc::new(DefaultClock));
        Self { gateway, board }
    }

    /// Identity the scenarios sign in with.
    #[must_use]
    pub fn default_user() -> UserIdentity {
        UserIdentity::new("user-1", "user-1@example.com")
    }
}

impl Default for BoardFlowWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardFlowWorld {
    BoardFlowWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
