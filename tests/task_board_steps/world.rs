//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::{
    app::TaskBoard,
    board::{
        adapters::{RecordingNotice, SequentialIdSource},
        domain::{ItemStatus, WorkItem},
        services::IntakeError,
    },
    config::BoardConfig,
    view::Node,
};

/// Board type used by the BDD world.
pub type TestBoard = TaskBoard<SequentialIdSource, DefaultClock, RecordingNotice>;

/// Scenario world for task board behaviour tests.
pub struct BoardWorld {
    pub board: TestBoard,
    pub notice: RecordingNotice,
    pub last_submission: Option<Result<WorkItem, IntakeError>>,
}

impl BoardWorld {
    /// Creates a world around an empty board with default configuration.
    #[must_use]
    pub fn new() -> Self {
        let notice = RecordingNotice::new();
        let board = TaskBoard::new(
            BoardConfig::default(),
            SequentialIdSource::default(),
            Arc::new(DefaultClock),
            notice.clone(),
        )
        .unwrap_or_else(|err| panic!("built-in templates must compile: {err}"));

        Self {
            board,
            notice,
            last_submission: None,
        }
    }

    /// Finds the item with `title` on the board.
    pub fn item_titled(&self, title: &str) -> Result<WorkItem, eyre::Report> {
        self.board
            .store()
            .items()
            .iter()
            .find(|item| item.title() == title)
            .cloned()
            .ok_or_else(|| eyre::eyre!("no item titled {title:?} on the board"))
    }

    /// Returns the rendered entry of `item` in the list of its status.
    pub fn rendered_entry(&self, item: &WorkItem) -> Result<Node, eyre::Report> {
        let list_id = self.board.list(item.status()).list_id();
        self.board
            .list(item.status())
            .host()
            .children()
            .iter()
            .filter(|child| child.id() == Some(list_id.as_str()))
            .flat_map(Node::children)
            .find(|entry| entry.id() == Some(item.id().as_str()))
            .cloned()
            .ok_or_else(|| eyre::eyre!("item {} is not rendered", item.id()))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a list name used in step text.
pub fn status_named(name: &str) -> Result<ItemStatus, eyre::Report> {
    ItemStatus::try_from(name).map_err(|err| eyre::eyre!("invalid list in scenario: {err}"))
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
