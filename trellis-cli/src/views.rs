//! Board views wired up as store subscribers.
//!
//! Each view registers a closure on the [`ProjectStore`] and reacts to the
//! snapshot lent out on every notification round. The store itself exposes no
//! read access, so anything the session wants to know about board state goes
//! through a view.

use std::cell::RefCell;
use std::rc::Rc;

use trellis_core::{Project, ProjectStatus, ProjectStore};
use trellis_renderer::BoardRenderer;

// ---------------------------------------------------------------------------
// ListView — one status section, re-rendered every round
// ---------------------------------------------------------------------------

/// Prints the section for one status whenever the store notifies.
pub struct ListView {
    status: ProjectStatus,
    renderer: Rc<BoardRenderer>,
}

impl ListView {
    pub fn new(status: ProjectStatus, renderer: Rc<BoardRenderer>) -> Self {
        ListView { status, renderer }
    }

    /// Register this view on `store`. Consumes the view; the subscriber owns
    /// its renderer handle from here on.
    pub fn attach(self, store: &mut ProjectStore) {
        let ListView { status, renderer } = self;
        store.subscribe(move |snapshot| match renderer.render_list(status, snapshot) {
            Ok(section) => println!("{section}"),
            Err(err) => tracing::error!("failed to render {status} section: {err}"),
        });
    }
}

// ---------------------------------------------------------------------------
// SnapshotView — cached copy of the latest full snapshot
// ---------------------------------------------------------------------------

/// Shared handle to the most recent snapshot.
///
/// The handle stays usable after [`SnapshotView::attach`] hands a clone of it
/// to the store, so session commands can consult board state between rounds.
/// Empty until the first mutation round.
#[derive(Clone, Default)]
pub struct SnapshotView {
    latest: Rc<RefCell<Vec<Project>>>,
}

impl SnapshotView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register this view on `store`. Every notification round replaces the
    /// cached snapshot wholesale.
    pub fn attach(&self, store: &mut ProjectStore) {
        let latest = Rc::clone(&self.latest);
        store.subscribe(move |snapshot| {
            *latest.borrow_mut() = snapshot.to_vec();
        });
    }

    /// Clone of the most recent snapshot.
    pub fn projects(&self) -> Vec<Project> {
        self.latest.borrow().clone()
    }
}

/// Wire the standard session views onto a fresh store: the active section,
/// the finished section, and last the snapshot cache the session reads from.
pub fn wire_board(renderer: &Rc<BoardRenderer>) -> (ProjectStore, SnapshotView) {
    let mut store = ProjectStore::new();
    ListView::new(ProjectStatus::Active, Rc::clone(renderer)).attach(&mut store);
    ListView::new(ProjectStatus::Finished, Rc::clone(renderer)).attach(&mut store);
    let board = SnapshotView::new();
    board.attach(&mut store);
    (store, board)
}
