mod store;

pub use store::{Intent, MenuStore, NudgeDirection};

use crate::config::EditorConfig;
use crate::models::NodeId;
use crate::seed::seed_menu;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AppState {
    /// The only authoritative menu state; components re-derive from it.
    pub store: RwSignal<MenuStore>,
}

impl AppState {
    pub fn new(config: &EditorConfig) -> Self {
        let tree = if config.seed_menu {
            seed_menu()
        } else {
            vec![]
        };

        Self {
            store: RwSignal::new(MenuStore::new(tree, config.drop_threshold_px)),
        }
    }

    /// Run `intent` through the store; subscribers wake only on change.
    pub fn dispatch(&self, intent: Intent) {
        self.store.maybe_update(|s| s.dispatch(intent));
    }
}

#[derive(Clone, Copy)]
pub struct AppContext(pub AppState);

/// Where the add form is currently open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddTarget {
    Root,
    Child(NodeId),
}

/// Per-page UI state shared by the recursive rows.
#[derive(Clone, Copy)]
pub struct EditorUi {
    pub editing_id: RwSignal<Option<NodeId>>,
    pub adding: RwSignal<Option<AddTarget>>,
}

impl EditorUi {
    pub fn new() -> Self {
        Self {
            editing_id: RwSignal::new(None),
            adding: RwSignal::new(None),
        }
    }
}

impl Default for EditorUi {
    fn default() -> Self {
        Self::new()
    }
}
