use crate::drag::{resolve_drop_intent, DragGesture, MoveCommand, TargetRect};
use crate::models::{DropIntent, NavigationNode, NodeId, NodeUpdate, Tree};
use crate::tree::{
    find_node_by_id, sibling_neighbors, try_add_node, try_delete_node, try_move_node,
    try_update_node, TreeError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NudgeDirection {
    Up,
    Down,
}

/// Everything the UI can ask of the menu.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    Add {
        label: String,
        url: Option<String>,
        parent: Option<NodeId>,
    },
    Edit {
        id: NodeId,
        label: String,
        url: Option<String>,
    },
    Delete {
        id: NodeId,
    },
    Move {
        active: NodeId,
        target: NodeId,
        intent: DropIntent,
    },
    /// Keyboard reorder among siblings.
    Nudge {
        id: NodeId,
        direction: NudgeDirection,
    },
    DragStart {
        id: NodeId,
    },
    DragOver {
        target: NodeId,
        pointer_y: f64,
        rect: TargetRect,
    },
    DragLeave,
    DragEnd,
    DragCancel,
    DismissNotice,
}

impl From<MoveCommand> for Intent {
    fn from(cmd: MoveCommand) -> Self {
        Intent::Move {
            active: cmd.active,
            target: cmd.target,
            intent: cmd.intent,
        }
    }
}

/// Holds the current menu snapshot and the in-flight drag gesture.
///
/// Every tree change replaces `tree` wholesale with the engine's output.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuStore {
    tree: Tree,
    gesture: DragGesture,
    drop_threshold: f64,
    /// Last rejected move, shown to the user until the next successful change.
    notice: Option<TreeError>,
}

impl MenuStore {
    pub fn new(tree: Tree, drop_threshold: f64) -> Self {
        Self {
            tree,
            gesture: DragGesture::Idle,
            drop_threshold,
            notice: None,
        }
    }

    pub fn tree(&self) -> &[NavigationNode] {
        &self.tree
    }

    pub fn gesture(&self) -> &DragGesture {
        &self.gesture
    }

    pub fn notice(&self) -> Option<&TreeError> {
        self.notice.as_ref()
    }

    pub fn node(&self, id: &NodeId) -> Option<&NavigationNode> {
        find_node_by_id(&self.tree, id)
    }

    /// Apply `intent`. Returns whether the snapshot or the gesture changed.
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::DragStart { id } => {
                if self.node(&id).is_none() {
                    tracing::debug!(%id, "drag start on unknown node ignored");
                    return false;
                }
                self.set_gesture(|g| g.start(id))
            }
            Intent::DragOver {
                target,
                pointer_y,
                rect,
            } => {
                let intent = resolve_drop_intent(pointer_y, rect, self.drop_threshold);
                self.set_gesture(|g| g.hover(target, intent))
            }
            Intent::DragLeave => self.set_gesture(DragGesture::leave),
            Intent::DismissNotice => self.notice.take().is_some(),
            Intent::DragCancel => self.set_gesture(DragGesture::cancel),
            Intent::DragEnd => {
                let was_active = self.gesture != DragGesture::Idle;
                if let Some(cmd) = self.gesture.finish() {
                    self.commit(cmd.into());
                }
                was_active
            }
            other => self.commit(other),
        }
    }

    fn set_gesture(&mut self, f: impl FnOnce(&mut DragGesture)) -> bool {
        let before = self.gesture.clone();
        f(&mut self.gesture);
        self.gesture != before
    }

    fn commit(&mut self, intent: Intent) -> bool {
        match self.apply(&intent) {
            Ok(next) if next != self.tree => {
                tracing::debug!(?intent, "menu updated");
                self.tree = next;
                self.notice = None;
                true
            }
            Ok(_) => false,
            Err(e @ TreeError::InvalidMove { .. }) => {
                tracing::info!(error = %e, "move rejected");
                self.notice = Some(e);
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, ?intent, "intent rejected");
                false
            }
        }
    }

    fn apply(&self, intent: &Intent) -> Result<Tree, TreeError> {
        match intent {
            Intent::Add { label, url, parent } => {
                let node = NavigationNode::new(label.clone(), url.clone());
                tracing::info!(id = %node.id, parent = ?parent, "adding menu item");
                try_add_node(&self.tree, node, parent.as_ref())
            }
            Intent::Edit { id, label, url } => try_update_node(
                &self.tree,
                &NodeUpdate {
                    id: id.clone(),
                    label: label.clone(),
                    url: url.clone(),
                },
            ),
            Intent::Delete { id } => try_delete_node(&self.tree, id),
            Intent::Move {
                active,
                target,
                intent,
            } => try_move_node(&self.tree, active, target, *intent),
            Intent::Nudge { id, direction } => {
                let (prev, next) = sibling_neighbors(&self.tree, id)
                    .ok_or_else(|| TreeError::NotFound(id.clone()))?;
                match (direction, prev, next) {
                    (NudgeDirection::Up, Some(prev), _) => {
                        try_move_node(&self.tree, id, &prev, DropIntent::Before)
                    }
                    (NudgeDirection::Down, _, Some(next)) => {
                        try_move_node(&self.tree, id, &next, DropIntent::After)
                    }
                    // Already first/last among its siblings.
                    _ => Ok(self.tree.clone()),
                }
            }
            Intent::DragStart { .. }
            | Intent::DragOver { .. }
            | Intent::DragLeave
            | Intent::DragEnd
            | Intent::DragCancel
            | Intent::DismissNotice => Ok(self.tree.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::test_support::{leaf, node};
    use crate::tree::{collect_all_ids, find_path};
    use pretty_assertions::assert_eq;

    fn store() -> MenuStore {
        MenuStore::new(
            vec![
                node("A", vec![leaf("B"), leaf("C")]),
                leaf("D"),
            ],
            5.0,
        )
    }

    fn rect() -> TargetRect {
        TargetRect::new(200.0, 40.0)
    }

    fn ids(s: &MenuStore) -> Vec<String> {
        collect_all_ids(s.tree())
            .into_iter()
            .map(|id| id.to_string())
            .collect()
    }

    #[test]
    fn test_add_root_and_child() {
        let mut s = store();
        assert!(s.dispatch(Intent::Add {
            label: "Kontakt".to_string(),
            url: None,
            parent: None,
        }));
        assert_eq!(s.tree().len(), 3);
        let added = &s.tree()[2];
        assert_eq!(added.label, "Kontakt");
        assert!(added.children.is_empty());

        assert!(s.dispatch(Intent::Add {
            label: "Sub".to_string(),
            url: Some("/sub".to_string()),
            parent: Some("C".into()),
        }));
        let c = s.node(&"C".into()).expect("C");
        assert_eq!(c.children.len(), 1);
        assert_eq!(c.children[0].url.as_deref(), Some("/sub"));
    }

    #[test]
    fn test_add_to_missing_parent_changes_nothing() {
        let mut s = store();
        let before = s.clone();
        assert!(!s.dispatch(Intent::Add {
            label: "x".to_string(),
            url: None,
            parent: Some("gone".into()),
        }));
        assert_eq!(s, before);
    }

    #[test]
    fn test_edit_and_delete() {
        let mut s = store();
        assert!(s.dispatch(Intent::Edit {
            id: "A".into(),
            label: "Start".to_string(),
            url: Some("/".to_string()),
        }));
        let a = s.node(&"A".into()).expect("A");
        assert_eq!(a.label, "Start");
        assert_eq!(a.children.len(), 2);

        assert!(s.dispatch(Intent::Delete { id: "A".into() }));
        assert_eq!(ids(&s), vec!["D"]);
        assert!(!s.dispatch(Intent::Delete { id: "A".into() }));
    }

    #[test]
    fn test_edit_with_same_values_reports_no_change() {
        let mut s = store();
        let b = s.node(&"B".into()).cloned().expect("B");
        assert!(!s.dispatch(Intent::Edit {
            id: b.id,
            label: b.label,
            url: b.url,
        }));
    }

    #[test]
    fn test_drag_into_reparents() {
        let mut s = store();
        assert!(s.dispatch(Intent::DragStart { id: "D".into() }));
        assert!(s.dispatch(Intent::DragOver {
            target: "B".into(),
            pointer_y: 220.0,
            rect: rect(),
        }));
        assert_eq!(s.gesture().hover_intent_for(&"B".into()), Some(DropIntent::Into));

        assert!(s.dispatch(Intent::DragEnd));
        assert_eq!(find_path(s.tree(), &"D".into()), vec![0, 0, 0]);
        assert_eq!(s.gesture(), &DragGesture::Idle);
    }

    #[test]
    fn test_drag_before_reorders_using_latest_hover() {
        let mut s = store();
        s.dispatch(Intent::DragStart { id: "C".into() });
        s.dispatch(Intent::DragOver {
            target: "A".into(),
            pointer_y: 220.0,
            rect: rect(),
        });
        s.dispatch(Intent::DragOver {
            target: "B".into(),
            pointer_y: 201.0,
            rect: rect(),
        });
        s.dispatch(Intent::DragEnd);
        assert_eq!(ids(&s), vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn test_drag_after_moves_out_of_parent() {
        let mut s = store();
        s.dispatch(Intent::DragStart { id: "B".into() });
        s.dispatch(Intent::DragOver {
            target: "D".into(),
            pointer_y: 239.0,
            rect: rect(),
        });
        s.dispatch(Intent::DragEnd);
        assert_eq!(find_path(s.tree(), &"B".into()), vec![2]);
    }

    #[test]
    fn test_drag_into_own_child_is_rejected() {
        let mut s = store();
        let tree_before = s.tree().to_vec();
        s.dispatch(Intent::DragStart { id: "A".into() });
        s.dispatch(Intent::DragOver {
            target: "C".into(),
            pointer_y: 220.0,
            rect: rect(),
        });
        s.dispatch(Intent::DragEnd);
        assert_eq!(s.tree(), &tree_before[..]);
        assert_eq!(s.gesture(), &DragGesture::Idle);
        assert!(matches!(s.notice(), Some(TreeError::InvalidMove { .. })));

        assert!(s.dispatch(Intent::DismissNotice));
        assert_eq!(s.notice(), None);
        assert!(!s.dispatch(Intent::DismissNotice));
    }

    #[test]
    fn test_successful_change_clears_notice() {
        let mut s = store();
        s.dispatch(Intent::Move {
            active: "A".into(),
            target: "A".into(),
            intent: DropIntent::Into,
        });
        assert!(s.notice().is_some());
        s.dispatch(Intent::Delete { id: "D".into() });
        assert_eq!(s.notice(), None);
    }

    #[test]
    fn test_drag_cancel_discards_pending_drop() {
        let mut s = store();
        let tree_before = s.tree().to_vec();
        s.dispatch(Intent::DragStart { id: "D".into() });
        s.dispatch(Intent::DragOver {
            target: "A".into(),
            pointer_y: 201.0,
            rect: rect(),
        });
        assert!(s.dispatch(Intent::DragCancel));
        assert_eq!(s.gesture(), &DragGesture::Idle);
        // A drop event arriving after cancel has nothing to apply.
        s.dispatch(Intent::DragEnd);
        assert_eq!(s.tree(), &tree_before[..]);
    }

    #[test]
    fn test_drag_start_on_unknown_node_is_ignored() {
        let mut s = store();
        assert!(!s.dispatch(Intent::DragStart { id: "nope".into() }));
        assert_eq!(s.gesture(), &DragGesture::Idle);
    }

    #[test]
    fn test_drag_over_without_start_is_ignored() {
        let mut s = store();
        assert!(!s.dispatch(Intent::DragOver {
            target: "A".into(),
            pointer_y: 220.0,
            rect: rect(),
        }));
    }

    #[test]
    fn test_drag_threshold_comes_from_store() {
        let mut s = MenuStore::new(store().tree().to_vec(), 12.0);
        s.dispatch(Intent::DragStart { id: "D".into() });
        s.dispatch(Intent::DragOver {
            target: "A".into(),
            pointer_y: 210.0,
            rect: rect(),
        });
        assert_eq!(s.gesture().hover_intent_for(&"A".into()), Some(DropIntent::Before));
    }

    #[test]
    fn test_drag_leave_clears_hint() {
        let mut s = store();
        s.dispatch(Intent::DragStart { id: "D".into() });
        s.dispatch(Intent::DragOver {
            target: "A".into(),
            pointer_y: 220.0,
            rect: rect(),
        });
        assert!(s.dispatch(Intent::DragLeave));
        assert_eq!(s.gesture().hover_intent_for(&"A".into()), None);
        assert!(s.gesture().is_dragging(&"D".into()));
    }

    #[test]
    fn test_nudge_within_siblings() {
        let mut s = store();
        assert!(s.dispatch(Intent::Nudge {
            id: "C".into(),
            direction: NudgeDirection::Up,
        }));
        assert_eq!(ids(&s), vec!["A", "C", "B", "D"]);

        assert!(s.dispatch(Intent::Nudge {
            id: "A".into(),
            direction: NudgeDirection::Down,
        }));
        assert_eq!(ids(&s), vec!["D", "A", "C", "B"]);
    }

    #[test]
    fn test_nudge_at_edges_is_noop() {
        let mut s = store();
        assert!(!s.dispatch(Intent::Nudge {
            id: "A".into(),
            direction: NudgeDirection::Up,
        }));
        assert!(!s.dispatch(Intent::Nudge {
            id: "C".into(),
            direction: NudgeDirection::Down,
        }));
        assert!(!s.dispatch(Intent::Nudge {
            id: "nope".into(),
            direction: NudgeDirection::Down,
        }));
    }

    #[test]
    fn test_move_intent_matches_engine() {
        let mut s = MenuStore::new(vec![node("A", vec![leaf("B"), leaf("C")])], 5.0);
        assert!(s.dispatch(Intent::Move {
            active: "B".into(),
            target: "C".into(),
            intent: DropIntent::Into,
        }));
        assert_eq!(s.tree(), &[node("A", vec![node("C", vec![leaf("B")])])][..]);
    }
}
