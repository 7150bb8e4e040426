use crate::models::{DropIntent, NodeId};

/// Pixels from the top/bottom edge of a row that still count as "between rows".
pub const DEFAULT_DROP_THRESHOLD_PX: f64 = 5.0;

/// Vertical extent of the element under the pointer, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetRect {
    pub top: f64,
    pub height: f64,
}

impl TargetRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// Classify a drag-over position.
///
/// The top edge band reorders before the target, the bottom band after it, and
/// everything in between reparents into it. For rows shorter than two bands the
/// top band wins.
pub fn resolve_drop_intent(pointer_y: f64, rect: TargetRect, threshold: f64) -> DropIntent {
    let relative_y = pointer_y - rect.top;
    if relative_y < threshold {
        DropIntent::Before
    } else if relative_y > rect.height - threshold {
        DropIntent::After
    } else {
        DropIntent::Into
    }
}

/// A drop that the store should apply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveCommand {
    pub active: NodeId,
    pub target: NodeId,
    pub intent: DropIntent,
}

/// Per-gesture state: `Idle -> Dragging -> Resolving -> Idle`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging {
        active: NodeId,
    },
    Resolving {
        active: NodeId,
        target: NodeId,
        intent: DropIntent,
    },
}

impl DragGesture {
    pub fn start(&mut self, active: NodeId) {
        *self = Self::Dragging { active };
    }

    /// Record the latest hover. Hovering the dragged row itself clears the target.
    pub fn hover(&mut self, target: NodeId, intent: DropIntent) {
        let Some(active) = self.active().cloned() else {
            return;
        };
        *self = if target == active {
            Self::Dragging { active }
        } else {
            Self::Resolving {
                active,
                target,
                intent,
            }
        };
    }

    pub fn leave(&mut self) {
        if let Self::Resolving { active, .. } = self {
            *self = Self::Dragging {
                active: active.clone(),
            };
        }
    }

    /// End the gesture; yields the pending drop if there is one.
    pub fn finish(&mut self) -> Option<MoveCommand> {
        match std::mem::take(self) {
            Self::Resolving {
                active,
                target,
                intent,
            } => Some(MoveCommand {
                active,
                target,
                intent,
            }),
            Self::Idle | Self::Dragging { .. } => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    pub fn active(&self) -> Option<&NodeId> {
        match self {
            Self::Idle => None,
            Self::Dragging { active } | Self::Resolving { active, .. } => Some(active),
        }
    }

    pub fn is_dragging(&self, id: &NodeId) -> bool {
        self.active() == Some(id)
    }

    /// The drop hint to render on row `id`, if the pointer is over it.
    pub fn hover_intent_for(&self, id: &NodeId) -> Option<DropIntent> {
        match self {
            Self::Resolving { target, intent, .. } if target == id => Some(*intent),
            _ => None,
        }
    }
}
