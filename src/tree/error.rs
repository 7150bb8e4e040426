use crate::models::NodeId;

/// Why a tree operation left the forest untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("node `{0}` not found")]
    NotFound(NodeId),

    /// Target is the dragged node itself or lies inside its subtree.
    #[error("cannot move `{active}` relative to `{target}`")]
    InvalidMove { active: NodeId, target: NodeId },

    #[error("node id `{0}` is already in use")]
    DuplicateId(NodeId),
}

pub type TreeResult<T> = Result<T, TreeError>;
