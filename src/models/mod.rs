use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque, stable identifier of a menu item.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Allocate an id that has not been handed out before in this session.
    ///
    /// Uniqueness comes from the counter; the random suffix differs per page load.
    pub fn fresh() -> Self {
        let seq = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let mut buf = [0u8; 8];
        let rand = match getrandom::getrandom(&mut buf) {
            Ok(()) => u64::from_le_bytes(buf),
            Err(_) => 0,
        };
        Self(format!("nav-{seq}-{rand:016x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A single navigation entry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NavigationNode {
    pub id: NodeId,
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Display order is the vector order.
    #[serde(default)]
    pub children: Vec<NavigationNode>,
}

impl NavigationNode {
    /// A fresh leaf node.
    pub fn new(label: impl Into<String>, url: Option<String>) -> Self {
        Self {
            id: NodeId::fresh(),
            label: label.into(),
            url,
            children: vec![],
        }
    }
}

/// Root sequence of the menu forest.
pub type Tree = Vec<NavigationNode>;

/// Edit payload. Children are never part of an edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeUpdate {
    pub id: NodeId,
    pub label: String,
    pub url: Option<String>,
}

impl From<&NavigationNode> for NodeUpdate {
    fn from(node: &NavigationNode) -> Self {
        Self {
            id: node.id.clone(),
            label: node.label.clone(),
            url: node.url.clone(),
        }
    }
}

/// Where a dragged item lands relative to the item under the pointer.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DropIntent {
    /// Preceding sibling of the target.
    Before,
    /// Following sibling of the target.
    After,
    /// Last child of the target.
    Into,
}
