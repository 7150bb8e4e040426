//! Copy-on-write mutations.
//!
//! Every operation clones the input forest, edits the copy along the index path
//! of the touched node and hands the copy back. The `try_*` forms say why they
//! declined; the plain forms return an unchanged copy instead.

use super::error::{TreeError, TreeResult};
use super::query::{
    collect_all_ids, find_node_by_id, find_path, node_at_path_mut, siblings_mut, subtree_contains,
};
use crate::models::{DropIntent, NavigationNode, NodeId, NodeUpdate, Tree};

/// Append `node` under `parent`, or as the last root when `parent` is `None`.
pub fn try_add_node(
    tree: &[NavigationNode],
    node: NavigationNode,
    parent: Option<&NodeId>,
) -> TreeResult<Tree> {
    let incoming = collect_all_ids(std::slice::from_ref(&node));
    if let Some(taken) = incoming
        .into_iter()
        .find(|id| find_node_by_id(tree, id).is_some())
    {
        return Err(TreeError::DuplicateId(taken));
    }

    let mut next = tree.to_vec();
    match parent {
        None => next.push(node),
        Some(parent_id) => {
            let path = find_path(&next, parent_id);
            let parent = node_at_path_mut(&mut next, &path)
                .ok_or_else(|| TreeError::NotFound(parent_id.clone()))?;
            parent.children.push(node);
        }
    }
    Ok(next)
}

pub fn add_node(tree: &[NavigationNode], node: NavigationNode, parent: Option<&NodeId>) -> Tree {
    try_add_node(tree, node, parent).unwrap_or_else(|_| tree.to_vec())
}

/// Replace label and url of `update.id`, keeping its children.
pub fn try_update_node(tree: &[NavigationNode], update: &NodeUpdate) -> TreeResult<Tree> {
    let path = find_path(tree, &update.id);
    let mut next = tree.to_vec();
    let node = node_at_path_mut(&mut next, &path)
        .ok_or_else(|| TreeError::NotFound(update.id.clone()))?;
    node.label = update.label.clone();
    node.url = update.url.clone();
    Ok(next)
}

pub fn update_node(tree: &[NavigationNode], update: &NodeUpdate) -> Tree {
    try_update_node(tree, update).unwrap_or_else(|_| tree.to_vec())
}

/// Remove `id` together with its subtree.
pub fn try_delete_node(tree: &[NavigationNode], id: &NodeId) -> TreeResult<Tree> {
    let path = find_path(tree, id);
    let mut next = tree.to_vec();
    let (siblings, index) =
        siblings_mut(&mut next, &path).ok_or_else(|| TreeError::NotFound(id.clone()))?;
    siblings.remove(index);
    Ok(next)
}

pub fn delete_node(tree: &[NavigationNode], id: &NodeId) -> Tree {
    try_delete_node(tree, id).unwrap_or_else(|_| tree.to_vec())
}

/// Detach `active` (with its subtree) and reinsert it relative to `target`.
pub fn try_move_node(
    tree: &[NavigationNode],
    active: &NodeId,
    target: &NodeId,
    intent: DropIntent,
) -> TreeResult<Tree> {
    let active_path = find_path(tree, active);
    if active_path.is_empty() {
        return Err(TreeError::NotFound(active.clone()));
    }
    if find_path(tree, target).is_empty() {
        return Err(TreeError::NotFound(target.clone()));
    }
    if active == target || subtree_contains(tree, active, target) {
        return Err(TreeError::InvalidMove {
            active: active.clone(),
            target: target.clone(),
        });
    }

    let mut next = tree.to_vec();
    let (siblings, index) = siblings_mut(&mut next, &active_path)
        .ok_or_else(|| TreeError::NotFound(active.clone()))?;
    let moved = siblings.remove(index);

    // Indices among former siblings shift after the removal.
    let target_path = find_path(&next, target);
    match intent {
        DropIntent::Into => {
            let parent = node_at_path_mut(&mut next, &target_path)
                .ok_or_else(|| TreeError::NotFound(target.clone()))?;
            parent.children.push(moved);
        }
        DropIntent::Before | DropIntent::After => {
            let (siblings, index) = siblings_mut(&mut next, &target_path)
                .ok_or_else(|| TreeError::NotFound(target.clone()))?;
            let at = if intent == DropIntent::After { index + 1 } else { index };
            siblings.insert(at, moved);
        }
    }
    Ok(next)
}

pub fn move_node(
    tree: &[NavigationNode],
    active: &NodeId,
    target: &NodeId,
    intent: DropIntent,
) -> Tree {
    try_move_node(tree, active, target, intent).unwrap_or_else(|_| tree.to_vec())
}
