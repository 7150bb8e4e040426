use super::error::{TreeError, TreeResult};
use crate::models::{NavigationNode, NodeId};
use std::collections::HashSet;

/// Depth-first lookup, parent before children.
pub fn find_node_by_id<'a>(tree: &'a [NavigationNode], id: &NodeId) -> Option<&'a NavigationNode> {
    tree.iter().find_map(|node| {
        if node.id == *id {
            Some(node)
        } else {
            find_node_by_id(&node.children, id)
        }
    })
}

/// Child indices from a root down to `id`. Empty when `id` is absent.
pub fn find_path(tree: &[NavigationNode], id: &NodeId) -> Vec<usize> {
    for (i, node) in tree.iter().enumerate() {
        if node.id == *id {
            return vec![i];
        }
        let sub = find_path(&node.children, id);
        if !sub.is_empty() {
            let mut path = Vec::with_capacity(sub.len() + 1);
            path.push(i);
            path.extend(sub);
            return path;
        }
    }
    Vec::new()
}

/// Every id in pre-order.
pub fn collect_all_ids(tree: &[NavigationNode]) -> Vec<NodeId> {
    fn walk(nodes: &[NavigationNode], out: &mut Vec<NodeId>) {
        for n in nodes {
            out.push(n.id.clone());
            walk(&n.children, out);
        }
    }

    let mut out = Vec::new();
    walk(tree, &mut out);
    out
}

pub fn node_at_path<'a>(tree: &'a [NavigationNode], path: &[usize]) -> Option<&'a NavigationNode> {
    let (&first, rest) = path.split_first()?;
    let mut node = tree.get(first)?;
    for &i in rest {
        node = node.children.get(i)?;
    }
    Some(node)
}

pub(crate) fn node_at_path_mut<'a>(
    tree: &'a mut [NavigationNode],
    path: &[usize],
) -> Option<&'a mut NavigationNode> {
    let (&first, rest) = path.split_first()?;
    let mut node = tree.get_mut(first)?;
    for &i in rest {
        node = node.children.get_mut(i)?;
    }
    Some(node)
}

/// The sibling list holding the node at `path`, plus the node's index in it.
pub(crate) fn siblings_mut<'a>(
    tree: &'a mut Vec<NavigationNode>,
    path: &[usize],
) -> Option<(&'a mut Vec<NavigationNode>, usize)> {
    let (&index, parent_path) = path.split_last()?;
    if parent_path.is_empty() {
        return Some((tree, index));
    }
    let parent = node_at_path_mut(tree, parent_path)?;
    Some((&mut parent.children, index))
}

/// Whether `id` lies strictly below `ancestor`.
pub fn subtree_contains(tree: &[NavigationNode], ancestor: &NodeId, id: &NodeId) -> bool {
    find_node_by_id(tree, ancestor)
        .map(|a| find_node_by_id(&a.children, id).is_some())
        .unwrap_or(false)
}

/// Previous and next sibling of `id`, or `None` when `id` is absent.
pub fn sibling_neighbors(
    tree: &[NavigationNode],
    id: &NodeId,
) -> Option<(Option<NodeId>, Option<NodeId>)> {
    let path = find_path(tree, id);
    let (&index, parent_path) = path.split_last()?;
    let siblings = if parent_path.is_empty() {
        tree
    } else {
        &node_at_path(tree, parent_path)?.children[..]
    };

    let prev = index
        .checked_sub(1)
        .and_then(|i| siblings.get(i))
        .map(|n| n.id.clone());
    let next = siblings.get(index + 1).map(|n| n.id.clone());
    Some((prev, next))
}

/// Checks that no id appears twice anywhere in the forest.
pub fn validate_forest(tree: &[NavigationNode]) -> TreeResult<()> {
    let mut seen = HashSet::new();
    for id in collect_all_ids(tree) {
        if !seen.insert(id.clone()) {
            return Err(TreeError::DuplicateId(id));
        }
    }
    Ok(())
}
