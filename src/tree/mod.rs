//! Ordered tree engine for the navigation menu.
//!
//! Stateless functions over `&[NavigationNode]`. Nothing here touches the DOM.

mod edit;
mod error;
mod query;

pub use edit::{
    add_node, delete_node, move_node, try_add_node, try_delete_node, try_move_node,
    try_update_node, update_node,
};
pub use error::{TreeError, TreeResult};
pub use query::{
    collect_all_ids, find_node_by_id, find_path, node_at_path, sibling_neighbors,
    subtree_contains, validate_forest,
};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::{NavigationNode, NodeId};

    pub(crate) fn node(id: &str, children: Vec<NavigationNode>) -> NavigationNode {
        NavigationNode {
            id: NodeId::from(id),
            label: format!("Item {id}"),
            url: None,
            children,
        }
    }

    pub(crate) fn leaf(id: &str) -> NavigationNode {
        node(id, vec![])
    }

    pub(crate) fn ids(xs: &[&str]) -> Vec<NodeId> {
        xs.iter().map(|s| NodeId::from(*s)).collect()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod proptests {
    use super::test_support::{leaf, node};
    use super::*;
    use crate::models::{DropIntent, NavigationNode, NodeId, NodeUpdate};
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        Add { parent: Option<usize> },
        Edit { pick: usize },
        Delete { pick: usize },
        Move { active: usize, target: usize, intent: DropIntent },
    }

    fn intent() -> impl Strategy<Value = DropIntent> {
        prop_oneof![
            Just(DropIntent::Before),
            Just(DropIntent::After),
            Just(DropIntent::Into)
        ]
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            proptest::option::of(0usize..64).prop_map(|parent| Op::Add { parent }),
            (0usize..64).prop_map(|pick| Op::Edit { pick }),
            (0usize..64).prop_map(|pick| Op::Delete { pick }),
            (0usize..64, 0usize..64, intent())
                .prop_map(|(active, target, intent)| Op::Move { active, target, intent }),
        ]
    }

    fn seed() -> Vec<NavigationNode> {
        vec![
            leaf("1"),
            node("2", vec![leaf("2-1"), leaf("2-2")]),
            node("3", vec![leaf("3-1"), node("3-2", vec![leaf("3-2-1")])]),
        ]
    }

    /// Index into the current pre-order id list; out of range picks a missing id.
    fn pick(tree: &[NavigationNode], i: usize) -> NodeId {
        collect_all_ids(tree)
            .get(i)
            .cloned()
            .unwrap_or_else(|| NodeId::from("absent"))
    }

    proptest! {
        #[test]
        fn prop_ops_preserve_forest_invariants(ops in proptest::collection::vec(op(), 1..40)) {
            let mut tree = seed();
            for op in ops {
                let before = tree.clone();
                let count = collect_all_ids(&tree).len();
                tree = match op {
                    Op::Add { parent } => {
                        let parent = parent.map(|i| pick(&tree, i));
                        add_node(&tree, NavigationNode::new("p", None), parent.as_ref())
                    }
                    Op::Edit { pick: i } => {
                        let id = pick(&tree, i);
                        update_node(&tree, &NodeUpdate { id, label: "e".to_string(), url: None })
                    }
                    Op::Delete { pick: i } => delete_node(&tree, &pick(&tree, i)),
                    Op::Move { active, target, intent } => {
                        let (a, t) = (pick(&tree, active), pick(&tree, target));
                        let next = move_node(&tree, &a, &t, intent);
                        prop_assert_eq!(collect_all_ids(&next).len(), count);
                        if a == t || subtree_contains(&tree, &a, &t) {
                            prop_assert_eq!(&next, &before);
                        }
                        next
                    }
                };

                prop_assert!(validate_forest(&tree).is_ok());
                for id in collect_all_ids(&tree) {
                    let path = find_path(&tree, &id);
                    prop_assert!(!path.is_empty());
                    prop_assert_eq!(node_at_path(&tree, &path).map(|n| &n.id), Some(&id));
                    prop_assert!(!subtree_contains(&tree, &id, &id));
                }
            }
        }

        #[test]
        fn prop_delete_is_idempotent(i in 0usize..16) {
            let tree = seed();
            let id = pick(&tree, i);
            let once = delete_node(&tree, &id);
            prop_assert_eq!(delete_node(&once, &id), once);
        }
    }
}
