use crate::models::Tree;
use crate::tree::validate_forest;

const SEED_MENU_JSON: &str = include_str!("../../assets/seed_menu.json");

/// The demo menu, or an empty one if the bundled JSON is unusable.
pub fn seed_menu() -> Tree {
    parse_menu(SEED_MENU_JSON).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "seed menu rejected; starting empty");
        Tree::new()
    })
}

pub fn parse_menu(json: &str) -> Result<Tree, String> {
    let tree: Tree = serde_json::from_str(json).map_err(|e| e.to_string())?;
    validate_forest(&tree).map_err(|e| e.to_string())?;
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{collect_all_ids, find_path};

    #[test]
    fn test_bundled_seed_is_valid() {
        let tree = parse_menu(SEED_MENU_JSON).expect("bundled seed should parse");
        assert_eq!(tree.len(), 3);
        assert_eq!(collect_all_ids(&tree).len(), 7);
        assert_eq!(find_path(&tree, &"3-2".into()), vec![2, 1]);
        assert_eq!(seed_menu(), tree);
    }

    #[test]
    fn test_parse_menu_rejects_duplicate_ids() {
        let json = r#"[
            { "id": "1", "label": "A", "children": [{ "id": "1", "label": "B" }] }
        ]"#;
        let err = parse_menu(json).expect_err("duplicate id should fail");
        assert!(err.contains("already in use"), "{err}");
    }

    #[test]
    fn test_parse_menu_rejects_bad_json() {
        assert!(parse_menu("{").is_err());
    }
}
