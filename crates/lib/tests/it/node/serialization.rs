use matpath::{Interval, NodeId, TreeNode};
use num_rational::Ratio;

use crate::helpers::*;

#[test]
fn test_node_serializes_as_id_pair() {
    let steak = node(&[1, 1, 2, 1]);
    let json = serde_json::to_string(&steak).unwrap();
    assert_eq!(json, "[11,8]");

    let loaded: TreeNode = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, steak);
    assert_eq!(loaded.path(), vec![1, 1, 2, 1]);
}

#[test]
fn test_invalid_stored_id_fails_to_load() {
    let err = serde_json::from_str::<TreeNode>("[12,8]").unwrap_err();
    assert!(err.to_string().contains("not coprime"), "{err}");

    let err = serde_json::from_str::<TreeNode>("[3,5]").unwrap_err();
    assert!(err.to_string().contains("not a valid node"), "{err}");
}

#[test]
fn test_serde_error_converts() {
    let err: matpath::Error = serde_json::from_str::<TreeNode>("[12,8]").unwrap_err().into();
    assert!(err.is_serialization_error());
}

#[test]
fn test_node_id_text_form() {
    let id = node(&[1, 1, 2, 1]).id();
    assert_eq!(id.to_string(), "11/8");
    let parsed: NodeId = "11/8".parse().unwrap();
    assert_eq!(TreeNode::try_from(parsed).unwrap().to_string(), "1.1.2.1");
}

#[test]
fn test_interval_serializes_exact_bounds() {
    let iv = node(&[1, 2]).interval();
    let json = serde_json::to_string(&iv).unwrap();
    let loaded: Interval = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, iv);
    assert_eq!(iv.to_string(), "[3/2, 5/3)");
}

#[test]
fn test_inverted_interval_fails_to_load() {
    let err = serde_json::from_str::<Interval>("[[3,1],[1,1]]").unwrap_err();
    assert!(err.to_string().contains("exceeds upper bound"), "{err}");

    let err = serde_json::from_str::<Interval>(r#"{"lower":[1,0],"upper":[2,1]}"#).unwrap_err();
    assert!(err.to_string().contains("zero denominator"), "{err}");
}

#[test]
fn test_loaded_interval_bounds_are_reduced() {
    let loaded: Interval = serde_json::from_str("[[2,-4],[6,3]]").unwrap();
    assert_eq!(loaded.lower(), Ratio::new(-1, 2));
    assert_eq!(*loaded.lower().denom(), 2);
    assert_eq!(loaded.upper(), Ratio::from_integer(2));
    assert_eq!(loaded.to_string(), "[-1/2, 2)");
    assert!(loaded.contains(&Ratio::from_integer(1)));

    // Unreduced bounds compare equal to the node's own interval once loaded
    let stored: Interval = serde_json::from_str(r#"{"lower":[6,4],"upper":[10,6]}"#).unwrap();
    assert_eq!(stored, node(&[1, 2]).interval());
}

#[test]
fn test_nodes_in_collections() {
    use std::collections::HashSet;

    let stored: HashSet<TreeNode> = all_paths(3, 3).iter().map(|p| node(p)).collect();
    assert_eq!(stored.len(), 3 + 9 + 27);
    assert!(stored.contains(&TreeNode::from_id(11, 8).unwrap().parent().unwrap()));
}
