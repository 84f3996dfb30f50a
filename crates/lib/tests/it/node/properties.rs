//! Property tests over randomly generated paths

use matpath::TreeNode;
use proptest::prelude::*;

fn path_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(1i64..=12, 1..=8)
}

proptest! {
    #[test]
    fn prop_path_round_trips(path in path_strategy()) {
        let n = TreeNode::from_path(&path).unwrap();
        prop_assert_eq!(n.path(), path);
    }

    #[test]
    fn prop_id_is_stable(path in path_strategy()) {
        let n = TreeNode::from_path(&path).unwrap();
        let (x, y) = n.id().as_pair();
        let decoded = TreeNode::from_id(x, y).unwrap();
        prop_assert_eq!(decoded, n);
        prop_assert_eq!(decoded.matrix(), n.matrix());
    }

    #[test]
    fn prop_parent_is_ancestor(path in prop::collection::vec(1i64..=12, 2..=8)) {
        let n = TreeNode::from_path(&path).unwrap();
        let parent = n.parent().unwrap();
        prop_assert!(n.is_child_of(&parent));
        prop_assert!(parent.is_ancestor_of(&n));
        prop_assert!(n.is_descendant_of(&parent));
        prop_assert!(!parent.is_descendant_of(&n));
        prop_assert_eq!(parent.path(), path[..path.len() - 1].to_vec());
    }

    #[test]
    fn prop_lineage_reverses_ancestors(path in path_strategy()) {
        let n = TreeNode::from_path(&path).unwrap();
        let mut lineage: Vec<TreeNode> = n.lineage().collect();
        lineage.reverse();
        let upward: Vec<TreeNode> = std::iter::once(n).chain(n.ancestors()).collect();
        prop_assert_eq!(lineage, upward);
    }

    #[test]
    fn prop_irreflexive(path in path_strategy()) {
        let n = TreeNode::from_path(&path).unwrap();
        prop_assert!(!n.is_ancestor_of(&n));
        prop_assert!(!n.is_descendant_of(&n));
    }

    #[test]
    fn prop_ancestry_matches_prefix(p in path_strategy(), q in path_strategy()) {
        let (x, y) = (TreeNode::from_path(&p).unwrap(), TreeNode::from_path(&q).unwrap());
        let prefix = p.len() < q.len() && q.starts_with(&p);
        prop_assert_eq!(x.is_ancestor_of(&y), prefix);
        if p != q && !prefix && !(q.len() < p.len() && p.starts_with(&q)) {
            prop_assert!(!x.interval().overlaps(&y.interval()));
        }
    }

    #[test]
    fn prop_coprime_pairs_decode(x in 2i64..5_000, y_seed in 1i64..5_000) {
        let y = 1 + y_seed % (x - 1);
        match TreeNode::from_id(x, y) {
            Ok(n) => {
                prop_assert_eq!(n.id(), (x, y));
                prop_assert_eq!(TreeNode::from_path(&n.path()).unwrap(), n);
            }
            Err(err) => prop_assert!(err.is_not_coprime()),
        }
    }
}
