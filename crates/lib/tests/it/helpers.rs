use matpath::TreeNode;

/// Build a node from a path that is known to be valid
pub fn node(path: &[i64]) -> TreeNode {
    TreeNode::from_path(path).expect("Path should be valid")
}

/// Every path with depth `1..=max_depth` and indices `1..=max_index`
pub fn all_paths(max_depth: usize, max_index: i64) -> Vec<Vec<i64>> {
    let mut paths: Vec<Vec<i64>> = Vec::new();
    let mut frontier: Vec<Vec<i64>> = vec![Vec::new()];
    for _ in 0..max_depth {
        let mut next = Vec::new();
        for prefix in &frontier {
            for n in 1..=max_index {
                let mut path = prefix.clone();
                path.push(n);
                next.push(path);
            }
        }
        paths.extend(next.iter().cloned());
        frontier = next;
    }
    paths
}

/// True if `prefix` is a proper prefix of `path`
pub fn is_proper_prefix(prefix: &[i64], path: &[i64]) -> bool {
    prefix.len() < path.len() && path.starts_with(prefix)
}
