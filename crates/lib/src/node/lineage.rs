//! Iterators over the ancestor chain of a node.
//!
//! Both walks are computed from the node's matrix alone. Each call to
//! [`TreeNode::lineage`] or [`TreeNode::ancestors`] starts a fresh walk.

use std::iter::FusedIterator;

use super::TreeNode;

/// Root-to-self walk, yielding every ancestor of `target` and then `target` itself.
///
/// Each step cuts `target` relative to the deepest ancestor found so far, takes the
/// root of the remaining sub-path, and grafts it back on to reach the next level.
#[derive(Debug, Clone)]
pub struct Lineage {
    target: TreeNode,
    next: Option<TreeNode>,
}

impl Lineage {
    pub(super) fn new(target: TreeNode) -> Self {
        Self {
            target,
            next: Some(target.root()),
        }
    }
}

impl Iterator for Lineage {
    type Item = TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let ancestor = self.next.take()?;
        let target = self.target;
        self.next = target.cutting_from(&ancestor).and_then(|cutting| {
            match cutting.root().grafted_onto(&ancestor) {
                Ok(deeper) => {
                    tracing::trace!(ancestor = %ancestor.id(), next = %deeper.id(), "Lineage step");
                    Some(deeper)
                }
                Err(err) => {
                    tracing::error!(
                        target_id = %target.id(),
                        ancestor = %ancestor.id(),
                        error = %err,
                        "Lineage reconstruction failed"
                    );
                    None
                }
            }
        });
        Some(ancestor)
    }
}

impl FusedIterator for Lineage {}

/// Self-to-root walk through repeated parent steps, excluding the starting node.
#[derive(Debug, Clone)]
pub struct Ancestors {
    next: Option<TreeNode>,
}

impl Ancestors {
    pub(super) fn new(node: &TreeNode) -> Self {
        Self {
            next: node.parent(),
        }
    }
}

impl Iterator for Ancestors {
    type Item = TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}

impl FusedIterator for Ancestors {}
