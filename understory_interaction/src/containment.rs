// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region containment queries.
//!
//! Hover and focus handlers ignore a leave or blur whose related target is still inside
//! the reference or floating element (the pointer or focus is moving between them).
//! They ask a [`Containment`] implementation to decide.
//!
//! [`SubtreeContainment`] answers from the two region roots and a [`ParentLookup`]
//! that walks ancestry, so any node tree with parent links can be plugged in.

use crate::types::Region;

/// Look up the parent of a node.
///
/// Consulted by [`SubtreeContainment`] to decide whether a node lies under a region root.
pub trait ParentLookup<K> {
    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

/// A parent provider for flat hierarchies: every node is a root.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoParent;

impl<K> ParentLookup<K> for NoParent {
    #[inline]
    fn parent_of(&self, _node: &K) -> Option<K> {
        None
    }
}

/// Decide whether a node is inside a region.
pub trait Containment<K> {
    /// Returns `true` if `node` is the region's element or one of its descendants.
    fn contains(&self, region: Region, node: &K) -> bool;

    /// Returns `true` if `node` is inside either region.
    fn contains_any(&self, node: &K) -> bool {
        self.contains(Region::Reference, node) || self.contains(Region::Floating, node)
    }
}

/// Containment that never matches; every leave and blur counts.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoContainment;

impl<K> Containment<K> for NoContainment {
    #[inline]
    fn contains(&self, _region: Region, _node: &K) -> bool {
        false
    }
}

/// Containment over a parent-linked tree.
///
/// A node is inside a region when walking its ancestry reaches the region's root.
/// Missing roots (element not mounted) contain nothing.
#[derive(Clone, Debug)]
pub struct SubtreeContainment<'a, K, P> {
    reference: Option<K>,
    floating: Option<K>,
    parents: &'a P,
}

impl<'a, K: Copy + Eq, P: ParentLookup<K>> SubtreeContainment<'a, K, P> {
    /// Create a containment query from the two region roots.
    pub fn new(reference: Option<K>, floating: Option<K>, parents: &'a P) -> Self {
        Self {
            reference,
            floating,
            parents,
        }
    }

    fn is_descendant(&self, root: K, node: K) -> bool {
        let mut cur = node;
        // Caller ensures acyclic ancestry.
        loop {
            if cur == root {
                return true;
            }
            match self.parents.parent_of(&cur) {
                Some(p) => cur = p,
                None => return false,
            }
        }
    }
}

impl<K: Copy + Eq, P: ParentLookup<K>> Containment<K> for SubtreeContainment<'_, K, P> {
    fn contains(&self, region: Region, node: &K) -> bool {
        let root = match region {
            Region::Reference => self.reference,
            Region::Floating => self.floating,
        };
        root.is_some_and(|r| self.is_descendant(r, *node))
    }
}
