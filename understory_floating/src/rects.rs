// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element rect sources for the synchronous positioning path.

use alloc::collections::BTreeMap;
use kurbo::Rect;

/// Resolves an element handle to its current bounding rect.
///
/// Returning `None` means the element is not laid out (detached, hidden, or unknown);
/// requests that need it are skipped.
pub trait ElementRects<K> {
    /// Bounding rect of `node`, in the same space as the boundary.
    fn rect_of(&self, node: &K) -> Option<Rect>;
}

impl<K: Ord> ElementRects<K> for BTreeMap<K, Rect> {
    fn rect_of(&self, node: &K) -> Option<Rect> {
        self.get(node).copied()
    }
}

/// Adapts a lookup closure into an [`ElementRects`] source.
#[derive(Clone, Copy, Debug)]
pub struct RectsFn<F>(pub F);

impl<K, F> ElementRects<K> for RectsFn<F>
where
    F: Fn(&K) -> Option<Rect>,
{
    fn rect_of(&self, node: &K) -> Option<Rect> {
        (self.0)(node)
    }
}
