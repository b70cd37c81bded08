// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus tree storage: structure, focus mutators, geometry, and queries.

use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;

use crate::types::{FocusFlags, FocusNode, FocusState, NodeId, NodeKind};

/// Root-to-leaf chain of focused nodes.
pub type FocusPath = SmallVec<[NodeId; 8]>;

/// Arena of focusable elements and containers.
///
/// Every container tracks at most one focused child. The pair "parent points at
/// child" and "child is focused" is only ever changed through
/// [`FocusTree::set_focused_child`], so the two facts cannot drift apart.
///
/// ## Example
///
/// ```rust
/// use kurbo::Rect;
/// use thicket_focus::{FocusNode, FocusState, FocusTree};
///
/// let mut tree = FocusTree::new();
/// let screen = tree.insert(None, FocusNode::group(Rect::new(0.0, 0.0, 320.0, 240.0)));
/// let ok = tree.insert(Some(screen), FocusNode::leaf(Rect::new(10.0, 10.0, 60.0, 30.0)));
///
/// // A pointer click focuses the whole chain down to the button.
/// tree.focus(ok);
/// assert_eq!(tree.focus_state(screen), FocusState::FocusedChild(0));
/// assert_eq!(tree.focused_leaf(screen), Some(ok));
/// ```
pub struct FocusTree {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl core::fmt::Debug for FocusTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let focused = self
            .nodes
            .iter()
            .filter(|n| n.as_ref().is_some_and(|n| n.focused))
            .count();
        f.debug_struct("FocusTree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("nodes_focused", &focused)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl Default for FocusTree {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    generation: u32,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) local: FocusNode,
    pub(crate) focused: bool,
    pub(crate) focused_child: Option<NodeId>,
}

impl Node {
    fn new(generation: u32, local: FocusNode) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            local,
            focused: false,
            focused_child: None,
        }
    }
}

impl FocusTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert a new node as the last child of `parent` (or as a root if `None`).
    ///
    /// Child order defines traversal order. Inserting under a [`NodeKind::Leaf`]
    /// is allowed but the child is never reached by navigation.
    pub fn insert(&mut self, parent: Option<NodeId>, node: FocusNode) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, node));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, node)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        if let Some(p) = parent
            && self.is_alive(p)
        {
            self.node_mut(p).children.push(id);
            self.node_mut(id).parent = Some(p);
        }
        id
    }

    /// Remove a node and its subtree.
    ///
    /// If the node was its parent's focused child, the parent drops the reference.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            if self.node(parent).focused_child == Some(id) {
                self.set_focused_child(parent, None);
            }
            let p = self.node_mut(parent);
            p.children.retain(|c| *c != id);
        }
        let children = self.node(id).children.clone();
        for child in children {
            self.remove(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Returns `true` if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// Returns the parent of a node if live, or `None` for roots or stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Get the children of a node in traversal order, or an empty slice if stale.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id).map_or(&[], |n| &n.children)
    }

    /// Returns the kind of a live node.
    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.node_opt(id).map(|n| n.local.kind)
    }

    /// Returns the flags of a live node.
    pub fn flags(&self, id: NodeId) -> Option<FocusFlags> {
        self.node_opt(id).map(|n| n.local.flags)
    }

    /// Update node flags. Focus is left untouched; the next navigation moves past
    /// a node that now requires a pointer.
    pub fn set_flags(&mut self, id: NodeId, flags: FocusFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.flags = flags;
        }
    }

    /// Returns the rect of a live node in its parent's content space.
    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.node_opt(id).map(|n| n.local.rect)
    }

    /// Update the rect of a live node.
    pub fn set_rect(&mut self, id: NodeId, rect: Rect) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.rect = rect;
        }
    }

    /// Returns the on-screen rect of a live node: its rect shifted by the scroll
    /// offsets of every enclosing list.
    pub fn world_rect(&self, id: NodeId) -> Option<Rect> {
        let rect = self.rect(id)?;
        Some(rect - Vec2::new(0.0, self.scroll_above(id)))
    }

    fn scroll_above(&self, id: NodeId) -> f64 {
        let mut total = 0.0;
        let mut cur = self.parent_of(id);
        while let Some(p) = cur {
            if let NodeKind::List { scroll_offset, .. } = self.node(p).local.kind {
                total += scroll_offset;
            }
            cur = self.node(p).parent;
        }
        total
    }

    // --- focus state -------------------------------------------------------

    /// Returns `true` if the node's own focused flag is set.
    pub fn is_focused(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some_and(|n| n.focused)
    }

    /// Returns the focused child of a container.
    pub fn focused_child(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.focused_child)
    }

    /// Returns the focus state of a node.
    pub fn focus_state(&self, id: NodeId) -> FocusState {
        let Some(n) = self.node_opt(id) else {
            return FocusState::Unfocused;
        };
        if let Some(child) = n.focused_child
            && let Some(idx) = n.children.iter().position(|c| *c == child)
        {
            FocusState::FocusedChild(idx)
        } else if n.focused {
            FocusState::FocusedSelf
        } else {
            FocusState::Unfocused
        }
    }

    /// Set or clear a node's focused flag, keeping its parent in sync.
    ///
    /// Focusing a node makes it its parent's focused child, which unfocuses the
    /// previous sibling chain. Clearing the flag drops the parent's reference and,
    /// on a container, its focused chain.
    pub fn set_focused(&mut self, id: NodeId, focused: bool) {
        if !self.is_alive(id) {
            return;
        }
        let parent = self.parent_of(id);
        if focused {
            match parent {
                Some(parent) => self.set_focused_child(parent, Some(id)),
                None => self.node_mut(id).focused = true,
            }
            return;
        }
        if let Some(parent) = parent
            && self.node(parent).focused_child == Some(id)
        {
            // Re-enters here with the reference already gone.
            self.set_focused_child(parent, None);
            return;
        }
        self.node_mut(id).focused = false;
        self.set_focused_child(id, None);
    }

    /// Point a container at a new focused child (or none).
    ///
    /// The previous focused child, if any, loses focus together with its
    /// subtree; the new child gains focus. `child` must be a direct child of
    /// `container`.
    pub fn set_focused_child(&mut self, container: NodeId, child: Option<NodeId>) {
        if !self.is_alive(container) {
            return;
        }
        if let Some(c) = child {
            let valid = self.parent_of(c) == Some(container);
            debug_assert!(valid, "focused child must be a direct child of its container");
            if !valid {
                return;
            }
        }
        let old = self.node(container).focused_child;
        if old != child {
            self.node_mut(container).focused_child = child;
            if let Some(o) = old {
                self.set_focused(o, false);
            }
        }
        if let Some(c) = child {
            self.node_mut(c).focused = true;
        }
    }

    /// Focus a node as a pointer click would: every ancestor points at the
    /// next node down the chain, and sibling chains lose focus.
    pub fn focus(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        self.node_mut(id).focused = true;
        let mut cur = id;
        while let Some(parent) = self.parent_of(cur) {
            self.set_focused_child(parent, Some(cur));
            self.node_mut(parent).focused = true;
            cur = parent;
        }
    }

    /// Drop all focus below and including `root`.
    pub fn clear_focus(&mut self, root: NodeId) {
        self.set_focused(root, false);
    }

    /// Returns the chain of focused nodes starting at `root`.
    ///
    /// The path is empty when `root` holds no focus.
    pub fn focus_path(&self, root: NodeId) -> FocusPath {
        let mut path = FocusPath::new();
        let Some(n) = self.node_opt(root) else {
            return path;
        };
        if !n.focused && n.focused_child.is_none() {
            return path;
        }
        path.push(root);
        let mut cur = n.focused_child;
        while let Some(c) = cur {
            path.push(c);
            cur = self.node(c).focused_child;
        }
        path
    }

    /// Returns the deepest focused node below `root`, if any.
    pub fn focused_leaf(&self, root: NodeId) -> Option<NodeId> {
        self.focus_path(root).last().copied()
    }

    // --- scrolling and hit testing -----------------------------------------

    /// Returns the scroll offset of a list, or `0.0` for other kinds.
    pub fn scroll_offset(&self, id: NodeId) -> f64 {
        match self.kind(id) {
            Some(NodeKind::List { scroll_offset, .. }) => scroll_offset,
            _ => 0.0,
        }
    }

    /// Returns how far a list can scroll: content extent minus viewport height.
    pub fn max_scroll(&self, list: NodeId) -> f64 {
        let Some(n) = self.node_opt(list) else {
            return 0.0;
        };
        let bottom = n
            .children
            .iter()
            .map(|c| self.node(*c).local.rect.y1)
            .fold(n.local.rect.y0, f64::max);
        (bottom - n.local.rect.y1).max(0.0)
    }

    /// Set a list's scroll offset, clamped to `0..=max_scroll`.
    pub fn set_scroll_offset(&mut self, list: NodeId, offset: f64) {
        let max = self.max_scroll(list);
        if let Some(n) = self.node_opt_mut(list)
            && let NodeKind::List { scroll_offset, .. } = &mut n.local.kind
        {
            *scroll_offset = offset.clamp(0.0, max);
        }
    }

    /// Scroll `list` by the minimum amount that brings `child` fully into view.
    pub fn scroll_into_view(&mut self, list: NodeId, child: NodeId) {
        let (Some(viewport), Some(target)) = (self.rect(list), self.rect(child)) else {
            return;
        };
        let current = self.scroll_offset(list);
        let top = viewport.y0 + current;
        let bottom = viewport.y1 + current;
        let offset = if target.y0 < top {
            target.y0 - viewport.y0
        } else if target.y1 > bottom {
            target.y1 - viewport.y1
        } else {
            return;
        };
        self.set_scroll_offset(list, offset);
    }

    /// Returns the deepest visible node under `point`, preferring later siblings.
    ///
    /// Children of a list are only hit inside the list's own rect.
    pub fn hit_test(&self, root: NodeId, point: Point) -> Option<NodeId> {
        if !self.is_alive(root) {
            return None;
        }
        self.hit_recursive(root, point, self.scroll_above(root))
    }

    fn hit_recursive(&self, id: NodeId, point: Point, scroll: f64) -> Option<NodeId> {
        let n = self.node(id);
        if !n.local.flags.contains(FocusFlags::VISIBLE) {
            return None;
        }
        let rect = n.local.rect - Vec2::new(0.0, scroll);
        if !rect.contains(point) {
            return None;
        }
        let inner = match n.local.kind {
            NodeKind::List { scroll_offset, .. } => scroll + scroll_offset,
            _ => scroll,
        };
        n.children
            .iter()
            .rev()
            .find_map(|c| self.hit_recursive(*c, point, inner))
            .or(Some(id))
    }

    // --- internals ---------------------------------------------------------

    /// Access a node; panics if `id` is stale.
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    /// Access a node mutably; panics if `id` is stale.
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    /// Every live id, for invariant checks.
    #[cfg(test)]
    pub(crate) fn live_ids(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "NodeId uses 32-bit indices by design."
                )]
                n.as_ref().map(|n| NodeId::new(i as u32, n.generation))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_at(y: f64) -> FocusNode {
        FocusNode::leaf(Rect::new(0.0, y, 100.0, y + 20.0))
    }

    #[test]
    fn liveness_insert_remove_reuse() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, FocusNode::group(Rect::ZERO));
        let a = tree.insert(Some(root), leaf_at(0.0));
        assert!(tree.is_alive(a));

        tree.remove(a);
        assert!(!tree.is_alive(a));
        assert!(tree.children_of(root).is_empty());

        let b = tree.insert(Some(root), leaf_at(0.0));
        assert!(tree.is_alive(b));
        assert!(!tree.is_alive(a));
        if a.0 == b.0 {
            assert!(b.1 > a.1, "generation must increase on reuse");
        }
    }

    #[test]
    fn pointer_focus_moves_chain() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, FocusNode::group(Rect::ZERO));
        let panel = tree.insert(Some(root), FocusNode::group(Rect::ZERO));
        let a = tree.insert(Some(panel), leaf_at(0.0));
        let b = tree.insert(Some(root), leaf_at(40.0));

        tree.focus(a);
        assert_eq!(tree.focus_path(root).as_slice(), &[root, panel, a]);
        assert_eq!(tree.focus_state(panel), FocusState::FocusedChild(0));

        tree.focus(b);
        assert_eq!(tree.focus_path(root).as_slice(), &[root, b]);
        assert!(!tree.is_focused(panel));
        assert!(!tree.is_focused(a));
        assert_eq!(tree.focus_state(panel), FocusState::Unfocused);
    }

    #[test]
    fn clearing_a_container_clears_its_chain() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, FocusNode::group(Rect::ZERO));
        let panel = tree.insert(Some(root), FocusNode::group(Rect::ZERO));
        let a = tree.insert(Some(panel), leaf_at(0.0));
        tree.focus(a);

        tree.clear_focus(root);
        assert!(tree.focus_path(root).is_empty());
        assert!(!tree.is_focused(a));
        assert_eq!(tree.focused_child(panel), None);
    }

    #[test]
    fn removing_focused_child_drops_reference() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, FocusNode::group(Rect::ZERO));
        let a = tree.insert(Some(root), leaf_at(0.0));
        tree.focus(a);
        tree.remove(a);
        assert_eq!(tree.focused_child(root), None);
        assert_eq!(tree.focus_state(root), FocusState::FocusedSelf);
    }

    #[test]
    fn scroll_into_view_and_clamp() {
        let mut tree = FocusTree::new();
        let list = tree.insert(None, FocusNode::list(Rect::new(0.0, 0.0, 100.0, 50.0)));
        let rows: Vec<NodeId> = (0..5)
            .map(|i| tree.insert(Some(list), leaf_at(f64::from(i) * 20.0)))
            .collect();
        assert_eq!(tree.max_scroll(list), 50.0);

        tree.scroll_into_view(list, rows[3]);
        assert_eq!(tree.scroll_offset(list), 30.0);
        assert_eq!(
            tree.world_rect(rows[3]),
            Some(Rect::new(0.0, 30.0, 100.0, 50.0))
        );

        tree.scroll_into_view(list, rows[0]);
        assert_eq!(tree.scroll_offset(list), 0.0);

        tree.set_scroll_offset(list, 1_000.0);
        assert_eq!(tree.scroll_offset(list), 50.0);
    }

    #[test]
    fn hit_test_honors_scroll_and_visibility() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, FocusNode::group(Rect::new(0.0, 0.0, 200.0, 200.0)));
        let list = tree.insert(Some(root), FocusNode::list(Rect::new(0.0, 0.0, 100.0, 50.0)));
        let rows: Vec<NodeId> = (0..5)
            .map(|i| tree.insert(Some(list), leaf_at(f64::from(i) * 20.0)))
            .collect();

        assert_eq!(tree.hit_test(root, Point::new(10.0, 25.0)), Some(rows[1]));
        tree.set_scroll_offset(list, 40.0);
        assert_eq!(tree.hit_test(root, Point::new(10.0, 25.0)), Some(rows[3]));
        // Content scrolled below the list's viewport is not hit.
        assert_eq!(tree.hit_test(root, Point::new(10.0, 80.0)), Some(root));

        tree.set_flags(rows[3], FocusFlags::ENABLED);
        assert_eq!(tree.hit_test(root, Point::new(10.0, 25.0)), Some(list));
    }

    #[test]
    fn stale_ids_are_inert() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, FocusNode::group(Rect::ZERO));
        let a = tree.insert(Some(root), leaf_at(0.0));
        tree.remove(a);
        tree.focus(a);
        tree.set_focused(a, true);
        assert_eq!(tree.parent_of(a), None);
        assert_eq!(tree.kind(a), None);
        assert_eq!(tree.focus_state(a), FocusState::Unfocused);
        assert!(tree.focus_path(root).is_empty());
    }
}
