// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation walk: delegate to the focused child, then move among siblings.

use crate::direction::Navigation;
use crate::tree::FocusTree;
use crate::types::{NodeId, NodeKind};

/// Host hooks consulted for leaves during navigation.
///
/// Leaves are opaque to the tree; a host that owns richer widgets (a text field
/// with a cursor, a slider) implements this trait to let them take part.
/// `()` implements it with the default behavior.
pub trait LeafNavigation {
    /// Called on a focused leaf before focus leaves it.
    ///
    /// Return `true` if the leaf consumed the request by moving its own internal
    /// focus (for example a text cursor); the tree then keeps focus where it is.
    fn navigate_within(&mut self, leaf: NodeId, nav: Navigation) -> bool {
        let _ = (leaf, nav);
        false
    }

    /// Called on an unfocused leaf that is about to receive focus.
    ///
    /// Flags are checked first; this is an additional veto.
    fn accepts_focus(&mut self, leaf: NodeId, nav: Navigation) -> bool {
        let _ = (leaf, nav);
        true
    }
}

impl LeafNavigation for () {}

impl FocusTree {
    /// Move focus inside `root` with the default leaf behavior.
    ///
    /// Returns `false` when focus could not be placed inside `root`; focus has
    /// then escaped and `root` no longer points at a child. That is a normal
    /// outcome the owner handles (for example by wrapping around).
    pub fn navigate(&mut self, root: NodeId, nav: Navigation) -> bool {
        self.navigate_with(root, nav, &mut ())
    }

    /// Move focus inside `root`, consulting `hooks` for leaves.
    pub fn navigate_with<H>(&mut self, root: NodeId, nav: Navigation, hooks: &mut H) -> bool
    where
        H: LeafNavigation + ?Sized,
    {
        if !self.is_alive(root) {
            return false;
        }
        let moved = self.navigate_node(root, nav, hooks);
        if !moved {
            tracing::trace!(?root, ?nav, "focus escaped root container");
        }
        moved
    }

    fn navigate_node<H>(&mut self, id: NodeId, nav: Navigation, hooks: &mut H) -> bool
    where
        H: LeafNavigation + ?Sized,
    {
        let (flags, kind) = {
            let n = self.node(id);
            (n.local.flags, n.local.kind)
        };
        if flags.requires_pointer() {
            return false;
        }
        match kind {
            NodeKind::Leaf => self.navigate_leaf(id, nav, hooks),
            NodeKind::Row => self.navigate_row(id, nav, hooks),
            NodeKind::Group => {
                let moved = self.walk_children(id, nav, hooks);
                if moved {
                    self.node_mut(id).focused = true;
                }
                moved
            }
            NodeKind::List { .. } => {
                let moved = self.walk_children(id, nav, hooks);
                if moved {
                    self.node_mut(id).focused = true;
                    if let Some(child) = self.node(id).focused_child {
                        self.scroll_into_view(id, child);
                    }
                }
                moved
            }
        }
    }

    /// A leaf toggles: an unfocused leaf takes focus, a focused one gives it up
    /// unless the host consumes the move internally.
    fn navigate_leaf<H>(&mut self, id: NodeId, nav: Navigation, hooks: &mut H) -> bool
    where
        H: LeafNavigation + ?Sized,
    {
        if self.node(id).focused {
            if hooks.navigate_within(id, nav) {
                return true;
            }
            self.set_focused(id, false);
            false
        } else if hooks.accepts_focus(id, nav) {
            self.node_mut(id).focused = true;
            true
        } else {
            false
        }
    }

    fn navigate_row<H>(&mut self, id: NodeId, nav: Navigation, hooks: &mut H) -> bool
    where
        H: LeafNavigation + ?Sized,
    {
        if !nav.tab && nav.direction.is_vertical() {
            // Vertical arrows never move inside a row: leave, or enter at the
            // remembered column.
            if self.node(id).focused {
                self.set_focused_child(id, None);
                return false;
            }
            let len = self.node(id).children.len();
            if len == 0 {
                return false;
            }
            let column = self.column_memory(id).min(len - 1);
            let target = self.node(id).children[column];
            if !self.navigate_node(target, nav, hooks) {
                return false;
            }
            self.set_focused_child(id, Some(target));
            self.node_mut(id).focused = true;
            return true;
        }

        let moved = self.walk_children(id, nav, hooks);
        if moved {
            self.node_mut(id).focused = true;
            if nav.direction.is_horizontal() {
                let n = self.node(id);
                if let Some(child) = n.focused_child
                    && let Some(column) = n.children.iter().position(|c| *c == child)
                {
                    self.remember_column(id, column);
                }
            }
        }
        moved
    }

    /// Delegate to the focused child first, then try siblings in traversal order.
    fn walk_children<H>(&mut self, id: NodeId, nav: Navigation, hooks: &mut H) -> bool
    where
        H: LeafNavigation + ?Sized,
    {
        let focused = self.node(id).focused_child;
        if let Some(child) = focused
            && self.navigate_node(child, nav, hooks)
        {
            return true;
        }

        let len = self.node(id).children.len();
        let position = focused.and_then(|f| self.node(id).children.iter().position(|c| *c == f));
        let forward = nav.is_forward();
        let mut cursor = match (position, forward) {
            (Some(i), true) => i + 1,
            (Some(i), false) => i,
            (None, true) => 0,
            (None, false) => len,
        };

        loop {
            let candidate = if forward {
                if cursor >= len {
                    break;
                }
                cursor += 1;
                self.node(id).children[cursor - 1]
            } else {
                if cursor == 0 {
                    break;
                }
                cursor -= 1;
                self.node(id).children[cursor]
            };
            if self.navigate_node(candidate, nav, hooks) {
                self.set_focused_child(id, Some(candidate));
                return true;
            }
        }

        self.set_focused_child(id, None);
        false
    }

    fn column_memory(&self, row: NodeId) -> usize {
        match self.parent_of(row).and_then(|p| self.kind(p)) {
            Some(NodeKind::List { last_column, .. }) => last_column,
            _ => 0,
        }
    }

    fn remember_column(&mut self, row: NodeId, column: usize) {
        if let Some(parent) = self.parent_of(row)
            && let NodeKind::List { last_column, .. } = &mut self.node_mut(parent).local.kind
        {
            *last_column = column;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::types::{FocusFlags, FocusNode, FocusState};
    use alloc::vec::Vec;
    use kurbo::Rect;

    const TAB: Navigation = Navigation::tab(true);
    const SHIFT_TAB: Navigation = Navigation::tab(false);
    const DOWN: Navigation = Navigation::arrow(Direction::Down);
    const UP: Navigation = Navigation::arrow(Direction::Up);
    const LEFT: Navigation = Navigation::arrow(Direction::Left);
    const RIGHT: Navigation = Navigation::arrow(Direction::Right);

    fn leaf() -> FocusNode {
        FocusNode::leaf(Rect::new(0.0, 0.0, 10.0, 10.0))
    }

    /// Check the focused-child/focused-flag invariant on every live container.
    fn assert_synced(tree: &FocusTree) {
        for id in tree.live_ids() {
            if let Some(child) = tree.focused_child(id) {
                assert!(tree.is_focused(child), "focused child {child:?} lost its flag");
                assert_eq!(tree.parent_of(child), Some(id), "focused child is not a child");
            }
            for &child in tree.children_of(id) {
                if tree.is_focused(child) {
                    assert_eq!(
                        tree.focused_child(id),
                        Some(child),
                        "focused {child:?} is not referenced by its parent"
                    );
                }
            }
        }
    }

    /// Screen containing a two-column option list with `rows` rows.
    fn option_grid(rows: usize) -> (FocusTree, NodeId, NodeId, Vec<[NodeId; 2]>) {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, FocusNode::group(Rect::new(0.0, 0.0, 400.0, 400.0)));
        let list = tree.insert(Some(root), FocusNode::list(Rect::new(0.0, 0.0, 400.0, 400.0)));
        let mut cells = Vec::new();
        for r in 0..rows {
            #[allow(clippy::cast_precision_loss, reason = "small test indices")]
            let y = r as f64 * 24.0;
            let row = tree.insert(Some(list), FocusNode::row(Rect::new(0.0, y, 400.0, y + 24.0)));
            let a = tree.insert(Some(row), FocusNode::leaf(Rect::new(0.0, y, 150.0, y + 20.0)));
            let b = tree.insert(Some(row), FocusNode::leaf(Rect::new(160.0, y, 310.0, y + 20.0)));
            cells.push([a, b]);
        }
        (tree, root, list, cells)
    }

    #[test]
    fn forward_tab_through_three_buttons() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, FocusNode::group(Rect::ZERO));
        let a = tree.insert(Some(root), leaf());
        let b = tree.insert(Some(root), leaf());
        let c = tree.insert(Some(root), leaf());

        assert!(tree.navigate(root, TAB));
        assert_eq!(tree.focused_leaf(root), Some(a));
        assert!(tree.navigate(root, TAB));
        assert_eq!(tree.focused_leaf(root), Some(b));
        assert!(!tree.is_focused(a));
        assert!(tree.navigate(root, TAB));
        assert_eq!(tree.focused_leaf(root), Some(c));

        assert!(!tree.navigate(root, TAB));
        assert_eq!(tree.focused_child(root), None);
        assert!(!tree.is_focused(c));
        assert_synced(&tree);
    }

    #[test]
    fn backward_tab_starts_at_the_end_and_enters_containers_from_the_end() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, FocusNode::group(Rect::ZERO));
        let panel = tree.insert(Some(root), FocusNode::group(Rect::ZERO));
        let a = tree.insert(Some(panel), leaf());
        let b = tree.insert(Some(panel), leaf());
        let c = tree.insert(Some(root), leaf());

        assert!(tree.navigate(root, SHIFT_TAB));
        assert_eq!(tree.focused_leaf(root), Some(c));
        assert!(tree.navigate(root, SHIFT_TAB));
        assert_eq!(tree.focus_path(root).as_slice(), &[root, panel, b]);
        assert!(tree.navigate(root, SHIFT_TAB));
        assert_eq!(tree.focus_path(root).as_slice(), &[root, panel, a]);
        assert!(!tree.navigate(root, SHIFT_TAB));
        assert!(!tree.is_focused(panel));
        assert_synced(&tree);
    }

    #[test]
    fn nested_group_resolves_inside_before_moving_on() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, FocusNode::group(Rect::ZERO));
        let panel = tree.insert(Some(root), FocusNode::group(Rect::ZERO));
        let a = tree.insert(Some(panel), leaf());
        let b = tree.insert(Some(panel), leaf());
        let c = tree.insert(Some(root), leaf());

        let mut seen = Vec::new();
        while tree.navigate(root, TAB) {
            seen.push(tree.focused_leaf(root));
            assert_synced(&tree);
        }
        assert_eq!(seen, [Some(a), Some(b), Some(c)]);
    }

    #[test]
    fn horizontal_memory_restores_column() {
        let (mut tree, root, list, cells) = option_grid(3);

        assert!(tree.navigate(root, TAB));
        assert_eq!(tree.focused_leaf(root), Some(cells[0][0]));

        assert!(tree.navigate(root, RIGHT));
        assert_eq!(tree.focused_leaf(root), Some(cells[0][1]));
        assert!(matches!(
            tree.kind(list),
            Some(NodeKind::List { last_column: 1, .. })
        ));

        assert!(tree.navigate(root, DOWN));
        assert_eq!(tree.focused_leaf(root), Some(cells[1][1]));
        assert!(tree.navigate(root, DOWN));
        assert_eq!(tree.focused_leaf(root), Some(cells[2][1]));

        assert!(tree.navigate(root, LEFT));
        assert!(tree.navigate(root, UP));
        assert_eq!(tree.focused_leaf(root), Some(cells[1][0]));
        assert_synced(&tree);
    }

    #[test]
    fn tab_inside_a_row_ignores_column_memory() {
        let (mut tree, root, _list, cells) = option_grid(2);

        assert!(tree.navigate(root, TAB));
        assert!(tree.navigate(root, TAB));
        assert_eq!(tree.focused_leaf(root), Some(cells[0][1]));
        assert!(tree.navigate(root, TAB));
        // Sequential order enters the next row at its first column.
        assert_eq!(tree.focused_leaf(root), Some(cells[1][0]));
    }

    #[test]
    fn arrow_past_the_row_edge_escapes_the_row() {
        let (mut tree, root, _list, cells) = option_grid(2);
        assert!(tree.navigate(root, TAB));
        assert!(tree.navigate(root, RIGHT));
        // No column to the right: the row declines, the list moves on to row 1.
        assert!(tree.navigate(root, RIGHT));
        assert_eq!(tree.focused_leaf(root), Some(cells[1][0]));
    }

    #[test]
    fn memory_is_clamped_to_short_rows() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, FocusNode::group(Rect::ZERO));
        let list = tree.insert(Some(root), FocusNode::list(Rect::ZERO));
        let row0 = tree.insert(Some(list), FocusNode::row(Rect::ZERO));
        let a = tree.insert(Some(row0), leaf());
        let b = tree.insert(Some(row0), leaf());
        let row1 = tree.insert(Some(list), FocusNode::row(Rect::ZERO));
        let single = tree.insert(Some(row1), leaf());

        tree.focus(a);
        assert!(tree.navigate(root, RIGHT));
        assert_eq!(tree.focused_leaf(root), Some(b));
        assert!(tree.navigate(root, DOWN));
        assert_eq!(tree.focused_leaf(root), Some(single));
        // The remembered column survives the short row.
        assert!(tree.navigate(root, UP));
        assert_eq!(tree.focused_leaf(root), Some(b));
    }

    #[test]
    fn pointer_only_container_is_locked() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, FocusNode::group(Rect::ZERO));
        let a = tree.insert(Some(root), leaf());
        let _b = tree.insert(Some(root), leaf());
        tree.focus(a);
        tree.set_flags(root, FocusFlags::default() | FocusFlags::POINTER_ONLY);

        for nav in [TAB, SHIFT_TAB, UP, DOWN, LEFT, RIGHT] {
            assert!(!tree.navigate(root, nav));
            assert_eq!(tree.focus_state(root), FocusState::FocusedChild(0));
            assert!(tree.is_focused(a));
        }
    }

    #[test]
    fn disabled_and_hidden_leaves_are_skipped() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, FocusNode::group(Rect::ZERO));
        let a = tree.insert(Some(root), leaf().with_flags(FocusFlags::VISIBLE));
        let b = tree.insert(Some(root), leaf().with_flags(FocusFlags::ENABLED));
        let c = tree.insert(Some(root), leaf());

        assert!(tree.navigate(root, TAB));
        assert_eq!(tree.focused_leaf(root), Some(c));
        assert!(!tree.is_focused(a));
        assert!(!tree.is_focused(b));
    }

    #[test]
    fn navigation_terminates_on_large_unfocusable_sets() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, FocusNode::group(Rect::ZERO));
        for _ in 0..1_000 {
            tree.insert(Some(root), leaf().with_flags(FocusFlags::VISIBLE));
        }
        assert!(!tree.navigate(root, TAB));
        assert!(!tree.navigate(root, SHIFT_TAB));
        assert_eq!(tree.focus_state(root), FocusState::Unfocused);
    }

    struct Cursor {
        field: NodeId,
        pos: usize,
        len: usize,
    }

    impl LeafNavigation for Cursor {
        fn navigate_within(&mut self, leaf: NodeId, nav: Navigation) -> bool {
            if leaf != self.field || nav.tab || nav.direction.is_vertical() {
                return false;
            }
            match nav.direction {
                Direction::Left if self.pos > 0 => self.pos -= 1,
                Direction::Right if self.pos < self.len => self.pos += 1,
                _ => return false,
            }
            true
        }
    }

    #[test]
    fn leaf_hook_consumes_internal_moves() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, FocusNode::group(Rect::ZERO));
        let field = tree.insert(Some(root), leaf());
        let next = tree.insert(Some(root), leaf());
        let mut cursor = Cursor { field, pos: 0, len: 2 };

        assert!(tree.navigate_with(root, TAB, &mut cursor));
        assert!(tree.navigate_with(root, RIGHT, &mut cursor));
        assert!(tree.navigate_with(root, RIGHT, &mut cursor));
        assert_eq!(cursor.pos, 2);
        assert_eq!(tree.focused_leaf(root), Some(field));

        assert!(tree.navigate_with(root, RIGHT, &mut cursor));
        assert_eq!(tree.focused_leaf(root), Some(next));
    }

    struct Veto(NodeId);

    impl LeafNavigation for Veto {
        fn accepts_focus(&mut self, leaf: NodeId, _nav: Navigation) -> bool {
            leaf != self.0
        }
    }

    #[test]
    fn leaf_hook_can_refuse_incoming_focus() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, FocusNode::group(Rect::ZERO));
        let a = tree.insert(Some(root), leaf());
        let b = tree.insert(Some(root), leaf());
        assert!(tree.navigate_with(root, TAB, &mut Veto(a)));
        assert_eq!(tree.focused_leaf(root), Some(b));
    }

    #[test]
    fn list_scrolls_focused_row_into_view() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, FocusNode::group(Rect::new(0.0, 0.0, 100.0, 100.0)));
        let list = tree.insert(Some(root), FocusNode::list(Rect::new(0.0, 0.0, 100.0, 40.0)));
        for i in 0..4 {
            let y = f64::from(i) * 20.0;
            tree.insert(Some(list), FocusNode::leaf(Rect::new(0.0, y, 100.0, y + 20.0)));
        }
        for _ in 0..4 {
            assert!(tree.navigate(root, DOWN));
        }
        assert_eq!(tree.scroll_offset(list), 40.0);
        for _ in 0..3 {
            assert!(tree.navigate(root, UP));
        }
        assert_eq!(tree.scroll_offset(list), 0.0);
    }

    #[test]
    fn external_set_focused_moves_the_parent_reference() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, FocusNode::group(Rect::ZERO));
        let a = tree.insert(Some(root), leaf());
        let b = tree.insert(Some(root), leaf());

        tree.focus(a);
        tree.set_focused(b, true);
        assert_synced(&tree);
        assert_eq!(tree.focused_child(root), Some(b));
        assert!(!tree.is_focused(a));

        tree.set_focused(b, false);
        assert_synced(&tree);
        assert_eq!(tree.focused_child(root), None);

        // Navigation continues from the externally focused node.
        tree.set_focused(a, true);
        assert!(tree.navigate(root, TAB));
        assert_eq!(tree.focused_child(root), Some(b));
        assert_synced(&tree);
    }

    #[test]
    fn focus_stays_synced_under_mixed_input() {
        let (mut tree, root, _list, cells) = option_grid(4);
        let extra = tree.insert(Some(root), leaf());
        let navs = [TAB, SHIFT_TAB, UP, DOWN, LEFT, RIGHT];
        let mut clicks: Vec<NodeId> = cells.iter().flatten().copied().collect();
        clicks.push(extra);

        // Small LCG so the sequence is deterministic.
        let mut state: u32 = 0x2545_f491;
        for _ in 0..500 {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let pick = (state >> 16) as usize;
            if pick % 7 == 0 {
                tree.focus(clicks[pick % clicks.len()]);
            } else if pick % 11 == 0 {
                tree.set_focused(clicks[pick % clicks.len()], pick % 2 == 0);
            } else {
                tree.navigate(root, navs[pick % navs.len()]);
            }
            assert_synced(&tree);
        }
    }
}
