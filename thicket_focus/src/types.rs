// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the focus tree: node identifiers, flags, kinds, and focus states.

use kurbo::Rect;

/// Identifier for a node in the focus tree (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Node flags controlling whether directional input may place focus on a node.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FocusFlags: u8 {
        /// Node is active and reacts to input.
        const ENABLED      = 0b0000_0001;
        /// Node is drawn.
        const VISIBLE      = 0b0000_0010;
        /// Node can only be reached with a pointer (mid-drag, free-form canvas, decoration).
        const POINTER_ONLY = 0b0000_0100;
    }
}

impl Default for FocusFlags {
    fn default() -> Self {
        Self::ENABLED | Self::VISIBLE
    }
}

impl FocusFlags {
    /// Returns `true` when directional navigation must skip this node.
    ///
    /// A node requires a pointer when it is explicitly pointer-only, disabled, or hidden.
    pub fn requires_pointer(self) -> bool {
        self.contains(Self::POINTER_ONLY) || !self.contains(Self::ENABLED | Self::VISIBLE)
    }
}

/// Structural role of a node, which selects its navigation rules.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeKind {
    /// A focusable widget without children.
    Leaf,
    /// A plain container: walks its children in order.
    Group,
    /// A vertically organized, scrollable list of rows.
    List {
        /// Column of the most recent horizontal move inside one of this list's rows.
        last_column: usize,
        /// Vertical scroll offset applied to every child.
        scroll_offset: f64,
    },
    /// A horizontally organized list entry.
    ///
    /// Vertical arrow moves are handed back to the enclosing list, and entering the row
    /// vertically restores the column remembered by the parent [`NodeKind::List`].
    Row,
}

impl NodeKind {
    /// Returns `true` for every kind that can own children.
    pub fn is_container(self) -> bool {
        !matches!(self, Self::Leaf)
    }
}

/// Local data for a node.
#[derive(Clone, Debug)]
pub struct FocusNode {
    /// Bounds in the parent's content space (before list scrolling).
    pub rect: Rect,
    /// Navigation flags.
    pub flags: FocusFlags,
    /// Structural role.
    pub kind: NodeKind,
}

impl Default for FocusNode {
    fn default() -> Self {
        Self::leaf(Rect::ZERO)
    }
}

impl FocusNode {
    /// A focusable leaf.
    pub fn leaf(rect: Rect) -> Self {
        Self {
            rect,
            flags: FocusFlags::default(),
            kind: NodeKind::Leaf,
        }
    }

    /// A plain container.
    pub fn group(rect: Rect) -> Self {
        Self {
            kind: NodeKind::Group,
            ..Self::leaf(rect)
        }
    }

    /// A scrollable list whose rows share column memory.
    pub fn list(rect: Rect) -> Self {
        Self {
            kind: NodeKind::List {
                last_column: 0,
                scroll_offset: 0.0,
            },
            ..Self::leaf(rect)
        }
    }

    /// A horizontally organized list entry.
    pub fn row(rect: Rect) -> Self {
        Self {
            kind: NodeKind::Row,
            ..Self::leaf(rect)
        }
    }

    /// Replace the flags.
    pub fn with_flags(mut self, flags: FocusFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// Focus state of a single node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FocusState {
    /// Neither the node nor any descendant holds focus.
    #[default]
    Unfocused,
    /// The node itself holds focus and no child does.
    FocusedSelf,
    /// The child at this index holds focus.
    FocusedChild(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_pointer_covers_hidden_and_disabled() {
        assert!(!FocusFlags::default().requires_pointer());
        assert!(FocusFlags::ENABLED.requires_pointer());
        assert!(FocusFlags::VISIBLE.requires_pointer());
        assert!((FocusFlags::default() | FocusFlags::POINTER_ONLY).requires_pointer());
    }

    #[test]
    fn constructors_pick_kind() {
        assert_eq!(FocusNode::leaf(Rect::ZERO).kind, NodeKind::Leaf);
        assert_eq!(FocusNode::group(Rect::ZERO).kind, NodeKind::Group);
        assert_eq!(FocusNode::row(Rect::ZERO).kind, NodeKind::Row);
        assert!(matches!(
            FocusNode::list(Rect::ZERO).kind,
            NodeKind::List { last_column: 0, .. }
        ));
        assert!(!NodeKind::Leaf.is_container());
        assert!(NodeKind::Row.is_container());
    }
}
