// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Focus: keyboard and controller focus for nested UI containers.
//!
//! This crate models focus as a tree of elements and containers kept in a
//! [`FocusTree`] arena. Each container remembers at most one focused child, and
//! a [`Navigation`] request walks the tree to find the next element to focus:
//!
//! 1. **Delegate first.** If a container has a focused child, the request is
//!    handed to that child. A nested container that resolves the move keeps
//!    focus inside its subtree; a focused leaf may consume the move through
//!    [`LeafNavigation::navigate_within`].
//! 2. **Move among siblings.** Otherwise the container walks its children in
//!    traversal order (forward for Down/Right, backward for Up/Left) starting
//!    next to the focused child, and focuses the first one that accepts focus.
//! 3. **Escape.** If nothing accepts, the container drops its focused child and
//!    reports `false`, so the enclosing container can continue the walk.
//!
//! Failure is never an error: `false` only means "focus could not be placed
//! here".
//!
//! ## Minimal example
//!
//! Tab through three buttons:
//!
//! ```rust
//! use kurbo::Rect;
//! use thicket_focus::{FocusNode, FocusTree, Navigation};
//!
//! let mut tree = FocusTree::new();
//! let screen = tree.insert(None, FocusNode::group(Rect::new(0.0, 0.0, 300.0, 100.0)));
//! let buttons: Vec<_> = (0..3)
//!     .map(|i| {
//!         let x = f64::from(i) * 100.0;
//!         tree.insert(Some(screen), FocusNode::leaf(Rect::new(x, 0.0, x + 90.0, 20.0)))
//!     })
//!     .collect();
//!
//! for &button in &buttons {
//!     assert!(tree.navigate(screen, Navigation::tab(true)));
//!     assert_eq!(tree.focused_leaf(screen), Some(button));
//! }
//! // Past the last button focus escapes the screen.
//! assert!(!tree.navigate(screen, Navigation::tab(true)));
//! ```
//!
//! ## Lists and rows
//!
//! [`NodeKind::List`] and [`NodeKind::Row`] model option lists laid out as rows
//! of columns. Arrow keys move horizontally inside a row, but a vertical arrow
//! always leaves the row so the list can move to the next one. The list
//! remembers the column of the last horizontal move, and a row entered
//! vertically restores that column:
//!
//! ```rust
//! use kurbo::Rect;
//! use thicket_focus::{Direction, FocusNode, FocusTree, Navigation};
//!
//! let mut tree = FocusTree::new();
//! let screen = tree.insert(None, FocusNode::group(Rect::new(0.0, 0.0, 320.0, 100.0)));
//! let list = tree.insert(Some(screen), FocusNode::list(Rect::new(0.0, 0.0, 320.0, 100.0)));
//! let mut cells = Vec::new();
//! for y in [0.0, 24.0] {
//!     let row = tree.insert(Some(list), FocusNode::row(Rect::new(0.0, y, 320.0, y + 24.0)));
//!     let left = tree.insert(Some(row), FocusNode::leaf(Rect::new(0.0, y, 150.0, y + 20.0)));
//!     let right = tree.insert(Some(row), FocusNode::leaf(Rect::new(160.0, y, 310.0, y + 20.0)));
//!     cells.push((left, right));
//! }
//!
//! tree.focus(cells[0].0);
//! tree.navigate(screen, Navigation::arrow(Direction::Right));
//! tree.navigate(screen, Navigation::arrow(Direction::Down));
//! assert_eq!(tree.focused_leaf(screen), Some(cells[1].1));
//! ```
//!
//! Lists also scroll so the focused row stays inside their rect; see
//! [`FocusTree::scroll_into_view`].
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod direction;
mod navigate;
mod tree;
mod types;

pub use direction::{Direction, Navigation};
pub use navigate::LeafNavigation;
pub use tree::{FocusPath, FocusTree};
pub use types::{FocusFlags, FocusNode, FocusState, NodeId, NodeKind};
