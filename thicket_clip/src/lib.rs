// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Clip: a nested clip-region stack for immediate rendering passes.
//!
//! Widgets that draw scrolled or overflowing content push a clip region before
//! drawing their children and pop it afterwards. Each pushed region is
//! intersected with the region below it, so a child can never draw outside its
//! parent. A separate scale-factor stack converts the logical coordinates
//! widgets work in to physical framebuffer pixels.
//!
//! - [`ClipStack`]: the two stacks, plus [`ClipStack::scissor`] and
//!   [`ClipStack::apply`] for handing the active region to a renderer.
//! - [`ClipGuard`] / [`ScaleGuard`]: RAII guards that pop on drop, so early
//!   returns, `?`, and unwinding all leave the stack balanced.
//! - [`ScissorSink`]: the renderer-side receiver of [`ScissorBox`] updates.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use thicket_clip::ClipStack;
//!
//! let mut stack = ClipStack::new();
//! let mut pass = stack.scaled(2.0);
//! {
//!     let mut panel = pass.clip(Rect::new(0.0, 0.0, 100.0, 100.0));
//!     let list = panel.clip(Rect::new(50.0, 50.0, 200.0, 200.0));
//!     // The list is confined to the panel.
//!     assert_eq!(list.current(), Some(Rect::new(50.0, 50.0, 100.0, 100.0)));
//!     // 2x scale, 400 px tall framebuffer with a bottom-left origin.
//!     let scissor = list.scissor(400).unwrap();
//!     assert_eq!((scissor.x, scissor.y, scissor.width, scissor.height), (100, 200, 100, 100));
//! }
//! assert_eq!(pass.depth(), 0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod guard;
mod scissor;
mod stack;

pub use guard::{ClipGuard, ScaleGuard};
pub use scissor::{ScissorBox, ScissorSink};
pub use stack::ClipStack;
