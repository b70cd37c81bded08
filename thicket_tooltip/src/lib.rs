// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Tooltip: dwell-delayed tooltips for hovered or focused widgets.
//!
//! Widgets do not draw their own tooltips. Instead, each widget owns a
//! [`TooltipTimer`] that counts how long it has been hovered or focused. Once
//! the dwell delay has passed, the timer enqueues a [`Tooltip`] through a
//! [`TooltipSender`]. The screen drains the [`TooltipQueue`] at the end of the
//! frame so tooltips paint above everything else.
//!
//! The queue is a multi-producer, single-consumer FIFO that never blocks.
//! Senders are cheap to clone and may live on any thread.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use thicket_tooltip::{DwellTarget, TooltipConfig, TooltipQueue, TooltipTimer};
//!
//! let mut queue = TooltipQueue::new();
//! let sender = queue.sender();
//! let mut timer = TooltipTimer::new(TooltipConfig::default());
//!
//! let target = DwellTarget {
//!     rect: Rect::new(10.0, 10.0, 160.0, 30.0),
//!     visible: true,
//!     hovered: true,
//!     focused: false,
//!     text: Some("Opens the settings menu"),
//! };
//! let pointer = Point::new(42.0, 20.0);
//!
//! // 20 ms per tick; the first update only starts the clock.
//! for frame in 0..=45_u64 {
//!     timer.update(frame * 20, &target, pointer, &sender);
//! }
//!
//! let mut shown = Vec::new();
//! queue.render_all(|tooltip| shown.push(tooltip));
//! assert_eq!(shown.len(), 1);
//! assert_eq!(shown[0].position, pointer);
//! assert_eq!(shown[0].wrap_width, 200.0);
//! ```

mod config;
mod queue;
mod timer;

pub use config::TooltipConfig;
pub use queue::{Tooltip, TooltipQueue, TooltipSender};
pub use timer::{DwellTarget, TooltipTimer};
