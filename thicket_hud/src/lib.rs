// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket HUD: in-game overlays drawn over the world view.
//!
//! A [`Hud`] is a named, toggleable group of [`HudComponent`]s. Huds are
//! collected in a [`HudRegistry`] owned by whatever holds the session's UI
//! state; there is no process-wide registry. The registry renders, ticks and
//! lays out every enabled HUD, gated on [`HudVisibility`].
//!
//! Components are generic over the painter `S` they draw to. The bundled
//! [`TextHudComponent`] only needs a [`TextPainter`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use thicket_hud::{Hud, HudId, HudRegistry, HudVisibility, TextHudComponent, TextPainter};
//!
//! #[derive(Default)]
//! struct Log(Vec<String>);
//!
//! impl TextPainter for Log {
//!     fn draw_text(&mut self, text: &str, origin: Point, _argb: u32, _shadow: bool) {
//!         self.0.push(format!("{text} @ {},{}", origin.x, origin.y));
//!     }
//! }
//!
//! let mut hud = Hud::new(HudId::new("demo", "coords"));
//! hud.add_component(Box::new(TextHudComponent::new(
//!     HudId::new("demo", "coords/x"),
//!     Point::new(2.0, 2.0),
//!     "x = 12",
//! )))
//! .unwrap();
//!
//! let mut registry = HudRegistry::new();
//! registry.register(hud);
//! assert!(registry.try_register(Hud::new(HudId::new("demo", "coords"))).is_err());
//!
//! let in_world = HudVisibility { world_loaded: true, hud_hidden: false, screen_open: false };
//! let mut log = Log::default();
//! registry.render_all(&in_world, &mut log, 0.0);
//! assert_eq!(log.0, ["x = 12 @ 2,2"]);
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

mod component;
mod error;
mod hud;
mod id;
mod registry;

pub use component::{HudComponent, TextHudComponent, TextPainter};
pub use error::HudError;
pub use hud::Hud;
pub use id::HudId;
pub use registry::{HudRegistry, HudVisibility};
