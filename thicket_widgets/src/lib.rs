// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Widgets: keyboard-navigable controls over a host drawing surface.
//!
//! A [`Screen`] owns one UI: a `thicket_focus` tree whose leaves are
//! [`Widget`]s, a `thicket_clip` stack for scrolling lists, and a
//! `thicket_tooltip` queue. The host implements [`Surface`] (rectangles, text
//! and the scissor box) and forwards input; everything else happens here.
//!
//! - [`Button`], [`ToggleButton`], [`TextField`] and [`Separator`] are the
//!   bundled widgets.
//! - [`BooleanOption`], [`CyclingOption`] and [`StringOption`] bind a setting to
//!   a widget; an [`OptionList`] lays them out in rows, one or two per row.
//! - [`EngineEvents`] lets code react to screens opening and the window
//!   resizing without reaching into the host.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect};
//! use thicket_widgets::{
//!     BooleanOption, Color, ConfigOption, Key, Modifiers, Resolution, ScissorBox, ScissorSink,
//!     Screen, Surface, TextPainter,
//! };
//!
//! #[derive(Default)]
//! struct Log(Vec<String>);
//!
//! impl ScissorSink for Log {
//!     fn set_scissor(&mut self, _scissor: Option<ScissorBox>) {}
//! }
//!
//! impl TextPainter for Log {
//!     fn draw_text(&mut self, text: &str, _origin: Point, _argb: u32, _shadow: bool) {
//!         self.0.push(text.to_owned());
//!     }
//! }
//!
//! impl Surface for Log {
//!     fn fill_rect(&mut self, _rect: Rect, _color: Color) {}
//!
//!     fn text_width(&self, text: &str) -> f64 {
//!         6.0 * text.len() as f64
//!     }
//! }
//!
//! let fullscreen = Rc::new(Cell::new(false));
//! let (get, set) = (Rc::clone(&fullscreen), Rc::clone(&fullscreen));
//! let option = BooleanOption::new("Fullscreen", move || get.get(), move |v| set.set(v));
//!
//! let mut screen = Screen::new("Video", Resolution::new(854, 480, 1.0));
//! let entry = screen
//!     .add_option_list(Rect::new(0.0, 32.0, 854.0, 448.0))
//!     .add_single(&option as &dyn ConfigOption);
//!
//! screen.key_pressed(Key::Tab, Modifiers::empty());
//! assert_eq!(screen.focused(), Some(entry));
//! screen.key_pressed(Key::Enter, Modifiers::empty());
//! assert!(fullscreen.get());
//!
//! let mut log = Log::default();
//! screen.render(&mut log, Point::ZERO, 0, 0.0);
//! assert_eq!(log.0, ["Fullscreen", "Video"]);
//! ```

mod button;
mod events;
mod input;
mod option_list;
mod options;
mod overlay;
mod screen;
mod separator;
mod surface;
mod text_field;
mod widget;

pub use button::{Button, PressAction, ToggleAction, ToggleButton};
pub use events::{EngineEvents, ListenerId, Resolution, ScreenPhase};
pub use input::{Key, Modifiers, MouseButton, key_navigation};
pub use option_list::{ENTRY_HEIGHT, NARROW_WIDTH, OptionList, ROW_HEIGHT, WIDE_WIDTH};
pub use options::{BooleanOption, ConfigOption, CyclingOption, StringOption, Translate};
pub use screen::{Screen, ScreenConfig};
pub use separator::{SEPARATOR_HEIGHT, Separator};
pub use surface::{Background, Border, Color, Surface};
pub use text_field::{ChangeListener, DEFAULT_MAX_LENGTH, TextField, TextPredicate};
pub use widget::{RenderCx, Widget, WidgetState};

pub use thicket_clip::{ScissorBox, ScissorSink};
pub use thicket_hud::TextPainter;
