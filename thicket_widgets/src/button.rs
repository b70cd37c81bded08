// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Push buttons and toggle buttons.

use core::fmt;

use kurbo::{Point, Rect};
use thicket_focus::FocusFlags;

use crate::input::{Key, Modifiers, MouseButton};
use crate::surface::{Border, Color, Surface, draw_centered_text};
use crate::widget::{RenderCx, Widget, WidgetState};

const FACE: Color = Color(0xFF6F_6F6F);
const FACE_HIGHLIGHTED: Color = Color(0xFF8F_8F9F);
const FACE_INACTIVE: Color = Color(0xFF2F_2F2F);
const GLYPH_HEIGHT: f64 = 8.0;

/// Called when a [`Button`] is pressed.
pub type PressAction = Box<dyn FnMut(&mut Button)>;

/// Called with the new value when a [`ToggleButton`] flips.
pub type ToggleAction = Box<dyn FnMut(&mut ToggleButton, bool)>;

fn render_face(surface: &mut dyn Surface, rect: Rect, active: bool, highlighted: bool) {
    let face = match (active, highlighted) {
        (false, _) => FACE_INACTIVE,
        (true, false) => FACE,
        (true, true) => FACE_HIGHLIGHTED,
    };
    surface.fill_rect(rect, face);
    let edge = if active && highlighted {
        Color::WHITE
    } else {
        Color::BLACK
    };
    Border::new(1.0, edge).render(surface, rect, false);
}

fn is_activation_key(key: Key) -> bool {
    matches!(key, Key::Enter | Key::Space)
}

/// A labelled push button.
pub struct Button {
    label: String,
    tooltip: Option<String>,
    active: bool,
    alpha: f32,
    action: Option<PressAction>,
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("tooltip", &self.tooltip)
            .field("active", &self.active)
            .field("alpha", &self.alpha)
            .finish_non_exhaustive()
    }
}

impl Button {
    /// Create an active button running `action` when pressed.
    pub fn new(label: impl Into<String>, action: impl FnMut(&mut Self) + 'static) -> Self {
        Self {
            label: label.into(),
            tooltip: None,
            active: true,
            alpha: 1.0,
            action: Some(Box::new(action)),
        }
    }

    /// Attach a tooltip.
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// The label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Replace or clear the tooltip.
    pub fn set_tooltip(&mut self, tooltip: Option<String>) {
        self.tooltip = tooltip;
    }

    /// Whether the button reacts to input.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activate or deactivate the button. Inactive buttons are skipped by navigation.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Label opacity in `0.0..=1.0`.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Set the label opacity.
    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    /// Run the press action, if active.
    pub fn press(&mut self) {
        if !self.active {
            return;
        }
        if let Some(mut action) = self.action.take() {
            action(self);
            if self.action.is_none() {
                self.action = Some(action);
            }
        }
    }
}

impl Widget for Button {
    fn render(&mut self, cx: &mut RenderCx<'_>, state: &WidgetState) {
        let rect = state.rect;
        render_face(cx.surface, rect, self.active, state.is_highlighted());
        let color = if self.active {
            Color::WHITE
        } else {
            Color::DISABLED_TEXT
        };
        let y = rect.y0 + ((rect.height() - GLYPH_HEIGHT) / 2.0).floor();
        draw_centered_text(
            cx.surface,
            &self.label,
            rect.center().x,
            y,
            color.with_alpha(self.alpha),
        );
    }

    fn focus_flags(&self) -> FocusFlags {
        if self.active {
            FocusFlags::default()
        } else {
            FocusFlags::VISIBLE
        }
    }

    fn mouse_clicked(&mut self, _pointer: Point, button: MouseButton, _state: &WidgetState) -> bool {
        if button != MouseButton::Primary || !self.active {
            return false;
        }
        self.press();
        true
    }

    fn key_pressed(&mut self, key: Key, _modifiers: Modifiers) -> bool {
        if !self.active || !is_activation_key(key) {
            return false;
        }
        self.press();
        true
    }

    fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }
}

/// A checkbox-style button holding a boolean value.
pub struct ToggleButton {
    label: String,
    tooltip: Option<String>,
    value: bool,
    show_label: bool,
    active: bool,
    action: Option<ToggleAction>,
}

impl fmt::Debug for ToggleButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleButton")
            .field("label", &self.label)
            .field("tooltip", &self.tooltip)
            .field("value", &self.value)
            .field("show_label", &self.show_label)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

impl ToggleButton {
    /// Create a toggle with an initial value.
    pub fn new(label: impl Into<String>, value: bool) -> Self {
        Self {
            label: label.into(),
            tooltip: None,
            value,
            show_label: true,
            active: true,
            action: None,
        }
    }

    /// Run `action` with the new value whenever the toggle flips.
    #[must_use]
    pub fn on_toggle(mut self, action: impl FnMut(&mut Self, bool) + 'static) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    /// Attach a tooltip.
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Draw only the box, without the label.
    #[must_use]
    pub fn without_label(mut self) -> Self {
        self.show_label = false;
        self
    }

    /// Current value.
    pub fn value(&self) -> bool {
        self.value
    }

    /// The label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Activate or deactivate the toggle.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Flip the value and notify the action, if active.
    pub fn toggle(&mut self) {
        if !self.active {
            return;
        }
        self.value = !self.value;
        let value = self.value;
        if let Some(mut action) = self.action.take() {
            action(self, value);
            if self.action.is_none() {
                self.action = Some(action);
            }
        }
    }
}

impl Widget for ToggleButton {
    fn render(&mut self, cx: &mut RenderCx<'_>, state: &WidgetState) {
        let rect = state.rect;
        let side = rect.height();
        let check = Rect::new(rect.x0, rect.y0, rect.x0 + side, rect.y1);
        render_face(cx.surface, check, self.active, state.is_highlighted());
        if self.value {
            cx.surface.fill_rect(check.inset(-4.0), Color::WHITE);
        }
        if self.show_label {
            let y = rect.y0 + ((rect.height() - GLYPH_HEIGHT) / 2.0).floor();
            let color = if self.active {
                Color::TEXT
            } else {
                Color::DISABLED_TEXT
            };
            cx.surface.draw_text(
                &self.label,
                Point::new(check.x1 + 4.0, y),
                color.argb(),
                true,
            );
        }
    }

    fn focus_flags(&self) -> FocusFlags {
        if self.active {
            FocusFlags::default()
        } else {
            FocusFlags::VISIBLE
        }
    }

    fn mouse_clicked(&mut self, _pointer: Point, button: MouseButton, _state: &WidgetState) -> bool {
        if button != MouseButton::Primary || !self.active {
            return false;
        }
        self.toggle();
        true
    }

    fn key_pressed(&mut self, key: Key, _modifiers: Modifiers) -> bool {
        if !self.active || !is_activation_key(key) {
            return false;
        }
        self.toggle();
        true
    }

    fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }
}
