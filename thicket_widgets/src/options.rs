// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bindable options that build their own editing widget.
//!
//! An option pairs a translation key with accessors into the host's settings.
//! [`OptionList`](crate::OptionList) asks each option for a fresh widget, so the
//! same option can appear on several screens.

use core::fmt;
use std::rc::Rc;

use crate::button::{Button, ToggleButton};
use crate::text_field::TextField;
use crate::widget::Widget;

/// Translation lookup supplied by the host.
pub trait Translate {
    /// The display text for `key`.
    fn translate(&self, key: &str) -> String;
}

impl<F: Fn(&str) -> String> Translate for F {
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// A setting that can be edited through a widget.
pub trait ConfigOption {
    /// Translation key of the option's name.
    fn key(&self) -> &str;

    /// Tooltip shown on the option's widget.
    fn tooltip(&self) -> Option<&str>;

    /// Build a widget bound to this option.
    fn create_widget(&self, translate: &dyn Translate) -> Box<dyn Widget>;
}

impl fmt::Debug for dyn ConfigOption + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigOption")
            .field("key", &self.key())
            .field("tooltip", &self.tooltip())
            .finish()
    }
}

/// An on/off option edited with a [`ToggleButton`].
pub struct BooleanOption {
    key: String,
    tooltip: Option<String>,
    get: Rc<dyn Fn() -> bool>,
    set: Rc<dyn Fn(bool)>,
}

impl fmt::Debug for BooleanOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BooleanOption")
            .field("key", &self.key)
            .field("tooltip", &self.tooltip)
            .field("value", &(self.get)())
            .finish_non_exhaustive()
    }
}

impl BooleanOption {
    /// Bind `key` to a getter and setter.
    pub fn new(
        key: impl Into<String>,
        get: impl Fn() -> bool + 'static,
        set: impl Fn(bool) + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            tooltip: None,
            get: Rc::new(get),
            set: Rc::new(set),
        }
    }

    /// Attach a tooltip.
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Current value.
    pub fn get(&self) -> bool {
        (self.get)()
    }

    /// Store a new value.
    pub fn set(&self, value: bool) {
        (self.set)(value);
    }

    /// Flip the value.
    pub fn toggle(&self) {
        self.set(!self.get());
    }
}

impl ConfigOption for BooleanOption {
    fn key(&self) -> &str {
        &self.key
    }

    fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    fn create_widget(&self, translate: &dyn Translate) -> Box<dyn Widget> {
        let set = Rc::clone(&self.set);
        let mut toggle = ToggleButton::new(translate.translate(&self.key), self.get())
            .on_toggle(move |_, value| set(value));
        if let Some(tooltip) = &self.tooltip {
            toggle = toggle.with_tooltip(tooltip.clone());
        }
        Box::new(toggle)
    }
}

/// An option that steps through values each time its button is pressed.
pub struct CyclingOption {
    key: String,
    tooltip: Option<String>,
    cycle: Rc<dyn Fn(i32)>,
    message: Rc<dyn Fn() -> String>,
}

impl fmt::Debug for CyclingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CyclingOption")
            .field("key", &self.key)
            .field("tooltip", &self.tooltip)
            .field("message", &(self.message)())
            .finish_non_exhaustive()
    }
}

impl CyclingOption {
    /// `cycle` advances the value by the given amount; `message` renders the
    /// current value as the button label.
    pub fn new(
        key: impl Into<String>,
        cycle: impl Fn(i32) + 'static,
        message: impl Fn() -> String + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            tooltip: None,
            cycle: Rc::new(cycle),
            message: Rc::new(message),
        }
    }

    /// Attach a tooltip.
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Advance by `amount` steps.
    pub fn cycle(&self, amount: i32) {
        (self.cycle)(amount);
    }

    /// The current label.
    pub fn message(&self) -> String {
        (self.message)()
    }
}

impl ConfigOption for CyclingOption {
    fn key(&self) -> &str {
        &self.key
    }

    fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    fn create_widget(&self, _translate: &dyn Translate) -> Box<dyn Widget> {
        let cycle = Rc::clone(&self.cycle);
        let message = Rc::clone(&self.message);
        let mut button = Button::new(self.message(), move |button: &mut Button| {
            cycle(1);
            button.set_label(message());
        });
        button.set_tooltip(self.tooltip.clone());
        Box::new(button)
    }
}

/// A free-text option edited with a [`TextField`].
pub struct StringOption {
    key: String,
    tooltip: Option<String>,
    get: Rc<dyn Fn() -> String>,
    set: Rc<dyn Fn(&str)>,
    predicate: Option<Rc<dyn Fn(&str) -> bool>>,
}

impl fmt::Debug for StringOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringOption")
            .field("key", &self.key)
            .field("tooltip", &self.tooltip)
            .field("value", &(self.get)())
            .field("has_predicate", &self.predicate.is_some())
            .finish_non_exhaustive()
    }
}

impl StringOption {
    /// Bind `key` to a getter and setter.
    pub fn new(
        key: impl Into<String>,
        get: impl Fn() -> String + 'static,
        set: impl Fn(&str) + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            tooltip: None,
            get: Rc::new(get),
            set: Rc::new(set),
            predicate: None,
        }
    }

    /// Only accept texts for which `predicate` returns `true`.
    #[must_use]
    pub fn with_predicate(mut self, predicate: impl Fn(&str) -> bool + 'static) -> Self {
        self.predicate = Some(Rc::new(predicate));
        self
    }

    /// Attach a tooltip.
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Current value.
    pub fn get(&self) -> String {
        (self.get)()
    }

    /// Store a new value.
    pub fn set(&self, value: &str) {
        (self.set)(value);
    }
}

impl ConfigOption for StringOption {
    fn key(&self) -> &str {
        &self.key
    }

    fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    fn create_widget(&self, translate: &dyn Translate) -> Box<dyn Widget> {
        let mut field = TextField::new(translate.translate(&self.key));
        if let Some(predicate) = &self.predicate {
            let predicate = Rc::clone(predicate);
            field = field.with_predicate(move |text| predicate(text));
        }
        if let Some(tooltip) = &self.tooltip {
            field = field.with_tooltip(tooltip.clone());
        }
        field.set_text(&self.get());
        let set = Rc::clone(&self.set);
        Box::new(field.on_change(move |text| set(text)))
    }
}
