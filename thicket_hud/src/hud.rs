// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Size;

use crate::{HudComponent, HudError, HudId};

/// A named overlay made of ordered components.
///
/// Components render in insertion order, so later components paint over earlier ones.
pub struct Hud<S: ?Sized> {
    id: HudId,
    enabled: bool,
    screen: Size,
    components: Vec<Box<dyn HudComponent<S>>>,
}

impl<S: ?Sized> fmt::Debug for Hud<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hud")
            .field("id", &self.id)
            .field("enabled", &self.enabled)
            .field("screen", &self.screen)
            .field("components", &self.components)
            .finish()
    }
}

impl<S: ?Sized> Hud<S> {
    /// Create an enabled HUD with no components.
    pub fn new(id: HudId) -> Self {
        Self {
            id,
            enabled: true,
            screen: Size::ZERO,
            components: Vec::new(),
        }
    }

    /// The HUD's identifier.
    pub fn id(&self) -> &HudId {
        &self.id
    }

    /// Whether the HUD is drawn and ticked.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the HUD.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Screen size from the last [`init`](Self::init).
    pub fn screen_size(&self) -> Size {
        self.screen
    }

    /// Append a component. Component identifiers must be unique within the HUD.
    pub fn add_component(&mut self, component: Box<dyn HudComponent<S>>) -> Result<(), HudError> {
        if self.component(component.id()).is_some() {
            return Err(HudError::DuplicateComponent {
                hud: self.id.clone(),
                component: component.id().clone(),
            });
        }
        self.components.push(component);
        Ok(())
    }

    /// Remove and return the component with `id`.
    pub fn remove_component(&mut self, id: &HudId) -> Option<Box<dyn HudComponent<S>>> {
        let index = self.components.iter().position(|c| c.id() == id)?;
        Some(self.components.remove(index))
    }

    /// Look up a component.
    pub fn component(&self, id: &HudId) -> Option<&dyn HudComponent<S>> {
        self.components.iter().find(|c| c.id() == id).map(|c| &**c)
    }

    /// Look up a component mutably.
    pub fn component_mut(&mut self, id: &HudId) -> Option<&mut (dyn HudComponent<S> + 'static)> {
        self.components.iter_mut().find(|c| c.id() == id).map(|c| &mut **c)
    }

    /// Components in render order.
    pub fn components(&self) -> impl Iterator<Item = &dyn HudComponent<S>> + '_ {
        self.components.iter().map(|c| &**c)
    }

    /// Lay out every component for a screen of `width` x `height`.
    pub fn init(&mut self, width: f64, height: f64) {
        self.screen = Size::new(width, height);
        for component in &mut self.components {
            component.layout(self.screen);
        }
    }

    /// Draw every enabled component.
    pub fn render(&self, painter: &mut S, tick_delta: f32) {
        for component in self.components.iter().filter(|c| c.is_enabled()) {
            component.render(painter, tick_delta);
        }
    }

    /// Tick every enabled component that asks for ticks.
    pub fn tick(&mut self) {
        for component in &mut self.components {
            if component.is_enabled() && component.has_ticks() {
                component.tick();
            }
        }
    }

    /// Whether any component asks for ticks.
    pub fn has_ticks(&self) -> bool {
        self.components.iter().any(|c| c.has_ticks())
    }
}
