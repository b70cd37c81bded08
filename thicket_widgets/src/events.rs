// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine lifecycle events.
//!
//! The host's adapter layer fires these from its own screen and window code;
//! toolkit users subscribe to them instead of hooking into engine internals.

use core::fmt;

use kurbo::Size;

/// Framebuffer size and GUI scale of the host window.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    /// Framebuffer width in physical pixels.
    pub width: u32,
    /// Framebuffer height in physical pixels.
    pub height: u32,
    /// Physical pixels per logical unit.
    pub scale_factor: f64,
}

impl Default for Resolution {
    fn default() -> Self {
        Self::new(854, 480, 1.0)
    }
}

impl Resolution {
    /// Create a resolution. A non-positive scale factor is treated as `1.0`.
    pub fn new(width: u32, height: u32, scale_factor: f64) -> Self {
        let scale_factor = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        Self {
            width,
            height,
            scale_factor,
        }
    }

    /// The screen size in logical units.
    pub fn logical_size(&self) -> Size {
        Size::new(
            (f64::from(self.width) / self.scale_factor).floor(),
            (f64::from(self.height) / self.scale_factor).floor(),
        )
    }
}

/// When an open-screen listener runs relative to the screen switch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScreenPhase {
    /// Before the new screen replaces the current one.
    Pre,
    /// After the new screen is installed.
    Post,
}

/// Handle for removing a listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type OpenScreenListener = Box<dyn FnMut(ScreenPhase, Option<&str>)>;
type ResolutionListener = Box<dyn FnMut(Resolution)>;

/// Subscription registry for engine lifecycle events.
#[derive(Default)]
pub struct EngineEvents {
    next_id: u64,
    open_screen: Vec<(ListenerId, OpenScreenListener)>,
    resolution_changed: Vec<(ListenerId, ResolutionListener)>,
}

impl fmt::Debug for EngineEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineEvents")
            .field("next_id", &self.next_id)
            .field("open_screen", &self.open_screen.len())
            .field("resolution_changed", &self.resolution_changed.len())
            .finish()
    }
}

impl EngineEvents {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Run `listener` whenever a screen opens or closes.
    ///
    /// The listener receives the phase and the new screen's title, or `None`
    /// when the host returns to the world view.
    pub fn on_open_screen(
        &mut self,
        listener: impl FnMut(ScreenPhase, Option<&str>) + 'static,
    ) -> ListenerId {
        let id = self.allocate();
        self.open_screen.push((id, Box::new(listener)));
        id
    }

    /// Run `listener` whenever the window resolution or GUI scale changes.
    pub fn on_resolution_changed(&mut self, listener: impl FnMut(Resolution) + 'static) -> ListenerId {
        let id = self.allocate();
        self.resolution_changed.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.open_screen.len() + self.resolution_changed.len();
        self.open_screen.retain(|(other, _)| *other != id);
        self.resolution_changed.retain(|(other, _)| *other != id);
        before != self.open_screen.len() + self.resolution_changed.len()
    }

    /// Notify open-screen listeners, in subscription order.
    pub fn fire_open_screen(&mut self, phase: ScreenPhase, title: Option<&str>) {
        tracing::debug!(?phase, screen = title, "open screen");
        for (_, listener) in &mut self.open_screen {
            listener(phase, title);
        }
    }

    /// Notify resolution listeners, in subscription order.
    pub fn fire_resolution_changed(&mut self, resolution: Resolution) {
        tracing::debug!(?resolution, "resolution changed");
        for (_, listener) in &mut self.resolution_changed {
            listener(resolution);
        }
    }
}
