// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The owned HUD registry.

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::{Hud, HudError, HudId};

/// Host state that decides whether HUDs are drawn at all.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HudVisibility {
    /// A world is loaded (HUDs have nothing to overlay otherwise).
    pub world_loaded: bool,
    /// The player toggled the HUD off.
    pub hud_hidden: bool,
    /// A screen is open on top of the world.
    pub screen_open: bool,
}

impl HudVisibility {
    /// HUDs render when a world is loaded and either the HUD is shown or a screen is open.
    pub fn can_render(&self) -> bool {
        self.world_loaded && (!self.hud_hidden || self.screen_open)
    }
}

/// Registered HUDs keyed by identifier, kept in registration order.
pub struct HudRegistry<S: ?Sized> {
    huds: HashMap<HudId, Hud<S>>,
    order: Vec<HudId>,
}

impl<S: ?Sized> fmt::Debug for HudRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HudRegistry")
            .field("huds", &self.huds)
            .field("order", &self.order)
            .finish()
    }
}

impl<S: ?Sized> Default for HudRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> HudRegistry<S> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            huds: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register `hud`.
    ///
    /// # Panics
    ///
    /// Panics if a HUD with the same identifier is already registered. Registering
    /// twice is a programming error; use [`try_register`](Self::try_register) to
    /// handle it instead.
    #[track_caller]
    pub fn register(&mut self, hud: Hud<S>) {
        if let Err(err) = self.try_register(hud) {
            panic!("cannot register the same HUD twice: {err}");
        }
    }

    /// Register `hud`, or return [`HudError::Duplicate`] if its identifier is taken.
    pub fn try_register(&mut self, hud: Hud<S>) -> Result<(), HudError> {
        let id = hud.id().clone();
        if self.huds.contains_key(&id) {
            return Err(HudError::Duplicate(id));
        }
        tracing::debug!(hud = %id, "registered HUD");
        self.order.push(id.clone());
        self.huds.insert(id, hud);
        Ok(())
    }

    /// Remove and return the HUD with `id`.
    pub fn unregister(&mut self, id: &HudId) -> Option<Hud<S>> {
        let hud = self.huds.remove(id)?;
        self.order.retain(|other| other != id);
        tracing::debug!(hud = %id, "unregistered HUD");
        Some(hud)
    }

    /// Look up a HUD.
    pub fn get(&self, id: &HudId) -> Option<&Hud<S>> {
        self.huds.get(id)
    }

    /// Look up a HUD mutably.
    pub fn get_mut(&mut self, id: &HudId) -> Option<&mut Hud<S>> {
        self.huds.get_mut(id)
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &HudId) -> bool {
        self.huds.contains_key(id)
    }

    /// Number of registered HUDs.
    pub fn len(&self) -> usize {
        self.huds.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.huds.is_empty()
    }

    /// HUDs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Hud<S>> + '_ {
        self.order.iter().filter_map(|id| self.huds.get(id))
    }

    /// Lay out every enabled HUD for the given screen size.
    ///
    /// Hosts call this after a resolution change and when a world is joined.
    pub fn init_all(&mut self, visibility: &HudVisibility, width: f64, height: f64) {
        if !visibility.can_render() {
            return;
        }
        for id in &self.order {
            if let Some(hud) = self.huds.get_mut(id)
                && hud.is_enabled()
            {
                hud.init(width, height);
            }
        }
    }

    /// Draw every enabled HUD in registration order.
    pub fn render_all(&self, visibility: &HudVisibility, painter: &mut S, tick_delta: f32) {
        if !visibility.can_render() {
            return;
        }
        for hud in self.iter().filter(|hud| hud.is_enabled()) {
            hud.render(painter, tick_delta);
        }
    }

    /// Tick every enabled HUD that has tickable components.
    pub fn tick_all(&mut self, visibility: &HudVisibility) {
        if !visibility.can_render() {
            return;
        }
        for id in &self.order {
            if let Some(hud) = self.huds.get_mut(id)
                && hud.is_enabled()
                && hud.has_ticks()
            {
                hud.tick();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec;
    use core::cell::RefCell;

    use kurbo::Point;

    use super::*;
    use crate::{HudComponent, TextHudComponent, TextPainter};

    #[derive(Default)]
    struct Names(Vec<String>);

    impl TextPainter for Names {
        fn draw_text(&mut self, text: &str, _: Point, _: u32, _: bool) {
            self.0.push(text.into());
        }
    }

    const SHOWN: HudVisibility = HudVisibility {
        world_loaded: true,
        hud_hidden: false,
        screen_open: false,
    };

    fn hud(path: &'static str) -> Hud<Names> {
        let mut hud = Hud::new(HudId::new("t", path));
        hud.add_component(Box::new(TextHudComponent::new(
            HudId::new("t", path),
            Point::ZERO,
            path,
        )))
        .unwrap();
        hud
    }

    #[test]
    fn visibility_rules() {
        assert!(SHOWN.can_render());
        assert!(!HudVisibility::default().can_render());
        let hidden = HudVisibility {
            hud_hidden: true,
            ..SHOWN
        };
        assert!(!hidden.can_render());
        let hidden_with_screen = HudVisibility {
            screen_open: true,
            ..hidden
        };
        assert!(hidden_with_screen.can_render());
    }

    #[test]
    fn try_register_rejects_duplicates() {
        let mut registry = HudRegistry::new();
        registry.try_register(hud("a")).unwrap();
        assert_eq!(
            registry.try_register(hud("a")),
            Err(HudError::Duplicate(HudId::new("t", "a")))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    #[should_panic(expected = "cannot register the same HUD twice")]
    fn register_panics_on_duplicate() {
        let mut registry = HudRegistry::new();
        registry.register(hud("a"));
        registry.register(hud("a"));
    }

    #[test]
    fn renders_in_registration_order_and_respects_visibility() {
        let mut registry = HudRegistry::new();
        for path in ["z", "m", "a"] {
            registry.register(hud(path));
        }
        registry.get_mut(&HudId::new("t", "m")).unwrap().set_enabled(false);

        let mut names = Names::default();
        registry.render_all(&SHOWN, &mut names, 0.0);
        assert_eq!(names.0, vec!["z", "a"]);

        let mut names = Names::default();
        registry.render_all(&HudVisibility::default(), &mut names, 0.0);
        assert!(names.0.is_empty());
    }

    #[test]
    fn unregister_removes_from_order() {
        let mut registry = HudRegistry::new();
        registry.register(hud("a"));
        registry.register(hud("b"));
        assert!(registry.unregister(&HudId::new("t", "a")).is_some());
        assert!(registry.unregister(&HudId::new("t", "a")).is_none());
        let ids: Vec<_> = registry.iter().map(|h| h.id().path()).collect();
        assert_eq!(ids, ["b"]);
        assert!(registry.contains(&HudId::new("t", "b")));
    }

    struct Ticker {
        id: HudId,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl HudComponent<Names> for Ticker {
        fn id(&self) -> &HudId {
            &self.id
        }
        fn is_enabled(&self) -> bool {
            true
        }
        fn set_enabled(&mut self, _: bool) {}
        fn render(&self, _: &mut Names, _: f32) {}
        fn tick(&mut self) {
            self.log.borrow_mut().push(self.id.path().into());
        }
        fn has_ticks(&self) -> bool {
            true
        }
    }

    #[test]
    fn ticks_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let paths = [
            "q", "b", "x", "d", "m", "a", "z", "k", "c", "w", "e", "r", "t", "y", "u", "i",
        ];
        let mut registry = HudRegistry::new();
        for path in paths {
            let mut hud = Hud::new(HudId::new("t", path));
            hud.add_component(Box::new(Ticker {
                id: HudId::new("t", path),
                log: Rc::clone(&log),
            }))
            .unwrap();
            registry.register(hud);
        }
        registry.get_mut(&HudId::new("t", "m")).unwrap().set_enabled(false);

        registry.tick_all(&HudVisibility::default());
        assert!(log.borrow().is_empty());

        registry.tick_all(&SHOWN);
        let expected: Vec<String> = paths
            .iter()
            .filter(|path| **path != "m")
            .map(|path| String::from(*path))
            .collect();
        assert_eq!(*log.borrow(), expected);
    }

    #[test]
    fn init_all_is_gated() {
        let mut registry = HudRegistry::new();
        registry.register(hud("a"));
        registry.init_all(&HudVisibility::default(), 100.0, 100.0);
        assert_eq!(
            registry.get(&HudId::new("t", "a")).unwrap().screen_size(),
            kurbo::Size::ZERO
        );
        registry.init_all(&SHOWN, 100.0, 50.0);
        assert_eq!(
            registry.get(&HudId::new("t", "a")).unwrap().screen_size(),
            kurbo::Size::new(100.0, 50.0)
        );
    }
}
