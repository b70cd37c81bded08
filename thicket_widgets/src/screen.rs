// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The screen: owner of one UI's focus tree, widgets, clip stack and tooltips.

use core::any::Any;
use core::fmt;

use hashbrown::HashMap;
use kurbo::{Point, Rect};
use thicket_clip::ClipStack;
use thicket_focus::{FocusFlags, FocusNode, FocusTree, LeafNavigation, Navigation, NodeId, NodeKind};
use thicket_tooltip::{DwellTarget, TooltipConfig, TooltipQueue, TooltipSender, TooltipTimer};

use crate::events::Resolution;
use crate::input::{Key, Modifiers, MouseButton, key_navigation};
use crate::option_list::OptionList;
use crate::options::Translate;
use crate::overlay::{draw_scrollbar, draw_tooltip};
use crate::surface::{Background, Color, Surface, draw_centered_text};
use crate::widget::{RenderCx, Widget, WidgetState};

/// Screen behavior settings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScreenConfig {
    /// Re-enter from the other end when focus escapes the screen.
    pub wrap_focus: bool,
    /// Logical units scrolled per wheel notch.
    pub scroll_step: f64,
    /// Fill drawn behind every widget.
    pub background: Option<Background>,
    /// Tooltip timing for every widget on the screen.
    pub tooltip: TooltipConfig,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            wrap_focus: false,
            scroll_step: 12.0,
            background: Some(Background::new(Color(0xC010_1010))),
            tooltip: TooltipConfig::default(),
        }
    }
}

impl ScreenConfig {
    /// Set [`wrap_focus`](Self::wrap_focus).
    #[must_use]
    pub fn with_wrap_focus(mut self, wrap: bool) -> Self {
        self.wrap_focus = wrap;
        self
    }

    /// Set [`scroll_step`](Self::scroll_step).
    #[must_use]
    pub fn with_scroll_step(mut self, step: f64) -> Self {
        self.scroll_step = step;
        self
    }

    /// Set or clear the background.
    #[must_use]
    pub fn with_background(mut self, background: Option<Background>) -> Self {
        self.background = background;
        self
    }

    /// Set the tooltip configuration.
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipConfig) -> Self {
        self.tooltip = tooltip;
        self
    }
}

struct Slot {
    widget: Box<dyn Widget>,
    timer: TooltipTimer,
}

/// One open UI screen.
///
/// The screen is the root [`NodeKind::Group`] of a [`FocusTree`]. Widgets are
/// leaves of that tree; option lists add [`NodeKind::List`] and
/// [`NodeKind::Row`] containers. Input arrives through
/// [`key_pressed`](Self::key_pressed), [`char_typed`](Self::char_typed),
/// [`mouse_clicked`](Self::mouse_clicked) and
/// [`mouse_scrolled`](Self::mouse_scrolled); [`render`](Self::render) draws a frame.
pub struct Screen {
    title: String,
    config: ScreenConfig,
    resolution: Resolution,
    tree: FocusTree,
    root: NodeId,
    widgets: HashMap<NodeId, Slot>,
    clip: ClipStack,
    tooltips: TooltipQueue,
    sender: TooltipSender,
    translator: Box<dyn Translate>,
}

impl fmt::Debug for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screen")
            .field("title", &self.title)
            .field("config", &self.config)
            .field("resolution", &self.resolution)
            .field("tree", &self.tree)
            .field("root", &self.root)
            .field("widgets", &self.widgets.len())
            .field("clip", &self.clip)
            .field("tooltips", &self.tooltips)
            .finish_non_exhaustive()
    }
}

impl Screen {
    /// Create an empty screen with the default configuration.
    pub fn new(title: impl Into<String>, resolution: Resolution) -> Self {
        Self::with_config(title, resolution, ScreenConfig::default())
    }

    /// Create an empty screen.
    pub fn with_config(title: impl Into<String>, resolution: Resolution, config: ScreenConfig) -> Self {
        let mut tree = FocusTree::new();
        let size = resolution.logical_size();
        let root = tree.insert(None, FocusNode::group(size.to_rect()));
        let tooltips = TooltipQueue::new();
        let sender = tooltips.sender();
        let title = title.into();
        tracing::debug!(%title, ?resolution, "screen created");
        Self {
            title,
            config,
            resolution,
            tree,
            root,
            widgets: HashMap::new(),
            clip: ClipStack::new(),
            tooltips,
            sender,
            translator: Box::new(|key: &str| key.to_owned()),
        }
    }

    /// Use `translator` for option labels. Defaults to showing raw keys.
    pub fn set_translator(&mut self, translator: impl Translate + 'static) {
        self.translator = Box::new(translator);
    }

    pub(crate) fn translator(&self) -> &dyn Translate {
        &*self.translator
    }

    /// The screen title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The screen's configuration.
    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    /// The root container.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The focus tree, for queries.
    pub fn tree(&self) -> &FocusTree {
        &self.tree
    }

    /// Current resolution.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Adopt a new resolution: the root container is resized to the logical screen.
    pub fn resize(&mut self, resolution: Resolution) {
        self.resolution = resolution;
        self.tree.set_rect(self.root, resolution.logical_size().to_rect());
        tracing::debug!(title = %self.title, ?resolution, "screen resized");
    }

    /// Add a container under `parent` (the root when `None`).
    pub fn add_group(&mut self, parent: Option<NodeId>, rect: Rect) -> NodeId {
        let parent = parent.unwrap_or(self.root);
        self.tree.insert(Some(parent), FocusNode::group(rect))
    }

    /// Add `widget` under `parent` (the root when `None`) occupying `rect`.
    pub fn add_widget(&mut self, parent: Option<NodeId>, rect: Rect, widget: impl Widget) -> NodeId {
        self.add_boxed_widget(parent.unwrap_or(self.root), rect, Box::new(widget))
    }

    pub(crate) fn add_boxed_widget(&mut self, parent: NodeId, rect: Rect, widget: Box<dyn Widget>) -> NodeId {
        let node = FocusNode::leaf(rect).with_flags(widget.focus_flags());
        let id = self.tree.insert(Some(parent), node);
        self.widgets.insert(
            id,
            Slot {
                widget,
                timer: TooltipTimer::new(self.config.tooltip),
            },
        );
        id
    }

    pub(crate) fn insert_node(&mut self, parent: NodeId, node: FocusNode) -> NodeId {
        self.tree.insert(Some(parent), node)
    }

    /// Add an empty, scrollable option list.
    pub fn add_option_list(&mut self, rect: Rect) -> OptionList<'_> {
        let list = self.tree.insert(Some(self.root), FocusNode::list(rect));
        OptionList::new(self, list)
    }

    /// Reopen an option list added earlier.
    pub fn option_list(&mut self, list: NodeId) -> Option<OptionList<'_>> {
        matches!(self.tree.kind(list), Some(NodeKind::List { .. })).then(|| OptionList::new(self, list))
    }

    /// Remove a node, its subtree, and their widgets.
    pub fn remove(&mut self, id: NodeId) {
        if id == self.root {
            return;
        }
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            self.widgets.remove(&node);
            stack.extend_from_slice(self.tree.children_of(node));
        }
        self.tree.remove(id);
    }

    /// The widget at `id`.
    pub fn widget(&self, id: NodeId) -> Option<&dyn Widget> {
        self.widgets.get(&id).map(|slot| &*slot.widget)
    }

    /// The widget at `id`, mutably.
    pub fn widget_mut(&mut self, id: NodeId) -> Option<&mut dyn Widget> {
        self.widgets.get_mut(&id).map(|slot| &mut *slot.widget)
    }

    /// The widget at `id` as a concrete type.
    pub fn widget_as<W: Widget>(&self, id: NodeId) -> Option<&W> {
        let widget: &dyn Any = self.widget(id)?;
        widget.downcast_ref()
    }

    /// The widget at `id` as a concrete type, mutably.
    pub fn widget_as_mut<W: Widget>(&mut self, id: NodeId) -> Option<&mut W> {
        let widget: &mut dyn Any = self.widget_mut(id)?;
        widget.downcast_mut()
    }

    /// The focused widget, if any.
    pub fn focused(&self) -> Option<NodeId> {
        self.tree
            .focused_leaf(self.root)
            .filter(|id| self.widgets.contains_key(id))
    }

    /// Focus `id` and every container above it.
    pub fn set_focus(&mut self, id: NodeId) {
        self.tree.focus(id);
        if let Some(list) = self.tree.parent_of(id).and_then(|p| self.enclosing_list(p)) {
            let row = self.tree.focused_child(list);
            if let Some(row) = row {
                self.tree.scroll_into_view(list, row);
            }
        }
    }

    /// Drop keyboard focus.
    pub fn clear_focus(&mut self) {
        self.tree.clear_focus(self.root);
    }

    /// Make hidden or disabled widgets unreachable and re-read widget flags.
    pub fn refresh_focus_flags(&mut self) {
        for (id, slot) in &self.widgets {
            let current = self.tree.flags(*id).unwrap_or_default();
            let mut flags = slot.widget.focus_flags();
            // Visibility is owned by the screen.
            flags.set(FocusFlags::VISIBLE, current.contains(FocusFlags::VISIBLE));
            self.tree.set_flags(*id, flags);
        }
    }

    /// Show or hide a node. Hidden nodes are neither drawn, hit, nor navigated to.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        if let Some(mut flags) = self.tree.flags(id) {
            flags.set(FocusFlags::VISIBLE, visible);
            self.tree.set_flags(id, flags);
        }
    }

    /// Move focus. Returns `false` when focus escaped the screen.
    pub fn navigate(&mut self, nav: Navigation) -> bool {
        self.refresh_focus_flags();
        let mut hooks = WidgetHooks {
            widgets: &mut self.widgets,
        };
        let mut moved = self.tree.navigate_with(self.root, nav, &mut hooks);
        if !moved && self.config.wrap_focus {
            moved = self.tree.navigate_with(self.root, nav, &mut hooks);
        }
        tracing::trace!(?nav, moved, focused = ?self.tree.focused_leaf(self.root), "screen navigation");
        moved
    }

    /// Route a key press: navigation keys move focus, others go to the focused widget.
    pub fn key_pressed(&mut self, key: Key, modifiers: Modifiers) -> bool {
        if let Some(nav) = key_navigation(key, modifiers) {
            return self.navigate(nav);
        }
        let Some(id) = self.focused() else {
            return false;
        };
        self.widgets
            .get_mut(&id)
            .is_some_and(|slot| slot.widget.key_pressed(key, modifiers))
    }

    /// Route a typed character to the focused widget.
    pub fn char_typed(&mut self, ch: char) -> bool {
        let Some(id) = self.focused() else {
            return false;
        };
        self.widgets
            .get_mut(&id)
            .is_some_and(|slot| slot.widget.char_typed(ch))
    }

    /// Focus and click the widget under `pointer`.
    pub fn mouse_clicked(&mut self, pointer: Point, button: MouseButton) -> bool {
        self.refresh_focus_flags();
        let Some(hit) = self.tree.hit_test(self.root, pointer) else {
            return false;
        };
        let Some(id) = self.widget_at_or_above(hit) else {
            return false;
        };
        let enabled = self
            .tree
            .flags(id)
            .is_some_and(|flags| flags.contains(FocusFlags::ENABLED));
        if !enabled {
            return false;
        }
        self.set_focus(id);
        let Some(state) = self.widget_state(id, pointer) else {
            return false;
        };
        self.widgets
            .get_mut(&id)
            .is_some_and(|slot| slot.widget.mouse_clicked(pointer, button, &state))
    }

    /// Scroll the list under `pointer` by `notches` (positive scrolls up).
    pub fn mouse_scrolled(&mut self, pointer: Point, notches: f64) -> bool {
        let Some(hit) = self.tree.hit_test(self.root, pointer) else {
            return false;
        };
        let Some(list) = self.enclosing_list(hit) else {
            return false;
        };
        let before = self.tree.scroll_offset(list);
        self.tree
            .set_scroll_offset(list, before - notches * self.config.scroll_step);
        self.tree.scroll_offset(list) != before
    }

    /// Delay or resume drawing queued tooltips, for hosts that paint an extra layer first.
    pub fn set_tooltips_delayed(&mut self, delayed: bool) {
        self.tooltips.set_delayed(delayed);
    }

    /// Draw queued tooltips now. Used together with [`set_tooltips_delayed`](Self::set_tooltips_delayed).
    pub fn render_tooltips(&mut self, surface: &mut dyn Surface) -> usize {
        let size = self.resolution.logical_size();
        self.tooltips
            .render_all(|tooltip| draw_tooltip(surface, &tooltip, size))
    }

    /// A producer handle for this screen's tooltip queue.
    pub fn tooltip_sender(&self) -> TooltipSender {
        self.tooltips.sender()
    }

    /// Draw one frame.
    ///
    /// Pushes the GUI scale, draws the background, widgets (lists clipped to their
    /// bounds), the title, and finally the tooltips that came due this frame.
    pub fn render(&mut self, surface: &mut dyn Surface, pointer: Point, now_ms: u64, delta: f32) {
        let resolution = self.resolution;
        let size = resolution.logical_size();
        {
            let mut pass = self.clip.scaled(resolution.scale_factor);
            pass.apply(surface, resolution.height);
            let mut cx = RenderCx::new(surface, &mut pass, resolution.height, pointer, delta);
            if let Some(background) = &self.config.background {
                background.render(cx.surface, size.to_rect());
            }
            let mut frame = Frame {
                tree: &self.tree,
                widgets: &mut self.widgets,
                sender: &self.sender,
                now_ms,
            };
            frame.render_node(self.root, &mut cx);
            if !self.title.is_empty() {
                draw_centered_text(cx.surface, &self.title, size.width / 2.0, 8.0, Color::WHITE);
            }
            self.tooltips
                .render_all(|tooltip| draw_tooltip(cx.surface, &tooltip, size));
        }
        debug_assert_eq!(self.clip.depth(), 0, "unbalanced clip stack after render");
    }

    fn widget_at_or_above(&self, mut id: NodeId) -> Option<NodeId> {
        loop {
            if self.widgets.contains_key(&id) {
                return Some(id);
            }
            id = self.tree.parent_of(id)?;
        }
    }

    fn enclosing_list(&self, mut id: NodeId) -> Option<NodeId> {
        loop {
            if let Some(NodeKind::List { .. }) = self.tree.kind(id) {
                return Some(id);
            }
            id = self.tree.parent_of(id)?;
        }
    }

    fn widget_state(&self, id: NodeId, pointer: Point) -> Option<WidgetState> {
        let rect = self.tree.world_rect(id)?;
        Some(WidgetState {
            id,
            rect,
            focused: self.tree.is_focused(id),
            hovered: rect.contains(pointer),
        })
    }
}

/// Lets focused widgets consume navigation (for example a text cursor).
struct WidgetHooks<'a> {
    widgets: &'a mut HashMap<NodeId, Slot>,
}

impl LeafNavigation for WidgetHooks<'_> {
    fn navigate_within(&mut self, leaf: NodeId, nav: Navigation) -> bool {
        self.widgets
            .get_mut(&leaf)
            .is_some_and(|slot| slot.widget.navigate_within(nav))
    }
}

struct Frame<'a> {
    tree: &'a FocusTree,
    widgets: &'a mut HashMap<NodeId, Slot>,
    sender: &'a TooltipSender,
    now_ms: u64,
}

impl Frame<'_> {
    fn render_node(&mut self, id: NodeId, cx: &mut RenderCx<'_>) {
        let tree = self.tree;
        let (Some(flags), Some(rect)) = (tree.flags(id), tree.world_rect(id)) else {
            return;
        };
        if !flags.contains(FocusFlags::VISIBLE) || cx.clip().is_clipped_out(rect) {
            return;
        }

        if let Some(slot) = self.widgets.get_mut(&id) {
            let state = WidgetState {
                id,
                rect,
                focused: tree.is_focused(id),
                hovered: rect.contains(cx.pointer) && cx.is_visible_point(cx.pointer),
            };
            slot.widget.render(cx, &state);
            let target = DwellTarget {
                rect,
                visible: true,
                hovered: state.hovered,
                focused: state.focused,
                text: slot.widget.tooltip(),
            };
            slot.timer.update(self.now_ms, &target, cx.pointer, self.sender);
        }

        let children = tree.children_of(id);
        if children.is_empty() {
            return;
        }
        if let Some(NodeKind::List { scroll_offset, .. }) = tree.kind(id) {
            let max_scroll = tree.max_scroll(id);
            cx.with_clip(rect, |cx| {
                for &child in children {
                    self.render_node(child, cx);
                }
            });
            draw_scrollbar(cx.surface, rect, scroll_offset, max_scroll);
        } else {
            for &child in children {
                self.render_node(child, cx);
            }
        }
    }
}
