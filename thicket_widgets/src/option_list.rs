// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use thicket_focus::{FocusNode, NodeId};

use crate::options::ConfigOption;
use crate::screen::Screen;

/// Height of one list row.
pub const ROW_HEIGHT: f64 = 24.0;
/// Height of a widget inside a row.
pub const ENTRY_HEIGHT: f64 = 20.0;
/// Width of a full-width entry.
pub const WIDE_WIDTH: f64 = 310.0;
/// Width of a half-width entry.
pub const NARROW_WIDTH: f64 = 150.0;

const TOP_PADDING: f64 = 4.0;
const ENTRY_INSET: f64 = 2.0;
const GAP: f64 = 10.0;

/// A scrollable list of option rows on a [`Screen`].
///
/// Each call appends one [`NodeKind::Row`](thicket_focus::NodeKind::Row) centred
/// in the list. Vertical arrows move between rows and return to the column last
/// used; horizontal arrows move within a row.
#[derive(Debug)]
pub struct OptionList<'a> {
    screen: &'a mut Screen,
    list: NodeId,
}

impl<'a> OptionList<'a> {
    pub(crate) fn new(screen: &'a mut Screen, list: NodeId) -> Self {
        Self { screen, list }
    }

    /// The list's node.
    pub fn id(&self) -> NodeId {
        self.list
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.screen.tree().children_of(self.list).len()
    }

    /// Whether the list has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a full-width row. Returns the widget's node.
    pub fn add_single(&mut self, option: &dyn ConfigOption) -> NodeId {
        let (row, y, center) = self.next_row();
        let rect = Rect::new(center - WIDE_WIDTH / 2.0, y, center + WIDE_WIDTH / 2.0, y + ENTRY_HEIGHT);
        self.add_entry(row, rect, option)
    }

    /// Append a row with one half-width entry in the middle.
    pub fn add_small_single(&mut self, option: &dyn ConfigOption) -> NodeId {
        let (row, y, center) = self.next_row();
        let rect = Rect::new(center - NARROW_WIDTH / 2.0, y, center + NARROW_WIDTH / 2.0, y + ENTRY_HEIGHT);
        self.add_entry(row, rect, option)
    }

    /// Append a row with two half-width entries. `right` may be empty.
    pub fn add_pair(&mut self, left: &dyn ConfigOption, right: Option<&dyn ConfigOption>) -> [Option<NodeId>; 2] {
        let (row, y, center) = self.next_row();
        let half = (WIDE_WIDTH - GAP) / 2.0;
        let left_x = center - WIDE_WIDTH / 2.0;
        let right_x = left_x + half + GAP;
        let left = self.add_entry(row, Rect::new(left_x, y, left_x + half, y + ENTRY_HEIGHT), left);
        let right = right.map(|option| {
            self.add_entry(row, Rect::new(right_x, y, right_x + half, y + ENTRY_HEIGHT), option)
        });
        [Some(left), right]
    }

    /// Append `options` two per row.
    pub fn add_all(&mut self, options: &[&dyn ConfigOption]) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(options.len());
        for pair in options.chunks(2) {
            let [left, right] = self.add_pair(pair[0], pair.get(1).copied());
            ids.extend(left);
            ids.extend(right);
        }
        ids
    }

    fn next_row(&mut self) -> (NodeId, f64, f64) {
        let tree = self.screen.tree();
        let bounds = tree.rect(self.list).unwrap_or_default();
        let rows = tree.children_of(self.list).len();
        let top = bounds.y0 + TOP_PADDING + rows as f64 * ROW_HEIGHT;
        let row = self.screen.insert_node(
            self.list,
            FocusNode::row(Rect::new(bounds.x0, top, bounds.x1, top + ROW_HEIGHT)),
        );
        (row, top + ENTRY_INSET, bounds.center().x.floor())
    }

    fn add_entry(&mut self, row: NodeId, rect: Rect, option: &dyn ConfigOption) -> NodeId {
        let widget = option.create_widget(self.screen.translator());
        tracing::trace!(key = option.key(), ?rect, "option entry added");
        self.screen.add_boxed_widget(row, rect, widget)
    }
}
