// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scope guards that keep the clip stack balanced.

use core::ops::{Deref, DerefMut};

use crate::stack::ClipStack;

/// Pops one clip region when dropped.
///
/// Derefs to the underlying [`ClipStack`], so nested regions are pushed through
/// the guard and unwind in reverse order.
#[derive(Debug)]
#[must_use = "the region is popped as soon as the guard is dropped"]
pub struct ClipGuard<'a> {
    stack: &'a mut ClipStack,
}

impl<'a> ClipGuard<'a> {
    pub(crate) fn new(stack: &'a mut ClipStack) -> Self {
        Self { stack }
    }
}

impl Deref for ClipGuard<'_> {
    type Target = ClipStack;

    fn deref(&self) -> &ClipStack {
        self.stack
    }
}

impl DerefMut for ClipGuard<'_> {
    fn deref_mut(&mut self) -> &mut ClipStack {
        self.stack
    }
}

impl Drop for ClipGuard<'_> {
    fn drop(&mut self) {
        self.stack.pop_region();
    }
}

/// Pops one scale factor when dropped.
#[derive(Debug)]
#[must_use = "the scale factor is popped as soon as the guard is dropped"]
pub struct ScaleGuard<'a> {
    stack: &'a mut ClipStack,
}

impl<'a> ScaleGuard<'a> {
    pub(crate) fn new(stack: &'a mut ClipStack) -> Self {
        Self { stack }
    }
}

impl Deref for ScaleGuard<'_> {
    type Target = ClipStack;

    fn deref(&self) -> &ClipStack {
        self.stack
    }
}

impl DerefMut for ScaleGuard<'_> {
    fn deref_mut(&mut self) -> &mut ClipStack {
        self.stack
    }
}

impl Drop for ScaleGuard<'_> {
    fn drop(&mut self) {
        self.stack.pop_scale_factor();
    }
}
