// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

use crate::HudId;

/// Errors from HUD registration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HudError {
    /// A HUD with this identifier is already registered.
    #[error("HUD `{0}` is already registered")]
    Duplicate(HudId),

    /// The HUD already holds a component with this identifier.
    #[error("HUD `{hud}` already has a component `{component}`")]
    DuplicateComponent {
        /// The HUD being extended.
        hud: HudId,
        /// The component identifier that clashed.
        component: HudId,
    },
}
