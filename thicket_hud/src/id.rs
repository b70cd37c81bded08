// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

/// Namespaced identifier for HUDs and HUD components, displayed as `namespace:path`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HudId {
    namespace: Cow<'static, str>,
    path: Cow<'static, str>,
}

impl HudId {
    /// Create an identifier.
    pub fn new(namespace: impl Into<Cow<'static, str>>, path: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    /// The owning mod or application namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The path within the namespace.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Key used to look up the component's display name: `<namespace>.hud.component.<path>`.
    pub fn translation_key(&self) -> String {
        alloc::format!("{}.hud.component.{}", self.namespace, self.path)
    }
}

impl fmt::Display for HudId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}
