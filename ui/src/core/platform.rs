//! Platform detection and task spawning.

use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
    Mobile,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else if cfg!(any(target_os = "android", target_os = "ios")) {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

/// Spawn a detached future on the Dioxus runtime of the calling component.
pub fn spawn_future(fut: impl Future<Output = ()> + 'static) {
    let _task = dioxus::prelude::spawn(fut);
}
