//! Static content and tunables for the navigation bar.
//!
//! Defaults reproduce the stock look. The server may override them from the
//! environment and hand the result to the view as Leptos context; the view
//! embeds it as JSON so the hydrated client renders with the same values.

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::{Easing, StyleFrame};

/// One entry of the overlay menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub label: &'static str,
    pub hover_class: &'static str,
    /// In-page anchor the entry navigates to.
    pub link: &'static str,
}

impl MenuItem {
    /// Caption shown under the label while hovered.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("Discover more about {}.", self.label.to_lowercase())
    }
}

pub const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem {
        label: "ABOUT US",
        hover_class: "group-hover:text-black",
        link: "#about",
    },
    MenuItem {
        label: "WORKS",
        hover_class: "group-hover:text-black",
        link: "#features",
    },
    MenuItem {
        label: "SERVICES",
        hover_class: "group-hover:text-black",
        link: "#story",
    },
    MenuItem {
        label: "CONTACT US",
        hover_class: "group-hover:text-black",
        link: "#contact",
    },
];

/// Id of the element carrying the server's [`NavbarConfig`] to the client.
pub const CONFIG_ELEMENT_ID: &str = "navbar-config";

pub const NAV_HIDDEN_OFFSET_PX: f64 = -100.0;
pub const OVERLAY_START_SCALE: f64 = 0.95;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub logo_src: String,
    pub overlay_background_src: String,
    pub audio_src: String,
    pub banner_text: String,
    /// Header show/hide tween length in milliseconds.
    pub nav_tween_ms: u64,
    /// Overlay entry tween length in milliseconds.
    pub overlay_tween_ms: u64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            logo_src: "/img/logo.png".to_owned(),
            overlay_background_src: "/img/overlay-bg.jpg".to_owned(),
            audio_src: "/audio/loop.mp3".to_owned(),
            banner_text: "We make digital products for complex challenges: from mobile apps to enterprise systems.".to_owned(),
            nav_tween_ms: 200,
            overlay_tween_ms: 400,
        }
    }
}

impl NavbarConfig {
    /// Builds a config from `NAVBAR_*` environment variables, keeping the
    /// default for anything unset or empty.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let pick = |key: &str, fallback: String| {
            lookup(key).filter(|v| !v.trim().is_empty()).unwrap_or(fallback)
        };
        let millis = |key: &str, fallback: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(fallback)
        };
        Self {
            logo_src: pick("NAVBAR_LOGO", defaults.logo_src),
            overlay_background_src: pick("NAVBAR_OVERLAY_BG", defaults.overlay_background_src),
            audio_src: pick("NAVBAR_AUDIO_SRC", defaults.audio_src),
            banner_text: pick("NAVBAR_BANNER_TEXT", defaults.banner_text),
            nav_tween_ms: millis("NAVBAR_NAV_TWEEN_MS", defaults.nav_tween_ms),
            overlay_tween_ms: millis("NAVBAR_OVERLAY_TWEEN_MS", defaults.overlay_tween_ms),
        }
    }

    /// JSON for embedding in a `<script type="application/json">` element.
    ///
    /// `<` is escaped so no value can close the surrounding script tag.
    #[must_use]
    pub fn to_embedded_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_owned())
            .replace('<', "\\u003c")
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    #[must_use]
    pub const fn nav_tween(&self) -> Duration {
        Duration::from_millis(self.nav_tween_ms)
    }

    #[must_use]
    pub const fn overlay_tween(&self) -> Duration {
        Duration::from_millis(self.overlay_tween_ms)
    }
}

pub const NAV_EASING: Easing = Easing::Power1Out;
pub const OVERLAY_EASING: Easing = Easing::Power2Out;

/// Header frame for the given visibility.
#[must_use]
pub const fn nav_frame(visible: bool) -> StyleFrame {
    if visible {
        StyleFrame {
            y: 0.0,
            opacity: 1.0,
            scale: 1.0,
        }
    } else {
        StyleFrame {
            y: NAV_HIDDEN_OFFSET_PX,
            opacity: 0.0,
            scale: 1.0,
        }
    }
}

/// Frame the overlay starts its entry tween from.
#[must_use]
pub const fn overlay_start_frame() -> StyleFrame {
    StyleFrame {
        y: 0.0,
        opacity: 0.0,
        scale: OVERLAY_START_SCALE,
    }
}
