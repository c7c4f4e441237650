//! Browser side effects of the navigation bar.
//!
//! Only compiled for the hydrated build. Every call here is fallible in the
//! DOM sense; failures are reported as [`DomError`] and logged by the caller,
//! never propagated into the state machine.

use leptos::{
    html::{Audio, Div},
    logging,
    prelude::*,
    task::spawn_local,
};
use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlElement;

use super::state::NavAction;
use crate::{
    animation::{Animator, StyleFrame},
    config::{NAV_EASING, NavbarConfig, OVERLAY_EASING, nav_frame, overlay_start_frame},
};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("{0} element is not mounted")]
    Missing(&'static str),
    #[error("failed to write style `{property}`: {detail}")]
    Style {
        property: &'static str,
        detail: String,
    },
    #[error("media call rejected: {0}")]
    Media(String),
}

fn js_detail(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Writes the transform and opacity of `frame` onto `el`.
pub fn apply_frame(el: &HtmlElement, frame: &StyleFrame) -> Result<(), DomError> {
    let style = el.style();
    style
        .set_property("transform", &frame.transform())
        .map_err(|e| DomError::Style {
            property: "transform",
            detail: js_detail(&e),
        })?;
    style
        .set_property("opacity", &frame.opacity_css())
        .map_err(|e| DomError::Style {
            property: "opacity",
            detail: js_detail(&e),
        })
}

/// Handles to everything the effect layer mutates.
#[derive(Clone)]
pub struct NavEffects {
    nav: NodeRef<Div>,
    overlay: NodeRef<Div>,
    audio: NodeRef<Audio>,
    nav_animator: Animator,
    overlay_animator: Animator,
    config: NavbarConfig,
}

impl NavEffects {
    pub fn new(
        nav: NodeRef<Div>,
        overlay: NodeRef<Div>,
        audio: NodeRef<Audio>,
        config: NavbarConfig,
    ) -> Self {
        Self {
            nav,
            overlay,
            audio,
            nav_animator: Animator::new(nav_frame(true)),
            overlay_animator: Animator::new(overlay_start_frame()),
            config,
        }
    }

    /// Performs `action`. On mount the header jumps to its target instead of
    /// tweening there.
    pub fn apply(&self, action: NavAction, mounting: bool) -> Result<(), DomError> {
        match action {
            NavAction::AnimateNav { visible } => {
                let el: HtmlElement = self.nav.get_untracked().ok_or(DomError::Missing("nav"))?.into();
                if mounting {
                    self.nav_animator.set(&el, nav_frame(visible))
                } else {
                    self.nav_animator
                        .to(el, nav_frame(visible), self.config.nav_tween(), NAV_EASING);
                    Ok(())
                }
            }
            NavAction::PlayAudio => self.play(),
            NavAction::PauseAudio => {
                let audio = self.audio.get_untracked().ok_or(DomError::Missing("audio"))?;
                audio.pause().map_err(|e| DomError::Media(js_detail(&e)))
            }
            NavAction::RevealOverlay => {
                // The overlay mounts in the same tick the flag flips; wait a
                // frame so the node ref is populated.
                let this = self.clone();
                request_animation_frame(move || {
                    if let Err(err) = this.reveal_overlay() {
                        logging::warn!("overlay entry skipped: {err}");
                    }
                });
                Ok(())
            }
        }
    }

    fn reveal_overlay(&self) -> Result<(), DomError> {
        let el: HtmlElement = self
            .overlay
            .get_untracked()
            .ok_or(DomError::Missing("overlay"))?
            .into();
        self.overlay_animator.from_to(
            el,
            overlay_start_frame(),
            StyleFrame::default(),
            self.config.overlay_tween(),
            OVERLAY_EASING,
        );
        Ok(())
    }

    fn play(&self) -> Result<(), DomError> {
        let audio = self.audio.get_untracked().ok_or(DomError::Missing("audio"))?;
        let promise = audio.play().map_err(|e| DomError::Media(js_detail(&e)))?;
        // Autoplay policies reject without a user gesture; the flags stay as
        // toggled either way.
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                logging::warn!("{}", DomError::Media(js_detail(&err)));
            }
        });
        Ok(())
    }
}
