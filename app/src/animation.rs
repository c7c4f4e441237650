//! A small tween engine for the handful of style properties the navigation
//! bar animates.
//!
//! The maths ([`Easing`], [`StyleFrame`], [`Tween`]) is plain Rust and runs
//! anywhere. The browser driver, [`Animator`], only exists in the hydrated
//! build and pushes frames through `requestAnimationFrame`.

use core::time::Duration;

/// Easing curves, named after their GSAP equivalents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out.
    #[default]
    Power1Out,
    /// Cubic ease-out.
    Power2Out,
}

impl Easing {
    /// Maps linear progress `t` onto the curve. `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power1Out => 1.0 - (1.0 - t).powi(2),
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// The animatable properties of an element at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleFrame {
    /// Vertical translation in pixels.
    pub y: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl Default for StyleFrame {
    fn default() -> Self {
        Self {
            y: 0.0,
            opacity: 1.0,
            scale: 1.0,
        }
    }
}

impl StyleFrame {
    #[must_use]
    pub fn lerp(&self, to: &Self, progress: f64) -> Self {
        let mix = |a: f64, b: f64| (b - a).mul_add(progress, a);
        Self {
            y: mix(self.y, to.y),
            opacity: mix(self.opacity, to.opacity),
            scale: mix(self.scale, to.scale),
        }
    }

    /// Value for the CSS `transform` property.
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translateY({:.2}px) scale({:.4})", self.y, self.scale)
    }

    /// Value for the CSS `opacity` property.
    #[must_use]
    pub fn opacity_css(&self) -> String {
        format!("{:.4}", self.opacity.clamp(0.0, 1.0))
    }

    /// Inline `style` attribute value for elements rendered in this frame.
    #[must_use]
    pub fn to_style(&self) -> String {
        format!(
            "transform: {}; opacity: {};",
            self.transform(),
            self.opacity_css()
        )
    }
}

/// A single interpolation between two frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: StyleFrame,
    pub to: StyleFrame,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    #[must_use]
    pub const fn new(from: StyleFrame, to: StyleFrame, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
        }
    }

    /// Linear progress in `[0, 1]` after `elapsed`.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> StyleFrame {
        let progress = self.progress(elapsed);
        if progress >= 1.0 {
            return self.to;
        }
        self.from.lerp(&self.to, self.easing.apply(progress))
    }

    #[must_use]
    pub fn is_done(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

#[cfg(feature = "hydrate")]
pub use driver::Animator;

#[cfg(feature = "hydrate")]
mod driver {
    use super::{Easing, StyleFrame, Tween};
    use core::{cell::Cell, time::Duration};
    use leptos::{logging, prelude::*};
    use std::rc::Rc;
    use web_sys::HtmlElement;

    use crate::navbar::dom::{DomError, apply_frame};

    fn now_ms() -> f64 {
        window()
            .performance()
            .map_or_else(js_sys::Date::now, |p| p.now())
    }

    /// Drives tweens on one element.
    ///
    /// Starting a tween bumps the generation counter; a frame loop that sees
    /// a newer generation than its own stops, so the latest call always wins.
    #[derive(Clone)]
    pub struct Animator {
        generation: Rc<Cell<u64>>,
        current: Rc<Cell<StyleFrame>>,
    }

    impl Animator {
        #[must_use]
        pub fn new(initial: StyleFrame) -> Self {
            Self {
                generation: Rc::new(Cell::new(0)),
                current: Rc::new(Cell::new(initial)),
            }
        }

        /// Last frame written to the element.
        #[must_use]
        pub fn current(&self) -> StyleFrame {
            self.current.get()
        }

        /// Writes `frame` immediately and cancels any running tween.
        pub fn set(&self, el: &HtmlElement, frame: StyleFrame) -> Result<(), DomError> {
            self.generation.set(self.generation.get().wrapping_add(1));
            self.current.set(frame);
            apply_frame(el, &frame)
        }

        /// Tweens from wherever the element currently is towards `to`.
        pub fn to(&self, el: HtmlElement, to: StyleFrame, duration: Duration, easing: Easing) {
            self.run(el, Tween::new(self.current(), to, duration, easing));
        }

        /// Tweens from an explicit starting frame.
        pub fn from_to(
            &self,
            el: HtmlElement,
            from: StyleFrame,
            to: StyleFrame,
            duration: Duration,
            easing: Easing,
        ) {
            self.run(el, Tween::new(from, to, duration, easing));
        }

        fn run(&self, el: HtmlElement, tween: Tween) {
            let generation = self.generation.get().wrapping_add(1);
            self.generation.set(generation);
            if let Err(err) = apply_frame(&el, &tween.from) {
                logging::warn!("tween aborted before first frame: {err}");
                return;
            }
            self.current.set(tween.from);
            self.schedule(el, tween, now_ms(), generation);
        }

        fn schedule(&self, el: HtmlElement, tween: Tween, started_at: f64, generation: u64) {
            let this = self.clone();
            request_animation_frame(move || {
                if this.generation.get() != generation {
                    return;
                }
                let elapsed = Duration::from_secs_f64(((now_ms() - started_at) / 1000.0).max(0.0));
                let frame = tween.sample(elapsed);
                if let Err(err) = apply_frame(&el, &frame) {
                    logging::warn!("tween stopped: {err}");
                    return;
                }
                this.current.set(frame);
                if !tween.is_done(elapsed) {
                    this.schedule(el, tween, started_at, generation);
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::Power1Out, Easing::Power2Out] {
            assert!(easing.apply(0.0).abs() < EPS, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < EPS, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_easing_clamps_input() {
        assert!((Easing::Power2Out.apply(3.0) - 1.0).abs() < EPS);
        assert!(Easing::Power2Out.apply(-1.0).abs() < EPS);
    }

    #[test]
    fn test_easing_is_monotone() {
        for easing in [Easing::Power1Out, Easing::Power2Out] {
            let mut last = 0.0;
            for step in 1..=100 {
                let value = easing.apply(f64::from(step) / 100.0);
                assert!(value >= last, "{easing:?} decreased at step {step}");
                last = value;
            }
        }
    }

    #[test]
    fn test_ease_out_leads_linear() {
        assert!(Easing::Power1Out.apply(0.5) > 0.5);
        assert!(Easing::Power2Out.apply(0.5) > Easing::Power1Out.apply(0.5));
    }

    #[test]
    fn test_tween_samples_between_endpoints() {
        let from = StyleFrame {
            y: 0.0,
            opacity: 1.0,
            scale: 1.0,
        };
        let to = StyleFrame {
            y: -100.0,
            opacity: 0.0,
            scale: 1.0,
        };
        let tween = Tween::new(from, to, Duration::from_millis(200), Easing::Linear);

        assert_eq!(tween.sample(Duration::ZERO), from);
        let mid = tween.sample(Duration::from_millis(100));
        assert!((mid.y + 50.0).abs() < EPS);
        assert!((mid.opacity - 0.5).abs() < EPS);
        assert_eq!(tween.sample(Duration::from_millis(500)), to);
        assert!(tween.is_done(Duration::from_millis(200)));
        assert!(!tween.is_done(Duration::from_millis(199)));
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let to = StyleFrame {
            y: 12.0,
            opacity: 0.3,
            scale: 2.0,
        };
        let tween = Tween::new(StyleFrame::default(), to, Duration::ZERO, Easing::Power2Out);
        assert_eq!(tween.sample(Duration::ZERO), to);
    }

    #[test]
    fn test_style_rendering() {
        let frame = StyleFrame {
            y: -100.0,
            opacity: 0.0,
            scale: 0.95,
        };
        assert_eq!(frame.transform(), "translateY(-100.00px) scale(0.9500)");
        assert_eq!(frame.opacity_css(), "0.0000");
        assert_eq!(
            frame.to_style(),
            "transform: translateY(-100.00px) scale(0.9500); opacity: 0.0000;"
        );
    }
}
