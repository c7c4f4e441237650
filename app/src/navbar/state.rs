//! Pure state machine behind the navigation bar.
//!
//! The view keeps a single [`NavState`] in a signal. User input and scroll
//! notifications are turned into [`NavEvent`]s and folded through
//! [`NavState::reduce`]. The effect layer then asks [`actions`] which
//! imperative side effects the transition needs, so nothing in this module
//! touches the DOM.

/// Local state of one mounted navigation bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavState {
    pub menu_open: bool,
    pub audio_playing: bool,
    pub indicator_active: bool,
    pub nav_visible: bool,
    pub last_scroll_y: f64,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            menu_open: false,
            audio_playing: false,
            indicator_active: false,
            nav_visible: true,
            last_scroll_y: 0.0,
        }
    }
}

/// Everything the navigation bar reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
    /// The window reported a new vertical scroll offset.
    Scrolled(f64),
    ToggleAudio,
    ToggleMenu,
    /// One of the overlay entries was activated, by index.
    LinkActivated(usize),
}

/// Result of comparing two consecutive scroll offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOutcome {
    pub visible: bool,
    pub floating: bool,
}

/// Decides header visibility from the previous and current scroll offsets.
///
/// Offset zero always wins and collapses to the resting state, then the
/// direction of travel decides: moving down hides the bar, anything else
/// shows it.
#[must_use]
pub fn scroll_outcome(previous: f64, current: f64) -> ScrollOutcome {
    if current == 0.0 {
        ScrollOutcome {
            visible: true,
            floating: false,
        }
    } else if current > previous {
        ScrollOutcome {
            visible: false,
            floating: true,
        }
    } else {
        ScrollOutcome {
            visible: true,
            floating: true,
        }
    }
}

impl NavState {
    /// Returns the state that follows `self` once `event` has been handled.
    #[must_use]
    pub fn reduce(&self, event: NavEvent) -> Self {
        match event {
            NavEvent::Scrolled(offset) => {
                if !offset.is_finite() {
                    return *self;
                }
                // Elastic overscroll reports negative offsets.
                let offset = offset.max(0.0);
                let outcome = scroll_outcome(self.last_scroll_y, offset);
                Self {
                    nav_visible: outcome.visible,
                    last_scroll_y: offset,
                    ..*self
                }
            }
            NavEvent::ToggleAudio => {
                let playing = !self.audio_playing;
                Self {
                    audio_playing: playing,
                    indicator_active: playing,
                    ..*self
                }
            }
            NavEvent::ToggleMenu => Self {
                menu_open: !self.menu_open,
                ..*self
            },
            NavEvent::LinkActivated(_) => Self {
                menu_open: false,
                ..*self
            },
        }
    }

    /// Whether the floating treatment applies to the header.
    ///
    /// Derived from the last evaluated offset so it can never disagree with
    /// the visibility branch that produced it.
    #[must_use]
    pub fn floating(&self) -> bool {
        self.last_scroll_y != 0.0
    }
}

/// Imperative work the DOM layer performs after a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Tween the header towards its shown (`true`) or hidden position.
    AnimateNav { visible: bool },
    PlayAudio,
    PauseAudio,
    /// One-shot fade and scale in of the freshly opened overlay.
    RevealOverlay,
}

/// Diffs two states into the side effects the transition requires.
///
/// Unchanged fields produce nothing, so re-running the effect without a state
/// change is a no-op.
#[must_use]
pub fn actions(prev: &NavState, next: &NavState) -> Vec<NavAction> {
    let mut out = Vec::new();
    if prev.nav_visible != next.nav_visible {
        out.push(NavAction::AnimateNav {
            visible: next.nav_visible,
        });
    }
    if prev.audio_playing != next.audio_playing {
        out.push(if next.audio_playing {
            NavAction::PlayAudio
        } else {
            NavAction::PauseAudio
        });
    }
    if !prev.menu_open && next.menu_open {
        out.push(NavAction::RevealOverlay);
    }
    out
}

/// Side effects needed when the bar first mounts with `state`.
#[must_use]
pub fn mount_actions(state: &NavState) -> Vec<NavAction> {
    let mut out = vec![NavAction::AnimateNav {
        visible: state.nav_visible,
    }];
    out.push(if state.audio_playing {
        NavAction::PlayAudio
    } else {
        NavAction::PauseAudio
    });
    if state.menu_open {
        out.push(NavAction::RevealOverlay);
    }
    out
}

/// Scroll event replaying the offset a page was loaded at.
///
/// The server always renders at offset 0, so this is only dispatched once the
/// hydrated view is live; the offset then goes through the normal diff.
#[must_use]
pub fn restored_scroll(offset: f64) -> Option<NavEvent> {
    (offset.is_finite() && offset > 0.0).then_some(NavEvent::Scrolled(offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll_through(offsets: &[f64]) -> Vec<NavState> {
        let mut state = NavState::default();
        offsets
            .iter()
            .map(|&y| {
                state = state.reduce(NavEvent::Scrolled(y));
                state
            })
            .collect()
    }

    #[test]
    fn test_default_state_is_resting() {
        let state = NavState::default();
        assert!(state.nav_visible);
        assert!(!state.floating());
        assert!(!state.menu_open);
        assert!(!state.audio_playing);
        assert!(!state.indicator_active);
    }

    #[test]
    fn test_scroll_outcome_branches() {
        assert_eq!(
            scroll_outcome(120.0, 0.0),
            ScrollOutcome {
                visible: true,
                floating: false
            }
        );
        assert_eq!(
            scroll_outcome(10.0, 40.0),
            ScrollOutcome {
                visible: false,
                floating: true
            }
        );
        assert_eq!(
            scroll_outcome(40.0, 10.0),
            ScrollOutcome {
                visible: true,
                floating: true
            }
        );
    }

    #[test]
    fn test_scroll_scenario_visibility_and_floating() {
        let states = scroll_through(&[0.0, 50.0, 30.0, 30.0, 0.0]);
        let visible: Vec<bool> = states.iter().map(|s| s.nav_visible).collect();
        let floating: Vec<bool> = states.iter().map(NavState::floating).collect();
        assert_eq!(visible, vec![true, false, true, true, true]);
        assert_eq!(floating, vec![false, true, true, true, false]);
    }

    #[test]
    fn test_scroll_records_last_offset() {
        let state = NavState::default().reduce(NavEvent::Scrolled(75.5));
        assert!((state.last_scroll_y - 75.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_offset_is_treated_as_top() {
        let state = NavState::default()
            .reduce(NavEvent::Scrolled(200.0))
            .reduce(NavEvent::Scrolled(-12.0));
        assert!(state.nav_visible);
        assert!(!state.floating());
        assert!(state.last_scroll_y.abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_finite_offset_is_ignored() {
        let before = NavState::default().reduce(NavEvent::Scrolled(200.0));
        assert_eq!(before.reduce(NavEvent::Scrolled(f64::NAN)), before);
        assert_eq!(before.reduce(NavEvent::Scrolled(f64::INFINITY)), before);
    }

    #[test]
    fn test_audio_flags_never_diverge() {
        let mut state = NavState::default();
        for _ in 0..5 {
            state = state.reduce(NavEvent::ToggleAudio);
            assert_eq!(state.audio_playing, state.indicator_active);
        }
        assert!(state.audio_playing);
    }

    #[test]
    fn test_menu_toggle_and_link_close() {
        let open = NavState::default().reduce(NavEvent::ToggleMenu);
        assert!(open.menu_open);
        assert!(!open.reduce(NavEvent::ToggleMenu).menu_open);
        for idx in 0..4 {
            assert!(!open.reduce(NavEvent::LinkActivated(idx)).menu_open);
        }
    }

    #[test]
    fn test_link_activation_on_closed_menu_is_noop() {
        let state = NavState::default();
        assert_eq!(state.reduce(NavEvent::LinkActivated(2)), state);
    }

    #[test]
    fn test_actions_only_on_change() {
        let state = NavState::default();
        assert!(actions(&state, &state).is_empty());

        let hidden = state.reduce(NavEvent::Scrolled(10.0));
        assert_eq!(
            actions(&state, &hidden),
            vec![NavAction::AnimateNav { visible: false }]
        );
        // Same direction again: still hidden, nothing to animate.
        let further = hidden.reduce(NavEvent::Scrolled(20.0));
        assert!(actions(&hidden, &further).is_empty());
    }

    #[test]
    fn test_overlay_reveals_once_per_opening() {
        let closed = NavState::default();
        let open = closed.reduce(NavEvent::ToggleMenu);
        assert_eq!(actions(&closed, &open), vec![NavAction::RevealOverlay]);
        assert!(actions(&open, &open).is_empty());
        assert!(actions(&open, &open.reduce(NavEvent::LinkActivated(0))).is_empty());
    }

    #[test]
    fn test_audio_actions() {
        let paused = NavState::default();
        let playing = paused.reduce(NavEvent::ToggleAudio);
        assert_eq!(actions(&paused, &playing), vec![NavAction::PlayAudio]);
        assert_eq!(actions(&playing, &paused), vec![NavAction::PauseAudio]);
    }

    #[test]
    fn test_mount_actions_sync_everything() {
        let acts = mount_actions(&NavState::default());
        assert_eq!(
            acts,
            vec![
                NavAction::AnimateNav { visible: true },
                NavAction::PauseAudio
            ]
        );
    }

    #[test]
    fn test_restored_scroll_only_for_positive_offsets() {
        assert_eq!(restored_scroll(0.0), None);
        assert_eq!(restored_scroll(-12.0), None);
        assert_eq!(restored_scroll(f64::NAN), None);
        assert_eq!(restored_scroll(300.0), Some(NavEvent::Scrolled(300.0)));
    }

    #[test]
    fn test_load_mid_page_floats_after_mount() {
        let mounted = NavState::default();
        assert_eq!(
            mount_actions(&mounted),
            vec![NavAction::AnimateNav { visible: true }, NavAction::PauseAudio]
        );
        assert!(!mounted.floating());

        let restored = restored_scroll(300.0).map_or(mounted, |event| mounted.reduce(event));
        assert!(restored.floating());
        assert_eq!(
            actions(&mounted, &restored),
            vec![NavAction::AnimateNav { visible: false }]
        );
    }
}
