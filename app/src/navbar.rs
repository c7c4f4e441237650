//! This module defines the fixed navigation bar and its full-screen overlay
//! menu.
//!
//! The header hides while the reader scrolls down and comes back on the way
//! up. It also carries a background-audio toggle with a small bar
//! visualizer, and a menu button that opens a glass overlay listing the page
//! sections.
//!
//! All behaviour lives in [`state`]; the view only renders the current
//! [`NavState`] and feeds [`NavEvent`]s back in. Imperative work (tweens,
//! audio) is applied after render by the hydrate-only [`dom`] layer.

use icondata::{BsArrowRight, TiLocationArrow};
use leptos::{
    html::{Audio, Div, audio, script},
    prelude::*,
};

use crate::{
    animation::StyleFrame,
    components::{button, icons},
    config::{CONFIG_ELEMENT_ID, MENU_ITEMS, NavbarConfig, overlay_start_frame},
};

#[cfg(feature = "hydrate")]
pub mod dom;
pub mod state;

pub use state::{NavAction, NavEvent, NavState};

const GLASS_SHADOW: &str =
    "box-shadow: inset 0 1px 2px rgba(255,255,255,0.2), inset 0 -1px 2px rgba(0,0,0,0.15);";

/// Indices of the audio visualizer bars.
pub const INDICATOR_BARS: [u8; 4] = [1, 2, 3, 4];

/// Inline style staggering each visualizer bar.
#[must_use]
pub fn indicator_delay(bar: u8) -> String {
    format!("animation-delay: {:.1}s;", f64::from(bar) * 0.1)
}

/// Label of the menu button for the given overlay state.
#[must_use]
pub const fn menu_button_label(open: bool) -> &'static str {
    if open { "CLOSE" } else { "MENU" }
}

/// Inline style the overlay is first rendered with, so it stays invisible
/// until the entry tween takes over.
#[must_use]
pub fn overlay_style(start: &StyleFrame) -> String {
    format!("{GLASS_SHADOW} {}", start.to_style())
}

/// Inline style of the overlay banner.
#[must_use]
pub fn banner_style(background_src: &str) -> String {
    format!(
        "background-image: url('{background_src}'); background-size: cover; background-position: center;"
    )
}

/// Config the server embedded in the page, read back during hydration.
#[cfg(feature = "hydrate")]
fn embedded_config() -> Option<NavbarConfig> {
    let raw = document().get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()?;
    NavbarConfig::from_json(&raw)
        .inspect_err(|err| leptos::logging::warn!("ignoring embedded navbar config: {err}"))
        .ok()
}

#[cfg(not(feature = "hydrate"))]
const fn embedded_config() -> Option<NavbarConfig> {
    None
}

/// Renders the navigation bar.
///
/// The server provides [`NavbarConfig`] as context and embeds it in the page;
/// the client picks it up from there. Defaults apply when neither exists.
#[expect(clippy::too_many_lines)] // One view! tree for header and overlay.
pub fn component() -> impl IntoView {
    let config = use_context::<NavbarConfig>()
        .or_else(embedded_config)
        .unwrap_or_default();
    let state = RwSignal::new(NavState::default());

    #[cfg(feature = "ssr")]
    tracing::debug!(logo = %config.logo_src, audio = %config.audio_src, "rendering navbar");

    let dispatch = move |event: NavEvent| {
        let current = state.get_untracked();
        let next = current.reduce(event);
        if next != current {
            state.set(next);
        }
    };

    let menu_open = Memo::new(move |_| state.get().menu_open);
    let indicator_active = Memo::new(move |_| state.get().indicator_active);
    let floating = Memo::new(move |_| state.get().floating());

    let nav_ref = NodeRef::<Div>::new();
    let overlay_ref = NodeRef::<Div>::new();
    let audio_ref = NodeRef::<Audio>::new();

    #[cfg(feature = "hydrate")]
    {
        use leptos::logging;
        use state::{actions, mount_actions, restored_scroll};

        let read_scroll = move || window().scroll_y().ok();
        let effects = dom::NavEffects::new(nav_ref, overlay_ref, audio_ref, config.clone());
        Effect::new(move |prev: Option<NavState>| {
            let next = state.get();
            let pending = prev.map_or_else(|| mount_actions(&next), |prev| actions(&prev, &next));
            for action in pending {
                if let Err(err) = effects.apply(action, prev.is_none()) {
                    logging::warn!("navbar effect {action:?} failed: {err}");
                }
            }
            // First run is after hydration, so the class toggles see the
            // change from the server's offset 0.
            let restored = if prev.is_none() {
                read_scroll().and_then(restored_scroll)
            } else {
                None
            };
            if let Some(event) = restored {
                dispatch(event);
            }
            next
        });

        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            if let Some(y) = read_scroll() {
                dispatch(NavEvent::Scrolled(y));
            }
        });
        on_cleanup(move || handle.remove());
    }

    let overlay_bg = banner_style(&config.overlay_background_src);
    let overlay_initial = overlay_style(&overlay_start_frame());
    let banner_text = config.banner_text.clone();

    let config_json = script()
        .id(CONFIG_ELEMENT_ID)
        .attr("type", "application/json")
        .inner_html(config.to_embedded_json());

    view! {
        {config_json}
        <div
            node_ref=nav_ref
            class="fixed inset-x-0 top-4 z-50 h-16 border-none transition-all duration-700 sm:inset-x-6"
            class:floating-nav=move || floating.get()
        >
            <header class="absolute top-1/2 w-full -translate-y-1/2">
                <nav class="flex justify-between items-center p-4 size-full">
                    <div class="flex gap-7 items-center">
                        <img src=config.logo_src.clone() alt="logo" class="w-10"/>
                        {button::component(
                            "product-button",
                            "Products",
                            Some(TiLocationArrow),
                            "bg-blue-50 md:flex hidden items-center justify-center gap-1",
                        )}
                    </div>

                    <div class="flex gap-6 items-center">
                        <button
                            class="flex items-center space-x-0.5"
                            aria-label="Toggle background audio"
                            on:click=move |_| dispatch(NavEvent::ToggleAudio)
                        >
                            {audio()
                                .node_ref(audio_ref)
                                .class("hidden")
                                .src(config.audio_src.clone())
                                .attr("loop", true)}
                            {INDICATOR_BARS
                                .into_iter()
                                .map(|bar| {
                                    view! {
                                        <div
                                            class="indicator-line"
                                            class:active=move || indicator_active.get()
                                            style=indicator_delay(bar)
                                        />
                                    }
                                })
                                .collect_view()}
                        </button>

                        <button
                            class="flex gap-2 items-center py-2 px-4 text-sm bg-white rounded-full border shadow-sm transition-colors group hover:shadow-[4px_4px_0px_rgba(0,0,0,1)]"
                            on:click=move |_| dispatch(NavEvent::ToggleMenu)
                        >
                            {move || menu_button_label(menu_open.get())}
                            " "
                            {move || {
                                if menu_open.get() {
                                    icons::component(BsArrowRight, "text-lg rotate-180 transition-transform duration-300 group-hover:translate-x-1").into_any()
                                } else {
                                    icons::component(BsArrowRight, "text-lg transition-transform duration-300 group-hover:translate-x-1").into_any()
                                }
                            }}
                        </button>
                    </div>
                </nav>
            </header>
        </div>

        <Show when=move || menu_open.get()>
            <div
                node_ref=overlay_ref
                class="flex overflow-hidden fixed inset-0 z-40 flex-col justify-start m-10 rounded-[20px] border border-white/30 shadow-2xl backdrop-blur-3xl bg-white/15"
                style=overlay_initial.clone()
            >
                <div
                    class="flex overflow-hidden relative items-center px-10 pt-20 rounded-[16px] border-b border-white/30 pb-[86px] h-[calc(100%/5+70px)]"
                    style=overlay_bg.clone()
                >
                    <div class="absolute inset-0 z-10 bg-gradient-to-t from-white/70 via-white/40 to-transparent"/>
                    <p class="relative z-20 max-w-4xl text-3xl font-semibold leading-snug text-left text-black">
                        {banner_text.clone()}
                    </p>
                </div>

                <div
                    class="grid overflow-y-auto grid-cols-1 px-10 divide-y divide-white/20"
                    style="max-height: calc(100vh - 200px);"
                >
                    {MENU_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(idx, item)| {
                            view! {
                                <a
                                    href=item.link
                                    on:click=move |_| dispatch(NavEvent::LinkActivated(idx))
                                    class="flex justify-between items-center py-6 rounded-[16px] border transition-all duration-500 cursor-pointer group backdrop-blur-2xl bg-white/15 border-white/30 hover:bg-white/25"
                                    style=GLASS_SHADOW
                                >
                                    <div class="w-full rounded-[16px] transition-all duration-500 group-hover:px-4 group-hover:py-6">
                                        <h2 class=format!(
                                            "text-4xl font-extrabold text-black transition-all duration-300 group-hover:tracking-wide {}",
                                            item.hover_class,
                                        )>{item.label}</h2>
                                        <p class="mt-1 text-sm opacity-0 transition-all duration-300 text-black/70 group-hover:opacity-100 group-hover:translate-y-1">
                                            {item.caption()}
                                        </p>
                                    </div>
                                    <span class="inline-flex justify-center items-center w-12 h-10 border opacity-0 transition-all duration-300 custom-shape-arrow border-white/40 bg-white/30 backdrop-blur-md group-hover:opacity-100 group-hover:shadow-[4px_4px_0px_rgba(0,0,0,0.2)]">
                                        {icons::component(BsArrowRight, "text-xl text-black transition-transform duration-300 group-hover:translate-x-1")}
                                    </span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_delays_are_staggered() {
        let delays: Vec<String> = INDICATOR_BARS.into_iter().map(indicator_delay).collect();
        assert_eq!(
            delays,
            vec![
                "animation-delay: 0.1s;",
                "animation-delay: 0.2s;",
                "animation-delay: 0.3s;",
                "animation-delay: 0.4s;",
            ]
        );
    }

    #[test]
    fn test_menu_button_label() {
        assert_eq!(menu_button_label(false), "MENU");
        assert_eq!(menu_button_label(true), "CLOSE");
    }

    #[test]
    fn test_overlay_starts_hidden() {
        let style = overlay_style(&overlay_start_frame());
        assert!(style.starts_with(GLASS_SHADOW));
        assert!(style.contains("opacity: 0.0000;"));
        assert!(style.contains("scale(0.9500)"));
    }

    #[test]
    fn test_banner_style_uses_configured_image() {
        let style = banner_style("/img/custom.jpg");
        assert!(style.contains("url('/img/custom.jpg')"));
        assert!(style.contains("background-size: cover;"));
    }

    #[cfg(feature = "ssr")]
    fn render(config: Option<NavbarConfig>) -> String {
        let owner = Owner::new();
        owner.with(|| {
            if let Some(config) = config {
                provide_context(config);
            }
            component().to_html()
        })
    }

    #[cfg(feature = "ssr")]
    fn embedded_json(html: &str) -> &str {
        let tag = html.find("id=\"navbar-config\"").expect("config script rendered");
        let start = tag + html[tag..].find('>').expect("script tag closed") + 1;
        let end = start + html[start..].find("</script>").expect("script end tag");
        &html[start..end]
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_header_markup_at_rest() {
        let html = render(None);
        assert!(html.contains("id=\"product-button\""));
        assert!(html.contains("Products"));
        assert_eq!(html.matches("indicator-line").count(), INDICATOR_BARS.len());
        assert!(!html.contains("floating-nav"));
        assert!(html.contains("MENU"));
        assert!(html.contains("src=\"/img/logo.png\""));
        // The overlay only mounts once the menu is opened.
        assert!(!html.contains(MENU_ITEMS[0].label));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_embedded_config_round_trips() {
        let html = render(None);
        let config = NavbarConfig::from_json(embedded_json(&html)).unwrap();
        assert_eq!(config, NavbarConfig::default());
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_context_config_overrides_logo_and_embedding() {
        let config = NavbarConfig {
            logo_src: "/brand/mark.svg".to_owned(),
            nav_tween_ms: 350,
            ..NavbarConfig::default()
        };
        let html = render(Some(config.clone()));
        assert!(html.contains("src=\"/brand/mark.svg\""));
        assert!(!html.contains("src=\"/img/logo.png\""));
        assert_eq!(NavbarConfig::from_json(embedded_json(&html)).unwrap(), config);
    }
}
