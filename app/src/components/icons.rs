//! Inline SVG rendering for `icondata` icons.

use icondata::Icon;
use leptos::{prelude::*, svg::svg};

/// Renders `icon` as an inline SVG that inherits the surrounding text colour.
pub fn component(icon: Icon, class: &'static str) -> impl IntoView {
    svg()
        .attr("viewBox", icon.view_box)
        .attr("fill", icon.fill.unwrap_or("currentColor"))
        .attr("stroke", icon.stroke)
        .attr("width", "1em")
        .attr("height", "1em")
        .attr("aria-hidden", "true")
        .class(class)
        .inner_html(icon.data)
}
