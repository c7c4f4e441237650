//! Pill-shaped call-to-action button shared by the page sections.

use icondata::Icon;
use leptos::{
    html::{button, span},
    prelude::*,
};

use crate::components::icons;

const BASE_CLASS: &str =
    "group relative z-10 w-fit cursor-pointer overflow-hidden rounded-full px-7 py-3 text-black";

/// Renders a button labelled `title`, optionally followed by `right_icon`.
///
/// `container_class` is appended to the base classes so callers can change
/// the background, layout, or responsive visibility.
pub fn component(
    id: &'static str,
    title: &'static str,
    right_icon: Option<Icon>,
    container_class: &'static str,
) -> impl IntoView {
    button()
        .id(id)
        .class(format!("{BASE_CLASS} {container_class}"))
        .child((
            span()
                .class("relative inline-flex overflow-hidden text-xs uppercase font-general")
                .child(title),
            right_icon.map(|icon| icons::component(icon, "size-4")),
        ))
}
