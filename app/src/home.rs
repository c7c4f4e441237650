//! This module defines the `home` component, the single long page the
//! navigation bar sits on top of.
//!
//! Each overlay menu entry links to one of the sections rendered here, so the
//! section ids must stay in sync with [`crate::config::MENU_ITEMS`].

use icondata::TiLocationArrow;
use leptos::{
    html::{div, h1, h2, p, section},
    prelude::*,
};

use crate::components::button;

/// A page section reachable from the overlay menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
}

pub const SECTIONS: [Section; 4] = [
    Section {
        id: "about",
        heading: "About us",
        body: "A small studio building products where performance and craft both matter.",
    },
    Section {
        id: "features",
        heading: "Works",
        body: "Selected projects, from mobile apps to the systems behind them.",
    },
    Section {
        id: "story",
        heading: "Services",
        body: "Product strategy, design, engineering, and long-term care.",
    },
    Section {
        id: "contact",
        heading: "Contact us",
        body: "Tell us about the challenge you are facing.",
    },
];

fn section_view(s: Section) -> impl IntoView {
    section()
        .id(s.id)
        .class("flex flex-col justify-center px-6 min-h-screen md:px-16 odd:bg-blue-50 even:bg-white")
        .child((
            h2().class("mb-6 text-5xl font-extrabold uppercase md:text-7xl").child(s.heading),
            p().class("max-w-2xl text-lg text-black/70").child(s.body),
        ))
}

/// Renders the landing page: a hero followed by every linked section.
pub fn component() -> impl IntoView {
    div().child((
        section()
            .class("flex flex-col gap-8 justify-center items-start px-6 min-h-screen md:px-16 bg-violet-50")
            .child((
                h1().class("text-6xl font-black uppercase md:text-9xl").child("Build bold"),
                p().class("max-w-xl text-lg text-black/70")
                    .child("Scroll down and the navigation steps aside. Scroll up and it is back."),
                button::component(
                    "watch-trailer",
                    "Explore",
                    Some(TiLocationArrow),
                    "bg-yellow-300 flex-center gap-1",
                ),
            )),
        SECTIONS.into_iter().map(section_view).collect_view(),
    ))
}
