// Core application modules and components
use crate::components::error_template;
use chrono::{Datelike as _, Utc};
use leptos::{
    html::{body, footer, head, html, meta, p},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod animation;
mod components;
pub mod config;
mod home;
pub mod navbar;
pub mod types;

pub use components::error_template::AppError;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/navbar.css")
                    .build(),
            ),
            Title(TitleProps::builder().text("Studio \u{2013} Digital products").build()),
        )),
        body().class("overflow-x-hidden bg-white").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <div class="relative w-screen min-h-screen text-black font-general">
                {navbar::component}
                <main>
                    <FlatRoutes fallback=|| {
                        let mut outside_errors = Errors::default();
                        outside_errors.insert_with_default_key(AppError::NotFound);
                        error_template::component(outside_errors)
                    }>
                        <Route path=StaticSegment("") view=home::component/>
                    </FlatRoutes>
                </main>
                {footer_component()}
            </div>
        </Router>
    }
}

fn footer_component() -> impl IntoView {
    footer()
        .class("py-4 w-screen text-center text-white bg-violet-300")
        .child(p().class("text-sm").child(format!("\u{a9} {} Studio. All rights reserved.", Utc::now().year())))
}
