//! This module defines the `error_template` component, rendered by the router
//! fallback for anything that is not a known page.
//!
//! On the server it also sets the HTTP status of the response from the first
//! [`AppError`] it finds.

use http::status::StatusCode;
use leptos::{
    html::{a, div, h1},
    prelude::*,
};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Pulls the [`AppError`]s out of a Leptos error collection.
#[must_use]
pub fn app_errors(errors: Errors) -> Vec<AppError> {
    errors
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<AppError>().cloned())
        .collect()
}

/// Renders the error page for `errors`.
pub fn component(errors: Errors) -> impl IntoView {
    let errors = app_errors(errors);

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(first.status_code());
        }
    }

    div()
        .class("grid place-content-center px-4 min-h-screen antialiased text-black")
        .child((
            h1().class("mb-6 text-center")
                .child(if errors.len() > 1 { "Errors" } else { "Error" }),
            errors
                .into_iter()
                .map(|error| {
                    h1().class("text-xl tracking-widest text-center text-gray-500 uppercase")
                        .child(format!("{}| {error}", error.status_code()))
                })
                .collect_view(),
            a().href("/")
                .class("mt-6 text-center underline duration-200 hover:text-blue-600")
                .child("Go back home"),
        ))
}
