//! Umbrella crate of the workspace.
//!
//! The site itself lives in `app` (views and navbar logic), `frontend`
//! (hydration) and `server` (SSR binary). This crate re-exports `app` so the
//! cross-crate tests in `tests/` have a single import root.

pub use app;
