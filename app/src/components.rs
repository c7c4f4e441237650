//! Reusable view pieces shared by the navigation bar and the landing page.

pub mod button;
pub mod error_template;
pub mod icons;
