//! Pricing calculator for small businesses and freelancers in Argentina.
//!
//! [`domain`] holds the pricing engine and has no UI dependencies; [`ui`]
//! and [`app`] are the Dioxus front end built on top of it.

pub mod app;
pub mod domain;
pub mod ui;
pub mod util;
