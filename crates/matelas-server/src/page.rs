//! Embedded web form.

/// The single-page form, canvas and client script served at `/`.
pub const INDEX_HTML: &str = include_str!("../assets/index.html");
