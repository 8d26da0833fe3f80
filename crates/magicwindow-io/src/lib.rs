//! magicwindow-io: Browser I/O and Dioxus component library.
//!
//! Handles object-URL acquisition/release for the uploaded image and
//! provides the UI components for the magicwindow web application.

pub mod components;
pub mod object_url;

pub use components::{Dropzone, PreviewStep};
