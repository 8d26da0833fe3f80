//! Dioxus UI components for magicwindow.
//!
//! Provides the upload dropzone and the preview step (focal-point
//! placement plus headline/CTA entry with live validation).

mod dropzone;
mod preview_step;

pub use dropzone::Dropzone;
pub use preview_step::PreviewStep;
