//! magicwindow-rules: Pure validation and geometry rules (sans-IO).
//!
//! Everything the ad-builder UI decides — which uploads to accept,
//! whether headline and CTA text pass the word-count rules, where the
//! focal-point marker lands — is computed here on plain data. This
//! crate has **no browser dependencies**; all DOM and Blob interaction
//! lives in `magicwindow-io`.

pub mod copy;
pub mod focal;
pub mod upload;

pub use copy::{AdCopy, FieldStatus, word_count};
pub use focal::{DragState, FocalPoint};
pub use upload::{SelectedFile, UploadError, validate_upload};
