//! Ad copy rules: word counting and the Story Spine condition.
//!
//! The headline and call-to-action are free text with two independent
//! constraints: a word-count range (checked here) and a character cap
//! (enforced by the input element's `maxlength`). A string can sit
//! under the character cap and still fail the word-count rule.

/// Headline must be 1–9 words.
pub const HEADLINE_MAX_WORDS: usize = 9;

/// CTA must be 1–3 words.
pub const CTA_MAX_WORDS: usize = 3;

/// Character cap applied at the headline input element.
pub const HEADLINE_MAX_CHARS: usize = 60;

/// Character cap applied at the CTA input element.
pub const CTA_MAX_CHARS: usize = 20;

/// Count words by splitting on whitespace runs and discarding empty
/// tokens. Idempotent and insensitive to leading, trailing, and
/// repeated whitespace.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Validation state of a single copy field.
///
/// `Empty` means "not yet attempted" — no error is shown. A field that
/// contains only whitespace is *not* empty: it counts zero words and is
/// reported as `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Nothing typed yet; show no feedback.
    Empty,
    /// Word count within bounds.
    Valid,
    /// Non-empty but word count out of bounds.
    Invalid,
}

impl FieldStatus {
    /// Whether the field passes its word-count rule.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Whether an inline error should be shown for the field.
    #[must_use]
    pub const fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }
}

/// Status of one field given its max word count.
fn field_status(text: &str, max_words: usize) -> FieldStatus {
    if text.is_empty() {
        return FieldStatus::Empty;
    }
    match word_count(text) {
        0 => FieldStatus::Invalid,
        n if n <= max_words => FieldStatus::Valid,
        _ => FieldStatus::Invalid,
    }
}

/// The two copy fields of the ad, with derived validity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdCopy {
    /// Headline text, 1–9 words when valid.
    pub headline: String,
    /// Call-to-action text, 1–3 words when valid.
    pub cta: String,
}

impl AdCopy {
    /// Validation state of the headline field.
    #[must_use]
    pub fn headline_status(&self) -> FieldStatus {
        field_status(&self.headline, HEADLINE_MAX_WORDS)
    }

    /// Validation state of the CTA field.
    #[must_use]
    pub fn cta_status(&self) -> FieldStatus {
        field_status(&self.cta, CTA_MAX_WORDS)
    }

    /// The Story Spine rule: both fields non-empty and within bounds.
    #[must_use]
    pub fn story_spine_satisfied(&self) -> bool {
        self.headline_status().is_valid() && self.cta_status().is_valid()
    }
}
