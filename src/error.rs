//! Rich diagnostic error types for gardiner-tools.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes, help text, and the offending input fragment so users
//! know exactly which token or character was rejected.

use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;
use crate::glyph::catalog::LabelError;

/// Top-level error type for gardiner-tools.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum GardinerError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Sign(#[from] SignError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Collation(#[from] CollationError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Label(#[from] LabelError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Sign codec errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum SignError {
    #[error("malformed Gardiner code: \"{token}\"")]
    #[diagnostic(
        code(gardiner::sign::malformed),
        help(
            "A Gardiner code has the shape Xy00z: 1-3 category letters, \
             1-3 digits, then an optional lowercase variant (e.g. A1, D21, Aa31b). \
             Separate several codes with '-'."
        )
    )]
    MalformedCode { token: String },

    #[error("\"{token}\" is not a known Gardiner sign (no character named \"{name}\")")]
    #[diagnostic(
        code(gardiner::sign::unknown),
        help(
            "The code is well-formed but the character database has no hieroglyph \
             with this name. Check the category and number against the sign list."
        )
    )]
    UnknownSign { token: String, name: String },

    #[error("{codepoint} ({name}) is not an Egyptian hieroglyph sign")]
    #[diagnostic(
        code(gardiner::sign::not_a_hieroglyph),
        help(
            "Only characters named \"EGYPTIAN HIEROGLYPH <code>\" can be decoded. \
             Format controls such as joiners and unnamed characters are rejected."
        )
    )]
    NotAHieroglyph { codepoint: String, name: String },
}

impl SignError {
    /// Build a [`SignError::NotAHieroglyph`] for `ch`, with its database name if any.
    pub(crate) fn not_a_hieroglyph(ch: char, name: Option<String>) -> Self {
        Self::NotAHieroglyph {
            codepoint: format!("U+{:04X}", ch as u32),
            name: name.unwrap_or_else(|| "<unnamed>".into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Collation errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum CollationError {
    #[error("'{symbol}' (U+{codepoint:04X}) has no rank in the transliteration alphabet (in \"{word}\")")]
    #[diagnostic(
        code(gardiner::collate::unknown_symbol),
        help(
            "Words must be written in Unicode transliteration (ꜣ, i҆, ꜥ, ḥ, ḫ, ẖ, š, ṯ, ḏ ...), \
             not in Manuel de Codage. Digits 0-8, space, '.', '-' and '⸗' are also ranked; \
             the digit 9 is not."
        )
    )]
    UnknownAlphabetSymbol {
        symbol: char,
        codepoint: u32,
        word: String,
    },
}

/// Convenience alias for sign codec results.
pub type SignResult<T> = std::result::Result<T, SignError>;

/// Convenience alias for collation results.
pub type CollationResult<T> = std::result::Result<T, CollationError>;

/// Convenience alias for functions returning gardiner-tools results.
pub type GardinerResult<T> = std::result::Result<T, GardinerError>;
