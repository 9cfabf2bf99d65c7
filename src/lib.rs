// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # gardiner-tools
//!
//! Conversion between Gardiner Sign List codes and Unicode Egyptian
//! hieroglyphs, and dictionary-order collation of transliterated Egyptian.
//!
//! ## Architecture
//!
//! - **Sign codec** (`glyph`): `A1-D21` ⇄ `𓀀𓂋`, resolved through an injectable
//!   character-name database
//! - **Sign-list catalog** (`glyph::catalog`): per-category sign counts and label lists
//! - **Collation** (`collate`): ranks over the Egyptological alphabet, stable sort
//! - **Configuration** (`config`): TOML overrides for the catalog and demo word list
//!
//! ## Library usage
//!
//! ```no_run
//! use gardiner_tools::{collate, glyph};
//!
//! let glyphs = glyph::encode("A1-D21").unwrap();
//! assert_eq!(glyph::decode(&glyphs).unwrap(), "A1,D21");
//!
//! let sorted = collate::sort(["ḏd", "ꜥnḫ"]).unwrap();
//! assert_eq!(sorted, ["ꜥnḫ", "ḏd"]);
//! ```

pub mod collate;
pub mod config;
pub mod error;
pub mod glyph;
