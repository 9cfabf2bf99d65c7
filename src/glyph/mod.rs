//! Gardiner Sign List codes and Unicode Egyptian hieroglyphs.
//!
//! ## Components
//!
//! - [`code`]: parsed Gardiner codes and the `EGYPTIAN HIEROGLYPH ...` names they map to
//! - [`database`]: the character-name oracle, live ([`UnicodeDatabase`]) or fixed ([`FixedCatalog`])
//! - [`codec`]: dash-joined codes -> hieroglyph strings and back
//! - [`catalog`]: the static per-category sign counts and label-list output

pub mod catalog;
pub mod code;
pub mod codec;
pub mod database;

pub use catalog::{CategoryCount, LabelError, SignList, WriteMode};
pub use code::{GardinerCode, GlyphName};
pub use codec::{SignCodec, decode, encode};
pub use database::{CharacterDatabase, FixedCatalog, UnicodeDatabase};
