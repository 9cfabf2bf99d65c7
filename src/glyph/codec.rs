//! Sign codec: dash-joined Gardiner codes <-> hieroglyph strings.

use crate::error::{SignError, SignResult};
use crate::glyph::code::GardinerCode;
use crate::glyph::database::{CharacterDatabase, UnicodeDatabase};

/// Separator between codes on the Gardiner side of [`SignCodec::encode`].
pub const CODE_SEPARATOR: char = '-';

/// Separator between codes produced by [`SignCodec::decode`].
pub const DECODED_SEPARATOR: &str = ",";

/// Converts between Gardiner codes and characters through a
/// [`CharacterDatabase`].
#[derive(Debug, Clone, Default)]
pub struct SignCodec<D = UnicodeDatabase> {
    db: D,
}

impl SignCodec<UnicodeDatabase> {
    /// A codec backed by the Unicode character database.
    pub fn unicode() -> Self {
        Self::new(UnicodeDatabase)
    }
}

impl<D: CharacterDatabase> SignCodec<D> {
    pub fn new(db: D) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &D {
        &self.db
    }

    /// Resolve one parsed code to its character.
    pub fn glyph_for(&self, code: &GardinerCode) -> SignResult<char> {
        let name = code.glyph_name();
        self.db
            .character_for_name(name.as_str())
            .ok_or_else(|| SignError::UnknownSign {
                token: code.to_string(),
                name: name.into_string(),
            })
    }

    /// Identify the sign a single character encodes.
    pub fn code_for(&self, ch: char) -> SignResult<GardinerCode> {
        let name = self.db.name_for_character(ch);
        match name.as_deref().and_then(GardinerCode::from_glyph_name) {
            Some(code) => Ok(code),
            None => Err(SignError::not_a_hieroglyph(ch, name)),
        }
    }

    /// Parse a dash-joined code string (`A1-D21-Aa1b`) without resolving it.
    ///
    /// Empty input yields no codes. An empty token anywhere else is malformed.
    pub fn parse_codes(&self, input: &str) -> SignResult<Vec<GardinerCode>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }
        input.split(CODE_SEPARATOR).map(GardinerCode::parse).collect()
    }

    /// Encode a dash-joined code string as hieroglyphs, one character per code.
    ///
    /// The first malformed or unknown token aborts the call.
    pub fn encode(&self, input: &str) -> SignResult<String> {
        let mut out = String::new();
        if input.is_empty() {
            return Ok(out);
        }

        for token in input.split(CODE_SEPARATOR) {
            let code = GardinerCode::parse(token)?;
            let name = code.glyph_name();
            let ch = self
                .db
                .character_for_name(name.as_str())
                .ok_or_else(|| SignError::UnknownSign {
                    token: token.to_string(),
                    name: name.to_string(),
                })?;
            tracing::debug!(token, name = %name, codepoint = %format!("U+{:04X}", ch as u32), "resolved sign");
            out.push(ch);
        }

        Ok(out)
    }

    /// Decode hieroglyphs into comma-joined Gardiner codes.
    ///
    /// Input is taken one code point at a time; the first character without a
    /// hieroglyph name aborts the call.
    pub fn decode(&self, characters: &str) -> SignResult<String> {
        let codes = characters
            .chars()
            .map(|ch| {
                let code = self.code_for(ch)?;
                tracing::debug!(codepoint = %format!("U+{:04X}", ch as u32), code = %code, "decoded sign");
                Ok(code.to_string())
            })
            .collect::<SignResult<Vec<_>>>()?;

        Ok(codes.join(DECODED_SEPARATOR))
    }
}

/// [`SignCodec::encode`] against the Unicode character database.
pub fn encode(input: &str) -> SignResult<String> {
    SignCodec::unicode().encode(input)
}

/// [`SignCodec::decode`] against the Unicode character database.
pub fn decode(characters: &str) -> SignResult<String> {
    SignCodec::unicode().decode(characters)
}
