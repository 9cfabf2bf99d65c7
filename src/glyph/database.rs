//! Character-name databases: the oracle behind the sign codec.
//!
//! The codec never hardcodes codepoints. It asks a [`CharacterDatabase`] for
//! the character carrying a name, or for the name of a character.
//! [`UnicodeDatabase`] answers from the Unicode character database compiled
//! into `unicode_names2`; [`FixedCatalog`] answers from an explicit table and
//! is what tests use when they need a sign the live database lacks.

use std::collections::HashMap;

/// Read-only lookup between characters and their database names.
pub trait CharacterDatabase {
    /// The database name of `ch`, or `None` if it has none.
    fn name_for_character(&self, ch: char) -> Option<String>;

    /// The character carrying exactly `name`, or `None`.
    fn character_for_name(&self, name: &str) -> Option<char>;
}

impl<D: CharacterDatabase + ?Sized> CharacterDatabase for &D {
    fn name_for_character(&self, ch: char) -> Option<String> {
        (**self).name_for_character(ch)
    }

    fn character_for_name(&self, name: &str) -> Option<char> {
        (**self).character_for_name(name)
    }
}

/// The Unicode character database shipped with `unicode_names2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeDatabase;

impl CharacterDatabase for UnicodeDatabase {
    fn name_for_character(&self, ch: char) -> Option<String> {
        unicode_names2::name(ch).map(|name| name.to_string())
    }

    fn character_for_name(&self, name: &str) -> Option<char> {
        // unicode_names2 matches case-insensitively; callers pass canonical
        // uppercase names, so check the round trip to keep lookups exact.
        let ch = unicode_names2::character(name)?;
        match self.name_for_character(ch) {
            Some(found) if found == name => Some(ch),
            _ => None,
        }
    }
}

/// A fixed name table, for deterministic tests and for signs not yet
/// encoded in the installed Unicode version.
#[derive(Debug, Clone, Default)]
pub struct FixedCatalog {
    by_name: HashMap<String, char>,
    by_char: HashMap<char, String>,
}

impl FixedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `ch` under `name`, replacing any earlier entry for either.
    pub fn insert(&mut self, ch: char, name: impl Into<String>) {
        let name = name.into();
        if let Some(old_name) = self.by_char.insert(ch, name.clone()) {
            self.by_name.remove(&old_name);
        }
        if let Some(old_ch) = self.by_name.insert(name, ch) {
            if old_ch != ch {
                self.by_char.remove(&old_ch);
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, ch: char, name: impl Into<String>) -> Self {
        self.insert(ch, name);
        self
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl FromIterator<(char, String)> for FixedCatalog {
    fn from_iter<I: IntoIterator<Item = (char, String)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (ch, name) in iter {
            catalog.insert(ch, name);
        }
        catalog
    }
}

impl CharacterDatabase for FixedCatalog {
    fn name_for_character(&self, ch: char) -> Option<String> {
        self.by_char.get(&ch).cloned()
    }

    fn character_for_name(&self, name: &str) -> Option<char> {
        self.by_name.get(name).copied()
    }
}
