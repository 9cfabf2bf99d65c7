//! Transliteration collation: dictionary order for Egyptian words.
//!
//! Egyptological dictionaries order transliterated words by a fixed alphabet
//! (ꜣ i҆ j y ꜥ w b p f m n r h ḥ ḫ ẖ s z š q k g t ṯ d ḏ), which code-point
//! order gets wrong: `ꜥ` (U+A725) would sort after `ḏ` (U+1E0F). Every
//! character of a word is mapped to its rank in [`ALPHABET`] and words are
//! compared by those rank sequences.
//!
//! The table is kept exactly as the sign-list tooling has always shipped it:
//!
//! - the digits run 0 through 8 only, so a `9` is unrankable;
//! - `i` and the yod mark `҆` appear twice, and rank at their last position;
//! - an uppercase `K` precedes `k`, but lookups are lowercased first, so `K`
//!   never matches and `K`/`k` both rank as `k`.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::OnceLock;

use unicode_normalization::UnicodeNormalization;

use crate::error::{CollationError, CollationResult};

/// The collation alphabet, in rank order.
pub const ALPHABET: [char; 43] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', //
    ' ', '.', '⸗', '-', 'ꜣ', 'i', '\u{0486}', 'i', '\u{0486}', 'j', 'y', 'ꜥ', 'w', 'b', 'p',
    'f', 'm', 'n', 'r', 'h', 'ḥ', 'ḫ', 'ẖ', 's', 'z', 'š', 'q', 'K', 'k', 'g', 't', 'ṯ', 'd',
    'ḏ',
];

/// Word list collated by `gardiner sort` when no words are given.
pub const DEMO_WORDS: [&str; 7] = [
    "ꜥhꜥ",
    "ꜣšꜣ",
    "šri\u{0486}",
    "ḫ.t nb.t nfr.t",
    "mḥy.t",
    " ꜣqꜥ",
    "ni\u{0486}w.ty",
];

/// Rank lookup over [`ALPHABET`].
#[derive(Debug, Clone)]
pub struct AlphabetTable {
    ranks: HashMap<char, usize>,
}

static STANDARD: OnceLock<AlphabetTable> = OnceLock::new();

impl AlphabetTable {
    /// Build a table from an ordered alphabet. A repeated symbol keeps the
    /// rank of its last occurrence.
    pub fn new(alphabet: &[char]) -> Self {
        let ranks: HashMap<char, usize> = alphabet
            .iter()
            .enumerate()
            .map(|(rank, &symbol)| (symbol, rank))
            .collect();
        tracing::debug!(
            symbols = alphabet.len(),
            distinct = ranks.len(),
            "built collation alphabet"
        );
        Self { ranks }
    }

    /// The shared table over [`ALPHABET`].
    pub fn standard() -> &'static AlphabetTable {
        STANDARD.get_or_init(|| Self::new(&ALPHABET))
    }

    /// Number of distinct ranked symbols.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Rank of a single symbol, after lowercasing.
    ///
    /// `word` is only used to name the context in the error.
    fn rank_in(&self, symbol: char, word: &str) -> CollationResult<usize> {
        let unknown = || CollationError::UnknownAlphabetSymbol {
            symbol,
            codepoint: symbol as u32,
            word: word.to_string(),
        };
        let mut lower = symbol.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(folded), None) => self.ranks.get(&folded).copied().ok_or_else(unknown),
            // Lowercasing expanded to several characters (e.g. 'İ'); no single rank.
            _ => Err(unknown()),
        }
    }

    /// Rank of a single symbol, after lowercasing.
    pub fn rank(&self, symbol: char) -> CollationResult<usize> {
        self.rank_in(symbol, &symbol.to_string())
    }

    /// The rank sequence for `word`, taken over its NFC form so that
    /// decomposed input (`h` + U+0323) ranks like the precomposed letter.
    pub fn collation_key(&self, word: &str) -> CollationResult<Vec<usize>> {
        word.nfc().map(|symbol| self.rank_in(symbol, word)).collect()
    }

    /// Compare two words by collation key.
    pub fn compare(&self, a: &str, b: &str) -> CollationResult<Ordering> {
        Ok(self.collation_key(a)?.cmp(&self.collation_key(b)?))
    }

    /// Stable ascending sort by collation key.
    ///
    /// Every word is keyed before anything is reordered; one unrankable word
    /// fails the whole sort.
    pub fn sort<S: AsRef<str>>(&self, words: impl IntoIterator<Item = S>) -> CollationResult<Vec<S>> {
        let mut keyed = words
            .into_iter()
            .map(|word| Ok((self.collation_key(word.as_ref())?, word)))
            .collect::<CollationResult<Vec<_>>>()?;

        // sort_by is stable: equal keys keep their input order.
        keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(keyed.into_iter().map(|(_, word)| word).collect())
    }
}

/// [`AlphabetTable::rank`] over the standard alphabet.
pub fn rank(symbol: char) -> CollationResult<usize> {
    AlphabetTable::standard().rank(symbol)
}

/// [`AlphabetTable::collation_key`] over the standard alphabet.
pub fn collation_key(word: &str) -> CollationResult<Vec<usize>> {
    AlphabetTable::standard().collation_key(word)
}

/// [`AlphabetTable::compare`] over the standard alphabet.
pub fn compare(a: &str, b: &str) -> CollationResult<Ordering> {
    AlphabetTable::standard().compare(a, b)
}

/// [`AlphabetTable::sort`] over the standard alphabet.
pub fn sort<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> CollationResult<Vec<S>> {
    AlphabetTable::standard().sort(words)
}
