//! Sign-list catalog: how many numbered signs each Gardiner category holds.
//!
//! The table is a versioned constant. It is not derived from the character
//! database, and Unicode encodes signs (variants, the NL/NU series) that it
//! does not list. It drives label-list generation for annotation tools: one
//! code per line, `A1` through `Aa31`.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::OnceLock;

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::glyph::code::{GardinerCode, canonical_category};

/// Errors from catalog construction and label-file output.
#[derive(Debug, Error, Diagnostic)]
pub enum LabelError {
    #[error("invalid sign-list category \"{name}\" with count {count}")]
    #[diagnostic(
        code(gardiner::labels::invalid_category),
        help(
            "Categories are 1-3 letters (A, Aa, NL) and counts run from 1 to 999. \
             Check the [[labels.categories]] entries in your config file."
        )
    )]
    InvalidCategory { name: String, count: u16 },

    #[error("failed to write label file: {path}")]
    #[diagnostic(
        code(gardiner::labels::io),
        help("Check that the parent directory exists and you have write permissions.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type LabelResult<T> = std::result::Result<T, LabelError>;

/// Catalog revision of [`STANDARD_COUNTS`].
pub const CATALOG_VERSION: &str = "gardiner-1957";

/// Numbered signs per category, in sign-list order.
pub const STANDARD_COUNTS: [(&str, u16); 26] = [
    ("A", 55),
    ("B", 8),
    ("C", 20),
    ("D", 63),
    ("E", 34),
    ("F", 52),
    ("G", 54),
    ("H", 8),
    ("I", 15),
    ("K", 6),
    ("L", 7),
    ("M", 44),
    ("N", 42),
    ("O", 51),
    ("P", 11),
    ("Q", 7),
    ("R", 25),
    ("S", 45),
    ("T", 35),
    ("U", 41),
    ("V", 38),
    ("W", 25),
    ("X", 8),
    ("Y", 8),
    ("Z", 11),
    ("Aa", 31),
];

/// One catalog row: a category and its highest sign number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: u16,
}

impl CategoryCount {
    pub fn new(name: impl Into<String>, count: u16) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// How [`SignList::write_labels`] treats an existing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Add to the end of the file, creating it if needed.
    #[default]
    Append,
    /// Replace any existing content.
    Truncate,
}

/// An ordered sign-list catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignList {
    categories: Vec<CategoryCount>,
}

static STANDARD: OnceLock<SignList> = OnceLock::new();

fn build_standard() -> SignList {
    SignList {
        categories: STANDARD_COUNTS
            .iter()
            .map(|(name, count)| CategoryCount::new(*name, *count))
            .collect(),
    }
}

impl SignList {
    /// The built-in catalog.
    pub fn standard() -> &'static SignList {
        STANDARD.get_or_init(build_standard)
    }

    /// The built-in catalog with `overrides` applied.
    ///
    /// An override naming an existing category (case-insensitively) replaces
    /// its count in place; an unknown category is appended.
    pub fn with_overrides(overrides: &[CategoryCount]) -> LabelResult<Self> {
        let mut list = Self::standard().clone();
        for entry in overrides {
            list.set(entry)?;
        }
        Ok(list)
    }

    fn set(&mut self, entry: &CategoryCount) -> LabelResult<()> {
        let invalid = || LabelError::InvalidCategory {
            name: entry.name.clone(),
            count: entry.count,
        };
        // Validate through the code shape so the catalog only emits parseable labels.
        GardinerCode::new(&entry.name, entry.count, None).map_err(|_| invalid())?;
        if entry.count == 0 {
            return Err(invalid());
        }

        let name = canonical_category(&entry.name);
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.count = entry.count,
            None => self.categories.push(CategoryCount::new(name, entry.count)),
        }
        Ok(())
    }

    pub fn categories(&self) -> &[CategoryCount] {
        &self.categories
    }

    /// Highest sign number listed for `category` (case-insensitive).
    pub fn count_for(&self, category: &str) -> Option<u16> {
        let name = canonical_category(category);
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.count)
    }

    /// Total number of codes [`codes`](Self::codes) yields.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.count as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every code in the catalog: each category in order, numbers 1..=count.
    pub fn codes(&self) -> impl Iterator<Item = GardinerCode> + '_ {
        self.categories.iter().flat_map(|c| {
            (1..=c.count).filter_map(move |n| GardinerCode::new(&c.name, n, None).ok())
        })
    }

    /// Write every code to `path`, one per line.
    ///
    /// Returns the number of labels written.
    pub fn write_labels(&self, path: &Path, mode: WriteMode) -> LabelResult<usize> {
        let io_err = |source: std::io::Error| LabelError::Io {
            path: path.display().to_string(),
            source,
        };

        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            WriteMode::Append => options.append(true),
            WriteMode::Truncate => options.write(true).truncate(true),
        };
        let file = options.open(path).map_err(io_err)?;
        let mut out = BufWriter::new(file);

        let mut written = 0;
        for code in self.codes() {
            writeln!(out, "{code}").map_err(io_err)?;
            written += 1;
        }
        out.flush().map_err(io_err)?;

        tracing::info!(path = %path.display(), written, ?mode, "wrote label list");
        Ok(written)
    }
}
