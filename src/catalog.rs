//! Option catalog
//!
//! The catalog is loaded once from a line-oriented text file where every line
//! reads `<price> <name>`. Loading is all-or-nothing: the first malformed line
//! aborts the load and no partial catalog is produced.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while loading a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog source could not be read
    #[error("Failed to read option catalog: {0}")]
    Io(#[from] std::io::Error),

    /// A line has no space separating price from name
    #[error("Line {line}: expected '<price> <name>', got {content:?}")]
    MissingSeparator { line: usize, content: String },

    /// The price prefix is not a non-negative integer
    #[error("Line {line}: invalid price {price:?} in {content:?}")]
    InvalidPrice {
        line: usize,
        price: String,
        content: String,
    },
}

/// Fold a name to the canonical case used for matching.
pub fn normalize(name: &str) -> String {
    name.to_uppercase()
}

/// A purchasable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarOption {
    price: u32,
    name: String,
    normalized_name: String,
}

impl CarOption {
    pub fn new(price: u32, name: impl Into<String>) -> Self {
        let name = name.into();
        let normalized_name = normalize(&name);
        Self {
            price,
            name,
            normalized_name,
        }
    }

    #[inline]
    pub fn price(&self) -> u32 {
        self.price
    }

    /// Display name, original case
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn normalized_name(&self) -> &str {
        &self.normalized_name
    }

    /// Parse a single `<price> <name>` catalog line.
    ///
    /// `line_no` is 1-based and only used for error reporting. The line is
    /// split at the first space; everything after it, trailing whitespace
    /// included, becomes the name.
    pub fn parse_line(line: &str, line_no: usize) -> Result<Self, CatalogError> {
        let (price, name) = line
            .split_once(' ')
            .ok_or_else(|| CatalogError::MissingSeparator {
                line: line_no,
                content: line.to_string(),
            })?;

        let invalid_price = || CatalogError::InvalidPrice {
            line: line_no,
            price: price.to_string(),
            content: line.to_string(),
        };
        // u32::from_str also accepts a leading '+'; only bare digits are prices
        if price.is_empty() || !price.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid_price());
        }
        let price = price.parse::<u32>().map_err(|_| invalid_price())?;

        Ok(Self::new(price, name))
    }
}

/// Ordered, immutable list of options.
///
/// Entry order is the order of the source lines. Lookups scan in that order
/// and the first match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    options: Vec<CarOption>,
}

impl Catalog {
    pub fn new(options: Vec<CarOption>) -> Self {
        Self { options }
    }

    /// Load a catalog from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, CatalogError> {
        let mut options = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let option = CarOption::parse_line(&line, idx + 1)?;
            debug!("Catalog entry {}: {} ({})", idx, option.name(), option.price());
            options.push(option);
        }
        Ok(Self { options })
    }

    /// Load a catalog from a file on disk.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        info!("Loaded {} options from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Position of the first entry whose normalized name equals `normalized_query`.
    pub fn find(&self, normalized_query: &str) -> Option<usize> {
        self.options
            .iter()
            .position(|option| option.normalized_name() == normalized_query)
    }

    /// Price of the entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Indices come from `find`, so an
    /// out-of-range index is a bug in the caller.
    pub fn price_of(&self, index: usize) -> u32 {
        self.options[index].price()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CarOption> {
        self.options.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl std::ops::Index<usize> for Catalog {
    type Output = CarOption;

    fn index(&self, index: usize) -> &Self::Output {
        &self.options[index]
    }
}
