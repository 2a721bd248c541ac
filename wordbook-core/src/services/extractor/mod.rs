//! Content extractor: raw source → ordered spread list
//!
//! Two strategies feed the same output:
//!
//! - structured records (`[{ "type": "cover", ... }, { "id": 1, "words": [...] }]`)
//! - heading-delimited block scanning (heading / paragraph / table / other)
//!
//! Extraction never fails. Anything malformed is logged and dropped, and an
//! empty list means "nothing to render".

mod blocks;
mod records;

use serde_json::Value;

use crate::config::{BookConfig, CoverPolicy};
use crate::source::ContentSource;
use crate::types::{ContentBlock, Locale, Spread};

/// Content extractor
#[derive(Debug, Clone, Copy)]
pub struct Extractor {
    cover: CoverPolicy,
    locale: Locale,
}

impl Extractor {
    /// Create an extractor from the book configuration
    #[must_use]
    pub fn new(config: &BookConfig) -> Self {
        Self {
            cover: config.cover,
            locale: config.locale,
        }
    }

    /// Extract spreads from any supported source shape
    pub fn extract(&self, source: &ContentSource) -> Vec<Spread> {
        let spreads = match source {
            ContentSource::Records(value) => self.from_records(value),
            ContentSource::Blocks(blocks) => self.from_blocks(blocks),
        };
        log::debug!("Extracted {} spreads", spreads.len());
        spreads
    }

    /// Structured-data mode
    pub fn from_records(&self, value: &Value) -> Vec<Spread> {
        records::extract_records(value, self.locale)
    }

    /// Structured-data mode from JSON text; invalid JSON yields an empty list
    pub fn from_json_str(&self, text: &str) -> Vec<Spread> {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => self.from_records(&value),
            Err(e) => {
                log::warn!("Spread data is not valid JSON: {e}");
                Vec::new()
            }
        }
    }

    /// Block-scanning mode
    pub fn from_blocks(&self, blocks: &[ContentBlock]) -> Vec<Spread> {
        blocks::extract_blocks(blocks, self.cover, self.locale)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&BookConfig::default())
    }
}
