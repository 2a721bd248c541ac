//! Content sources
//!
//! A source is either structured spread records or a sequence of classified
//! content blocks. Files are loaded by extension; once the bytes are read,
//! nothing here fails: bad content degrades to an empty spread list.

pub mod markdown;

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::types::ContentBlock;

/// Block `type` tags recognised when sniffing a JSON array
const BLOCK_TYPES: &[&str] = &["heading", "paragraph", "table", "other"];

/// A raw content source
#[derive(Debug, Clone, PartialEq)]
pub enum ContentSource {
    /// Structured spread records (expected to be a JSON array)
    Records(Value),
    /// Classified content blocks in document order
    Blocks(Vec<ContentBlock>),
}

impl ContentSource {
    /// Interpret a JSON value
    ///
    /// An array whose every element carries a block `type` is read as blocks;
    /// everything else is handed to structured-record extraction.
    #[must_use]
    pub fn from_json_value(value: Value) -> Self {
        if looks_like_blocks(&value) {
            match serde_json::from_value::<Vec<ContentBlock>>(value.clone()) {
                Ok(blocks) => return Self::Blocks(blocks),
                Err(e) => log::warn!("Block array did not parse, reading as records: {e}"),
            }
        }
        Self::Records(value)
    }

    /// Interpret JSON text; invalid JSON becomes an empty record source
    #[must_use]
    pub fn from_json_str(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Self::from_json_value(value),
            Err(e) => {
                log::warn!("Source is not valid JSON: {e}");
                Self::Records(Value::Null)
            }
        }
    }

    /// Classify a Markdown document into blocks
    #[must_use]
    pub fn from_markdown(text: &str) -> Self {
        Self::Blocks(markdown::classify(text))
    }

    /// Whether the source obviously holds nothing
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Records(Value::Array(items)) => items.is_empty(),
            Self::Records(_) => true,
            Self::Blocks(blocks) => blocks.is_empty(),
        }
    }
}

fn looks_like_blocks(value: &Value) -> bool {
    let Some(items) = value.as_array() else {
        return false;
    };
    !items.is_empty()
        && items.iter().all(|item| {
            item.get("type")
                .and_then(Value::as_str)
                .is_some_and(|tag| BLOCK_TYPES.contains(&tag))
        })
}

/// Load a source file, dispatching on its extension
///
/// # Arguments
/// * `path` - `.json`, `.md`, `.markdown` or `.txt` file
pub fn load_source(path: &Path) -> CoreResult<ContentSource> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let parse: fn(&str) -> ContentSource = match extension.as_str() {
        "json" => ContentSource::from_json_str,
        "md" | "markdown" | "txt" => ContentSource::from_markdown,
        _ => {
            return Err(CoreError::UnsupportedSource(format!(
                "{} (expected .json, .md, .markdown or .txt)",
                path.display()
            )));
        }
    };

    let text = fs::read_to_string(path)?;
    log::info!("Loaded source {} ({} bytes)", path.display(), text.len());
    Ok(parse(&text))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn block_arrays_are_detected() {
        let source = ContentSource::from_json_value(json!([
            { "type": "heading", "text": "Spread 1" },
            { "type": "table", "rows": [["cat", "캣"]] }
        ]));
        let ContentSource::Blocks(blocks) = source else {
            panic!("expected blocks");
        };
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn record_arrays_stay_records() {
        let value = json!([{ "type": "cover" }, { "id": 1 }]);
        assert_eq!(
            ContentSource::from_json_value(value.clone()),
            ContentSource::Records(value)
        );
    }

    #[test]
    fn invalid_json_is_empty_records() {
        let source = ContentSource::from_json_str("[1, 2");
        assert_eq!(source, ContentSource::Records(Value::Null));
        assert!(source.is_empty());
    }

    #[test]
    fn loads_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("book.JSON");
        fs::write(&json_path, r#"[{ "id": 1 }]"#).unwrap();
        assert!(matches!(
            load_source(&json_path).unwrap(),
            ContentSource::Records(_)
        ));

        let md_path = dir.path().join("book.md");
        let mut file = fs::File::create(&md_path).unwrap();
        writeln!(file, "## Spread 1\n\n| a | b |\n|---|---|\n| cat | 캣 |").unwrap();
        let ContentSource::Blocks(blocks) = load_source(&md_path).unwrap() else {
            panic!("expected blocks");
        };
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_source(Path::new("book.pdf")).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedSource(_)));
        assert!(err.is_expected());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_source(&dir.path().join("missing.md")).unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
