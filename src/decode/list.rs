//! Listing response decoder
//!
//! The per-element decoders take one list element at a time. This splits a
//! whole listing body into its elements first, using a dotted record path
//! like `items` or `media.nodes`.

use super::types::MediaSource;
use crate::error::{Error, Result};
use crate::model::Media;
use serde_json::Value;

/// Decodes every element of a listing response body
#[derive(Debug, Clone)]
pub struct MediaListDecoder {
    source: MediaSource,
    record_path: Option<String>,
}

impl MediaListDecoder {
    /// Create a list decoder using the source's default record path
    pub fn new(source: MediaSource) -> Self {
        Self {
            source,
            record_path: source.default_record_path().map(str::to_string),
        }
    }

    /// Create a list decoder with an explicit record path
    pub fn with_path(source: MediaSource, path: impl Into<String>) -> Self {
        Self {
            source,
            record_path: Some(path.into()),
        }
    }

    /// Treat the whole body as the list
    pub fn without_path(source: MediaSource) -> Self {
        Self {
            source,
            record_path: None,
        }
    }

    pub fn source(&self) -> MediaSource {
        self.source
    }

    pub fn record_path(&self) -> Option<&str> {
        self.record_path.as_deref()
    }

    /// Decode all elements of `body`.
    ///
    /// Fails only when the body is not JSON. Elements that don't decode are
    /// skipped, and a record path that doesn't resolve yields no elements.
    pub fn decode(&self, body: &[u8]) -> Result<Vec<Media>> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))?;

        let decoder = self.source.decoder();
        Ok(self
            .elements(value)
            .into_iter()
            .filter_map(|element| decoder.decode_value(element))
            .collect())
    }

    fn elements(&self, value: Value) -> Vec<Value> {
        let selected = match &self.record_path {
            Some(path) => match select_path(value, path) {
                Some(v) => v,
                None => return Vec::new(),
            },
            None => value,
        };

        match selected {
            Value::Array(items) => items,
            Value::Null => Vec::new(),
            other => vec![other],
        }
    }
}

/// Walk a dotted path such as `tag.media.nodes` or `data[0].items`.
///
/// Negative indices count from the end of the array.
fn select_path(mut current: Value, path: &str) -> Option<Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    for part in path.split('.').filter(|p| !p.is_empty()) {
        let (name, index) = match part.find('[') {
            Some(bracket) => {
                let index = part[bracket + 1..].strip_suffix(']')?.parse::<i64>().ok()?;
                (&part[..bracket], Some(index))
            }
            None => (part, None),
        };

        if !name.is_empty() {
            current = current.get_mut(name)?.take();
        }

        if let Some(index) = index {
            let Value::Array(mut items) = current else {
                return None;
            };
            let len = i64::try_from(items.len()).ok()?;
            let idx = if index < 0 { len + index } else { index };
            if idx < 0 || idx >= len {
                return None;
            }
            current = items.swap_remove(usize::try_from(idx).ok()?);
        }
    }

    Some(current)
}
