use serde_json::Value;

use crate::models::TutorRecord;

/// Places the tutor list has been found in catalog responses, tried in order.
/// The empty pointer is the response body itself.
pub const DEFAULT_ENVELOPE_PATHS: &[&str] = &["/data/docs", "/docs", "/data", "/tutors", ""];

/// One way of locating the tutor array inside a response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeStrategy {
    pointer: String,
}

impl EnvelopeStrategy {
    /// Accepts a JSON pointer (`/data/docs`) or a dotted path (`data.docs`)
    pub fn new(path: &str) -> Self {
        let path = path.trim();
        let pointer = if path.is_empty() || path == "/" || path == "." {
            String::new()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path.replace('.', "/"))
        };
        Self { pointer }
    }

    pub fn pointer(&self) -> &str {
        &self.pointer
    }

    #[inline]
    pub fn extract<'a>(&self, body: &'a Value) -> Option<&'a Vec<Value>> {
        body.pointer(&self.pointer)?.as_array()
    }
}

/// Ordered chain of envelope strategies; the first one that finds an array wins
#[derive(Debug, Clone)]
pub struct EnvelopeChain {
    strategies: Vec<EnvelopeStrategy>,
}

impl EnvelopeChain {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            strategies: paths
                .into_iter()
                .map(|path| EnvelopeStrategy::new(path.as_ref()))
                .collect(),
        }
    }

    pub fn strategies(&self) -> &[EnvelopeStrategy] {
        &self.strategies
    }

    /// Find the first strategy that yields an array
    pub fn locate(&self, body: &Value) -> Option<&EnvelopeStrategy> {
        self.strategies
            .iter()
            .find(|strategy| strategy.extract(body).is_some())
    }

    /// Unwrap a response body into tutor records, in server order.
    ///
    /// Never fails: an unrecognized envelope yields an empty list, and entries
    /// that cannot be read as a tutor are skipped.
    pub fn into_records(&self, mut body: Value) -> Vec<TutorRecord> {
        let Some(strategy) = self.locate(&body) else {
            tracing::warn!(
                "Catalog response matched none of {} envelope shapes, treating as empty",
                self.strategies.len()
            );
            return Vec::new();
        };

        let pointer = strategy.pointer();
        let items = match body.pointer_mut(pointer).map(Value::take) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        };

        tracing::debug!("Unwrapped {} catalog entries at '{}'", items.len(), pointer);

        items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| {
                if !item.is_object() {
                    tracing::warn!("Skipping catalog entry {}: not an object", index);
                    return None;
                }
                match serde_json::from_value::<TutorRecord>(item) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        tracing::warn!("Skipping catalog entry {}: {}", index, e);
                        None
                    }
                }
            })
            .collect()
    }
}

impl Default for EnvelopeChain {
    fn default() -> Self {
        Self::new(DEFAULT_ENVELOPE_PATHS)
    }
}
