//! Cache key definitions
//!
//! Pattern results are keyed on the case type plus the corpus's declared
//! version marker. The marker is used verbatim; hashing corpus contents
//! is out of scope.

use std::fmt;

/// Cache key for a historical-pattern analysis
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternKey {
    /// Case type the corpus was filtered to
    pub case_type: String,
    /// Corpus version marker ("default" when the caller declared none)
    pub corpus_version: String,
}

impl PatternKey {
    /// Create a new pattern key
    pub fn new(case_type: &str, corpus_version: &str) -> Self {
        let corpus_version = if corpus_version.is_empty() {
            "default".to_string()
        } else {
            corpus_version.to_string()
        };

        Self {
            case_type: case_type.to_string(),
            corpus_version,
        }
    }

    /// Convert to storage key string
    /// Format: case_type:corpus_version
    pub fn to_storage_key(&self) -> String {
        format!("{}:{}", self.case_type, self.corpus_version)
    }
}

impl fmt::Display for PatternKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.case_type, self.corpus_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_key_creation() {
        let key = PatternKey::new("mietrecht", "2024-06-01T00:00:00Z");
        assert_eq!(key.case_type, "mietrecht");
        assert_eq!(key.corpus_version, "2024-06-01T00:00:00Z");
    }

    #[test]
    fn test_pattern_key_empty_version() {
        let key = PatternKey::new("mietrecht", "");
        assert_eq!(key.corpus_version, "default");
        assert_eq!(key.to_storage_key(), "mietrecht:default");
    }

    #[test]
    fn test_pattern_key_deterministic() {
        let key1 = PatternKey::new("mietrecht", "v1");
        let key2 = PatternKey::new("mietrecht", "v1");
        assert_eq!(key1, key2);
        assert_eq!(key1.to_storage_key(), key2.to_storage_key());
    }

    #[test]
    fn test_different_versions_different_keys() {
        let key1 = PatternKey::new("mietrecht", "v1");
        let key2 = PatternKey::new("mietrecht", "v2");
        assert_ne!(key1, key2);
    }

    #[test]
    fn test_display() {
        let key = PatternKey::new("arbeitsrecht", "v3");
        assert_eq!(format!("{}", key), "arbeitsrecht@v3");
    }
}
