use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, NdError};
use crate::layout::Layout;

/// Shape (and optionally a point) read from a JSON file such as
/// `{"extents": [5, 4], "coords": [2, 3]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub extents: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<Vec<usize>>,
}

impl LayoutConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NdError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded layout config");
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, NdError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn layout(&self) -> Result<Layout, LayoutError> {
        Layout::new(&self.extents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_coords() {
        let config = LayoutConfig::from_json(r#"{"extents": [5, 4], "coords": [2, 3]}"#).unwrap();
        assert_eq!(config.coords, Some(vec![2, 3]));
        assert_eq!(config.layout().unwrap().capacity(), 20);

        let config = LayoutConfig::from_json(r#"{"extents": [2, 2, 2]}"#).unwrap();
        assert_eq!(config.coords, None);
    }

    #[test]
    fn test_bad_json_is_reported() {
        assert!(matches!(
            LayoutConfig::from_json("{\"extents\": 3}"),
            Err(NdError::Json(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("layout.json");
        fs::write(&path, r#"{"extents": [3, 7]}"#).unwrap();
        let config = LayoutConfig::load(&path).unwrap();
        assert_eq!(config.extents, vec![3, 7]);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.json");
        assert!(matches!(LayoutConfig::load(&path), Err(NdError::Io(_))));
    }
}
