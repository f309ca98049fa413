use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::utils::paths::get_ui_cache_path;

/// Remembered UI selection, restored on the next launch. Purely cosmetic
/// state; losing it never affects the board.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiCache {
    /// Id of the category pane that was active
    pub category_id: Option<String>,
    /// Id of the task the cursor was on
    pub selected_task_id: Option<String>,
}

impl UiCache {
    pub fn load() -> Result<Self> {
        let path = get_ui_cache_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cache: UiCache = serde_json::from_str(&content)?;
        Ok(cache)
    }

    pub fn save(&self) -> Result<()> {
        let path = get_ui_cache_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cache() {
        let cache = UiCache::default();
        assert!(cache.category_id.is_none());
        assert!(cache.selected_task_id.is_none());
    }

    #[test]
    fn test_serialize_deserialize() {
        let cache = UiCache {
            category_id: Some("core".to_string()),
            selected_task_id: Some("abc-123".to_string()),
        };

        let json = serde_json::to_string(&cache).unwrap();
        let loaded: UiCache = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.category_id.as_deref(), Some("core"));
        assert_eq!(loaded.selected_task_id.as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_serialize_none() {
        let json = serde_json::to_string(&UiCache::default()).unwrap();
        let loaded: UiCache = serde_json::from_str(&json).unwrap();

        assert!(loaded.category_id.is_none());
        assert!(loaded.selected_task_id.is_none());
    }
}
