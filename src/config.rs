// Mon Feb 02 2026 - Alex

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub word_size: usize,
    pub output_dir: PathBuf,
    pub package: String,
    pub overwrite: bool,
    /// Handle type names pre-registered before any declaration parses.
    pub handles: Vec<String>,
    /// Named array-length constants from the header's `#define`s.
    pub constants: IndexMap<String, i64>,
}

impl Default for Config {
    fn default() -> Self {
        let mut constants = IndexMap::new();
        for (name, value) in [
            ("VK_MAX_PHYSICAL_DEVICE_NAME_SIZE", 256),
            ("VK_MAX_EXTENSION_NAME_SIZE", 256),
            ("VK_MAX_DESCRIPTION_SIZE", 256),
            ("VK_MAX_DRIVER_NAME_SIZE", 256),
            ("VK_MAX_DRIVER_INFO_SIZE", 256),
            ("VK_MAX_MEMORY_TYPES", 32),
            ("VK_MAX_MEMORY_HEAPS", 16),
            ("VK_MAX_DEVICE_GROUP_SIZE", 32),
            ("VK_UUID_SIZE", 16),
            ("VK_LUID_SIZE", 8),
        ] {
            constants.insert(name.to_string(), value);
        }

        Self {
            word_size: 8,
            output_dir: PathBuf::from("generated"),
            package: "vulkan.bindings".to_string(),
            overwrite: false,
            handles: Vec::new(),
            constants,
        }
    }
}

impl Config {
    /// Length-symbol resolver over the configured constants.
    pub fn length_resolver(&self) -> impl Fn(&str) -> Option<i64> + '_ {
        move |symbol| self.constants.get(symbol).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = Config::default();
        let resolve = config.length_resolver();
        assert_eq!(resolve("VK_UUID_SIZE"), Some(16));
        assert_eq!(resolve("VK_MAX_MEMORY_TYPES"), Some(32));
        assert_eq!(resolve("UNKNOWN"), None);
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.word_size, 8);
        assert_eq!(back.constants.len(), config.constants.len());
    }
}
