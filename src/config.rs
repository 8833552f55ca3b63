use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::constants::*;
use crate::error::{Result, SliderError};

/// Tunables of a slider: timing, and the selectors/class names the
/// presentation adapters use to find and mark elements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderConfig {
    pub interval_ms: u64,
    pub item_selector: String,
    pub active_class_name: String,
    pub bar_selector: String,
    pub bar_item_class_name: String,
    pub bar_active_class_name: String,
    pub prev_button_selector: String,
    pub next_button_selector: String,
    /// Whether the assembly routine starts autoplay right away.
    pub autoplay: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            item_selector: ITEM_SELECTOR.to_string(),
            active_class_name: ACTIVE_CLASS_NAME.to_string(),
            bar_selector: BAR_SELECTOR.to_string(),
            bar_item_class_name: BAR_ITEM_CLASS_NAME.to_string(),
            bar_active_class_name: BAR_ACTIVE_CLASS_NAME.to_string(),
            prev_button_selector: PREV_BUTTON_SELECTOR.to_string(),
            next_button_selector: NEXT_BUTTON_SELECTOR.to_string(),
            autoplay: true,
        }
    }
}

impl SliderConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: SliderConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SliderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            return Err(SliderError::InvalidConfig(
                "interval_ms must be greater than zero".into(),
            ));
        }
        let selectors = [
            ("item_selector", &self.item_selector),
            ("bar_selector", &self.bar_selector),
            ("prev_button_selector", &self.prev_button_selector),
            ("next_button_selector", &self.next_button_selector),
        ];
        for (name, value) in selectors {
            if !(value.starts_with('.') || value.starts_with('#')) || value.len() < 2 {
                return Err(SliderError::InvalidConfig(format!(
                    "{name} must be a '.class' or '#id' selector, got {value:?}"
                )));
            }
        }
        let class_names = [
            ("active_class_name", &self.active_class_name),
            ("bar_item_class_name", &self.bar_item_class_name),
            ("bar_active_class_name", &self.bar_active_class_name),
        ];
        for (name, value) in class_names {
            if value.is_empty() || value.contains(char::is_whitespace) {
                return Err(SliderError::InvalidConfig(format!(
                    "{name} must be a single class name, got {value:?}"
                )));
            }
        }
        Ok(())
    }
}
