use anyhow::Context;
use serde::Deserialize;
use tracing::{error, info, warn};

const SCREEN_CONFIG_TOML: &str = include_str!("../assets/screen.toml");

const COUNT_PLACEHOLDER: &str = "{count}";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub header: HeaderConfig,
    pub input: InputConfig,
    pub duplicate_alert: DuplicateAlertConfig,
    pub remove_prompt: RemovePromptConfig,
    pub ids: IdConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub title: String,
    pub count_one: String,
    pub count_other: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DuplicateAlertConfig {
    pub title: String,
    pub message: String,
    pub dismiss_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RemovePromptConfig {
    pub title: String,
    pub message: String,
    pub decline_label: String,
    pub confirm_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IdConfig {
    pub strict_monotonic: bool,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            title: "to.do".to_string(),
            count_one: "{count} task".to_string(),
            count_other: "{count} tasks".to_string(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            placeholder: "Add a new to-do...".to_string(),
        }
    }
}

impl Default for DuplicateAlertConfig {
    fn default() -> Self {
        Self {
            title: "Task already added".to_string(),
            message: "You cannot add a task with the same name".to_string(),
            dismiss_label: "OK".to_string(),
        }
    }
}

impl Default for RemovePromptConfig {
    fn default() -> Self {
        Self {
            title: "Remove item".to_string(),
            message: "Are you sure you want to remove this item?".to_string(),
            decline_label: "No".to_string(),
            confirm_label: "Yes".to_string(),
        }
    }
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            strict_monotonic: true,
        }
    }
}

impl ScreenConfig {
    /// Parses the bundled `assets/screen.toml`, falling back to defaults
    /// when it does not parse.
    pub fn load() -> Self {
        match Self::from_toml_str(SCREEN_CONFIG_TOML) {
            Ok(config) => {
                info!(
                    strict_ids = config.ids.strict_monotonic,
                    header = %config.header.title,
                    "loaded screen config"
                );
                config
            }
            Err(err) => {
                error!(error = %format!("{err:#}"), "failed to parse screen config; using defaults");
                Self::default()
            }
        }
    }

    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let mut config: Self = toml::from_str(text).context("invalid screen config toml")?;
        config.sanitize();
        Ok(config)
    }

    fn sanitize(&mut self) {
        let defaults = Self::default();

        fill_blank(&mut self.header.title, &defaults.header.title, "header.title");
        fill_blank(&mut self.header.count_one, &defaults.header.count_one, "header.count_one");
        fill_blank(
            &mut self.header.count_other,
            &defaults.header.count_other,
            "header.count_other",
        );
        fill_blank(
            &mut self.duplicate_alert.title,
            &defaults.duplicate_alert.title,
            "duplicate_alert.title",
        );
        fill_blank(
            &mut self.input.placeholder,
            &defaults.input.placeholder,
            "input.placeholder",
        );
        fill_blank(
            &mut self.duplicate_alert.message,
            &defaults.duplicate_alert.message,
            "duplicate_alert.message",
        );
        fill_blank(
            &mut self.duplicate_alert.dismiss_label,
            &defaults.duplicate_alert.dismiss_label,
            "duplicate_alert.dismiss_label",
        );
        fill_blank(
            &mut self.remove_prompt.title,
            &defaults.remove_prompt.title,
            "remove_prompt.title",
        );
        fill_blank(
            &mut self.remove_prompt.message,
            &defaults.remove_prompt.message,
            "remove_prompt.message",
        );
        fill_blank(
            &mut self.remove_prompt.decline_label,
            &defaults.remove_prompt.decline_label,
            "remove_prompt.decline_label",
        );
        fill_blank(
            &mut self.remove_prompt.confirm_label,
            &defaults.remove_prompt.confirm_label,
            "remove_prompt.confirm_label",
        );
    }
}

impl HeaderConfig {
    pub fn format_count(&self, count: usize) -> String {
        let template = if count == 1 {
            &self.count_one
        } else {
            &self.count_other
        };
        template.replace(COUNT_PLACEHOLDER, &count.to_string())
    }
}

fn fill_blank(value: &mut String, fallback: &str, key: &str) {
    if value.trim().is_empty() {
        warn!(key, "blank screen config value; using default");
        *value = fallback.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::{HeaderConfig, ScreenConfig};

    #[test]
    fn bundled_config_parses() {
        let config = ScreenConfig::from_toml_str(super::SCREEN_CONFIG_TOML)
            .expect("bundled screen config should parse");
        assert!(config.ids.strict_monotonic);
        assert_eq!(config.remove_prompt.confirm_label, "Yes");
        assert_eq!(ScreenConfig::load(), config);
    }

    #[test]
    fn missing_sections_take_defaults() {
        let config = ScreenConfig::from_toml_str(
            r#"
            [remove_prompt]
            confirm_label = "Sim"
            decline_label = ""
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(config.remove_prompt.confirm_label, "Sim");
        assert_eq!(config.remove_prompt.decline_label, "No");
        assert_eq!(config.header, HeaderConfig::default());
        assert!(config.ids.strict_monotonic);
    }

    #[test]
    fn blank_messages_and_placeholder_take_defaults() {
        let config = ScreenConfig::from_toml_str(
            r#"
            [input]
            placeholder = "  "

            [duplicate_alert]
            message = ""

            [remove_prompt]
            message = " "
            "#,
        )
        .expect("blank values should parse");
        let defaults = ScreenConfig::default();

        assert_eq!(config.input.placeholder, defaults.input.placeholder);
        assert_eq!(config.duplicate_alert.message, defaults.duplicate_alert.message);
        assert_eq!(config.remove_prompt.message, defaults.remove_prompt.message);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let err = ScreenConfig::from_toml_str("[ids]\nstrict_monotonic = \"maybe\"")
            .expect_err("string is not a bool");
        assert!(format!("{err:#}").contains("invalid screen config toml"));
    }

    #[test]
    fn header_count_picks_plural_form() {
        let header = HeaderConfig::default();
        assert_eq!(header.format_count(0), "0 tasks");
        assert_eq!(header.format_count(1), "1 task");
        assert_eq!(header.format_count(3), "3 tasks");
    }
}
