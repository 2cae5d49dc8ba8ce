//! Application configuration. Terminal presentation switches.
//!
//! Sources, lowest priority first: optional file named by `COPD_SCALE_CONFIG`,
//! then `COPD_SCALE_*` environment variables (a `.env` file is loaded first).

use serde::Deserialize;

/// Environment variable prefix for every key below.
pub const ENV_PREFIX: &str = "COPD_SCALE";

#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    /// Print the figlet banner on interactive start. Read from COPD_SCALE_SHOW_BANNER.
    #[serde(default)]
    pub show_banner: Option<bool>,

    /// ANSI colors in panels and prompts. Read from COPD_SCALE_COLOR.
    #[serde(default)]
    pub color: Option<bool>,

    /// Clear the terminal before each re-render. Read from COPD_SCALE_CLEAR_SCREEN.
    #[serde(default)]
    pub clear_screen: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var(format!("{ENV_PREFIX}_CONFIG")) {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        c.build()?.try_deserialize()
    }

    /// Returns whether to print the banner. Defaults to true.
    pub fn show_banner_or_default(&self) -> bool {
        self.show_banner.unwrap_or(true)
    }

    /// Returns whether to style output with ANSI colors. Defaults to true.
    /// `NO_COLOR` (any value) wins over an unset key.
    pub fn color_or_default(&self) -> bool {
        self.color
            .unwrap_or_else(|| std::env::var_os("NO_COLOR").is_none())
    }

    /// Returns whether to clear the screen between renders. Defaults to false.
    pub fn clear_screen_or_default(&self) -> bool {
        self.clear_screen.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert!(cfg.show_banner_or_default());
        assert!(!cfg.clear_screen_or_default());
    }

    #[test]
    fn test_explicit_values_win() {
        let cfg = AppConfig {
            show_banner: Some(false),
            color: Some(false),
            clear_screen: Some(true),
        };
        assert!(!cfg.show_banner_or_default());
        assert!(!cfg.color_or_default());
        assert!(cfg.clear_screen_or_default());
    }

    #[test]
    fn test_deserialize_from_file_source() {
        let cfg: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "show_banner = false\nclear_screen = true\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.show_banner, Some(false));
        assert_eq!(cfg.clear_screen, Some(true));
        assert_eq!(cfg.color, None);
    }

    #[test]
    fn test_environment_prefix_and_bool_parsing() {
        let env: config::Map<String, String> = [
            ("COPD_SCALE_SHOW_BANNER", "false"),
            ("COPD_SCALE_COLOR", "true"),
            ("OTHER_CLEAR_SCREEN", "true"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let cfg: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(Some(env)),
            )
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.show_banner, Some(false));
        assert_eq!(cfg.color, Some(true));
        assert_eq!(cfg.clear_screen, None);
    }
}
