// ABOUTME: Configuration for the seller onboarding wizard
// Loaded from TOML; a missing file or missing keys fall back to defaults

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::wizard::AdvancePolicy;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub verification: VerificationConfig,

    #[serde(default)]
    pub submission: SubmissionConfig,

    #[serde(default)]
    pub wizard: WizardConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationConfig {
    /// Code the demo one-time-code service accepts
    #[serde(default = "default_demo_code")]
    pub demo_code: String,

    #[serde(default = "default_verification_timeout")]
    pub timeout_ms: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            demo_code: default_demo_code(),
            timeout_ms: default_verification_timeout(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Registration endpoint; without one the draft is accepted locally
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default = "default_submission_timeout")]
    pub timeout_secs: u64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_submission_timeout(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Block Next on the credentials step until both password fields match
    #[serde(default)]
    pub require_password_match: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
        }
    }
}

fn default_demo_code() -> String {
    "123456".to_string()
}

fn default_verification_timeout() -> u64 {
    5000
}

fn default_submission_timeout() -> u64 {
    30
}

fn default_tick_rate() -> u64 {
    250
}

impl AppConfig {
    /// Load from the user config directory, or defaults when no file exists
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// `~/.seller-onboarding/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("config.toml"))
    }

    /// `~/.seller-onboarding`, also home to the log directory
    pub fn app_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".seller-onboarding"))
    }

    pub fn advance_policy(&self) -> AdvancePolicy {
        AdvancePolicy {
            require_password_match: self.wizard.require_password_match,
        }
    }

    pub fn verification_timeout(&self) -> Duration {
        Duration::from_millis(self.verification.timeout_ms)
    }

    pub fn submission_timeout(&self) -> Duration {
        Duration::from_secs(self.submission.timeout_secs)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.verification.demo_code, "123456");
        assert_eq!(config.verification.timeout_ms, 5000);
        assert_eq!(config.submission.endpoint, None);
        assert_eq!(config.submission.timeout_secs, 30);
        assert!(!config.wizard.require_password_match);
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "[verification]\ndemo_code = \"000111\"\n\n[wizard]\nrequire_password_match = true\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.verification.demo_code, "000111");
        assert_eq!(config.verification.timeout_ms, 5000);
        assert!(config.advance_policy().require_password_match);
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.submission.endpoint = Some("https://example.test/register".to_string());

        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[ui\ntick_rate_ms = ").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }
}
