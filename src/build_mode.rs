use std::env;
use std::fmt::{Display, Formatter};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::content::ContentRecord;

pub const BUILD_MODE_ENV: &str = "FOLIO_ENV";

/// Production builds leave drafts out of every listing.
#[derive(Deserialize, Serialize, ValueEnum, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Drafts left out
    #[default]
    Production,
    /// Drafts listed
    Development,
}

impl BuildMode {
    pub fn is_production(&self) -> bool {
        *self == BuildMode::Production
    }

    pub fn includes(&self, record: &ContentRecord) -> bool {
        !(self.is_production() && record.draft)
    }

    pub fn from_env_value(value: &str) -> BuildMode {
        match value.trim().to_lowercase().as_str() {
            "production" | "prod" => BuildMode::Production,
            _ => BuildMode::Development,
        }
    }

    /// Flag wins over the environment, the environment over the config file.
    pub fn resolve(flag: Option<BuildMode>, configured: Option<BuildMode>) -> BuildMode {
        let from_env = env::var(BUILD_MODE_ENV).ok().map(|v| Self::from_env_value(&v));
        Self::pick(flag, from_env, configured)
    }

    fn pick(flag: Option<BuildMode>, from_env: Option<BuildMode>, configured: Option<BuildMode>) -> BuildMode {
        flag.or(from_env).or(configured).unwrap_or_default()
    }
}

impl Display for BuildMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildMode::Production => write!(f, "production"),
            BuildMode::Development => write!(f, "development"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_data::record;

    use super::*;

    #[test]
    fn test_includes() {
        let draft = record("draft", "2024-01-01", &[], true);
        let live = record("live", "2024-01-01", &[], false);

        assert!(!BuildMode::Production.includes(&draft));
        assert!(BuildMode::Production.includes(&live));
        assert!(BuildMode::Development.includes(&draft));
        assert!(BuildMode::Development.includes(&live));
    }

    #[test]
    fn test_from_env_value() {
        assert_eq!(BuildMode::from_env_value("production"), BuildMode::Production);
        assert_eq!(BuildMode::from_env_value(" PROD "), BuildMode::Production);
        assert_eq!(BuildMode::from_env_value("development"), BuildMode::Development);
        assert_eq!(BuildMode::from_env_value(""), BuildMode::Development);
    }

    #[test]
    fn test_pick_order() {
        use BuildMode::*;
        assert_eq!(BuildMode::pick(Some(Development), Some(Production), Some(Production)), Development);
        assert_eq!(BuildMode::pick(None, Some(Development), Some(Production)), Development);
        assert_eq!(BuildMode::pick(None, None, Some(Development)), Development);
        assert_eq!(BuildMode::pick(None, None, None), Production);
    }
}
