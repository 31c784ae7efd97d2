pub mod site_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "plan-photos")]
#[command(about = "Open or download every photo of a plan on architectsnw.com")]
pub struct CliConfig {
    /// Plan number, or the full plan URL
    /// (e.g. https://www.architectsnw.com/plans/detailedplaninfo.cfm?PlanId=1053)
    pub plan: String,

    /// Download the images into a fresh temporary directory and print its path
    #[arg(long, conflicts_with = "list")]
    pub download: bool,

    /// Print the image URLs, one per line, instead of opening them
    #[arg(long)]
    pub list: bool,

    /// Log intermediate values such as the resolved plan ID and XML URL
    #[arg(long, visible_alias = "verbose")]
    pub debug: bool,

    /// Optional TOML file overriding the site root, XML path and HTTP settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the HTTP request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Browser,
    Download,
    List,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn output_mode(&self) -> OutputMode {
        if self.download {
            OutputMode::Download
        } else if self.list {
            OutputMode::List
        } else {
            OutputMode::Browser
        }
    }

    /// 載入站點配置並套用命令列覆蓋設定
    pub fn site_config(&self) -> crate::utils::error::Result<site_config::SiteConfig> {
        let mut config = match &self.config {
            Some(path) => site_config::SiteConfig::from_file(path)?,
            None => site_config::SiteConfig::default(),
        };
        if let Some(timeout) = self.timeout {
            config.http.timeout_seconds = timeout;
        }
        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_browser() {
        let config = CliConfig::try_parse_from(["plan-photos", "1053"]).unwrap();
        assert_eq!(config.plan, "1053");
        assert_eq!(config.output_mode(), OutputMode::Browser);
        assert!(!config.debug);
    }

    #[test]
    fn test_flags() {
        let config =
            CliConfig::try_parse_from(["plan-photos", "--download", "--verbose", "1053"]).unwrap();
        assert_eq!(config.output_mode(), OutputMode::Download);
        assert!(config.debug);

        let config = CliConfig::try_parse_from(["plan-photos", "--list", "1053"]).unwrap();
        assert_eq!(config.output_mode(), OutputMode::List);
    }

    #[test]
    fn test_download_and_list_conflict() {
        assert!(CliConfig::try_parse_from(["plan-photos", "--download", "--list", "1"]).is_err());
    }

    #[test]
    fn test_plan_is_required() {
        assert!(CliConfig::try_parse_from(["plan-photos"]).is_err());
    }

    #[test]
    fn test_timeout_override() {
        let config =
            CliConfig::try_parse_from(["plan-photos", "--timeout", "3", "1053"]).unwrap();
        let site = config.site_config().unwrap();
        assert_eq!(site.http.timeout_seconds, 3);
        assert_eq!(site.site.root, crate::core::extractor::DEFAULT_SITE_ROOT);
    }
}
