use crate::core::extractor::DEFAULT_SITE_ROOT;
use crate::core::ConfigProvider;
use crate::domain::model::PlanId;
use crate::utils::error::{PlanError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

pub const PLAN_ID_PLACEHOLDER: &str = "{plan_id}";
pub const DEFAULT_PHOTO_XML_PATH: &str = "assets/photoXML/{plan_id}.xml";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("plan-photos/", env!("CARGO_PKG_VERSION"));

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub http: HttpSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Root URL that relative album paths and the photo XML path hang off.
    pub root: String,
    pub photo_xml_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSection {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            root: DEFAULT_SITE_ROOT.to_string(),
            photo_xml_path: DEFAULT_PHOTO_XML_PATH.to_string(),
        }
    }
}

impl Default for HttpSection {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SiteConfig {
    /// 指向指定站點根目錄的預設配置
    pub fn with_site_root(root: impl Into<String>) -> Self {
        Self {
            site: SiteSection {
                root: root.into(),
                ..SiteSection::default()
            },
            ..Self::default()
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PlanError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SITE_ROOT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_base_url("site.root", &self.site.root)?;
        validation::validate_contains_placeholder(
            "site.photo_xml_path",
            &self.site.photo_xml_path,
            PLAN_ID_PLACEHOLDER,
        )?;
        validation::validate_positive_number("http.timeout_seconds", self.http.timeout_seconds, 1)?;
        validation::validate_non_empty_string("http.user_agent", &self.http.user_agent)?;
        Ok(())
    }
}

impl ConfigProvider for SiteConfig {
    fn site_root(&self) -> &str {
        &self.site.root
    }

    fn photo_xml_url(&self, plan_id: &PlanId) -> String {
        format!(
            "{}{}",
            self.site.root,
            self.site
                .photo_xml_path
                .replace(PLAN_ID_PLACEHOLDER, plan_id.as_str())
        )
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    fn user_agent(&self) -> &str {
        &self.http.user_agent
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
