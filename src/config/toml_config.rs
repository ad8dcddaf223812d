use crate::core::{ConfigProvider, SearchPolicy};
use crate::utils::error::{Result, SimsError};
use crate::utils::validation::{self, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub display: DisplayConfig,
    pub histogram: HistogramConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub name_width: usize,
    pub column_width: usize,
    /// 未設定時以最短表示法輸出成績
    pub grade_precision: Option<usize>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            name_width: 15,
            column_width: 10,
            grade_precision: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramConfig {
    pub bins: usize,
    pub bar_char: String,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            bins: crate::core::stats::DEFAULT_HISTOGRAM_BINS,
            bar_char: "*".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub policy: SearchPolicy,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SimsError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SIMS_BINS})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_range("display.name_width", self.display.name_width, 1, 80)?;
        validation::validate_range("display.column_width", self.display.column_width, 1, 80)?;
        if let Some(precision) = self.display.grade_precision {
            validation::validate_range("display.grade_precision", precision, 0, 6)?;
        }

        validation::validate_range("histogram.bins", self.histogram.bins, 1, 100)?;
        validation::validate_single_char("histogram.bar_char", &self.histogram.bar_char)?;

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn name_width(&self) -> usize {
        self.display.name_width
    }

    fn column_width(&self) -> usize {
        self.display.column_width
    }

    fn grade_precision(&self) -> Option<usize> {
        self.display.grade_precision
    }

    fn histogram_bins(&self) -> usize {
        self.histogram.bins
    }

    fn bar_char(&self) -> char {
        self.histogram.bar_char.chars().next().unwrap_or('*')
    }

    fn search_policy(&self) -> SearchPolicy {
        self.search.policy
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
