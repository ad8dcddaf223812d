use crate::config::TomlConfig;
use crate::core::SearchPolicy;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "sims")]
#[command(about = "Interactive student roster: grades, sorting, search and statistics")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Number of histogram bins (overrides the config file)")]
    pub histogram_bins: Option<usize>,

    #[arg(long, help = "Search policy: as-is or sort-by-id (overrides the config file)")]
    pub search_policy: Option<SearchPolicy>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併預設值、設定檔與命令列參數，並驗證結果
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(bins) = self.histogram_bins {
            config.histogram.bins = bins;
        }
        if let Some(policy) = self.search_policy {
            config.search.policy = policy;
        }

        config.validate()?;
        tracing::debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }
}
