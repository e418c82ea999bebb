use crate::consts::{
    DEFAULT_BACK_REFERENCE_WINDOW, DEFAULT_MIN_PASSWORD_LEN, SIMILARITY_THRESHOLD,
};
use crate::cost::StrategyKind;
use crate::error::{KeyWalkError, KwResult};
use crate::layout::LayoutKind;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub analysis: AnalysisParams,
    #[command(flatten)]
    pub grouping: GroupingParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisParams {
    /// Keyboard grid: qwerty | dvorak
    #[arg(long, default_value = "qwerty")]
    pub layout: String,

    /// Effort model for weighted paths: standard | gaming | mobile | none
    #[arg(long, default_value = "none")]
    pub strategy: String,

    #[arg(long, default_value_t = false)]
    pub back_references: bool,

    #[arg(long, default_value_t = DEFAULT_BACK_REFERENCE_WINDOW)]
    pub back_reference_window: usize,

    #[arg(long, default_value_t = DEFAULT_MIN_PASSWORD_LEN)]
    pub min_password_len: usize,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            layout: "qwerty".to_string(),
            strategy: "none".to_string(),
            back_references: false,
            back_reference_window: DEFAULT_BACK_REFERENCE_WINDOW,
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingParams {
    #[arg(long, default_value_t = SIMILARITY_THRESHOLD)]
    pub similarity_threshold: f64,
}

impl Default for GroupingParams {
    fn default() -> Self {
        Self {
            similarity_threshold: SIMILARITY_THRESHOLD,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KwResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            KeyWalkError::Config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides file values with flags the user actually typed.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(analysis.layout);
        update_if_present!(analysis.strategy);
        update_if_present!(analysis.back_references);
        update_if_present!(analysis.back_reference_window);
        update_if_present!(analysis.min_password_len);
        update_if_present!(grouping.similarity_threshold);
    }

    pub fn validate(&self) -> KwResult<()> {
        self.analysis.layout_kind()?;
        self.analysis.strategy_kind()?;
        let t = self.grouping.similarity_threshold;
        if !(0.0..=1.0).contains(&t) {
            return Err(KeyWalkError::Config(format!(
                "similarity_threshold must be within 0..=1, got {}",
                t
            )));
        }
        Ok(())
    }
}

impl AnalysisParams {
    pub fn layout_kind(&self) -> KwResult<LayoutKind> {
        LayoutKind::from_str(self.layout.trim())
            .map_err(|_| KeyWalkError::Config(format!("Unknown layout '{}'", self.layout)))
    }

    /// `None` selects the unweighted path finder.
    pub fn strategy_kind(&self) -> KwResult<Option<StrategyKind>> {
        let name = self.strategy.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        StrategyKind::from_str(name)
            .map(Some)
            .map_err(|_| KeyWalkError::Config(format!("Unknown strategy '{}'", self.strategy)))
    }
}
