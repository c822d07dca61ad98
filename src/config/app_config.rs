use crate::error::InitProcessError;
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = InitProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(InitProcessError::EnvVarParseError(format!(
                "無効な出力形式です: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
    pub output: OutputFormat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InitProcessError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, InitProcessError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .parse::<LevelFilter>()
            .map_err(|e| InitProcessError::EnvVarParseError(format!("LOG_LEVEL: {}", e)))?;

        let log_file = lookup("LOG_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let output = lookup("OUTPUT_FORMAT")
            .unwrap_or_else(|| "text".to_string())
            .parse::<OutputFormat>()?;

        Ok(Self {
            log_level,
            log_file,
            output,
        })
    }

    #[cfg(test)]
    pub fn for_testing() -> Self {
        Self {
            log_level: LevelFilter::Debug,
            log_file: None,
            output: OutputFormat::Text,
        }
    }
}
