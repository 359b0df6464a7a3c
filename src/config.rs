use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;

use crate::util::dates;
use crate::Error;

pub const CONFIG_FILE: &str = "oscares.toml";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
struct FileConfig {
    pub clear_screen: bool,
    pub pause_after_action: bool,
    pub log: FileLogConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            pause_after_action: true,
            log: FileLogConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
struct FileLogConfig {
    pub level: String,
    pub path: String,
    pub json_path: String,
}

impl Default for FileLogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            path: "logs/oscares.{DATE}.log".to_string(),
            json_path: "logs/oscares.{DATE}.json".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogConfig {
    pub level: String,
    pub path: PathBuf,
    pub json_path: PathBuf,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub clear_screen: bool,
    pub pause_after_action: bool,
    pub log: LogConfig,
    /// File the settings came from; `None` when the built-in defaults are used.
    pub source: Option<PathBuf>,
}

fn expand_tilde(path: &str) -> Result<PathBuf, Error> {
    if path.starts_with("~/") {
        let home = env::var("HOME")?;
        Ok(PathBuf::from(path.replacen("~", &home, 1)))
    } else {
        Ok(PathBuf::from(path))
    }
}

/// Reads `oscares.toml` from the executable's directory, falling back to defaults.
pub fn load_config() -> Result<AppConfig, Error> {
    let exe_path = env::current_exe()?;
    let config_path = match exe_path.parent() {
        Some(dir) => dir.join(CONFIG_FILE),
        _ => return Err("failed to determine executable directory".into()),
    };

    if !config_path.exists() {
        return build_config(FileConfig::default(), None);
    }
    load_config_from(&config_path)
}

pub fn load_config_from(config_path: &Path) -> Result<AppConfig, Error> {
    if !config_path.is_file() {
        return Err(format!("Config path is not a file: {}", config_path.display()).into());
    }
    let s = fs::read_to_string(config_path)?;
    let cfg: FileConfig = toml::from_str(&s)?;
    build_config(cfg, Some(config_path.to_path_buf()))
}

fn build_config(cfg: FileConfig, source: Option<PathBuf>) -> Result<AppConfig, Error> {
    Ok(AppConfig {
        clear_screen: cfg.clear_screen,
        pause_after_action: cfg.pause_after_action,
        log: build_log_config(cfg.log)?,
        source,
    })
}

fn build_log_config(file_log: FileLogConfig) -> Result<LogConfig, Error> {
    let path = log_file_replacements(&file_log.path)?;
    ensure_log_file_location(&path, &file_log.path)?;

    let json_path = log_file_replacements(&file_log.json_path)?;
    ensure_log_file_location(&json_path, &file_log.json_path)?;

    Ok(LogConfig {
        level: file_log.level,
        path,
        json_path,
    })
}

fn ensure_log_file_location(path: &Path, configured: &str) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                format!("Could not create log directory {}: {}", parent.display(), e)
            })?;
        }
    }
    if path.exists() && !path.is_file() {
        return Err(format!("Log path exists but is not a file: {}", configured).into());
    }
    Ok(())
}

fn log_file_replacements(cfg_path: &str) -> Result<PathBuf, Error> {
    let date_str = dates::local_date_yyyy_mm_dd();
    let replaced = cfg_path.replace("{DATE}", &date_str);
    expand_tilde(&replaced)
}
