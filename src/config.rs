use std::io::ErrorKind;
use std::path::PathBuf;
use std::{env, fs, io};

use chrono::Duration;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Site {
    pub author: String,
    pub timezone: String,
    pub default_og_image: String,
    #[serde(default = "default_true")]
    pub dynamic_og_images: bool,
    #[serde(default = "default_true")]
    pub show_archives: bool,
    #[serde(default = "default_true")]
    pub show_back_button: bool,
}

#[derive(Debug, Deserialize)]
pub struct Paths {
    pub posts_dir: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    pub posts_per_index_page: u32,
    pub posts_per_archive_page: u32,
}

#[derive(Debug, Deserialize)]
pub struct Publish {
    #[serde(default = "default_margin_minutes")]
    pub scheduled_post_margin_minutes: i64,
}

impl Default for Publish {
    fn default() -> Self {
        Publish { scheduled_post_margin_minutes: default_margin_minutes() }
    }
}

impl Publish {
    pub fn margin(&self) -> Duration {
        Duration::minutes(self.scheduled_post_margin_minutes)
    }
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Copy, Clone)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub site: Site,
    pub paths: Paths,
    pub pagination: Pagination,
    #[serde(default)]
    pub publish: Publish,
    pub log: Option<Log>,
}

fn default_true() -> bool {
    true
}

fn default_margin_minutes() -> i64 {
    15
}

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    if path.starts_with("${exe_dir}") {
        let cur_exe = env::current_exe()?;
        let exe_dir = cur_exe.parent()
            .and_then(|p| p.to_str())
            .ok_or(io::Error::new(ErrorKind::NotFound, "Could not resolve the executable directory"))?;
        let str_path = path.to_str()
            .ok_or(io::Error::new(ErrorKind::InvalidData, "Configured path is not valid UTF-8"))?;
        Ok(PathBuf::from(str_path.replace("${exe_dir}", exe_dir)))
    } else {
        Ok(path)
    }
}

fn validate(cfg: &Config) -> io::Result<()> {
    if cfg.pagination.posts_per_index_page == 0 {
        return Err(io::Error::new(ErrorKind::InvalidData, "posts_per_index_page has to be greater than 0"));
    }
    if cfg.pagination.posts_per_archive_page == 0 {
        return Err(io::Error::new(ErrorKind::InvalidData, "posts_per_archive_page has to be greater than 0"));
    }
    if cfg.publish.scheduled_post_margin_minutes < 0 {
        return Err(io::Error::new(ErrorKind::InvalidData, "scheduled_post_margin_minutes cannot be negative"));
    }
    if cfg.site.timezone.trim().is_empty() {
        return Err(io::Error::new(ErrorKind::InvalidData, "timezone cannot be empty"));
    }
    Ok(())
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    validate(&cfg)?;
    Ok(cfg)
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    let mut cfg = parse_config(&cfg_content)?;

    cfg.paths = Paths {
        posts_dir: parse_path(cfg.paths.posts_dir)?,
        output_dir: parse_path(cfg.paths.output_dir)?,
    };

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG_DATA: &str = r##"
[site]
author = "thiago"
timezone = "America/Toronto"
default_og_image = "images/site-cover.png"

[paths]
posts_dir = "posts"
output_dir = "dist"

[pagination]
posts_per_index_page = 4
posts_per_archive_page = 10

[log]
level = "info"
log_to_console = true
"##;

    #[test]
    fn test_parse_config() {
        let cfg = parse_config(CONFIG_DATA).unwrap();
        assert_eq!(cfg.site.author, "thiago");
        assert_eq!(cfg.site.timezone, "America/Toronto");
        assert_eq!(cfg.pagination.posts_per_index_page, 4);
        assert_eq!(cfg.pagination.posts_per_archive_page, 10);
        // Defaults
        assert!(cfg.site.dynamic_og_images);
        assert!(cfg.site.show_archives);
        assert!(cfg.site.show_back_button);
        assert_eq!(cfg.publish.scheduled_post_margin_minutes, 15);
        assert_eq!(cfg.publish.margin(), Duration::minutes(15));
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let bad = CONFIG_DATA.replace("posts_per_index_page = 4", "posts_per_index_page = 0");
        let err = parse_config(&bad).unwrap_err();
        assert!(err.to_string().contains("posts_per_index_page"));
    }

    #[test]
    fn test_negative_margin_is_rejected() {
        let bad = format!("{}\n[publish]\nscheduled_post_margin_minutes = -5\n", CONFIG_DATA);
        let err = parse_config(&bad).unwrap_err();
        assert!(err.to_string().contains("scheduled_post_margin_minutes"));
    }

    #[test]
    fn test_empty_timezone_is_rejected() {
        let bad = CONFIG_DATA.replace("timezone = \"America/Toronto\"", "timezone = \"\"");
        assert!(parse_config(&bad).is_err());
    }
}
