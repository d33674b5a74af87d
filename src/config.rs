use std::io::ErrorKind;
use std::path::PathBuf;
use std::{env, fs, io};

use serde::Deserialize;

use crate::build_mode::BuildMode;
use crate::tag_filter::TagMatch;
use crate::tag_index::TagScope;

#[derive(Deserialize, Debug)]
pub struct Paths {
    pub content_dir: PathBuf,
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Defaults {
    pub index_base_name: String,
    pub page_size: u32,
    pub tag_match: TagMatch,
    pub tag_scope: TagScopeName,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            index_base_name: "index".to_string(),
            page_size: 10,
            tag_match: TagMatch::Pattern,
            tag_scope: TagScopeName::All,
        }
    }
}

/// How tag pages are enumerated, as written in the config file.
#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TagScopeName {
    All,
    Published,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Build {
    pub mode: Option<BuildMode>,
}

#[derive(Deserialize, Debug)]
pub struct Log {
    pub level: LogLevel,
    #[serde(default = "default_true")]
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub paths: Paths,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub build: Build,
    pub log: Option<Log>,
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Tag scope for a given build mode. Published scope follows the same draft rule as the listings.
    pub fn tag_scope(&self, mode: BuildMode) -> TagScope {
        match self.defaults.tag_scope {
            TagScopeName::All => TagScope::AllRecords,
            TagScopeName::Published => TagScope::Published(mode),
        }
    }
}

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    if !path.starts_with("${exe_dir}") {
        return Ok(path);
    }

    let cur_exe = env::current_exe()?;
    let exe_dir = cur_exe.parent()
        .ok_or_else(|| io::Error::new(ErrorKind::NotFound, "Could not find executable directory"))?;
    let rest = path.strip_prefix("${exe_dir}")
        .map_err(|e| io::Error::new(ErrorKind::InvalidInput, e.to_string()))?;
    Ok(exe_dir.join(rest))
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    if cfg.defaults.page_size == 0 {
        return Err(io::Error::new(ErrorKind::InvalidData, "defaults.page_size has to be greater than 0"));
    }

    cfg.paths = Paths {
        content_dir: parse_path(cfg.paths.content_dir)?,
    };

    Ok(cfg)
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let cfg = parse_config(r#"
[paths]
content_dir = "content/blog"
"#).unwrap();

        assert_eq!(cfg.paths.content_dir, PathBuf::from("content/blog"));
        assert_eq!(cfg.defaults.index_base_name, "index");
        assert_eq!(cfg.defaults.page_size, 10);
        assert_eq!(cfg.defaults.tag_match, TagMatch::Pattern);
        assert_eq!(cfg.defaults.tag_scope, TagScopeName::All);
        assert!(cfg.build.mode.is_none());
        assert!(cfg.log.is_none());
    }

    #[test]
    fn test_full_config() {
        let cfg = parse_config(r#"
[paths]
content_dir = "posts"

[defaults]
index_base_name = "post"
page_size = 5
tag_match = "exact"
tag_scope = "published"

[build]
mode = "development"

[log]
level = "Debug"
"#).unwrap();

        assert_eq!(cfg.defaults.index_base_name, "post");
        assert_eq!(cfg.defaults.page_size, 5);
        assert_eq!(cfg.defaults.tag_match, TagMatch::Exact);
        assert_eq!(cfg.build.mode, Some(BuildMode::Development));
        assert_eq!(cfg.tag_scope(BuildMode::Production), TagScope::Published(BuildMode::Production));

        let log = cfg.log.unwrap();
        assert_eq!(log.level, LogLevel::Debug);
        assert!(log.log_to_console);
        assert!(log.location.is_none());
    }

    #[test]
    fn test_exe_dir_expansion() {
        let cfg = parse_config(r#"
[paths]
content_dir = "${exe_dir}/content"
"#).unwrap();

        let exe_dir = env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(cfg.paths.content_dir, exe_dir.join("content"));
    }

    #[test]
    fn test_missing_paths() {
        let err = parse_config("[defaults]\npage_size = 3\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_zero_page_size() {
        let err = parse_config("[paths]\ncontent_dir = \"c\"\n[defaults]\npage_size = 0\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }
}
