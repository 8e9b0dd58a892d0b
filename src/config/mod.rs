use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::Serialize;

use crate::loader::DataSource;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(alias = "data")]
    pub source: Option<String>,
    pub query: Option<String>,
    pub timeout: Option<u64>,
    pub user_agent: Option<String>,
    pub output: Option<String>,
    pub output_format: Option<String>,
    pub no_color: Option<bool>,
}

/// Environment variable naming a config file to use instead of the default.
pub const CONFIG_ENV: &str = "DEMOGRID_CONFIG";

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

fn config_path_from(override_path: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    match override_path.filter(|p| !p.is_empty()) {
        Some(path) => Some(expand_tilde(&path.to_string_lossy())),
        None => Some(home?.join(".demogrid").join("config.yml")),
    }
}

/// `$DEMOGRID_CONFIG` when set, else `~/.demogrid/config.yml`.
pub fn default_config_path() -> Option<PathBuf> {
    config_path_from(env::var_os(CONFIG_ENV), home_dir())
}

pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path {
        "~" => "",
        _ => match path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
            Some(rest) => rest,
            None => return PathBuf::from(path),
        },
    };
    match home_dir() {
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}

pub fn expand_tilde_string(path: &str) -> String {
    expand_tilde(path).to_string_lossy().to_string()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// Relative files named in a config file live next to it; URLs pass through.
fn resolve_local(value: Option<String>, base: &Path) -> Option<String> {
    let value = non_blank(value)?;
    if matches!(DataSource::parse(&value), DataSource::Url(_)) {
        return Some(value);
    }
    let path = expand_tilde(&value);
    if path.is_absolute() {
        return Some(path.to_string_lossy().to_string());
    }
    Some(base.join(path).to_string_lossy().to_string())
}

impl ConfigFile {
    /// Drops blank values and anchors the file paths of a config loaded
    /// from `path`.
    fn resolved_against(self, path: &Path) -> Self {
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Self {
            source: resolve_local(self.source, base),
            query: self.query.filter(|q| !q.trim().is_empty()),
            timeout: self.timeout,
            user_agent: non_blank(self.user_agent),
            output: resolve_local(self.output, base),
            output_format: non_blank(self.output_format),
            no_color: self.no_color,
        }
    }
}

pub fn load_config(path: &Path, allow_missing: bool) -> Result<ConfigFile, String> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
            return Ok(ConfigFile::default());
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(format!("config file not found '{}'", path.display()));
        }
        Err(e) => return Err(format!("failed to read config '{}': {e}", path.display())),
    };
    if contents.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    let cfg = serde_yaml::from_str::<ConfigFile>(&contents)
        .map_err(|e| format!("failed to parse config '{}': {e}", path.display()))?;
    Ok(cfg.resolved_against(path))
}

fn default_config_yaml() -> String {
    r#"# demogrid config
#
# Location (default):
#   ~/.demogrid/config.yml

# Demo list: an http(s) URL or a local file
source: demos.json

# Initial search term (optional)
# query: net

# HTTP
timeout: 10
# user_agent: demogrid

# Output (optional, defaults to stdout as text)
# output: ./grid.html
# output_format: html

# Output styling
no_color: false
"#
    .to_string()
}

/// Writes the commented default config unless a file already exists.
/// Returns whether a file was written.
pub fn ensure_default_config_file(path: &Path) -> Result<bool, String> {
    if path.exists() {
        return Ok(false);
    }
    let parent = path
        .parent()
        .ok_or_else(|| format!("invalid config path '{}'", path.display()))?;
    std::fs::create_dir_all(parent).map_err(|e| {
        format!(
            "failed to create config directory '{}': {e}",
            parent.display()
        )
    })?;
    std::fs::write(path, default_config_yaml())
        .map_err(|e| format!("failed to write config file '{}': {e}", path.display()))?;
    Ok(true)
}
