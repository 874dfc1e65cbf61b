use crate::error::{Result, RiskError};
use crate::types::config::RiskConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "diabetes-risk.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".diabetes-risk/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/diabetes-risk/config.toml";

/// Loads the global, working-directory and local config files, later files
/// overriding earlier ones. Missing files are skipped.
pub fn load_config(root: &Path) -> Result<RiskConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<RiskConfig> {
    let mut merged = Value::Table(Map::new());
    let mut sources = 0;
    if let Some(path) = global_path {
        sources += merge_file_if_exists(&mut merged, path)? as usize;
    }
    sources += merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))? as usize;
    sources += merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))? as usize;

    let cfg: RiskConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| RiskError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    tracing::debug!(sources, ?cfg, "config loaded");
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    tracing::info!(path = %path.display(), "merged config file");
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| RiskError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
