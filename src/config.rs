// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 The Frontier Framework Authors

// Configuration Management Module
//
// This module reads a named build configuration (build-configs/<name>.json)
// and turns it into typed data for the argument translator.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fs;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::BuildError;

pub const CONFIG_EXTENSION: &str = "json";

/// A desktop wrapper build: what to load, how to brand it, how big the window is.
#[derive(Deserialize, Clone, Debug)]
pub struct BuildConfig {
    pub name: String,
    pub url: String,
    pub icon: String,
    #[serde(deserialize_with = "dimension")]
    pub width: NonZeroU32,
    #[serde(deserialize_with = "dimension")]
    pub height: NonZeroU32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: BuildOptions,
}

/// Optional behaviour switches. Every field may be missing or `null`; both
/// leave the packaging tool at its default. Switches follow JavaScript
/// truthiness so configs written for the Node script keep loading.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildOptions {
    #[serde(deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "explicit_bool")]
    pub resizable: Option<bool>,
    #[serde(deserialize_with = "truthy")]
    pub fullscreen: Option<bool>,
    #[serde(deserialize_with = "truthy")]
    pub maximize: Option<bool>,
    #[serde(deserialize_with = "truthy")]
    pub hide_title_bar: Option<bool>,
    #[serde(deserialize_with = "truthy")]
    pub always_on_top: Option<bool>,
    #[serde(deserialize_with = "truthy")]
    pub dark_mode: Option<bool>,
    #[serde(deserialize_with = "truthy")]
    pub disabled_web_shortcuts: Option<bool>,
    #[serde(deserialize_with = "text")]
    pub activation_shortcut: Option<String>,
    #[serde(deserialize_with = "text")]
    pub user_agent: Option<String>,
    #[serde(deserialize_with = "truthy")]
    pub show_system_tray: Option<bool>,
    #[serde(deserialize_with = "text")]
    pub system_tray_icon: Option<String>,
    #[serde(deserialize_with = "truthy")]
    pub use_local_file: Option<bool>,
    #[serde(deserialize_with = "truthy")]
    pub multi_arch: Option<bool>,
    #[serde(deserialize_with = "truthy")]
    pub debug: Option<bool>,
    pub inject: Option<Vec<String>>,
    #[serde(deserialize_with = "text")]
    pub proxy_url: Option<String>,
    #[serde(deserialize_with = "text")]
    pub installer_language: Option<String>,
    #[serde(deserialize_with = "truthy")]
    pub hide_on_close: Option<bool>,
    #[serde(deserialize_with = "truthy")]
    pub incognito: Option<bool>,
    #[serde(deserialize_with = "truthy")]
    pub wasm: Option<bool>,
    #[serde(deserialize_with = "truthy")]
    pub enable_drag_drop: Option<bool>,
    #[serde(deserialize_with = "truthy")]
    pub keep_binary: Option<bool>,
    #[serde(deserialize_with = "truthy")]
    pub multi_instance: Option<bool>,
    #[serde(deserialize_with = "truthy")]
    pub start_to_tray: Option<bool>,
    #[serde(deserialize_with = "text")]
    pub app_version: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// 0, "" and false are off; any other number, string, array or object is on.
fn truthy<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Bool(b) => Some(b),
        Value::Number(n) => Some(n.as_f64() != Some(0.0)),
        Value::String(s) => Some(!s.is_empty()),
        Value::Array(_) | Value::Object(_) => Some(true),
    })
}

// Only a literal `false` disables resizing; anything else keeps the default.
fn explicit_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        _ => None,
    })
}

fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(true) => Ok(Some("true".to_string())),
        other => Err(D::Error::custom(format!("expected a string, found {other}"))),
    }
}

// Accepts 1200 as well as "1200".
fn dimension<'de, D>(deserializer: D) -> Result<NonZeroU32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        other => return Err(D::Error::custom(format!("expected a window size, found {other}"))),
    };
    raw.parse::<NonZeroU32>()
        .map_err(|_| D::Error::custom(format!("invalid window size `{raw}`")))
}

/// Location of the config called `name` inside `configs_dir`.
pub fn config_path(configs_dir: &Path, name: &str) -> PathBuf {
    configs_dir.join(format!("{name}.{CONFIG_EXTENSION}"))
}

/// Load `<configs_dir>/<name>.json`.
pub fn load_config(configs_dir: &Path, name: &str) -> Result<BuildConfig, BuildError> {
    let path = config_path(configs_dir, name);
    if !path.is_file() {
        return Err(BuildError::ConfigNotFound {
            available: available_configs(configs_dir),
            path,
        });
    }

    let content = fs::read_to_string(&path).map_err(|source| BuildError::ConfigRead {
        path: path.clone(),
        source,
    })?;

    parse_config(&content).map_err(|source| BuildError::ConfigParse { path, source })
}

pub fn parse_config(content: &str) -> Result<BuildConfig, serde_json::Error> {
    serde_json::from_str(content)
}

/// Names of every config in `configs_dir`, sorted.
pub fn available_configs(configs_dir: &Path) -> Vec<String> {
    let mut names = Vec::new();

    if !configs_dir.is_dir() {
        return names;
    }

    for entry in WalkDir::new(configs_dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|e| e.to_str()) != Some(CONFIG_EXTENSION)
        {
            continue;
        }

        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.push(stem.to_string());
        }
    }

    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn minimal() -> serde_json::Value {
        json!({
            "name": "Vinted",
            "url": "https://www.vinted.com",
            "icon": "icons/vinted.icns",
            "width": 1200,
            "height": 780
        })
    }

    #[test]
    fn parses_minimal_config_with_default_options() {
        let config = parse_config(&minimal().to_string()).expect("parse");
        assert_eq!(config.name, "Vinted");
        assert_eq!(config.width.get(), 1200);
        assert_eq!(config.height.get(), 780);
        assert_eq!(config.options, BuildOptions::default());
    }

    #[test]
    fn null_options_behave_like_absent_options() {
        let mut raw = minimal();
        raw["options"] = json!(null);
        let config = parse_config(&raw.to_string()).expect("parse");
        assert_eq!(config.options, BuildOptions::default());

        raw["options"] = json!({ "fullscreen": null, "title": null });
        let config = parse_config(&raw.to_string()).expect("parse");
        assert_eq!(config.options, BuildOptions::default());
    }

    #[test]
    fn reads_camel_case_option_keys() {
        let mut raw = minimal();
        raw["options"] = json!({
            "hideTitleBar": true,
            "resizable": false,
            "inject": ["a.js", "b.css"],
            "appVersion": "2.1.0",
            "somethingNew": 42
        });
        let options = parse_config(&raw.to_string()).expect("parse").options;
        assert_eq!(options.hide_title_bar, Some(true));
        assert_eq!(options.resizable, Some(false));
        assert_eq!(
            options.inject,
            Some(vec!["a.js".to_string(), "b.css".to_string()])
        );
        assert_eq!(options.app_version.as_deref(), Some("2.1.0"));
    }

    #[test]
    fn switches_follow_javascript_truthiness() {
        let mut raw = minimal();
        raw["options"] = json!({
            "fullscreen": 1,
            "maximize": 0,
            "debug": "yes",
            "wasm": "",
            "incognito": {},
            "resizable": 0,
            "title": 42,
            "userAgent": false
        });
        let options = parse_config(&raw.to_string()).expect("parse").options;
        assert_eq!(options.fullscreen, Some(true));
        assert_eq!(options.maximize, Some(false));
        assert_eq!(options.debug, Some(true));
        assert_eq!(options.wasm, Some(false));
        assert_eq!(options.incognito, Some(true));
        assert_eq!(options.resizable, None);
        assert_eq!(options.title.as_deref(), Some("42"));
        assert_eq!(options.user_agent, None);
    }

    #[test]
    fn window_size_accepts_numeric_strings() {
        let mut raw = minimal();
        raw["width"] = json!("1200");
        raw["height"] = json!(" 780 ");
        let config = parse_config(&raw.to_string()).expect("parse");
        assert_eq!(config.width.get(), 1200);
        assert_eq!(config.height.get(), 780);

        raw["width"] = json!("wide");
        assert!(parse_config(&raw.to_string()).is_err());
        raw["width"] = json!(-5);
        assert!(parse_config(&raw.to_string()).is_err());
    }

    #[test]
    fn string_options_reject_structured_values() {
        let mut raw = minimal();
        raw["options"] = json!({ "proxyUrl": ["socks5://a"] });
        assert!(parse_config(&raw.to_string()).is_err());
    }

    #[test]
    fn rejects_missing_required_field_and_zero_size() {
        let mut raw = minimal();
        raw.as_object_mut().unwrap().remove("url");
        assert!(parse_config(&raw.to_string()).is_err());

        let mut raw = minimal();
        raw["width"] = json!(0);
        assert!(parse_config(&raw.to_string()).is_err());

        assert!(parse_config("{ not json").is_err());
    }

    #[test]
    fn load_reports_missing_config_with_alternatives() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("vinted.json"), minimal().to_string()).unwrap();
        fs::write(dir.path().join("twitter.json"), minimal().to_string()).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        match load_config(dir.path(), "vinte") {
            Err(BuildError::ConfigNotFound { path, available }) => {
                assert_eq!(path, dir.path().join("vinte.json"));
                assert_eq!(available, vec!["twitter", "vinted"]);
            }
            other => panic!("expected ConfigNotFound, got {other:?}"),
        }
    }

    #[test]
    fn load_surfaces_parse_errors() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "{\"name\": 1}").unwrap();

        assert!(matches!(
            load_config(dir.path(), "broken"),
            Err(BuildError::ConfigParse { .. })
        ));

        fs::write(dir.path().join("vinted.json"), minimal().to_string()).unwrap();
        let config = load_config(dir.path(), "vinted").expect("load");
        assert_eq!(config.url, "https://www.vinted.com");
    }

    #[test]
    fn missing_configs_dir_has_no_alternatives() {
        let dir = tempdir().unwrap();
        assert!(available_configs(&dir.path().join("absent")).is_empty());
    }
}
