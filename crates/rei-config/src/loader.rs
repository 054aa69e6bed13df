// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-based loader for layered config merging.
//!
//! Lookup order: `/etc/rei/rei.toml` < `~/.config/rei/rei.toml` < `./rei.toml`
//! < `REI_*` environment variables.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use tracing::debug;

use crate::model::ReiConfig;

/// Config files consulted by [`load_config`], lowest precedence first.
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/rei/rei.toml")];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("rei/rei.toml"));
    }
    paths.push(PathBuf::from("rei.toml"));
    paths
}

/// Load configuration from the standard hierarchy with env var overrides.
pub fn load_config() -> Result<ReiConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<ReiConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ReiConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ReiConfig, figment::Error> {
    debug!(path = %path.display(), "loading config file");
    Figment::new()
        .merge(Serialized::defaults(ReiConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The figment used by [`load_config`], before extraction.
pub fn build_figment() -> Figment {
    config_paths()
        .into_iter()
        .fold(
            Figment::new().merge(Serialized::defaults(ReiConfig::default())),
            |figment, path| {
                if path.exists() {
                    debug!(path = %path.display(), "merging config file");
                }
                figment.merge(Toml::file(path))
            },
        )
        .merge(env_provider())
}

/// Environment provider mapping `REI_<SECTION>_<KEY>` to `section.key`.
///
/// Uses `Env::map()` rather than `Env::split("_")` because keys such as
/// `max_input_size` contain underscores.
fn env_provider() -> Env {
    Env::prefixed("REI_").map(|key| {
        key.as_str()
            .replacen("model_", "model.", 1)
            .replacen("pipeline_", "pipeline.", 1)
            .replacen("logging_", "logging.", 1)
            .into()
    })
}
