use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, GeometrySettings, WriterSettings};
use crate::error::{CliError, Result};
use crate::utils::parser;
use cubeio::core::io::files::require_file;
use std::path::Path;

/// Merges built-in defaults, the optional config file and `-S KEY=VALUE` overrides.
///
/// Per-command flags (e.g. `convert --title`) are applied later by the commands
/// themselves and take precedence over everything here.
pub fn build_config(config_path: Option<&Path>, set_values: &[String]) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match config_path {
        Some(path) => {
            require_file(path)?;
            FileConfig::from_file(path)?
        }
        None => FileConfig::default(),
    };
    let mut file_config = apply_set_values(file_config, set_values)?;

    let writer_file = file_config.writer.take().unwrap_or_default();
    let geometry_file = file_config.geometry.take().unwrap_or_default();

    let symbol_width = geometry_file.symbol_width.unwrap_or(defaults.symbol_width);
    if symbol_width == 0 {
        return Err(CliError::Config(
            "`geometry.symbol-width` must be at least 1".to_string(),
        ));
    }

    Ok(AppConfig {
        writer: WriterSettings {
            title: writer_file.title.unwrap_or(defaults.title),
            comment: writer_file.comment.unwrap_or(defaults.comment),
            keep_comments: writer_file.keep_comments.unwrap_or(defaults.keep_comments),
        },
        geometry: GeometrySettings { symbol_width },
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "writer.title" => {
                config.writer.get_or_insert_with(Default::default).title =
                    Some(value_str.to_string());
            }
            "writer.comment" => {
                config.writer.get_or_insert_with(Default::default).comment =
                    Some(value_str.to_string());
            }
            "writer.keep-comments" => {
                config
                    .writer
                    .get_or_insert_with(Default::default)
                    .keep_comments = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid boolean value for {}: {}", key, value_str))
                })?);
            }
            "geometry.symbol-width" => {
                config
                    .geometry
                    .get_or_insert_with(Default::default)
                    .symbol_width = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
