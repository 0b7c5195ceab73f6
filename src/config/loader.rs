use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::types::{Config, ConfigFile};
use crate::config::validation;
use crate::utils::error::{BoxResult, TocError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 4] = ["_toc.yml", "_toc.yaml", "_toc.toml", "_toc.json"];

/// Load configuration from config files
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> BoxResult<Config> {
    let mut config = Config::default();

    let config_paths = match config_files {
        Some(paths) => paths,
        None => find_default_config_files(&source_dir),
    };

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            merge_config_file(&mut config, &path)?;
        }
    }

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Merge a configuration file into the current configuration
fn merge_config_file(config: &mut Config, config_path: &Path) -> BoxResult<()> {
    if !config_path.exists() {
        return Err(TocError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        ))
        .into());
    }

    let content = fs::read_to_string(config_path).map_err(|e| {
        TocError::Config(format!(
            "Failed to read configuration file {}: {}",
            config_path.display(),
            e
        ))
    })?;

    let file_config = parse_config(&content, config_path)?;
    merge_configs(config, file_config);

    Ok(())
}

/// Parse configuration text, picking the format from the file extension
fn parse_config(content: &str, path: &Path) -> BoxResult<ConfigFile> {
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| "yml".to_string());

    let parsed: Result<ConfigFile, String> = match ext.as_str() {
        "yml" | "yaml" => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        "toml" => toml::from_str(content).map_err(|e| e.to_string()),
        "json" => serde_json::from_str(content).map_err(|e| e.to_string()),
        other => {
            return Err(TocError::Config(format!(
                "Unsupported configuration file format: {}",
                other
            ))
            .into());
        }
    };

    parsed.map_err(|e| {
        TocError::Config(format!(
            "Failed to parse configuration ({}): {}",
            path.display(),
            e
        ))
        .into()
    })
}

/// Merge one file's settings into the configuration; every key the file sets wins
fn merge_configs(target: &mut Config, source: ConfigFile) {
    if let Some(root_section_id) = source.root_section_id {
        target.root_section_id = root_section_id;
    }

    if let Some(max_toc_depth) = source.max_toc_depth {
        target.max_toc_depth = max_toc_depth;
    }

    if let Some(max_heading_level) = source.max_heading_level {
        target.max_heading_level = max_heading_level;
    }

    if let Some(container_id) = source.container_id {
        target.container_id = container_id;
    }

    if source.content_id.is_some() {
        target.content_id = source.content_id;
    }

    if let Some(section_label) = source.section_label {
        target.section_label = section_label;
    }

    if let Some(empty_class) = source.empty_class {
        target.empty_class = empty_class;
    }

    if let Some(log_level) = source.log_level {
        target.log_level = log_level;
    }

    if let Some(prefix) = source.html.prefix {
        target.html.prefix = prefix;
    }

    if let Some(suffix) = source.html.suffix {
        target.html.suffix = suffix;
    }

    if let Some(item) = source.html.item {
        target.html.item = item;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fs::write_file;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sectoc-config-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_defaults_without_files() {
        let dir = scratch_dir("none");
        let config = load_config(&dir, None).unwrap();
        assert_eq!(config, Config::default());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_yaml_then_toml_merge() {
        let dir = scratch_dir("merge");
        write_file(dir.join("_toc.yml"), "root_section_id: \"5\"\nmax_toc_depth: 2\n").unwrap();
        write_file(dir.join("_toc.toml"), "section_label = \"Part\"\n[html]\nsuffix = \"</ol>\"\n").unwrap();

        let config = load_config(&dir, None).unwrap();
        assert_eq!(config.root_section_id, "5");
        assert_eq!(config.max_toc_depth, 2);
        assert_eq!(config.section_label, "Part");
        assert_eq!(config.html.suffix, "</ol>");
        assert_eq!(config.html.prefix, Config::default().html.prefix);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_later_file_can_restore_default() {
        let dir = scratch_dir("restore");
        write_file(dir.join("_toc.yml"), "root_section_id: \"5\"\nmax_toc_depth: 2\n").unwrap();
        write_file(dir.join("_toc.toml"), "root_section_id = \"1\"\nmax_toc_depth = 3\n").unwrap();

        let config = load_config(&dir, None).unwrap();
        assert_eq!(config.root_section_id, "1");
        assert_eq!(config.max_toc_depth, 3);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_explicit_json_file() {
        let dir = scratch_dir("json");
        let path = dir.join("custom.json");
        write_file(&path, r#"{"content_id": "doc-content-inner", "max_heading_level": 4}"#).unwrap();

        let config = load_config(&dir, Some(vec![path])).unwrap();
        assert_eq!(config.content_id.as_deref(), Some("doc-content-inner"));
        assert_eq!(config.max_heading_level, 4);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = scratch_dir("missing");
        let result = load_config(&dir, Some(vec![dir.join("nope.yml")]));
        assert!(result.is_err());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_invalid_depth_rejected() {
        let dir = scratch_dir("invalid");
        write_file(dir.join("_toc.yml"), "max_toc_depth: 0\n").unwrap();
        let config = load_config(&dir, None);
        assert!(config.is_err());
        fs::remove_dir_all(&dir).unwrap();
    }
}
