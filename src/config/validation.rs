use log::{debug, warn};

use crate::config::Config;
use crate::toc::heading::MAX_TAG_DEPTH;
use crate::toc::template::{unknown_placeholders, TocTemplate};
use crate::utils::error::{BoxResult, TocError};

/// Validate the configuration
pub fn validate_config(config: &Config) -> BoxResult<()> {
    validate_root_section_id(config)?;
    validate_depths(config)?;
    validate_template(config);
    validate_log_level(config)?;

    if config.container_id.trim().is_empty() {
        return Err(TocError::Config("container_id must not be empty".to_string()).into());
    }

    Ok(())
}

/// Validate the root section id
fn validate_root_section_id(config: &Config) -> BoxResult<()> {
    let root = &config.root_section_id;

    if root.trim().is_empty() {
        return Err(TocError::Config("root_section_id must not be empty".to_string()).into());
    }

    if root.chars().any(char::is_whitespace) {
        return Err(TocError::Config(format!(
            "root_section_id must not contain whitespace: {:?}",
            root
        ))
        .into());
    }

    if !root.split('.').all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit())) {
        warn!("root_section_id {:?} is not a dotted number; section ids will not be purely numeric", root);
    }

    Ok(())
}

/// Validate depth limits
fn validate_depths(config: &Config) -> BoxResult<()> {
    if config.max_toc_depth < 1 {
        return Err(TocError::Config(format!(
            "max_toc_depth must be at least 1, got {}",
            config.max_toc_depth
        ))
        .into());
    }

    if !(1..=MAX_TAG_DEPTH).contains(&config.max_heading_level) {
        return Err(TocError::Config(format!(
            "max_heading_level must be between 1 and {}, got {}",
            MAX_TAG_DEPTH, config.max_heading_level
        ))
        .into());
    }

    debug!(
        "TOC depth limit {}, heading level limit {}",
        config.max_toc_depth, config.max_heading_level
    );
    Ok(())
}

/// Warn about template names that will be left verbatim
fn validate_template(config: &Config) {
    if TocTemplate::parse(&config.html.item).placeholders().is_empty() {
        warn!("Item template has no placeholders; every TOC entry will render the same");
    }

    for name in unknown_placeholders(&config.html.item) {
        warn!("Item template placeholder {{{}}} is not recognized and will be left as is", name);
    }
}

/// Validate the log level name
fn validate_log_level(config: &Config) -> BoxResult<()> {
    config
        .log_level
        .parse::<log::LevelFilter>()
        .map(|_| ())
        .map_err(|_| {
            TocError::Config(format!("Unknown log_level: {}", config.log_level)).into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = Config::default();
        config.max_toc_depth = 0;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.max_heading_level = 10;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.root_section_id = " ".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.log_level = "loud".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_non_numeric_root_is_allowed() {
        let mut config = Config::default();
        config.root_section_id = "A".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
