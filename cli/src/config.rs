use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use sweep_core::{CellCount, Coord, Difficulty, GridOptions};

/// Settings file contents, every key optional.
///
/// ```toml
/// difficulty = "medium"
/// seed = 42
///
/// [options]
/// width = 20
/// height = 10
/// hazards = 30
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub difficulty: Option<Difficulty>,
    pub options: Option<GridOptions>,
    pub seed: Option<u64>,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Explicit options win over the preset, and the preset over the default.
    pub fn base_options(&self) -> GridOptions {
        self.options
            .or_else(|| self.difficulty.map(Difficulty::options))
            .unwrap_or_default()
    }
}

/// Applies individual dimension overrides on top of `base`.
pub fn override_options(
    base: GridOptions,
    width: Option<Coord>,
    height: Option<Coord>,
    hazards: Option<CellCount>,
) -> anyhow::Result<GridOptions> {
    if width.is_none() && height.is_none() && hazards.is_none() {
        return Ok(base);
    }

    GridOptions::new(
        width.unwrap_or(base.width()),
        height.unwrap_or(base.height()),
        hazards.unwrap_or(base.hazards()),
    )
    .context("Invalid grid options")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_easy() {
        let config = Config::parse("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.base_options(), Difficulty::Easy.options());
    }

    #[test]
    fn explicit_options_beat_preset() {
        let config = Config::parse(
            r#"
            difficulty = "hard"
            seed = 7

            [options]
            width = 20
            height = 10
            hazards = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.base_options(), GridOptions::new(20, 10, 30).unwrap());
    }

    #[test]
    fn preset_only() {
        let config = Config::parse(r#"difficulty = "medium""#).unwrap();
        assert_eq!(config.base_options(), Difficulty::Medium.options());
    }

    #[test]
    fn invalid_options_are_rejected() {
        assert!(Config::parse("[options]\nwidth = 2\nheight = 2\nhazards = 4").is_err());
        assert!(Config::parse("colour = \"blue\"").is_err());
    }

    #[test]
    fn overrides_replace_single_dimensions() {
        let base = Difficulty::Easy.options();

        assert_eq!(override_options(base, None, None, None).unwrap(), base);
        assert_eq!(
            override_options(base, Some(12), None, Some(20)).unwrap(),
            GridOptions::new(12, 8, 20).unwrap()
        );
        assert!(override_options(base, Some(2), Some(2), None).is_err());
    }
}
