//! Configuration of the covering-tile search.
//!
//! [`TileCoord::from_geo_bbox`](crate::TileCoord::from_geo_bbox) searches zoom levels
//! `1..=15`. Applications that want a different window can load a
//! [`TileSearchConfig`] from YAML and call
//! [`TileCoord::from_geo_bbox_with`](crate::TileCoord::from_geo_bbox_with).
//!
//! ```yaml
//! min_level: 3
//! max_level: 12
//! ```

use anyhow::{Result, ensure};
use serde::Deserialize;
use std::io::Read;

/// Zoom level the covering-tile search starts at.
pub const DEFAULT_MIN_LEVEL: u8 = 1;

/// Deepest zoom level the covering-tile search descends to.
pub const DEFAULT_MAX_LEVEL: u8 = 15;

/// Upper bound for `max_level`; deeper tiles are finer than the precision of `f64` degrees.
pub const LIMIT_MAX_LEVEL: u8 = 30;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TileSearchConfig {
	/// Zoom level of the first candidate tile
	#[serde(default = "default_min_level")]
	pub min_level: u8,

	/// Deepest zoom level that is probed
	#[serde(default = "default_max_level")]
	pub max_level: u8,
}

fn default_min_level() -> u8 {
	DEFAULT_MIN_LEVEL
}

fn default_max_level() -> u8 {
	DEFAULT_MAX_LEVEL
}

impl Default for TileSearchConfig {
	fn default() -> Self {
		Self {
			min_level: DEFAULT_MIN_LEVEL,
			max_level: DEFAULT_MAX_LEVEL,
		}
	}
}

impl TileSearchConfig {
	pub fn new(min_level: u8, max_level: u8) -> Result<Self> {
		let config = Self { min_level, max_level };
		config.validate()?;
		Ok(config)
	}

	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		let config: Self = serde_yaml_ng::from_reader(reader)?;
		config.validate()?;
		Ok(config)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		let config: Self = serde_yaml_ng::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<()> {
		ensure!(
			self.min_level <= self.max_level,
			"min_level ({}) must be <= max_level ({})",
			self.min_level,
			self.max_level
		);
		ensure!(
			self.max_level <= LIMIT_MAX_LEVEL,
			"max_level ({}) must be <= {LIMIT_MAX_LEVEL}",
			self.max_level
		);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn default_window() {
		let config = TileSearchConfig::default();
		assert_eq!(config, TileSearchConfig::new(1, 15).unwrap());
	}

	#[test]
	fn parse_config() {
		let config = TileSearchConfig::from_string("min_level: 3\nmax_level: 12\n").unwrap();
		assert_eq!(config, TileSearchConfig::new(3, 12).unwrap());
	}

	#[test]
	fn parse_partial_config() {
		let config = TileSearchConfig::from_string("max_level: 9").unwrap();
		assert_eq!(
			config,
			TileSearchConfig {
				min_level: 1,
				max_level: 9
			}
		);
	}

	#[test]
	fn parse_empty_mapping() {
		assert_eq!(TileSearchConfig::from_string("{}").unwrap(), TileSearchConfig::default());
	}

	#[test]
	fn parse_from_reader() {
		let yaml = b"min_level: 2\nmax_level: 4\n";
		let config = TileSearchConfig::from_reader(&yaml[..]).unwrap();
		assert_eq!(config, TileSearchConfig::new(2, 4).unwrap());
	}

	#[test]
	fn parse_unknown_field() {
		assert!(TileSearchConfig::from_string("zoom: 3").is_err());
	}

	#[test]
	fn reject_inverted_window() {
		let err = TileSearchConfig::from_string("min_level: 10\nmax_level: 5").unwrap_err();
		assert_eq!(err.to_string(), "min_level (10) must be <= max_level (5)");
	}

	#[test]
	fn reject_too_deep() {
		let err = TileSearchConfig::new(1, 31).unwrap_err();
		assert_eq!(err.to_string(), "max_level (31) must be <= 30");
	}
}
