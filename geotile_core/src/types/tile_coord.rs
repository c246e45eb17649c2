//! Slippy map tile coordinates in a Web Mercator pyramid
//!
//! This module provides the [`TileCoord`] type for addressing a tile by zoom level and
//! x/y index. It includes methods for:
//! - Converting geographic coordinates to the tile containing them
//! - Converting a tile back to its north-west corner and to its geographic footprint
//! - Searching the finest tile that covers a [`GeoBBox`]
//!
//! Tile indices are deliberately **not** clamped. Longitudes outside `[-180, 180]` and
//! latitudes near the poles produce indices outside `[0, 2^level)`, or saturated values
//! where the projection diverges.
//!
//! # Examples
//!
//! ```
//! use geotile_core::TileCoord;
//!
//! // Berlin at zoom 10
//! let coord = TileCoord::from_geo(52.520008, 13.404954, 10.0);
//! assert_eq!(coord, TileCoord::new(10, 550, 335));
//!
//! // The tile's footprint contains the original point
//! assert!(coord.to_geo_bbox().contains(52.520008, 13.404954));
//! ```

use crate::{
	GeoBBox, TileSearchConfig,
	config::{DEFAULT_MAX_LEVEL, DEFAULT_MIN_LEVEL},
};
use anyhow::Result;
use std::{
	f64::consts::PI,
	fmt::{self, Debug, Display},
};

/// A tile address in a Web Mercator tile pyramid, with zoom level, x, and y indices.
///
/// `x` grows eastwards from the antimeridian, `y` grows southwards from the northern
/// edge of the projection.
#[derive(Eq, PartialEq, Clone, Hash, Copy)]
pub struct TileCoord {
	/// The zoom level of the tile; 0 is the whole world as one tile.
	pub level: u8,
	/// The x index of the tile.
	pub x: i64,
	/// The y index of the tile.
	pub y: i64,
}

impl TileCoord {
	/// Create a new `TileCoord` at the given zoom `level` and tile indices `x`, `y`.
	///
	/// Indices are not checked against the size of the level.
	#[must_use]
	pub const fn new(level: u8, x: i64, y: i64) -> TileCoord {
		TileCoord { level, x, y }
	}

	/// Returns the tile containing `(lat, lng)` at zoom `zoom`.
	///
	/// `zoom` is accepted as a float for convenience. The scale factor is `2^zoom`
	/// computed from the float, while the stored level is `zoom` truncated to an integer.
	///
	/// ```text
	/// x = floor((lng + 180) / 360 * 2^zoom)
	/// y = floor((1 - ln(tan(lat) + sec(lat)) / π) / 2 * 2^zoom)
	/// ```
	///
	/// # Examples
	///
	/// ```
	/// use geotile_core::TileCoord;
	///
	/// // New York City
	/// let coord = TileCoord::from_geo(40.7128, -74.0060, 16.0);
	/// assert_eq!(coord, TileCoord::new(16, 19295, 24640));
	/// ```
	#[must_use]
	pub fn from_geo(lat: f64, lng: f64, zoom: f64) -> TileCoord {
		let scale = zoom.exp2();
		let lat_rad = lat * PI / 180.0;

		let x = ((lng + 180.0) / 360.0 * scale).floor();
		let y = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * scale).floor();

		TileCoord {
			level: zoom as u8,
			x: x as i64,
			y: y as i64,
		}
	}

	/// Returns the north-west corner of the tile as `(lat, lng)` in degrees.
	///
	/// # Examples
	///
	/// ```
	/// use geotile_core::TileCoord;
	///
	/// let (lat, lng) = TileCoord::new(1, 1, 1).as_geo();
	/// assert_eq!((lat, lng), (0.0, 0.0));
	/// ```
	#[must_use]
	pub fn as_geo(&self) -> (f64, f64) {
		let scale = 2.0f64.powi(i32::from(self.level));
		let n = PI - 2.0 * PI * self.y as f64 / scale;
		let lat = n.sinh().atan() * 180.0 / PI;
		let lng = self.x as f64 / scale * 360.0 - 180.0;
		(lat, lng)
	}

	/// Returns the geographic footprint of this tile.
	///
	/// The north-west corner is this tile's origin, the south-east corner is the origin
	/// of the diagonal neighbour `(x + 1, y + 1)`.
	#[must_use]
	pub fn to_geo_bbox(&self) -> GeoBBox {
		let (north, west) = self.as_geo();
		let (south, east) = TileCoord::new(self.level, self.x.saturating_add(1), self.y.saturating_add(1)).as_geo();
		GeoBBox::new(west, south, east, north)
	}

	/// Returns whether `(lat, lng)` lies within this tile's footprint, edges included.
	#[must_use]
	pub fn contains(&self, lat: f64, lng: f64) -> bool {
		self.to_geo_bbox().contains(lat, lng)
	}

	/// Finds the finest tile, at zoom level 15 at most, that covers `bbox`.
	///
	/// Candidates are always the tile containing the box's north-west corner. Starting
	/// at level 1, the search descends one level at a time as long as the next candidate
	/// still contains the box's south-east corner. Only that corner is tested, so a box
	/// whose level-1 candidate already misses it (e.g. a box crossing the equator or the
	/// prime meridian) yields the level-1 tile, which does not cover the box. Zero-area
	/// boxes descend all the way to level 15.
	///
	/// # Examples
	///
	/// ```
	/// use geotile_core::{GeoBBox, TileCoord};
	///
	/// let tile = TileCoord::new(10, 550, 335);
	/// let bbox = GeoBBox::new(13.4, 52.5, 13.6, 52.6);
	/// assert_eq!(TileCoord::from_geo_bbox(&bbox), tile);
	/// ```
	#[must_use]
	pub fn from_geo_bbox(bbox: &GeoBBox) -> TileCoord {
		search_covering_tile(bbox, DEFAULT_MIN_LEVEL, DEFAULT_MAX_LEVEL)
	}

	/// Like [`from_geo_bbox`](Self::from_geo_bbox), but searches the zoom window of `config`.
	///
	/// # Errors
	/// Returns an error if `config` is not a valid zoom window.
	pub fn from_geo_bbox_with(bbox: &GeoBBox, config: &TileSearchConfig) -> Result<TileCoord> {
		config.validate()?;
		Ok(search_covering_tile(bbox, config.min_level, config.max_level))
	}

	/// Serialize this coordinate to a compact JSON string `{"z":…,"x":…,"y":…}`.
	#[must_use]
	pub fn as_json(&self) -> String {
		format!("{{\"z\":{},\"x\":{},\"y\":{}}}", self.level, self.x, self.y)
	}
}

fn search_covering_tile(bbox: &GeoBBox, min_level: u8, max_level: u8) -> TileCoord {
	let (lat, lng) = bbox.north_west();
	let (south, east) = bbox.south_east();

	let mut tile = TileCoord::from_geo(lat, lng, f64::from(min_level));
	while tile.level < max_level {
		let next = TileCoord::from_geo(lat, lng, f64::from(tile.level + 1));
		if !next.contains(south, east) {
			log::trace!("{next:?} misses the south-east corner of {bbox:?}");
			break;
		}
		tile = next;
	}

	log::trace!("covering tile of {bbox:?} is {tile:?}");
	tile
}

/// Custom `Debug` format as `TileCoord(z, [x, y])` for readability.
impl Debug for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileCoord({}, [{}, {}])", self.level, self.x, self.y)
	}
}

/// Formats as `z/x/y`, the path segment used by slippy map tile servers.
impl Display for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}/{}", self.level, self.x, self.y)
	}
}
