use super::GeoBBox;
use crate::TileCoord;
use anyhow::{Result, ensure};

impl GeoBBox {
	/// Returns the box as `[west, south, east, north]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.west, self.south, self.east, self.north]
	}

	/// Returns the box as `(west, south, east, north)`.
	#[must_use]
	pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
		(self.west, self.south, self.east, self.north)
	}
}

impl From<[f64; 4]> for GeoBBox {
	/// Builds a box from `[west, south, east, north]`.
	fn from(input: [f64; 4]) -> Self {
		let [west, south, east, north] = input;
		GeoBBox::new(west, south, east, north)
	}
}

impl TryFrom<Vec<f64>> for GeoBBox {
	type Error = anyhow::Error;

	/// Builds a box from a `Vec<f64>` holding `[west, south, east, north]`.
	///
	/// # Errors
	///
	/// Returns an error if the length is not exactly four.
	///
	/// # Examples
	/// ```
	/// use geotile_core::GeoBBox;
	///
	/// let bbox = GeoBBox::try_from(vec![-10.0, -5.0, 10.0, 5.0]).unwrap();
	/// assert_eq!(bbox.as_tuple(), (-10.0, -5.0, 10.0, 5.0));
	/// assert!(GeoBBox::try_from(vec![1.0, 2.0]).is_err());
	/// ```
	fn try_from(input: Vec<f64>) -> Result<Self> {
		ensure!(
			input.len() == 4,
			"GeoBBox must have 4 elements (west, south, east, north), got {}",
			input.len()
		);
		Ok(GeoBBox::new(input[0], input[1], input[2], input[3]))
	}
}

impl From<TileCoord> for GeoBBox {
	fn from(tile: TileCoord) -> Self {
		tile.to_geo_bbox()
	}
}

impl From<&TileCoord> for GeoBBox {
	fn from(tile: &TileCoord) -> Self {
		tile.to_geo_bbox()
	}
}
