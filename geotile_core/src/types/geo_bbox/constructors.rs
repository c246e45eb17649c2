//! Constructors for `GeoBBox`.
//!
//! Boxes are built from explicit edges, from a single point, from the footprint of a
//! tile, or as the union of all coordinates of one or more encoded polylines.
//!
//! Deriving a box from polylines distinguishes "no coordinates" from a decode failure:
//! the former is `Ok(None)`, the latter is an `Err` carrying the codec's message.

use super::GeoBBox;
use crate::{TileCoord, types::polyline};
use anyhow::{Context, Result};

impl GeoBBox {
	/// Creates a new `GeoBBox` from `west, south, east, north`.
	///
	/// The edges are taken as given; no ordering or range checks are performed.
	///
	/// # Examples
	/// ```
	/// use geotile_core::GeoBBox;
	///
	/// let bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.0);
	/// assert_eq!(bbox.west, -10.0);
	/// assert_eq!(bbox.north, 5.0);
	/// ```
	#[must_use]
	pub const fn new(west: f64, south: f64, east: f64, north: f64) -> GeoBBox {
		GeoBBox {
			west,
			south,
			east,
			north,
		}
	}

	/// Creates a zero-area box located at a single point.
	#[must_use]
	pub const fn from_point(lat: f64, lng: f64) -> GeoBBox {
		GeoBBox::new(lng, lat, lng, lat)
	}

	/// Returns the geographic footprint of `tile`.
	///
	/// Same as [`TileCoord::to_geo_bbox`].
	#[must_use]
	pub fn from_tile(tile: &TileCoord) -> GeoBBox {
		tile.to_geo_bbox()
	}

	/// Computes the smallest box covering every coordinate of a polyline-encoded path.
	///
	/// Returns `Ok(None)` if the path decodes to no coordinates. Callers must treat
	/// that as "no data", there is no meaningful box to fall back to.
	///
	/// # Errors
	/// Returns an error if the polyline codec rejects `encoded`.
	///
	/// # Examples
	/// ```
	/// use geotile_core::GeoBBox;
	///
	/// // (38.5, -120.2), (40.7, -120.95), (43.252, -126.453)
	/// let bbox = GeoBBox::from_polyline("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap().unwrap();
	/// assert_eq!(bbox.as_array(), [-126.453, 38.5, -120.2, 43.252]);
	///
	/// assert!(GeoBBox::from_polyline("").unwrap().is_none());
	/// ```
	pub fn from_polyline(encoded: &str) -> Result<Option<GeoBBox>> {
		let coords = polyline::decode(encoded).with_context(|| format!("Failed to derive GeoBBox from polyline {encoded:?}"))?;

		let Some(&(lat, lng)) = coords.first() else {
			return Ok(None);
		};

		let bbox = coords
			.iter()
			.fold(GeoBBox::from_point(lat, lng), |bbox, &(lat, lng)| bbox.union_point(lat, lng));

		Ok(Some(bbox))
	}

	/// Computes the smallest box covering every coordinate of several polylines.
	///
	/// Returns `Ok(None)` only if `encoded` is empty. Elements that decode to no
	/// coordinates are skipped.
	///
	/// Known quirk: the result is seeded from the first element's own box. If that first
	/// polyline is empty, the seed is the zero box `(0, 0, 0, 0)`, so the result is
	/// stretched to include the point `(0, 0)`. This is kept because callers observe it.
	///
	/// # Errors
	/// Returns an error if the codec rejects any element.
	///
	/// # Examples
	/// ```
	/// use geotile_core::GeoBBox;
	///
	/// let bbox = GeoBBox::from_polylines(&["_p~iF~ps|U", "_flwFn`faV"]).unwrap().unwrap();
	/// assert_eq!(bbox.as_array(), [-120.95, 38.5, -120.2, 40.7]);
	///
	/// let none: [&str; 0] = [];
	/// assert!(GeoBBox::from_polylines(&none).unwrap().is_none());
	/// ```
	pub fn from_polylines<S: AsRef<str>>(encoded: &[S]) -> Result<Option<GeoBBox>> {
		let Some(first) = encoded.first() else {
			return Ok(None);
		};

		let seed = GeoBBox::from_polyline(first.as_ref())?.unwrap_or_else(|| {
			log::debug!("first polyline is empty, seeding from the zero box");
			GeoBBox::default()
		});

		let mut result = seed;
		for item in encoded {
			if let Some(bbox) = GeoBBox::from_polyline(item.as_ref())? {
				result = result.union(&bbox);
			}
		}

		log::trace!("derived {result:?} from {} polylines", encoded.len());
		Ok(Some(result))
	}
}
