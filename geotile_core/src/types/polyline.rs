//! Adapter over the encoded polyline codec.
//!
//! Decoding is delegated to the [`polyline`](::polyline) crate. This module only fixes the
//! precision used by the common "encoded polyline algorithm format" and returns plain
//! `(lat, lng)` pairs, so the rest of the crate does not depend on `geo-types`.

use anyhow::{Result, anyhow};

/// Number of decimal digits encoded per coordinate.
pub const PRECISION: u32 = 5;

/// Decodes a polyline into an ordered list of `(lat, lng)` pairs.
///
/// An empty string decodes to an empty list.
///
/// # Errors
/// Returns the codec's error if `encoded` is not a valid polyline.
///
/// # Examples
/// ```
/// use geotile_core::polyline::decode;
///
/// let coords = decode("_p~iF~ps|U_ulLnnqC").unwrap();
/// assert_eq!(coords, vec![(38.5, -120.2), (40.7, -120.95)]);
/// ```
pub fn decode(encoded: &str) -> Result<Vec<(f64, f64)>> {
	let line = ::polyline::decode_polyline(encoded, PRECISION).map_err(|err| anyhow!("invalid polyline: {err}"))?;
	let coords: Vec<(f64, f64)> = line.into_iter().map(|coord| (coord.y, coord.x)).collect();
	log::trace!("decoded {} coordinates from polyline", coords.len());
	Ok(coords)
}
