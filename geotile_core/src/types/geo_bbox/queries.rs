//! Read-only queries on `GeoBBox`.
//!
//! All bounds checks are inclusive: points on an edge are inside, and boxes that only
//! touch along an edge or a corner intersect.

use super::GeoBBox;

impl GeoBBox {
	/// Returns whether `self` and `other` overlap or touch.
	///
	/// Two boxes are disjoint only if one lies entirely west, east, south or north of
	/// the other.
	///
	/// # Examples
	/// ```
	/// use geotile_core::GeoBBox;
	///
	/// let a = GeoBBox::new(0.0, 0.0, 10.0, 10.0);
	/// assert!(a.intersects(&GeoBBox::new(10.0, 10.0, 20.0, 20.0)));
	/// assert!(!a.intersects(&GeoBBox::new(10.1, 0.0, 20.0, 10.0)));
	/// ```
	#[must_use]
	pub fn intersects(&self, other: &GeoBBox) -> bool {
		if self.east < other.west {
			return false; // self is west of other
		}
		if self.west > other.east {
			return false; // self is east of other
		}
		if self.north < other.south {
			return false; // self is south of other
		}
		if self.south > other.north {
			return false; // self is north of other
		}
		true
	}

	/// Returns whether the point `(lat, lng)` lies within the box, edges included.
	#[must_use]
	pub fn contains(&self, lat: f64, lng: f64) -> bool {
		(self.south..=self.north).contains(&lat) && (self.west..=self.east).contains(&lng)
	}

	/// Returns whether `inner` lies entirely within `self`.
	///
	/// Only the north-west and south-east corners of `inner` are tested, which is
	/// sufficient for well-formed boxes.
	#[must_use]
	pub fn contains_bbox(&self, inner: &GeoBBox) -> bool {
		let (n, w) = inner.north_west();
		let (s, e) = inner.south_east();
		self.contains(n, w) && self.contains(s, e)
	}

	/// Returns whether `west <= east` and `south <= north`.
	///
	/// Nothing in this crate rejects boxes that fail this check.
	#[must_use]
	pub fn is_well_formed(&self) -> bool {
		self.west <= self.east && self.south <= self.north
	}

	/// The north-west corner as `(lat, lng)`.
	#[must_use]
	pub fn north_west(&self) -> (f64, f64) {
		(self.north, self.west)
	}

	/// The south-east corner as `(lat, lng)`.
	#[must_use]
	pub fn south_east(&self) -> (f64, f64) {
		(self.south, self.east)
	}

	/// Extent in degrees of longitude.
	#[must_use]
	pub fn width(&self) -> f64 {
		self.east - self.west
	}

	/// Extent in degrees of latitude.
	#[must_use]
	pub fn height(&self) -> f64 {
		self.north - self.south
	}
}
