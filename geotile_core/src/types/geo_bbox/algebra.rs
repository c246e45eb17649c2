use super::GeoBBox;

impl GeoBBox {
	/// Returns the smallest box covering both `self` and `other`.
	///
	/// This is equivalent to:
	/// - `west` = `min(self.west, other.west)`
	/// - `south` = `min(self.south, other.south)`
	/// - `east` = `max(self.east, other.east)`
	/// - `north` = `max(self.north, other.north)`
	///
	/// The operation is commutative and associative.
	///
	/// # Examples
	/// ```
	/// use geotile_core::GeoBBox;
	///
	/// let bbox1 = GeoBBox::new(-10.0, -5.0, 10.0, 5.0);
	/// let bbox2 = GeoBBox::new(-12.0, -3.0, 8.0, 6.0);
	/// assert_eq!(bbox1.union(&bbox2).as_tuple(), (-12.0, -5.0, 10.0, 6.0));
	/// ```
	#[must_use]
	pub fn union(&self, other: &GeoBBox) -> GeoBBox {
		GeoBBox {
			west: self.west.min(other.west),
			south: self.south.min(other.south),
			east: self.east.max(other.east),
			north: self.north.max(other.north),
		}
	}

	/// Returns the smallest box covering `self` and the point `(lat, lng)`.
	#[must_use]
	pub fn union_point(&self, lat: f64, lng: f64) -> GeoBBox {
		self.union(&GeoBBox::from_point(lat, lng))
	}
}
