use super::GeoBBox;
use std::fmt;

impl GeoBBox {
	/// Formats the box for a spatial-query backend as `BOX(<N> <E>,<S> <W>)`.
	///
	/// The corner order is north-east then south-west, each value with six decimals
	/// and no space after the comma. The backend parses this literally.
	///
	/// # Examples
	/// ```
	/// use geotile_core::GeoBBox;
	///
	/// let bbox = GeoBBox::new(1.0, 2.0, 3.0, 4.0);
	/// assert_eq!(bbox.as_spatial_query_text(), "BOX(4.000000 3.000000,2.000000 1.000000)");
	/// ```
	#[must_use]
	pub fn as_spatial_query_text(&self) -> String {
		format!(
			"BOX({:.6} {:.6},{:.6} {:.6})",
			self.north, self.east, self.south, self.west
		)
	}

	/// Returns the box as a string in the form `west,south,east,north`.
	///
	/// # Examples
	/// ```
	/// use geotile_core::GeoBBox;
	///
	/// let bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.5);
	/// assert_eq!(bbox.as_string_list(), "-10,-5,10,5.5");
	/// ```
	#[must_use]
	pub fn as_string_list(&self) -> String {
		format!("{},{},{},{}", self.west, self.south, self.east, self.north)
	}
}

/// Renders the box as `GeoBBox(west, south, east, north)`.
impl fmt::Debug for GeoBBox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"GeoBBox({}, {}, {}, {})",
			self.west, self.south, self.east, self.north
		)
	}
}

/// Renders the spatial query text, see [`GeoBBox::as_spatial_query_text`].
impl fmt::Display for GeoBBox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.as_spatial_query_text())
	}
}
