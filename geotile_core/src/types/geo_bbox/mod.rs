//! Axis-aligned geographic bounding boxes.
//!
//! A `GeoBBox` is a rectangle in degrees described by its `west`, `south`, `east` and
//! `north` edges. It is a plain `Copy` value: the algebra in this module never mutates
//! a box in place, every operation returns a new one.
//!
//! ## Conventions
//! - Longitudes are `west`/`east`, latitudes are `south`/`north`.
//! - A box is expected to satisfy `west <= east` and `south <= north`. This is **not**
//!   enforced; boxes crossing the antimeridian (`west > east`) are neither rejected nor
//!   normalized, callers must avoid or post-process them.
//! - Point arguments are always passed as `(lat, lng)`.
//!
//! ## Common tasks
//! - Build from edges:        [`GeoBBox::new`]
//! - Build from polylines:    [`GeoBBox::from_polyline`], [`GeoBBox::from_polylines`]
//! - Footprint of a tile:     [`GeoBBox::from_tile`]
//! - Combine:                 [`GeoBBox::union`], [`GeoBBox::union_point`]
//! - Query:                   [`GeoBBox::intersects`], [`GeoBBox::contains`], [`GeoBBox::contains_bbox`]
//! - Spatial query text:      [`GeoBBox::as_spatial_query_text`]
//!
//! ## Examples
//! ```
//! use geotile_core::GeoBBox;
//!
//! let outer = GeoBBox::new(25.0, 5.0, 28.0, 10.0);
//! let inner = GeoBBox::new(26.0, 6.0, 27.0, 8.0);
//! assert!(outer.contains_bbox(&inner));
//! assert!(outer.contains(6.0, 26.0));
//! assert!(!outer.contains(11.0, 26.0));
//! ```

mod algebra;
mod constructors;
mod convert;
mod fmt;
mod queries;

/// A geographic rectangle in degrees.
///
/// # Fields
/// - `west` — minimum longitude.
/// - `south` — minimum latitude.
/// - `east` — maximum longitude.
/// - `north` — maximum latitude.
///
/// `Default` is the zero box `(0, 0, 0, 0)`. It is not an identity for
/// [`union`](GeoBBox::union); no such sentinel exists.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct GeoBBox {
	pub west: f64,
	pub south: f64,
	pub east: f64,
	pub north: f64,
}
