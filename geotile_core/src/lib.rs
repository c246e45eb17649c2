//! Geographic bounding boxes and slippy map tile math.
//!
//! The crate provides two value types:
//! - [`GeoBBox`]: an axis-aligned rectangle in degrees with union, intersection and
//!   containment checks, derivable from polyline-encoded paths.
//! - [`TileCoord`]: a Web Mercator tile address with conversions to and from degrees,
//!   the tile's geographic footprint, and a search for the finest tile covering a box.
//!
//! ```
//! use geotile_core::{GeoBBox, TileCoord};
//!
//! let bbox = GeoBBox::new(13.30, 52.48, 13.31, 52.49);
//! let tile = TileCoord::from_geo_bbox(&bbox);
//! assert!(tile.to_geo_bbox().contains_bbox(&bbox));
//! ```

pub mod config;
pub mod types;

pub use config::TileSearchConfig;
pub use types::*;
