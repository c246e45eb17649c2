//! Contains the bounding box and tile coordinate types, plus the polyline adapter.

mod geo_bbox;
pub use geo_bbox::*;

pub mod polyline;

mod tile_coord;
pub use tile_coord::*;
