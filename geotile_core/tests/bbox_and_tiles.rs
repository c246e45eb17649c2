use geotile_core::{GeoBBox, TileCoord, TileSearchConfig};
use rstest::rstest;

fn boxes() -> Vec<GeoBBox> {
	vec![
		GeoBBox::new(25.0, 5.0, 28.0, 10.0),
		GeoBBox::new(26.0, 6.0, 27.0, 8.0),
		GeoBBox::new(-10.0, -10.0, 10.0, 10.0),
		GeoBBox::new(13.088, 52.338, 13.761, 52.675),
		GeoBBox::from_point(-33.8688, 151.2093),
		GeoBBox::new(-180.0, -85.0, 180.0, 85.0),
		GeoBBox::new(100.0, -40.0, 120.0, -30.0),
	]
}

#[test]
fn union_laws() {
	let boxes = boxes();
	for a in &boxes {
		for b in &boxes {
			assert_eq!(a.union(b), b.union(a), "{a:?} {b:?}");
			for c in &boxes {
				assert_eq!(a.union(b).union(c), a.union(&b.union(c)), "{a:?} {b:?} {c:?}");
			}
		}
	}
}

#[test]
fn union_covers_operands() {
	let boxes = boxes();
	for a in &boxes {
		for b in &boxes {
			let union = a.union(b);
			assert!(union.contains_bbox(a));
			assert!(union.contains_bbox(b));
		}
	}
}

#[test]
fn containment_implies_intersection() {
	let boxes = boxes();
	for a in &boxes {
		for b in &boxes {
			if a.contains_bbox(b) {
				assert!(a.intersects(b), "{a:?} contains but does not intersect {b:?}");
			}
		}
	}
}

#[test]
fn points_inside_and_outside() {
	for bbox in boxes() {
		let (n, w) = bbox.north_west();
		let (s, e) = bbox.south_east();
		let (lat, lng) = ((n + s) / 2.0, (w + e) / 2.0);
		assert!(bbox.contains(lat, lng));
		assert!(bbox.contains(n, w));
		assert!(bbox.contains(s, e));
		assert!(!bbox.contains(n + 0.5, lng));
		assert!(!bbox.contains(s - 0.5, lng));
		assert!(!bbox.contains(lat, w - 0.5));
		assert!(!bbox.contains(lat, e + 0.5));
	}
}

#[rstest]
#[case(TileCoord::new(3, 4, 3))]
#[case(TileCoord::new(10, 550, 335))]
#[case(TileCoord::new(12, 3770, 2457))]
#[case(TileCoord::new(16, 19295, 24640))]
#[case(TileCoord::new(18, 241302, 157096))]
fn covering_tile_of_tile_footprint(#[case] tile: TileCoord) {
	let footprint = tile.to_geo_bbox();
	let (south, east) = footprint.south_east();
	let found = TileCoord::from_geo_bbox(&footprint);
	assert!(found.level <= 15);
	assert!(found.contains(south, east), "{found:?} misses the south-east corner of {tile:?}");
}

#[rstest]
#[case(40.7128, -74.0060)]
#[case(51.5074, -0.1278)]
#[case(-33.8688, 151.2093)]
#[case(0.0, 0.0)]
#[case(64.1466, -21.9426)]
fn degrees_to_tile_and_back(#[case] lat: f64, #[case] lng: f64) {
	for zoom in 0u8..=18 {
		let tile = TileCoord::from_geo(lat, lng, f64::from(zoom));
		let (corner_lat, corner_lng) = tile.as_geo();
		let tile_size = 360.0 / 2.0f64.powi(i32::from(zoom));
		assert!((corner_lat - lat).abs() < tile_size, "zoom {zoom}: {corner_lat} vs {lat}");
		assert!((corner_lng - lng).abs() < tile_size, "zoom {zoom}: {corner_lng} vs {lng}");
		assert!(tile.contains(lat, lng), "zoom {zoom}: {tile:?} misses ({lat}, {lng})");
	}
}

#[test]
fn covering_tile_of_polyline_track() {
	// (38.5, -120.2), (40.7, -120.95), (43.252, -126.453)
	let bbox = GeoBBox::from_polylines(&["_p~iF~ps|U_ulLnnqC_mqNvxq`@"]).unwrap().unwrap();
	let tile = TileCoord::from_geo_bbox(&bbox);
	assert!(tile.to_geo_bbox().contains_bbox(&bbox), "{tile:?} does not cover {bbox:?}");

	let deeper = TileCoord::from_geo(bbox.north, bbox.west, f64::from(tile.level + 1));
	assert!(!deeper.to_geo_bbox().contains_bbox(&bbox));
}

#[test]
fn search_window_from_yaml() {
	let config = TileSearchConfig::from_string("max_level: 6").unwrap();
	let bbox = GeoBBox::from_point(52.52, 13.405);
	let tile = TileCoord::from_geo_bbox_with(&bbox, &config).unwrap();
	assert_eq!(tile, TileCoord::from_geo(52.52, 13.405, 6.0));
	assert_eq!(tile.to_string(), "6/34/20");
}

#[test]
fn worked_examples() {
	let outer = GeoBBox::new(25.0, 5.0, 28.0, 10.0);
	assert!(outer.contains_bbox(&GeoBBox::new(26.0, 6.0, 27.0, 8.0)));
	assert!(outer.contains(6.0, 26.0));
	assert!(!outer.contains(11.0, 26.0));

	let empty: [&str; 0] = [];
	assert!(GeoBBox::from_polylines(&empty).unwrap().is_none());

	assert_eq!(
		GeoBBox::new(1.0, 2.0, 3.0, 4.0).as_spatial_query_text(),
		"BOX(4.000000 3.000000,2.000000 1.000000)"
	);
}
