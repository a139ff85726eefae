use ttc_delay_risk::scores::geo::{LINE_COORDINATES, coordinates, render_marker};

#[test]
fn yu_marker_position() {
    let marker = render_marker("YU", 0.5).unwrap();
    assert_eq!(marker.lat, 43.6629);
    assert_eq!(marker.lon, -79.3957);
    assert_eq!(marker.risk, 50.0);
    assert_eq!(marker.radius_m, 5000.0);
    assert_eq!(marker.fill_color, [255, 0, 0, 160]);
}

#[test]
fn unknown_line_has_no_marker() {
    assert!(coordinates("XYZ").is_none());
    assert!(render_marker("XYZ", 0.9).is_none());
}

#[test]
fn every_table_entry_renders() {
    for (line, lat, lon) in LINE_COORDINATES {
        let marker = render_marker(line, 0.0).unwrap();
        assert_eq!((marker.lat, marker.lon), (lat, lon));
        assert_eq!(marker.radius_m, 0.0);
    }
    assert_eq!(coordinates("SRT"), Some((43.7680, -79.4144)));
}

#[test]
fn lookup_is_case_sensitive() {
    assert!(coordinates("yu").is_none());
}
