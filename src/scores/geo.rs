use crate::scores::MapMarker;

pub const NO_COORDINATES_WARNING: &str = "No map coordinates available for this line.";

const MARKER_FILL: [u8; 4] = [255, 0, 0, 160];
const MAP_ZOOM: f64 = 11.0;
const MAP_PITCH: f64 = 50.0;

/// Station anchor per line: two main lines, one extension, one decommissioned.
pub const LINE_COORDINATES: [(&str, f64, f64); 4] = [
    ("YU", 43.6629, -79.3957),
    ("BD", 43.6512, -79.3832),
    ("SHP", 43.7315, -79.2622),
    ("SRT", 43.7680, -79.4144),
];

pub fn coordinates(line: &str) -> Option<(f64, f64)> {
    LINE_COORDINATES
        .iter()
        .find(|(name, _, _)| *name == line)
        .map(|&(_, lat, lon)| (lat, lon))
}

/// `None` means the caller shows [`NO_COORDINATES_WARNING`] instead of a map.
pub fn render_marker(line: &str, probability: f64) -> Option<MapMarker> {
    let (lat, lon) = coordinates(line)?;
    let risk = probability * 100.0;
    Some(MapMarker {
        line: line.to_string(),
        lat,
        lon,
        risk,
        radius_m: risk * 100.0,
        fill_color: MARKER_FILL,
        zoom: MAP_ZOOM,
        pitch: MAP_PITCH,
    })
}
