use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Value, json};

use crate::scores::MapMarker;

/// Single-point FeatureCollection; coordinates are `[lon, lat]`.
pub fn marker_geojson(marker: &MapMarker) -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": [marker.lon, marker.lat],
            },
            "properties": {
                "line": marker.line,
                "risk": marker.risk,
                "radius_m": marker.radius_m,
                "fill_color": marker.fill_color,
            },
        }],
        "view": {
            "latitude": marker.lat,
            "longitude": marker.lon,
            "zoom": marker.zoom,
            "pitch": marker.pitch,
        },
    })
}

pub fn write_geojson(path: &Path, marker: &MapMarker) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &marker_geojson(marker))?;
    Ok(())
}
