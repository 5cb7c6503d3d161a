//! GeoJSON loading: the file-parsing collaborator in front of the core.
//!
//! Accepts a FeatureCollection, a single Feature, or a bare Geometry.
//! LineStrings map to one record each; MultiLineStrings are exploded into
//! one record per part (each part carrying a copy of the feature's
//! properties). Non-line geometries are skipped with a warning rather than
//! failing the run.

use std::path::Path;

use geojson::{Feature, GeoJson, Geometry, Value};
use tracing::warn;

use lg_core::{Coordinate, ensure_finite};
use lg_geom::Crs;
use lg_graph::{Attrs, LineCollection, LineRecord};

use crate::error::{AppError, AppResult};

/// Read a GeoJSON file into a line collection under the given CRS.
pub fn load_lines(path: &Path, crs: Crs) -> AppResult<LineCollection> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::InputFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    lines_from_geojson(&content, crs)
}

/// Parse GeoJSON text into a line collection.
pub fn lines_from_geojson(content: &str, crs: Crs) -> AppResult<LineCollection> {
    let gj: GeoJson = content
        .parse()
        .map_err(|e: geojson::Error| AppError::GeoJson(e.to_string()))?;

    let mut lines = Vec::new();
    match gj {
        GeoJson::FeatureCollection(fc) => {
            for feature in fc.features {
                push_feature(&mut lines, feature)?;
            }
        }
        GeoJson::Feature(feature) => push_feature(&mut lines, feature)?,
        GeoJson::Geometry(geometry) => push_geometry(&mut lines, &geometry, Attrs::new())?,
    }

    Ok(LineCollection::new(lines, crs))
}

fn push_feature(lines: &mut Vec<LineRecord>, feature: Feature) -> AppResult<()> {
    let attrs = feature.properties.unwrap_or_default();
    match feature.geometry {
        Some(geometry) => push_geometry(lines, &geometry, attrs),
        None => {
            warn!("skipping feature without geometry");
            Ok(())
        }
    }
}

fn push_geometry(lines: &mut Vec<LineRecord>, geometry: &Geometry, attrs: Attrs) -> AppResult<()> {
    match &geometry.value {
        Value::LineString(positions) => {
            lines.push(LineRecord::with_attrs(positions_to_coords(positions)?, attrs));
        }
        Value::MultiLineString(parts) => {
            for positions in parts {
                lines.push(LineRecord::with_attrs(
                    positions_to_coords(positions)?,
                    attrs.clone(),
                ));
            }
        }
        other => {
            warn!(kind = other.type_name(), "skipping non-line geometry");
        }
    }
    Ok(())
}

fn positions_to_coords(positions: &[Vec<f64>]) -> AppResult<Vec<Coordinate>> {
    positions
        .iter()
        .map(|pos| {
            if pos.len() < 2 {
                return Err(AppError::GeoJson(format!(
                    "position has {} value(s), need at least 2",
                    pos.len()
                )));
            }
            let x = ensure_finite(pos[0], "x")?;
            let y = ensure_finite(pos[1], "y")?;
            Ok(Coordinate::new(x, y))
        })
        .collect()
}
