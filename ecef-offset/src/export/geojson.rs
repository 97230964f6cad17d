//! Export vers GeoJSON avec geozero
//!
//! Deux features Point (EPSG:4326) : la position d'origine et la position
//! décalée. L'altitude et les coordonnées ECEF sont portées par les propriétés.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use ecef_lla::{EcefPoint, LlaPoint};
use geo::{Geometry, Point};
use geozero::geojson::GeoJsonWriter;
use geozero::GeozeroGeometry;
use serde_json::json;

use crate::report::OffsetReport;

/// Exporte le rapport en FeatureCollection GeoJSON
pub fn export_to_geojson(report: &OffsetReport, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    write_feature_collection(&mut writer, report)?;
    writer.flush()?;

    Ok(())
}

fn write_feature_collection<W: Write>(writer: &mut W, report: &OffsetReport) -> Result<()> {
    write!(
        writer,
        r#"{{"type":"FeatureCollection","crs":{{"type":"name","properties":{{"name":"urn:ogc:def:crs:EPSG::4326"}}}},"features":["#
    )?;

    let site = report.site.as_deref();
    write_feature(writer, "original", &report.lla, &report.original, site, 0.0)?;
    write!(writer, ",")?;
    write_feature(
        writer,
        "shifted",
        &report.shifted_lla,
        &report.shifted,
        site,
        report.delta_m,
    )?;

    write!(writer, "]}}")?;
    Ok(())
}

/// Écrit une feature Point en GeoJSON
fn write_feature<W: Write>(
    writer: &mut W,
    id: &str,
    lla: &LlaPoint,
    ecef: &EcefPoint,
    site: Option<&str>,
    delta: f64,
) -> Result<()> {
    write!(writer, r#"{{"type":"Feature","id":{},"#, json!(id))?;

    // Geometry via geozero
    write!(writer, r#""geometry":"#)?;
    let geometry = Geometry::Point(Point::from(*lla));
    let mut geom_buf = Vec::new();
    let mut geom_writer = GeoJsonWriter::new(&mut geom_buf);
    geometry.process_geom(&mut geom_writer)?;
    writer.write_all(&geom_buf)?;

    let properties = json!({
        "site": site,
        "altitude": lla.altitude,
        "delta_h": delta,
        "ecef_x": ecef.x,
        "ecef_y": ecef.y,
        "ecef_z": ecef.z,
    });
    write!(writer, r#","properties":{}}}"#, properties)?;

    Ok(())
}
