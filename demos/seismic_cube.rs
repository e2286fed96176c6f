//! Example: ingest a seismic cube and a log curve, slice both, convert units
//!
//! Run with: cargo run --example seismic_cube

use anyhow::Result;
use ndarray::{Array1, Array3};
use std::path::Path;
use subsurface::io::{default_axes, OwnedLogRecord};
use subsurface::{Curve, InMemoryCube, LogIngestOptions, Seismic, Unit};

fn main() -> Result<()> {
    println!("Subsurface Example: Seismic Cube & Log Curve");
    println!("============================================\n");

    // A synthetic 3D velocity cube, 100 inlines x 80 crosslines x 500 samples.
    let volume = Array3::from_shape_fn((100, 80, 500), |(i, j, k)| {
        1.5 + (i as f32 * 0.001) + (j as f32 * 0.0005) + (k as f32 * 0.002)
    });
    let mut cube = InMemoryCube::new(default_axes((100, 80, 500)), volume)?;

    let mut seismic = Seismic::from_cube(&mut cube, Unit::kilometre() / Unit::second())?;
    println!("Ingested: {}", seismic.summary());

    // Pull a time slice: the samples axis collapses away.
    let time_slice = seismic.index_axis(2, 250)?;
    println!("Time slice at sample 250: {}", time_slice);

    // A window of 100 samples keeps its coordinates.
    let window = seismic.slice_axis(2, 200..300)?;
    let samples = window.axis("samples").expect("samples axis survives");
    println!(
        "Sample window: {} ({:.0} - {:.0})",
        window,
        samples.values()[0],
        samples.values()[samples.len() - 1],
    );

    // Unit conversion rescales the payload.
    let v0 = seismic.values()[[0, 0, 0]];
    seismic.convert_units(Unit::metre() / Unit::second())?;
    println!(
        "\nConverted {v0} km/s -> {} {}",
        seismic.values()[[0, 0, 0]],
        seismic.units(),
    );

    // Write the cube back out through the writer interface.
    seismic.to_cube(&mut cube, Path::new("demo-volume.sgy"))?;
    println!("Volume written back to the cube container\n");

    // A gamma-ray curve with an irregular depth array: ingestion warns
    // and resamples onto a regular basis.
    let depths: Array1<f64> = (0..200)
        .map(|i| 1500.0 + i as f64 * 0.5 + if i % 17 == 0 { 0.2 } else { 0.0 })
        .collect();
    let record = OwnedLogRecord {
        data: Array1::linspace(40.0, 140.0, 200),
        unit: "gAPI".to_string(),
        mnemonic: "GR".to_string(),
        description: "Gamma Ray".to_string(),
        api_code: Some("45 310 01 00".to_string()),
    };
    let curve = Curve::from_log_record(
        &record,
        &LogIngestOptions {
            basis: Some(depths),
            ..Default::default()
        },
    )?;

    println!("Ingested: {}", curve);
    println!(
        "  basis {:.1} - {:.1}, step {:?}",
        curve.start(),
        curve.stop(),
        curve.step(),
    );
    println!("  stats: {:?}", curve.describe());

    Ok(())
}
