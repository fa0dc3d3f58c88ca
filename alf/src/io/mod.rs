use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use log::{Level, LevelFilter, info, log};
use pallet_rs::entities::{Carton, Pallet, StackSolution};
use serde::Serialize;
use svg::Document;

use crate::EPOCH;
use crate::io::ext_repr::{ExtInstance, ExtLayer, ExtPlacement, ExtSolution};

pub mod cli;
pub mod ext_repr;
pub mod layout_to_svg;
pub mod output;
pub mod svg_util;

pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    let file = File::open(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse instance file: {}", path.display()))
}

/// Converts an external instance into the engine's entities, validating the dimensions.
pub fn import(ext_instance: &ExtInstance) -> Result<(Carton, Pallet)> {
    let c = &ext_instance.carton;
    let p = &ext_instance.pallet;
    let carton = Carton::new(c.length, c.width, c.height)?;
    let pallet = Pallet::new(p.length, p.width, p.max_height)?;
    Ok((carton, pallet))
}

/// Converts a solution into its external representation.
pub fn export(solution: &StackSolution, epoch: Instant) -> ExtSolution {
    ExtSolution {
        orientation: [
            solution.orientation.l,
            solution.orientation.w,
            solution.orientation.h,
        ],
        total_cartons: solution.total_cartons,
        n_layers: solution.n_layers(),
        utilization: solution.utilization,
        total_volume: solution.total_volume,
        pallet_volume: solution.pallet_volume,
        layers: solution
            .layers
            .iter()
            .map(|layer| ExtLayer {
                layer: layer.index,
                z: layer.z(),
                placements: layer
                    .placements
                    .iter()
                    .map(|p| ExtPlacement {
                        kind: p.kind.as_str().to_string(),
                        x: p.footprint.x,
                        y: p.footprint.y,
                        l: p.footprint.l,
                        w: p.footprint.w,
                    })
                    .collect(),
            })
            .collect(),
        run_time_sec: solution.time_stamp.duration_since(epoch).as_secs(),
    }
}

pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create output file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)
        .with_context(|| format!("could not write output file: {}", path.display()))?;
    info!("solution written to {}", path.display());
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("svg written to {}", path.display());
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .map_err(|e| anyhow!("could not initialize logger: {e}"))?;
    log!(Level::Info, "time: {}", jiff::Zoned::now());
    Ok(())
}
