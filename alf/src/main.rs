use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use alf::config::AlfConfig;
use alf::io::cli::Cli;
use alf::io::layout_to_svg::layer_to_svg;
use alf::io::output::Output;
use alf::opt::alt_stack::AltStackOptimizer;
use alf::opt::baseline::BaselineOptimizer;
use alf::{EPOCH, io};
use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            AlfConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed AlfConfig: {config:?}");

    let input_file_stem = args.input_file.file_stem().unwrap().to_str().unwrap();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let (carton, pallet) = io::import(&ext_instance)?;

    let baseline = BaselineOptimizer::new(carton, pallet).solve();
    let solution = AltStackOptimizer::new(carton, pallet, config).solve();

    match (&solution, &baseline) {
        (Some(opt), Some(base)) => info!(
            "[MAIN] optimized plan holds {} cartons ({:.1}%), straight grid {} ({:.1}%)",
            opt.total_cartons,
            opt.utilization * 100.0,
            base.total_cartons,
            base.utilization * 100.0,
        ),
        (None, _) => warn!(
            "[MAIN] no feasible layout: carton {}x{}x{} does not fit pallet {}x{}x{}",
            carton.length,
            carton.width,
            carton.height,
            pallet.length,
            pallet.width,
            pallet.max_height,
        ),
        _ => {}
    }

    {
        let output = Output {
            instance: ext_instance,
            solution: solution.as_ref().map(|s| io::export(s, *EPOCH)),
            baseline: baseline.as_ref().map(|s| io::export(s, *EPOCH)),
            config,
        };

        let solution_path = args.solution_folder.join(format!("sol_{input_file_stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    if let Some(solution) = &solution {
        for layer in &solution.layers {
            let svg_path = args
                .solution_folder
                .join(format!("sol_{input_file_stem}_layer_{}.svg", layer.index));
            let svg = layer_to_svg(layer, &pallet, config.svg_draw_options);
            io::write_svg(&svg, Path::new(&svg_path))?;
        }
    }

    Ok(())
}
