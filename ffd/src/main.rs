use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{error, info, warn};

use encaixe::pack::Packer;
use ffd::EPOCH;
use ffd::config::FFDConfig;
use ffd::io;
use ffd::io::cli::Cli;
use ffd::io::dxf_export::solution_to_dxf;
use ffd::io::layout_to_svg::solution_to_svg;
use ffd::io::output::FFDOutput;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FFDConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed FFDConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no usable file stem")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let mut ext_instance = io::read_instance(args.input_file.as_path())?;
    if let Some(width) = args.strip_width {
        info!("[MAIN] overriding roll width to {width}");
        ext_instance.strip_width = width;
    }

    let instance = encaixe::io::import(&ext_instance)?;
    info!(
        "[MAIN] imported instance '{}': {} piece types, {} pieces, roll width {}, margin {}",
        ext_instance.name,
        instance.pieces.len(),
        instance.total_piece_qty(),
        instance.strip_width,
        instance.margin,
    );

    let mut packer = Packer::new(instance.clone(), config.pack_config);
    let (solution, failure) = match packer.solve() {
        Ok(solution) => (solution, None),
        Err(err) => {
            error!("[MAIN] {err}");
            warn!(
                "[MAIN] writing the partial layout of {} pieces placed before the failure",
                packer.layout.placed().len()
            );
            (packer.layout.save(), Some(err))
        }
    };

    {
        let output = FFDOutput {
            instance: ext_instance,
            solution: encaixe::io::export(&instance, &solution, *EPOCH),
            config,
        };
        let solution_path = args.solution_folder.join(format!("sol_{input_file_stem}.json"));
        io::write_json(&output, &solution_path)?;
    }

    {
        let svg_path = args.solution_folder.join(format!("sol_{input_file_stem}.svg"));
        let svg = solution_to_svg(&solution, &instance, config.svg_draw_options);
        io::write_svg(&svg, &svg_path)?;
    }

    {
        let dxf_path = args.solution_folder.join(format!("sol_{input_file_stem}.dxf"));
        let dxf = solution_to_dxf(&solution, &instance);
        io::write_dxf(&dxf, &dxf_path)?;
    }

    match failure {
        None => Ok(()),
        Some(err) => Err(err.into()),
    }
}
