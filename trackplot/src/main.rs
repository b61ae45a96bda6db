mod options;

use anyhow::{anyhow, Error as AnyError};
use atl06::{plot_crossovers, plot_tracks, select_region, summarize, TrackSet, TrackSummary};
use clap::Parser;
use log::{debug, info};
use options::{Cli, Command as CliCmd};
use plotters::prelude::*;
use std::{fs::File, io::BufReader, io::Write, path::Path};
use textplots::{Chart, Plot, Shape};

/// Figure edge, pixels.
const FIGURE_SIZE: u32 = 1000;

fn main() -> Result<(), AnyError> {
    env_logger::init();

    let Cli { data, cmd } = Cli::parse();
    let tracks = load(&data)?;

    match cmd {
        CliCmd::Tracks {
            out,
            attribute,
            filtered,
        } => {
            let root = SVGBackend::new(&out, (FIGURE_SIZE, FIGURE_SIZE)).into_drawing_area();
            plot_tracks(&root, &tracks, attribute.as_deref(), filtered)?;
            root.present()?;
            Ok(())
        }
        CliCmd::Select {
            out,
            lons,
            lats,
            attribute,
            filtered,
            selected_out,
        } => {
            let root = SVGBackend::new(&out, (FIGURE_SIZE, FIGURE_SIZE)).into_drawing_area();
            let selected =
                select_region(&root, &tracks, lons.0, lats.0, attribute.as_deref(), filtered)?;
            root.present()?;
            info!("{} of {} points selected", selected.len(), tracks.len());
            if let Some(path) = selected_out {
                serde_json::to_writer_pretty(File::create(path)?, &selected)?;
            }
            Ok(())
        }
        CliCmd::Crossovers { out, rgts } => {
            let root = SVGBackend::new(&out, (FIGURE_SIZE, FIGURE_SIZE)).into_drawing_area();
            plot_crossovers(&root, &tracks, rgts.as_deref())?;
            root.present()?;
            Ok(())
        }
        CliCmd::Summary { json } => {
            let rows = summarize(&tracks)?;
            if json {
                println!("{}", serde_json::to_string(&rows)?);
                Ok(())
            } else {
                display(&rows)
            }
        }
        CliCmd::Preview => preview(&tracks),
    }
}

/// Reads a JSON array of measurements.
fn load(path: &Path) -> Result<TrackSet, AnyError> {
    let file = BufReader::new(File::open(path)?);
    let tracks: TrackSet = serde_json::from_reader(file)?;
    debug!("loaded {} points from {}", tracks.len(), path.display());
    Ok(tracks)
}

fn display(rows: &[TrackSummary]) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{:>5} {:>12} {:>8}  extent", "RGT", "date", "points")?;
    for row in rows {
        writeln!(
            stdout,
            "{:>5} {:>12} {:>8}  lons [{:.4}, {:.4}] lats [{:.4}, {:.4}]",
            row.rgt,
            row.date.format("%Y-%m-%d").to_string(),
            row.points,
            row.extent.lon[0],
            row.extent.lon[1],
            row.extent.lat[0],
            row.extent.lat[1],
        )?;
    }
    Ok(())
}

/// Terminal quick look at the point cloud.
fn preview(tracks: &TrackSet) -> Result<(), AnyError> {
    let extent = tracks.extent().ok_or(anyhow!("no points to preview"))?;
    let points: Vec<(f32, f32)> = tracks
        .iter()
        .map(|m| (m.longitude as f32, m.latitude as f32))
        .collect();
    Chart::new(180, 60, extent.lon[0] as f32, extent.lon[1] as f32)
        .lineplot(&Shape::Points(&points))
        .display();
    Ok(())
}
