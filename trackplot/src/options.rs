use anyhow::{anyhow, Error as AnyError};
use clap::{Parser, Subcommand};
use std::{path::PathBuf, str::FromStr};

/// A tool for plotting and summarizing ATL06 track tables.
#[derive(Parser, Debug)]
pub struct Cli {
    /// JSON file containing an array of ATL06 measurements.
    #[arg(short, long)]
    pub data: PathBuf,

    #[command(subcommand)]
    pub cmd: Command,
}

/// A "min,max" pair.
#[derive(Clone, Copy, Debug)]
pub struct Span(pub [f64; 2]);

impl FromStr for Span {
    type Err = AnyError;
    fn from_str(s: &str) -> Result<Self, AnyError> {
        let idx = s.find(',').ok_or(anyhow!("not a valid min,max pair"))?;
        let (min_str, max_str) = {
            let (min_str, max_str) = s.split_at(idx);
            (min_str, &max_str[1..])
        };
        let min = f64::from_str(min_str)?;
        let max = f64::from_str(max_str)?;
        Ok(Self([min, max]))
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export a lon/lat scatter of every track as an SVG.
    Tracks {
        /// SVG file path.
        #[arg(short, long)]
        out: PathBuf,

        /// Color points by this attribute instead of plain black.
        #[arg(short, long)]
        attribute: Option<String>,

        /// Drop low-quality points first.
        #[arg(short, long)]
        filtered: bool,
    },

    /// Outline a lon/lat box on the scatter and keep what falls inside.
    Select {
        /// SVG file path.
        #[arg(short, long)]
        out: PathBuf,

        /// Longitude range, "min,max".
        #[arg(long)]
        lons: Span,

        /// Latitude range, "min,max".
        #[arg(long)]
        lats: Span,

        /// Color points by this attribute instead of plain black.
        #[arg(short, long)]
        attribute: Option<String>,

        /// Drop low-quality points first.
        #[arg(short, long)]
        filtered: bool,

        /// Also write the selected points to this JSON file.
        #[arg(long)]
        selected_out: Option<PathBuf>,
    },

    /// Export a 3-D elevation scatter of crossover tracks as an SVG.
    Crossovers {
        /// SVG file path.
        #[arg(short, long)]
        out: PathBuf,

        /// Tracks to draw, e.g. "133,713". All of them when omitted.
        #[arg(long, value_delimiter = ',')]
        rgts: Option<Vec<u16>>,
    },

    /// Print a per-track summary of the table.
    Summary {
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Draw a quick lon/lat preview in the terminal.
    Preview,
}
