use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ndoffset::config::LayoutConfig;
use ndoffset::{Layout, NdError};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "ndoffset")]
#[command(about = "Row-major offsets for flattened N-dimensional arrays", long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ShapeArgs {
    /// Extents, outermost first (e.g. 5,4)
    #[arg(long, value_delimiter = ',', conflicts_with = "layout")]
    extents: Vec<usize>,

    /// JSON file with {"extents": [...], "coords": [...]}
    #[arg(long)]
    layout: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Offset of a coordinate tuple
    Offset {
        #[command(flatten)]
        shape: ShapeArgs,
        /// Coordinates, outermost first
        #[arg(long, value_delimiter = ',')]
        coords: Vec<usize>,
    },
    /// Coordinates of an offset
    Coords {
        #[command(flatten)]
        shape: ShapeArgs,
        #[arg(long)]
        offset: usize,
    },
    /// Offsets visited along one axis from a starting coordinate
    Lane {
        #[command(flatten)]
        shape: ShapeArgs,
        #[arg(long, value_delimiter = ',')]
        coords: Vec<usize>,
        #[arg(long)]
        axis: usize,
    },
    /// Check that every coordinate maps to a distinct offset in range
    Verify {
        #[command(flatten)]
        shape: ShapeArgs,
    },
}

impl ShapeArgs {
    /// Layout plus any coordinates carried by the layout file.
    fn resolve(&self) -> Result<(Layout, Option<Vec<usize>>), NdError> {
        match &self.layout {
            Some(path) => {
                let config = LayoutConfig::load(path)?;
                Ok((config.layout()?, config.coords))
            }
            None => Ok((Layout::new(&self.extents)?, None)),
        }
    }
}

fn pick_coords(flag: Vec<usize>, from_file: Option<Vec<usize>>) -> Result<Vec<usize>, NdError> {
    if !flag.is_empty() {
        return Ok(flag);
    }
    from_file.ok_or_else(|| NdError::from("no coordinates given (use --coords or a layout file with \"coords\")"))
}

fn main() -> Result<(), NdError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Offset { shape, coords } => {
            let (layout, from_file) = shape.resolve()?;
            let coords = pick_coords(coords, from_file)?;
            let offset = layout.checked_offset(&coords)?;
            info!(extents = ?layout.extents(), ?coords, offset, "offset");
            if cli.json {
                println!("{}", json!({ "extents": layout.extents(), "coords": coords, "offset": offset }));
            } else {
                println!("{}", offset);
            }
        }
        Commands::Coords { shape, offset } => {
            let (layout, _) = shape.resolve()?;
            let coords = layout.coords(offset)?;
            info!(extents = ?layout.extents(), offset, ?coords, "coords");
            if cli.json {
                println!("{}", json!({ "extents": layout.extents(), "offset": offset, "coords": coords.as_slice() }));
            } else {
                println!("{}", join(&coords));
            }
        }
        Commands::Lane { shape, coords, axis } => {
            let (layout, from_file) = shape.resolve()?;
            let coords = pick_coords(coords, from_file)?;
            let lane = layout.lane(&coords, axis)?;
            let offsets: Vec<usize> = lane.iter().collect();
            info!(base = lane.base(), stride = lane.stride(), len = lane.len(), "lane");
            if cli.json {
                println!(
                    "{}",
                    json!({ "base": lane.base(), "stride": lane.stride(), "offsets": offsets })
                );
            } else {
                println!("{}", join(&offsets));
            }
        }
        Commands::Verify { shape } => {
            let (layout, _) = shape.resolve()?;
            let bijective = layout.is_bijective()?;
            info!(extents = ?layout.extents(), capacity = layout.capacity(), bijective, "verify");
            if cli.json {
                println!(
                    "{}",
                    json!({ "extents": layout.extents(), "capacity": layout.capacity(), "bijective": bijective })
                );
            } else {
                println!("capacity {} bijective {}", layout.capacity(), bijective);
            }
            if !bijective {
                return Err(NdError::from("layout is not a bijection"));
            }
        }
    }

    Ok(())
}

fn join(values: &[usize]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",")
}
