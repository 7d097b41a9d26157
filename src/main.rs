//! nn-diagram CLI entry point.

use std::fs;
use std::io::{self, Write};
use std::process;

use clap::Parser;

use nn_diagram::parsers::{parse_bounds, parse_layer_list};
use nn_diagram::{Bounds, DiagramConfig, EdgeCount, NumberingBase, render_to_svg};

/// Feed-forward neural-network topology diagram to SVG.
#[derive(Parser, Debug)]
#[command(
    name = "nn-diagram",
    about = "Feed-forward neural-network topology diagram to SVG"
)]
struct Cli {
    /// Layer sizes, e.g. "784,256,10" (also accepts 784x256x10)
    layers: String,

    /// Plot rectangle as left,right,bottom,top in [0,1]
    #[arg(short = 'b', long = "bounds", default_value = "0.1,0.9,0.1,0.9")]
    bounds: String,

    /// Maximum layer slots before the middle collapses
    #[arg(long = "max-layers", default_value = "12")]
    max_layers: usize,

    /// Maximum neuron slots per layer before an ellipsis
    #[arg(long = "max-neurons", default_value = "6")]
    max_neurons: usize,

    /// Fixed keep count per truncated end (default: half the limit)
    #[arg(long = "edge-count")]
    edge_count: Option<usize>,

    /// Number neurons from 0 instead of 1
    #[arg(long = "zero-based")]
    zero_based: bool,

    /// Skip the numeric neuron labels
    #[arg(long = "no-labels")]
    no_labels: bool,

    /// SVG viewport width in pixels
    #[arg(long = "width", default_value = "640")]
    width: u32,

    /// SVG viewport height in pixels
    #[arg(long = "height", default_value = "480")]
    height: u32,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let layer_sizes = match parse_layer_list(&cli.layers) {
        Ok(sizes) => sizes,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    let bounds: Bounds = match parse_bounds(&cli.bounds) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let config = DiagramConfig {
        max_layers: cli.max_layers,
        max_neurons: cli.max_neurons,
        edge_count: cli
            .edge_count
            .map_or(EdgeCount::Derived, EdgeCount::Fixed),
        numbering: if cli.zero_based {
            NumberingBase::ZeroBased
        } else {
            NumberingBase::OneBased
        },
        show_labels: !cli.no_labels,
    };

    let svg = match render_to_svg(&layer_sizes, bounds, &config, cli.width, cli.height) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    if let Some(ref path) = cli.output {
        match fs::write(path, svg) {
            Ok(()) => {}
            Err(e) => {
                eprintln!("error: cannot write '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        println!("{}", svg);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
