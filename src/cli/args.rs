use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::request::{Operation, RectangleDescriptor};

#[derive(Parser, Debug)]
#[command(name = "shapes")]
#[command(version, about = "Rectangle intersection, containment and adjacency", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the overlapping area of two rectangles (nothing if they do not overlap)
    Intersect(PairArgs),
    /// Check whether the first rectangle contains the second
    Contain(PairArgs),
    /// Classify how the second rectangle touches the first
    AreAdjacent(PairArgs),
    /// Evaluate JSON batch files of requests in parallel
    Batch(BatchArgs),
}

impl Command {
    /// The single-pair operation this command runs, if any
    pub fn pair(&self) -> Option<(Operation, &PairArgs)> {
        match self {
            Command::Intersect(args) => Some((Operation::Intersect, args)),
            Command::Contain(args) => Some((Operation::Contain, args)),
            Command::AreAdjacent(args) => Some((Operation::AreAdjacent, args)),
            Command::Batch(_) => None,
        }
    }

    /// Batch files named on the command line
    pub fn batch_inputs(&self) -> &[PathBuf] {
        match self {
            Command::Batch(args) => args.input.as_slice(),
            _ => &[],
        }
    }

    pub fn common(&self) -> &CommonArgs {
        match self {
            Command::Intersect(args) | Command::Contain(args) | Command::AreAdjacent(args) => {
                &args.common
            }
            Command::Batch(args) => &args.common,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct PairArgs {
    /// First rectangle as x,y,width,height
    #[arg(
        long,
        value_name = "X,Y,W,H",
        allow_hyphen_values = true,
        required_unless_present = "request"
    )]
    pub r1: Option<RectangleDescriptor>,

    /// Second rectangle as x,y,width,height
    #[arg(
        long,
        value_name = "X,Y,W,H",
        allow_hyphen_values = true,
        required_unless_present = "request"
    )]
    pub r2: Option<RectangleDescriptor>,

    /// Read {"r1": {...}, "r2": {...}} from a JSON file instead
    #[arg(long, value_name = "FILE", conflicts_with_all = ["r1", "r2"])]
    pub request: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Batch files holding arrays of {"operation", "r1", "r2"} entries
    #[arg(required_unless_present = "config")]
    pub input: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Load settings from a .shapes config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write results to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON results
    #[arg(long)]
    pub pretty: bool,

    /// Accept negative width/height by flipping the rectangle into place
    #[arg(long)]
    pub normalize: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
