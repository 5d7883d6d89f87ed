#![allow(clippy::all)]
use clap::{Parser, Subcommand};

use glimpse_cli::{detect, greet, montage};

#[derive(Parser)]
#[command(name = "glimpse", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Greet(greet::GreetArgs),
    DetectColor(detect::DetectColorArgs),
    Montage(montage::MontageArgs),
}

fn main() {
    clap_markdown::print_help_markdown::<Cli>();
}
