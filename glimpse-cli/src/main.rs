// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use clap::{Parser, Subcommand};
use glimpse_cli::{detect, greet, montage};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
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
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Greet(greet_args)) => greet::greet(greet_args),
        Some(Commands::DetectColor(detect_args)) => detect::detect_color(detect_args),
        Some(Commands::Montage(montage_args)) => montage::montage(montage_args),
        None => {}
    }
}
