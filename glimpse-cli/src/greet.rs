// Copyright (c) 2025, Tom Ouellette
// Licensed under the MIT License

use clap::Args;
use serde::Serialize;

#[derive(Debug, Args, Serialize)]
#[command(about = "Print a friendly greeting for the provided name.")]
pub struct GreetArgs {
    #[arg(short = 'n', long, help = "Name of the user.")]
    pub name: String,
}

/// Greeting with the name substituted verbatim
pub fn greeting(name: &str) -> String {
    format!("Hi there {}, it's nice to meet you!", name)
}

pub fn greet(args: &GreetArgs) {
    let arguments = serde_json::to_string(args).unwrap_or_else(|err| {
        eprintln!("[glimpse::greet] ERROR: Could not format arguments. {}", err);
        std::process::exit(1);
    });

    println!("{}", arguments);
    println!("{}", greeting(&args.name));
}
