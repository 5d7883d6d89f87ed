// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use image::RgbImage;

use glimpse_core::error::GlimpseError;
use glimpse_core::ut;

/// Presents rendered frames by writing them to an output directory
///
/// When waiting is enabled every frame blocks until a line (Enter) is read
/// from the input. Reaching the end of the input turns waiting off.
pub struct Viewer {
    output: PathBuf,
    wait: bool,
    input: Box<dyn BufRead>,
}

impl Viewer {
    /// Create a viewer writing into a new (possibly incremented) directory
    pub fn new<P: AsRef<Path>>(output: P, wait: bool) -> Result<Viewer, GlimpseError> {
        Ok(Viewer {
            output: ut::path::create_directory(output)?,
            wait,
            input: Box::new(std::io::stdin().lock()),
        })
    }

    /// Replace the source of key presses
    pub fn with_input<R: BufRead + 'static>(mut self, input: R) -> Viewer {
        self.input = Box::new(input);
        self
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Write a frame as `<output>/<name>.png` and wait if enabled
    pub fn show(&mut self, name: &str, frame: &RgbImage) -> Result<PathBuf, GlimpseError> {
        let path = self.output.join(format!("{}.png", name));

        frame
            .save(&path)
            .map_err(|err| GlimpseError::ImageWriteError(format!("{} ({})", err, path.display())))?;

        if self.wait {
            self.pause(&path);
        }

        Ok(path)
    }

    fn pause(&mut self, path: &Path) {
        print!("Showing {}. Press Enter to continue...", path.display());
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                println!();
                self.wait = false;
            }
            Ok(_) => {}
        }
    }
}
