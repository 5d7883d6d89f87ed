// Copyright (c) 2025, Tom Ouellette
// Licensed under the MIT License

use colored::*;
use kdam::{Bar, tqdm};

/// A basic progress bar for tracking iterations
pub fn progress_bar(n: usize, desc: &str, verbose: bool) -> Bar {
    if !verbose {
        return tqdm!(disable = true);
    }

    tqdm!(
        total = n,
        force_refresh = false,
        desc = progress_timestamp(desc),
        bar_format = "{desc suffix=' '}[{percentage:.0}%] ({rate:.1}/s, eta: {remaining human=true})"
    )
}

/// A description prefixed with a standardized timestamp
pub fn progress_timestamp(desc: &str) -> String {
    let time = chrono::Local::now();
    let ymd = time.format("%Y-%m-%d").to_string();
    let hms = time.format("%H:%M:%S").to_string();
    let time = format!("{} | {}", ymd, hms);

    format!(
        "{} {} {} {} {} {}",
        "[".bold(),
        time,
        "|".bold(),
        "glimpse".truecolor(94, 129, 172).bold(),
        "]".bold(),
        desc,
    )
}

/// Print timestamped statements to console
pub fn progress_log(desc: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("{}", progress_timestamp(desc));
}

/// Format integers to readable thousands format, keeping any leading sign
/// out of the digit groups
pub fn thousands_format<T>(number: T) -> String
where
    T: std::fmt::Display,
{
    let number = number.to_string();
    let (sign, digits) = match number.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", number.as_str()),
    };

    if digits.len() <= 4 {
        return number;
    }

    let groups: Vec<_> = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(String::from_utf8_lossy)
        .collect();

    format!("{}{}", sign, groups.join(","))
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_thousands_format() {
        assert_eq!(thousands_format(7), "7");
        assert_eq!(thousands_format(4096), "4096");
        assert_eq!(thousands_format(21000), "21,000");
        assert_eq!(thousands_format(1234567), "1,234,567");
    }

    #[test]
    fn test_thousands_format_negative() {
        assert_eq!(thousands_format(-4096), "-4096");
        assert_eq!(thousands_format(-123456), "-123,456");
        assert_eq!(thousands_format(-1234567), "-1,234,567");
    }

    #[test]
    fn test_progress_timestamp_contains_description() {
        colored::control::set_override(false);
        let line = progress_timestamp("Detected 3 images.");

        assert!(line.contains("glimpse"));
        assert!(line.ends_with("Detected 3 images."));
    }
}
