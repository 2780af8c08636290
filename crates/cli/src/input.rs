//! Prompted input helpers with validation loops.
//!
//! Every helper re-prompts until it gets a usable value; only I/O failures
//! (stdin closed, broken pipe) propagate.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};

/// Print `prompt` and read one line, stripped of the trailing newline.
pub fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        bail!("stdin closed");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Re-prompt until the input parses as a non-negative integer.
pub fn read_u64(prompt: &str) -> Result<u64> {
    loop {
        let line = read_line(prompt)?;
        match line.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please enter a valid non-negative number."),
        }
    }
}

/// Re-prompt until the input parses as a signed integer.
pub fn read_i64(prompt: &str) -> Result<i64> {
    loop {
        let line = read_line(prompt)?;
        match line.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please enter a valid number."),
        }
    }
}

/// Re-prompt until the input parses as a non-negative decimal price.
pub fn read_price(prompt: &str) -> Result<u64> {
    loop {
        let line = read_line(prompt)?;
        match parse_price(line.trim()) {
            Some(cents) => return Ok(cents),
            None => println!("Please enter a valid non-negative price."),
        }
    }
}

/// Parse a decimal price like `10`, `10.5` or `10.50` into cents.
///
/// Rejects negative, non-finite and out-of-range values.
fn parse_price(text: &str) -> Option<u64> {
    let value: f64 = text.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let cents = (value * 100.0).round();
    if cents > u64::MAX as f64 {
        return None;
    }
    Some(cents as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_accepts_whole_and_fractional_amounts() {
        assert_eq!(parse_price("10"), Some(1000));
        assert_eq!(parse_price("10.5"), Some(1050));
        assert_eq!(parse_price("10.50"), Some(1050));
        assert_eq!(parse_price("0"), Some(0));
        assert_eq!(parse_price("0.99"), Some(99));
    }

    #[test]
    fn parse_price_rounds_sub_cent_amounts() {
        assert_eq!(parse_price("0.999"), Some(100));
        assert_eq!(parse_price("0.004"), Some(0));
    }

    #[test]
    fn parse_price_rejects_garbage() {
        assert_eq!(parse_price("-1"), None);
        assert_eq!(parse_price("-0.01"), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("inf"), None);
        assert_eq!(parse_price("ten"), None);
        assert_eq!(parse_price(""), None);
    }
}
