// ABOUTME: CLI score command - rate a password with the credentials step's scorer

use anyhow::{Context, Result};
use serde::Serialize;

use super::{OutputFormat, ScoreArgs};
use crate::wizard::password::{self, StrengthBand};

/// JSON output structure for score command
#[derive(Debug, Serialize)]
pub struct ScoreOutput {
    pub score: u8,
    pub band: &'static str,
}

pub fn render(password: &str, format: OutputFormat) -> Result<String> {
    let score = password::score(password);
    let band = StrengthBand::from_score(score);

    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&ScoreOutput {
            score,
            band: band.label(),
        })
        .context("Failed to serialize score"),
        OutputFormat::Text => {
            let filled = usize::from(score / 5);
            Ok(format!(
                "{}{} {score}/100 {}",
                "█".repeat(filled),
                "░".repeat(20 - filled),
                band.label()
            ))
        }
    }
}

/// Execute the score command
pub fn execute(args: &ScoreArgs, format: OutputFormat) -> Result<()> {
    println!("{}", render(&args.password, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_output_shows_band() {
        let out = render("Abcdefgh1!xy", OutputFormat::Text).unwrap();
        assert!(out.ends_with("100/100 Strong"));
        assert_eq!(out.chars().filter(|c| *c == '█').count(), 20);
    }

    #[test]
    fn test_json_output() {
        let out = render("abcdefgh", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["score"], 40);
        assert_eq!(value["band"], "Fair");
    }

    #[test]
    fn test_empty_password_is_weak() {
        let out = render("", OutputFormat::Text).unwrap();
        assert!(out.ends_with("0/100 Weak"));
    }
}
