// ABOUTME: CLI steps and regions commands - print the wizard's fixed catalogs
//
// steps: the seven data steps plus the success screen
// regions: reference shipping regions in display order

use anyhow::{Context, Result};
use serde::Serialize;

use super::OutputFormat;
use crate::wizard::regions::REFERENCE_REGIONS;
use crate::wizard::WizardStep;

/// JSON output structure for one wizard step
#[derive(Debug, Serialize)]
pub struct StepInfo {
    pub number: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub section: Option<&'static str>,
}

impl From<WizardStep> for StepInfo {
    fn from(step: WizardStep) -> Self {
        Self {
            number: step.number(),
            title: step.title(),
            description: step.description(),
            section: step.section().map(|s| s.name()),
        }
    }
}

pub fn render_steps(format: OutputFormat) -> Result<String> {
    let steps: Vec<StepInfo> = WizardStep::all().iter().copied().map(StepInfo::from).collect();

    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&steps).context("Failed to serialize steps")
        }
        OutputFormat::Text => Ok(steps
            .iter()
            .map(|step| format!("{:>2}. {:<26} {}", step.number, step.title, step.description))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn render_regions(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&REFERENCE_REGIONS).context("Failed to serialize regions")
        }
        OutputFormat::Text => Ok(REFERENCE_REGIONS.join("\n")),
    }
}

/// Execute the steps command
pub fn steps(format: OutputFormat) -> Result<()> {
    println!("{}", render_steps(format)?);
    Ok(())
}

/// Execute the regions command
pub fn regions(format: OutputFormat) -> Result<()> {
    println!("{}", render_regions(format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_text_lists_every_step() {
        let out = render_steps(OutputFormat::Text).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), WizardStep::total());
        assert!(lines[0].contains("Personal & Business Info"));
        assert!(lines[7].trim_start().starts_with("8. Success"));
    }

    #[test]
    fn test_steps_json_marks_success_without_section() {
        let out = render_steps(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(8));
        assert_eq!(value[0]["section"], "personalInfo");
        assert!(value[7]["section"].is_null());
    }

    #[test]
    fn test_regions_in_display_order() {
        let out = render_regions(OutputFormat::Text).unwrap();
        assert_eq!(out.lines().next(), Some("United States"));
        assert_eq!(out.lines().last(), Some("Worldwide"));

        let json: Vec<String> =
            serde_json::from_str(&render_regions(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json.len(), 16);
    }
}
