use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::GenerationResponse;

/// Write the response verbatim as pretty JSON
pub fn write_response_json(response: &GenerationResponse, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    serde_json::to_writer_pretty(file, response).context("Failed to write JSON")?;
    Ok(())
}

/// Human-readable Markdown view of a content package
pub struct ContentReport<'a> {
    response: &'a GenerationResponse,
}

impl<'a> ContentReport<'a> {
    pub fn new(response: &'a GenerationResponse) -> Self {
        Self { response }
    }

    /// Format the package as Markdown, one section per response field
    pub fn format(&self) -> String {
        let r = self.response;
        let mut output = String::new();

        push_section(&mut output, "Mission Summary", &r.mission_summary);
        push_section(&mut output, "Creative Angle", &r.creative_angle);
        push_section(&mut output, "Headline Options", &bullets(&r.headline_options));
        push_section(&mut output, "Audience Insights", &bullets(&r.audience_insights));
        push_section(&mut output, "Outline", &numbered(&r.outline));
        // Draft headings are demoted one level so they nest under "Draft"
        push_section(&mut output, "Draft", &demote_headings(&r.draft));

        if !r.distribution_plan.is_empty() {
            let artifacts: Vec<String> = r
                .distribution_plan
                .iter()
                .map(|a| format!("### {}\n_{}_\n\n{}", a.title, a.description, a.body))
                .collect();
            push_section(&mut output, "Distribution Plan", &artifacts.join("\n\n"));
        }

        push_section(&mut output, "CTA Variants", &bullets(&r.call_to_action_variants));
        push_section(&mut output, "Sources", &bullets(&r.sources));

        output
    }

    /// Write to a Markdown file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}

fn push_section(output: &mut String, heading: &str, body: &str) {
    if !output.is_empty() {
        output.push('\n');
    }
    output.push_str(&format!("## {}\n\n{}\n", heading, body));
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("- {}", i))
        .collect::<Vec<_>>()
        .join("\n")
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(n, i)| format!("{}. {}", n + 1, i))
        .collect::<Vec<_>>()
        .join("\n")
}

fn demote_headings(text: &str) -> String {
    text.lines()
        .map(|line| match line.strip_prefix("## ") {
            Some(title) => format!("### {}", title),
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_request;
    use crate::pipeline::generate;

    #[test]
    fn test_report_section_order() {
        let response = generate(&sample_request()).unwrap();
        let report = ContentReport::new(&response).format();

        let headings: Vec<&str> = report
            .lines()
            .filter_map(|l| l.strip_prefix("## "))
            .collect();
        assert_eq!(
            headings,
            vec![
                "Mission Summary",
                "Creative Angle",
                "Headline Options",
                "Audience Insights",
                "Outline",
                "Draft",
                "Distribution Plan",
                "CTA Variants",
                "Sources",
            ]
        );
        assert!(report.contains("### Hook"));
        assert!(report.contains("1. Hook"));
    }

    #[test]
    fn test_report_omits_empty_distribution_plan() {
        let mut request = sample_request();
        request.channels.clear();
        let response = generate(&request).unwrap();

        let report = ContentReport::new(&response).format();
        assert!(!report.contains("## Distribution Plan"));
    }

    #[test]
    fn test_write_json_round_trips() {
        let response = generate(&sample_request()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");

        write_response_json(&response, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: GenerationResponse = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, response);
        assert!(content.contains("\"distributionPlan\""));
    }

    #[test]
    fn test_write_report_file() {
        let response = generate(&sample_request()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");

        ContentReport::new(&response).write_file(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("## Mission Summary"));
    }
}
