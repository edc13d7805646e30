// src/report.rs
//! Plain-text report synthesis and export

use crate::error::ScreenError;
use crate::types::AnalysisResult;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Render the analysis as a human-readable report. Pure and synchronous;
/// missing or empty sections degrade to "None" / "Not available".
pub fn render_report(result: &AnalysisResult, generated_at: DateTime<Local>) -> String {
    let mut out = String::new();

    out.push_str("RESUME ANALYSIS REPORT\n");
    out.push_str("======================\n\n");
    out.push_str(&format!("Overall Score: {}%\n\n", result.score));

    out.push_str("MATCHED SKILLS:\n");
    out.push_str(&bulleted(result.matched_skills.as_deref()));

    out.push_str("\nMISSING SKILLS:\n");
    out.push_str(&bulleted(result.missing_skills.as_deref()));

    out.push_str("\nRECOMMENDATIONS:\n");
    out.push_str(&bulleted(result.recommendations.as_deref()));

    out.push_str("\nKEYWORD ANALYSIS:\n");
    match result.keyword_density.as_ref().filter(|m| !m.is_empty()) {
        Some(density) => {
            for (keyword, count) in density {
                out.push_str(&format!("• {}: {} occurrences\n", keyword, count));
            }
        }
        None => out.push_str("Not available\n"),
    }

    out.push_str(&format!(
        "\nGenerated on: {}\n",
        generated_at.format("%Y-%m-%d")
    ));

    out
}

fn bulleted(items: Option<&[String]>) -> String {
    match items.filter(|i| !i.is_empty()) {
        Some(items) => items
            .iter()
            .map(|item| format!("• {}\n", item))
            .collect(),
        None => "None\n".to_string(),
    }
}

/// Collision-free filename for a saved report.
pub fn report_filename(at: DateTime<Local>) -> String {
    format!("resume-analysis-{}.txt", at.timestamp_millis())
}

/// Write the report for `result` into `dir` and return the written path.
pub fn save_report(result: &AnalysisResult, dir: &Path) -> Result<PathBuf, ScreenError> {
    let now = Local::now();
    let path = dir.join(report_filename(now));

    std::fs::write(&path, render_report(result, now)).map_err(|source| ScreenError::Io {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
