// src/render.rs
//! Terminal presentation of an analysis result

use crate::types::AnalysisResult;
use std::fmt::Write;

const BAR_WIDTH: usize = 20;

/// Render the result for the terminal. Purely derived from the result;
/// optional sections appear only when present and non-empty.
pub fn render_result(result: &AnalysisResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Analysis Results");
    let _ = writeln!(out, "{}", "-".repeat(40));
    let _ = writeln!(
        out,
        "Compatibility Score: {}% ({})",
        result.score,
        result.band().label()
    );
    let _ = writeln!(out, "{}", score_bar(result.score));

    if let Some(skills) = non_empty(result.matched_skills.as_deref()) {
        let _ = writeln!(out, "\nMatched Skills ({}):", skills.len());
        for skill in skills {
            let _ = writeln!(out, "  ✓ {}", skill);
        }
    }

    if let Some(skills) = non_empty(result.missing_skills.as_deref()) {
        let _ = writeln!(out, "\nMissing Skills ({}):", skills.len());
        for skill in skills {
            let _ = writeln!(out, "  ✗ {}", skill);
        }
    }

    if let Some(recommendations) = non_empty(result.recommendations.as_deref()) {
        let _ = writeln!(out, "\nRecommendations:");
        for recommendation in recommendations {
            let _ = writeln!(out, "  • {}", recommendation);
        }
    }

    if let Some(density) = result.keyword_density.as_ref().filter(|m| !m.is_empty()) {
        let _ = writeln!(out, "\nKeyword Frequency Analysis:");
        for (keyword, count) in density {
            let _ = writeln!(out, "  {}: {} occurrences", keyword, count);
        }
    }

    out
}

fn non_empty(items: Option<&[String]>) -> Option<&[String]> {
    items.filter(|i| !i.is_empty())
}

fn score_bar(score: f64) -> String {
    let filled = ((score / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_only_present_sections() {
        let result: AnalysisResult = serde_json::from_str(
            r#"{
                "score": 85,
                "matched_skills": ["Python"],
                "missing_skills": [],
                "recommendations": [],
                "keyword_density": {"Python": 3}
            }"#,
        )
        .unwrap();

        let rendered = render_result(&result);
        assert!(rendered.contains("Compatibility Score: 85% (Excellent Match)"));
        assert!(rendered.contains("Matched Skills (1):"));
        assert!(rendered.contains("✓ Python"));
        assert!(!rendered.contains("Missing Skills"));
        assert!(!rendered.contains("Recommendations"));
        assert!(rendered.contains("Python: 3 occurrences"));
    }

    #[test]
    fn test_score_alone_renders_without_sections() {
        let result: AnalysisResult = serde_json::from_str(r#"{"score": 55}"#).unwrap();
        let rendered = render_result(&result);

        assert!(rendered.contains("Compatibility Score: 55% (Poor Match)"));
        assert!(!rendered.contains("Skills"));
        assert!(!rendered.contains("Keyword"));
    }

    #[test]
    fn test_score_bar_bounds() {
        assert_eq!(score_bar(0.0), format!("[{}]", "-".repeat(20)));
        assert_eq!(score_bar(100.0), format!("[{}]", "#".repeat(20)));
        assert_eq!(score_bar(150.0), format!("[{}]", "#".repeat(20)));
        assert_eq!(score_bar(50.0), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
    }
}
