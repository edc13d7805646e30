// src/types/analysis.rs
//! Wire types returned by the analysis backend

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Compatibility analysis as returned by `POST /upload`.
///
/// Only the score is guaranteed; every other section may be missing from the
/// response and stays `None` rather than being defaulted to empty, so the
/// rendering layer decides presence once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: f64,
    pub matched_skills: Option<Vec<String>>,
    pub missing_skills: Option<Vec<String>>,
    pub recommendations: Option<Vec<String>>,
    pub keyword_density: Option<BTreeMap<String, u64>>,
}

impl AnalysisResult {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

/// Presentation bucket for the score. Thresholds are cosmetic only; the
/// backend never sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Moderate,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Excellent
        } else if score >= 60.0 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent Match",
            ScoreBand::Moderate => "Moderate Match",
            ScoreBand::Poor => "Poor Match",
        }
    }
}
