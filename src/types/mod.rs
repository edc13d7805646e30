// src/types/mod.rs

pub mod analysis;

pub use analysis::{AnalysisResult, ScoreBand};
