use serde::{Deserialize, Serialize};

use crate::models::opportunity::Opportunity;

/// User-supplied targeting input submitted with an analysis request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Desired role, free text. Blank or absent falls back to a fixed phrase.
    #[serde(default)]
    pub dream_job: Option<String>,
    /// Accepted on the wire but not consulted by the current analyzer.
    #[serde(default)]
    #[allow(dead_code)]
    pub experience_level: Option<String>,
}

/// Fixed-shape diagnostic block. The current analyzer reports the same values
/// for every input — resume content is never inspected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub found_skills: Vec<String>,
    pub weak_phrases: Vec<String>,
    pub quantification_needed: bool,
}

/// Rewritten-resume template. Only `summary` varies, via the dream-job phrase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovedResume {
    pub header: String,
    pub summary: String,
    pub experience: Vec<String>,
    pub skills: String,
}

/// Composed response for one analysis request. Built fresh per request, never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub analysis: ResumeAnalysis,
    pub suggestions: Vec<String>,
    pub improved_resume: ImprovedResume,
    pub recommended_opportunities: Vec<Opportunity>,
}
