//! Resume Analyzer — deterministic, template-based analysis.
//!
//! A pure function of its inputs plus the static catalog: no I/O, no shared
//! mutable state, total over well-formed input. Resume text is validated for
//! presence at the HTTP boundary and never inspected here; apart from the
//! dream-job interpolation, every block of the result is fixed content.

use crate::analysis::matching::{build_match_tokens, recommend_opportunities};
use crate::analysis::templates::{
    FALLBACK_DREAM_JOB, FOUND_SKILLS, RESUME_EXPERIENCE, RESUME_HEADER, RESUME_SKILLS,
    SUGGESTIONS, SUMMARY_TEMPLATE, WEAK_PHRASES,
};
use crate::models::analysis::{AnalysisResult, ImprovedResume, Preferences, ResumeAnalysis};
use crate::models::opportunity::Opportunity;

/// Resolves the effective dream-job phrase: the user's string verbatim when it
/// is non-blank after trimming, else the fixed fallback. Trimming is only the
/// blankness test — padding survives into the summary.
pub fn effective_dream_job(preferences: &Preferences) -> &str {
    match preferences.dream_job.as_deref() {
        Some(job) if !job.trim().is_empty() => job,
        _ => FALLBACK_DREAM_JOB,
    }
}

/// Runs the full analysis: fixed diagnostic and suggestions, the templated
/// resume, and keyword-overlap recommendations against the catalog.
pub fn analyze(
    _resume_text: &str,
    preferences: &Preferences,
    catalog: &[Opportunity],
) -> AnalysisResult {
    let dream_job = effective_dream_job(preferences);

    let analysis = ResumeAnalysis {
        found_skills: FOUND_SKILLS.iter().map(|s| s.to_string()).collect(),
        weak_phrases: WEAK_PHRASES.iter().map(|s| s.to_string()).collect(),
        quantification_needed: true,
    };

    let improved_resume = ImprovedResume {
        header: RESUME_HEADER.to_string(),
        summary: SUMMARY_TEMPLATE.replace("{dream_job}", dream_job),
        experience: RESUME_EXPERIENCE.iter().map(|s| s.to_string()).collect(),
        skills: RESUME_SKILLS.to_string(),
    };

    let tokens = build_match_tokens(dream_job, FOUND_SKILLS);
    let recommended_opportunities = recommend_opportunities(catalog, &tokens);

    AnalysisResult {
        analysis,
        suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        improved_resume,
        recommended_opportunities,
    }
}
