//! Keyword-overlap matching between the user's target role and the catalog.
//!
//! The rule is a case-insensitive set intersection: an opportunity qualifies
//! when any of its tags equals any match token. Whole-tag equality only — a
//! multi-word tag like "product management" never matches the single token
//! "product". Matches keep catalog order and are capped, not ranked.

use crate::models::opportunity::Opportunity;

/// Upper bound on recommendations returned per analysis.
pub const MAX_RECOMMENDATIONS: usize = 2;

/// Builds the lowercase match-token set: whitespace-split words of the
/// effective dream job, followed by the analyzer's static found skills.
pub fn build_match_tokens(dream_job: &str, found_skills: &[&str]) -> Vec<String> {
    let mut tokens: Vec<String> = dream_job
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect();
    tokens.extend(found_skills.iter().map(|skill| skill.to_lowercase()));
    tokens
}

/// Selects at most `MAX_RECOMMENDATIONS` opportunities whose tags overlap the
/// token set, preserving catalog order. No overlap yields an empty list.
pub fn recommend_opportunities(catalog: &[Opportunity], tokens: &[String]) -> Vec<Opportunity> {
    catalog
        .iter()
        .filter(|op| {
            op.keywords
                .iter()
                .any(|kw| tokens.iter().any(|token| *token == kw.to_lowercase()))
        })
        .take(MAX_RECOMMENDATIONS)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::opportunity::OpportunityType;

    fn make_opportunity(id: u32, keywords: &[&str]) -> Opportunity {
        Opportunity {
            id,
            kind: OpportunityType::Internship,
            title: format!("Opportunity {id}"),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            url: "http://example.com".to_string(),
            description: "test".to_string(),
        }
    }

    #[test]
    fn test_tokens_split_on_whitespace_and_lowercase() {
        let tokens = build_match_tokens("Software   Engineer", &["javascript"]);
        assert_eq!(tokens, vec!["software", "engineer", "javascript"]);
    }

    #[test]
    fn test_tokens_include_found_skills_after_job_words() {
        let tokens = build_match_tokens("Data Analyst", &["javascript", "react"]);
        assert_eq!(tokens, vec!["data", "analyst", "javascript", "react"]);
    }

    #[test]
    fn test_tag_match_is_case_insensitive() {
        let catalog = vec![make_opportunity(1, &["Coding"])];
        let tokens = build_match_tokens("coding bootcamp", &[]);
        let picked = recommend_opportunities(&catalog, &tokens);
        assert_eq!(picked.len(), 1);
    }

    #[test]
    fn test_multi_word_tag_does_not_substring_match() {
        // "product management" is one tag; the token "product" must not pick it up.
        let catalog = vec![make_opportunity(1, &["product management"])];
        let tokens = build_match_tokens("Product Manager", &[]);
        assert!(recommend_opportunities(&catalog, &tokens).is_empty());
    }

    #[test]
    fn test_no_overlap_yields_empty_list() {
        let catalog = vec![
            make_opportunity(1, &["environment"]),
            make_opportunity(2, &["volunteering"]),
        ];
        let tokens = build_match_tokens("Quantum Chemist", &[]);
        assert!(recommend_opportunities(&catalog, &tokens).is_empty());
    }

    #[test]
    fn test_matches_capped_at_two_in_catalog_order() {
        let catalog = vec![
            make_opportunity(1, &["coding"]),
            make_opportunity(2, &["business"]),
            make_opportunity(3, &["coding"]),
            make_opportunity(4, &["coding"]),
        ];
        let tokens = build_match_tokens("coding", &[]);
        let picked = recommend_opportunities(&catalog, &tokens);
        let ids: Vec<u32> = picked.iter().map(|op| op.id).collect();
        assert_eq!(ids, vec![1, 3], "cap at {MAX_RECOMMENDATIONS}, catalog order");
    }

    #[test]
    fn test_empty_keyword_list_never_matches() {
        let catalog = vec![make_opportunity(1, &[])];
        let tokens = build_match_tokens("anything at all", &["javascript"]);
        assert!(recommend_opportunities(&catalog, &tokens).is_empty());
    }
}
