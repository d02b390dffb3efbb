//! Opportunity catalog — a fixed in-memory table seeded once at process start.
//!
//! There is deliberately no create/update/delete path: the catalog is read-only
//! for the process lifetime, so handlers can share it without coordination.

use std::sync::Arc;

use crate::models::opportunity::{Opportunity, OpportunityType};

/// Read-only catalog of opportunities. Cloning is cheap (shared allocation),
/// so it rides along in `AppState` across handler invocations.
#[derive(Debug, Clone)]
pub struct OpportunityStore {
    records: Arc<[Opportunity]>,
}

impl OpportunityStore {
    /// Builds the fixed six-record catalog. Insertion order is part of the
    /// contract: listing and recommendation both preserve it.
    pub fn seed() -> Self {
        let records = vec![
            record(
                1,
                OpportunityType::Competition,
                "Google Code Jam 2025",
                &["coding", "software", "engineering"],
                "http://example.com/codejam",
                "Global online coding competition. Solve algorithmic challenges.",
            ),
            record(
                2,
                OpportunityType::Internship,
                "Product Manager Intern",
                &["product management", "business", "strategy"],
                "http://example.com/pm-intern",
                "Help define product roadmaps and strategy.",
            ),
            record(
                3,
                OpportunityType::Webinar,
                "Intro to AI/ML",
                &["ai", "machine learning", "data science"],
                "http://example.com/ai-webinar",
                "Learn the fundamentals of Artificial Intelligence from industry experts.",
            ),
            record(
                4,
                OpportunityType::CommunityService,
                "Local Park Cleanup",
                &["environment", "community", "volunteering"],
                "http://example.com/park-cleanup",
                "Join us to help clean and preserve our local green spaces.",
            ),
            record(
                5,
                OpportunityType::Internship,
                "Software Engineer Intern",
                &["coding", "software", "engineering", "javascript"],
                "http://example.com/swe-intern",
                "Work on a real-world software project using modern web technologies.",
            ),
            record(
                6,
                OpportunityType::OnlineCourse,
                "Advanced JavaScript",
                &["javascript", "coding", "web development"],
                "http://example.com/js-course",
                "Deep dive into asynchronous JavaScript, closures, and more.",
            ),
        ];

        Self {
            records: records.into(),
        }
    }

    /// Full catalog in insertion order. Unfiltered on every call.
    pub fn list(&self) -> &[Opportunity] {
        &self.records
    }
}

fn record(
    id: u32,
    kind: OpportunityType,
    title: &str,
    keywords: &[&str],
    url: &str,
    description: &str,
) -> Opportunity {
    Opportunity {
        id,
        kind,
        title: title.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        url: url.to_string(),
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_six_records_in_id_order() {
        let store = OpportunityStore::seed();
        let ids: Vec<u32> = store.list().iter().map(|op| op.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_first_record_is_the_competition() {
        let store = OpportunityStore::seed();
        let first = &store.list()[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.kind, OpportunityType::Competition);
        assert_eq!(first.title, "Google Code Jam 2025");
    }

    #[test]
    fn test_repeated_listing_returns_identical_records() {
        let store = OpportunityStore::seed();
        assert_eq!(store.list(), store.list());
        assert_eq!(store.list().len(), 6);
    }

    #[test]
    fn test_seeded_keywords_are_lowercase() {
        // The matching rule lowercases tokens once; seeded tags must already
        // be lowercase for the equality test to behave as a set intersection.
        let store = OpportunityStore::seed();
        for op in store.list() {
            for kw in &op.keywords {
                assert_eq!(
                    kw,
                    &kw.to_lowercase(),
                    "keyword {kw:?} on opportunity {} is not lowercase",
                    op.id
                );
            }
        }
    }

    #[test]
    fn test_clones_share_the_same_catalog() {
        let store = OpportunityStore::seed();
        let clone = store.clone();
        assert_eq!(store.list(), clone.list());
    }
}
