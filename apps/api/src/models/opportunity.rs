use serde::{Deserialize, Serialize};

/// Fixed category set for opportunities. The two-word variants serialize with
/// spaces to match the catalog's wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpportunityType {
    Competition,
    Internship,
    Webinar,
    #[serde(rename = "Online Course")]
    OnlineCourse,
    #[serde(rename = "Community Service")]
    CommunityService,
}

/// A displayable record for an external program (internship, competition, …)
/// the user might pursue. Seeded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: OpportunityType,
    pub title: String,
    /// Lowercase topic tags. Always present, possibly empty; order and
    /// duplicates carry no meaning for matching.
    pub keywords: Vec<String>,
    pub url: String,
    pub description: String,
}
