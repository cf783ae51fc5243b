use std::fmt;

use serde::{Deserialize, Serialize};

/// A single ranked publication returned by the search service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub authors: String,
    pub publication_link: String,
    #[serde(default)]
    pub author_links: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    pub relevance_score: f64,
    /// Page inside the source document, `0` when unknown.
    #[serde(default)]
    pub page_number: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMetadata {
    pub total_results: u64,
    pub results_shown: u64,
    pub search_time_ms: u64,
    pub relevance_threshold: f64,
}

/// One page of search results.
///
/// Pagination only reads `total` and `limit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    #[serde(default)]
    pub query_terms: Vec<String>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_more: bool,
    pub search_metadata: SearchMetadata,
    pub publications: Vec<Publication>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub document: String,
}

/// Categories the classification service can predict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Politics,
    Business,
    Health,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Politics, Category::Business, Category::Health];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Politics => "Politics",
            Category::Business => "Business",
            Category::Health => "Health",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category confidence in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfidenceScores {
    pub politics: f64,
    pub business: f64,
    pub health: f64,
}

impl ConfidenceScores {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Politics => self.politics,
            Category::Business => self.business,
            Category::Health => self.health,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResponse {
    pub status: String,
    pub predicted_category: Category,
    pub confidence_scores: ConfidenceScores,
    pub preprocessed_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publication_tolerates_missing_optional_fields() {
        let raw = r#"{
            "id": "p1",
            "title": "Inflation and Growth",
            "year": 2021,
            "authors": "A. Author",
            "publication_link": "https://example.org/p1",
            "relevance_score": 7.25
        }"#;
        let publication: Publication = serde_json::from_str(raw).expect("decode");
        assert_eq!(publication.page_number, 0);
        assert!(publication.author_links.is_empty());
    }

    #[test]
    fn classification_response_uses_capitalised_category_keys() {
        let raw = r#"{
            "status": "success",
            "predicted_category": "Health",
            "confidence_scores": {"Politics": 0.1, "Business": 0.2, "Health": 0.7},
            "preprocessed_text": "vaccine trial"
        }"#;
        let response: ClassificationResponse = serde_json::from_str(raw).expect("decode");
        assert_eq!(response.predicted_category, Category::Health);
        assert_eq!(response.confidence_scores.get(Category::Business), 0.2);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let raw = r#""Sports""#;
        assert!(serde_json::from_str::<Category>(raw).is_err());
    }
}
