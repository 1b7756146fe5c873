//! Wire shapes of the trivia service endpoints.

use serde::{Deserialize, Serialize};

use crate::model::{Category, CurrentCategory, Question};

/// Body of `GET /questions`, `GET /categories/{id}/questions` and
/// `POST /questions/search`. Only the unfiltered listing carries categories.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuestionsPage {
    #[serde(default)]
    pub questions: Vec<Question>,
    pub total_questions: u64,
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
    #[serde(default)]
    pub current_category: Option<CurrentCategory>,
    #[serde(default = "default_success")]
    pub success: bool,
}

/// Body of `GET /categories`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
    #[serde(default = "default_success")]
    pub success: bool,
}

/// Body of `DELETE /questions/{id}`. Only `success` is consulted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeleteResponse {
    #[serde(default = "default_success")]
    pub success: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub search_term: &'a str,
}

fn default_success() -> bool {
    true
}
