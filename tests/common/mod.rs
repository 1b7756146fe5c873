#![allow(dead_code)]

use std::fs;
use std::sync::Mutex;

use triviatui::api::QuestionsPage;
use triviatui::client::TriviaBackend;
use triviatui::error::RequestError;
use triviatui::model::{Category, Question};

pub fn fixture_page(name: &str) -> QuestionsPage {
    let content = fs::read_to_string(format!("fixtures/{}", name)).expect("Cannot read fixture");
    serde_json::from_str(&content).expect("Cannot decode fixture")
}

pub fn question(id: u64, category: u64) -> Question {
    Question {
        id,
        question: format!("Question {}?", id),
        answer: format!("Answer {}", id),
        category,
        difficulty: 1,
    }
}

pub fn page_of(ids: std::ops::Range<u64>, total: u64) -> QuestionsPage {
    QuestionsPage {
        questions: ids.map(|id| question(id, 1)).collect(),
        total_questions: total,
        categories: Some(vec![Category {
            id: 1,
            name: "Science".to_string(),
        }]),
        current_category: None,
        success: true,
    }
}

/// In-memory service that records every call it receives.
pub struct FakeBackend {
    pub listing: QuestionsPage,
    pub fail: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new(listing: QuestionsPage) -> Self {
        Self {
            listing,
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(page_of(0..0, 0))
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), RequestError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            Err(RequestError::Status(500))
        } else {
            Ok(())
        }
    }
}

impl TriviaBackend for FakeBackend {
    fn questions(&self, page: u32) -> Result<QuestionsPage, RequestError> {
        self.record(format!("GET /questions?page={}", page))?;
        Ok(self.listing.clone())
    }

    fn questions_by_category(&self, category_id: u64) -> Result<QuestionsPage, RequestError> {
        self.record(format!("GET /categories/{}/questions", category_id))?;
        Ok(self.listing.clone())
    }

    fn search(&self, term: &str) -> Result<QuestionsPage, RequestError> {
        self.record(format!("POST /questions/search {}", term))?;
        Ok(self.listing.clone())
    }

    fn delete_question(&self, id: u64) -> Result<(), RequestError> {
        self.record(format!("DELETE /questions/{}", id))
    }

    fn categories(&self) -> Result<Vec<Category>, RequestError> {
        self.record("GET /categories".to_string())?;
        Ok(self.listing.categories.clone().unwrap_or_default())
    }
}
