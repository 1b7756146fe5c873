use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::{CategoriesResponse, DeleteResponse, QuestionsPage, SearchRequest};
use crate::error::RequestError;
use crate::model::Category;

/// The trivia service as seen by the view.
pub trait TriviaBackend: Send + Sync {
    /// `GET /questions?page={page}`
    fn questions(&self, page: u32) -> Result<QuestionsPage, RequestError>;

    /// `GET /categories/{id}/questions`
    fn questions_by_category(&self, category_id: u64) -> Result<QuestionsPage, RequestError>;

    /// `POST /questions/search`
    fn search(&self, term: &str) -> Result<QuestionsPage, RequestError>;

    /// `DELETE /questions/{id}`
    fn delete_question(&self, id: u64) -> Result<(), RequestError>;

    /// `GET /categories`
    fn categories(&self) -> Result<Vec<Category>, RequestError>;
}

pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, RequestError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, RequestError> {
    let status = response.status();
    if !status.is_success() {
        return Err(RequestError::Status(status.as_u16()));
    }
    let body = response.text()?;
    Ok(serde_json::from_str(&body)?)
}

fn accept_page(page: QuestionsPage) -> Result<QuestionsPage, RequestError> {
    if page.success {
        Ok(page)
    } else {
        Err(RequestError::Rejected)
    }
}

impl TriviaBackend for HttpBackend {
    fn questions(&self, page: u32) -> Result<QuestionsPage, RequestError> {
        let url = self.url("/questions");
        debug!(%url, page, "GET questions");
        let response = self
            .client
            .get(&url)
            .query(&[("page", page)])
            .send()?;
        accept_page(decode(response)?)
    }

    fn questions_by_category(&self, category_id: u64) -> Result<QuestionsPage, RequestError> {
        let url = self.url(&format!("/categories/{}/questions", category_id));
        debug!(%url, "GET questions by category");
        let response = self.client.get(&url).send()?;
        accept_page(decode(response)?)
    }

    fn search(&self, term: &str) -> Result<QuestionsPage, RequestError> {
        let url = self.url("/questions/search");
        debug!(%url, term, "POST search");
        let response = self
            .client
            .post(&url)
            .json(&SearchRequest { search_term: term })
            .send()?;
        accept_page(decode(response)?)
    }

    fn delete_question(&self, id: u64) -> Result<(), RequestError> {
        let url = self.url(&format!("/questions/{}", id));
        debug!(%url, "DELETE question");
        let response = self.client.delete(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status(status.as_u16()));
        }
        // Body is optional here; only an explicit `success: false` counts.
        let body = response.text()?;
        if body.trim().is_empty() {
            return Ok(());
        }
        match serde_json::from_str::<DeleteResponse>(&body) {
            Ok(DeleteResponse { success: false }) => Err(RequestError::Rejected),
            _ => Ok(()),
        }
    }

    fn categories(&self) -> Result<Vec<Category>, RequestError> {
        let url = self.url("/categories");
        debug!(%url, "GET categories");
        let response = self.client.get(&url).send()?;
        let body: CategoriesResponse = decode(response)?;
        if body.success {
            Ok(body.categories)
        } else {
            Err(RequestError::Rejected)
        }
    }
}
