use std::collections::HashSet;

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::api::QuestionsPage;
use crate::error::{RequestError, ALERT_MESSAGE};
use crate::model::{CategoryMap, CurrentCategory, Question};
use crate::pagination::{page_count, QUESTIONS_PER_PAGE};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadRequest {
    Page(u32),
    Category(u64),
    Search(String),
    Delete(u64),
}

impl LoadRequest {
    /// Page, category and search results all replace the same question list.
    pub fn is_listing(&self) -> bool {
        !matches!(self, LoadRequest::Delete(_))
    }
}

/// A request tagged with the sequence number it was issued under.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub seq: u64,
    pub request: LoadRequest,
}

#[derive(Debug)]
pub enum Outcome {
    Listing(QuestionsPage),
    Deleted,
    Failed(RequestError),
}

#[derive(Debug)]
pub struct LoadEvent {
    pub ticket: Ticket,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded(DateTime<Local>),
    Failed(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    ConfirmDelete(u64),
    Alert(String),
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivePanel {
    Sidebar,
    Main,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Navigation,
    Search,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub base_url: String,
    pub page: u32,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub categories: CategoryMap,
    pub current_category: Option<CurrentCategory>,
    pub listing_status: LoadStatus,
    pub delete_status: LoadStatus,
    pub dialog_stack: Vec<Dialog>,
    pub active_panel: ActivePanel,
    pub input_mode: InputMode,
    pub search_input: String,
    pub last_search: Option<String>,
    pub category_cursor: usize,
    pub question_cursor: usize,
    pub revealed: HashSet<u64>,
    pub should_quit: bool,
    next_seq: u64,
    latest_listing_seq: u64,
}

impl AppState {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            page: 1,
            questions: Vec::new(),
            total_questions: 0,
            categories: CategoryMap::new(),
            current_category: None,
            listing_status: LoadStatus::Idle,
            delete_status: LoadStatus::Idle,
            dialog_stack: Vec::new(),
            active_panel: ActivePanel::Main,
            input_mode: InputMode::Navigation,
            search_input: String::new(),
            last_search: None,
            category_cursor: 0,
            question_cursor: 0,
            revealed: HashSet::new(),
            should_quit: false,
            next_seq: 0,
            latest_listing_seq: 0,
        }
    }

    pub fn page_count(&self) -> u32 {
        page_count(self.total_questions, QUESTIONS_PER_PAGE)
    }

    /// Id of the category the service last reported as active.
    pub fn current_category_id(&self) -> Option<u64> {
        self.current_category
            .as_ref()
            .and_then(|c| c.id(&self.categories))
    }

    pub fn category_name(&self, question: &Question) -> Option<&str> {
        self.categories.resolve(question.category)
    }

    pub fn selected_question(&self) -> Option<&Question> {
        self.questions.get(self.question_cursor)
    }

    /// Issue a ticket for `request`. Returns `None` when a delete is already
    /// in flight.
    pub fn begin(&mut self, request: LoadRequest) -> Option<Ticket> {
        if !request.is_listing() && self.delete_status.is_loading() {
            debug!(?request, "delete already in flight, ignoring");
            return None;
        }

        self.next_seq += 1;
        let seq = self.next_seq;
        if request.is_listing() {
            self.latest_listing_seq = seq;
            self.listing_status = LoadStatus::Loading;
        } else {
            self.delete_status = LoadStatus::Loading;
        }
        debug!(seq, ?request, "request issued");
        Some(Ticket { seq, request })
    }

    /// First load after the view comes up.
    pub fn mount(&mut self) -> Option<Ticket> {
        self.begin(LoadRequest::Page(self.page))
    }

    /// Unfiltered reload of the current page.
    pub fn reload(&mut self) -> Option<Ticket> {
        self.begin(LoadRequest::Page(self.page))
    }

    /// Only a change of page number refetches.
    pub fn select_page(&mut self, page: u32) -> Option<Ticket> {
        if page < 1 || page > self.page_count() || page == self.page {
            return None;
        }
        self.page = page;
        self.begin(LoadRequest::Page(page))
    }

    pub fn next_page(&mut self) -> Option<Ticket> {
        self.select_page(self.page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> Option<Ticket> {
        self.select_page(self.page.saturating_sub(1))
    }

    pub fn select_category(&mut self, category_id: u64) -> Option<Ticket> {
        if let Some(pos) = self.categories.position(category_id) {
            self.category_cursor = pos;
        }
        self.begin(LoadRequest::Category(category_id))
    }

    pub fn submit_search(&mut self, term: &str) -> Option<Ticket> {
        let term = term.trim().to_string();
        self.last_search = Some(term.clone());
        self.begin(LoadRequest::Search(term))
    }

    /// Ask for confirmation before deleting; nothing is sent yet.
    pub fn request_delete(&mut self, question_id: u64) {
        self.push_dialog(Dialog::ConfirmDelete(question_id));
    }

    pub fn confirm_delete(&mut self) -> Option<Ticket> {
        match self.top_dialog() {
            Some(Dialog::ConfirmDelete(id)) => {
                let id = *id;
                self.pop_dialog();
                self.begin(LoadRequest::Delete(id))
            }
            _ => None,
        }
    }

    pub fn cancel_dialog(&mut self) {
        self.pop_dialog();
    }

    /// Fold a finished request into the state. A successful delete returns
    /// the reload ticket for the current page.
    pub fn apply(&mut self, event: LoadEvent) -> Option<Ticket> {
        let LoadEvent { ticket, outcome } = event;

        if ticket.request.is_listing() && ticket.seq != self.latest_listing_seq {
            debug!(
                seq = ticket.seq,
                latest = self.latest_listing_seq,
                "discarding stale response"
            );
            return None;
        }

        match outcome {
            Outcome::Listing(page) => {
                info!(
                    seq = ticket.seq,
                    questions = page.questions.len(),
                    total = page.total_questions,
                    "listing loaded"
                );
                self.replace_listing(page);
                self.listing_status = LoadStatus::Loaded(Local::now());

                // The page emptied out from under us (last question on the
                // last page deleted): step back to the new last page.
                let last = self.page_count().max(1);
                if matches!(ticket.request, LoadRequest::Page(_))
                    && self.questions.is_empty()
                    && self.page > last
                {
                    debug!(from = self.page, to = last, "page past end, stepping back");
                    self.page = last;
                    return self.begin(LoadRequest::Page(last));
                }
                None
            }
            Outcome::Deleted => {
                info!(request = ?ticket.request, "question deleted");
                self.delete_status = LoadStatus::Loaded(Local::now());
                self.begin(LoadRequest::Page(self.page))
            }
            Outcome::Failed(err) => {
                warn!(request = ?ticket.request, error = %err, "request failed");
                let status = LoadStatus::Failed(err.to_string());
                if ticket.request.is_listing() {
                    self.listing_status = status;
                } else {
                    self.delete_status = status;
                }
                self.push_dialog(Dialog::Alert(ALERT_MESSAGE.to_string()));
                None
            }
        }
    }

    fn replace_listing(&mut self, page: QuestionsPage) {
        self.questions = page.questions;
        self.total_questions = page.total_questions;
        if let Some(categories) = page.categories {
            self.categories = categories.into_iter().collect();
        }
        self.current_category = page.current_category;
        self.revealed.clear();
        self.question_cursor = self
            .question_cursor
            .min(self.questions.len().saturating_sub(1));
        self.category_cursor = self
            .category_cursor
            .min(self.categories.len().saturating_sub(1));
    }

    pub fn toggle_answer(&mut self, question_id: u64) {
        if !self.revealed.remove(&question_id) {
            self.revealed.insert(question_id);
        }
    }

    pub fn is_revealed(&self, question_id: u64) -> bool {
        self.revealed.contains(&question_id)
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialog_stack.is_empty()
    }

    pub fn top_dialog(&self) -> Option<&Dialog> {
        self.dialog_stack.last()
    }

    pub fn push_dialog(&mut self, dialog: Dialog) {
        self.dialog_stack.push(dialog);
    }

    pub fn pop_dialog(&mut self) -> Option<Dialog> {
        self.dialog_stack.pop()
    }
}
