use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;
use jeopardy::{Board, CategoryDetails, CategoryId, CategoryRef, CellStyle, RawClue};

use crate::{DataFetchError, Presenter, StartError, TriviaSource};

/// An in-memory trivia service.
pub struct FakeSource {
    pool: Vec<CategoryRef>,
    details: HashMap<CategoryId, CategoryDetails>,
    failing: BTreeSet<CategoryId>,
    fail_pool: bool,
    // Category requests beyond this many fail.
    fail_after: Option<usize>,
    requests: Mutex<Vec<CategoryId>>,
}

impl FakeSource {
    /// Categories with ids `1..=num_categories`, each with the same number of clues.
    pub fn new(num_categories: usize, clues_per_category: usize) -> Self {
        Self::with_clue_counts(&vec![clues_per_category; num_categories])
    }

    /// One category per entry, with ids starting at 1.
    pub fn with_clue_counts(clue_counts: &[usize]) -> Self {
        let mut pool = Vec::new();
        let mut details = HashMap::new();
        for (idx, &num_clues) in clue_counts.iter().enumerate() {
            let id = CategoryId(idx as u64 + 1);
            pool.push(CategoryRef {
                id,
                title: format!("Category {id}"),
                clues_count: num_clues,
            });
            let clues = (0..num_clues)
                .map(|i| RawClue {
                    question: format!("Question {id}.{i}"),
                    answer: format!("Answer {id}.{i}"),
                })
                .collect();
            details.insert(
                id,
                CategoryDetails {
                    title: Some(format!("Category {id}")),
                    clues: Some(clues),
                },
            );
        }
        Self {
            pool,
            details,
            failing: BTreeSet::new(),
            fail_pool: false,
            fail_after: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_details(mut self, id: CategoryId, details: CategoryDetails) -> Self {
        self.details.insert(id, details);
        self
    }

    pub fn failing_category(mut self, id: CategoryId) -> Self {
        self.failing.insert(id);
        self
    }

    pub fn failing_pool(mut self) -> Self {
        self.fail_pool = true;
        self
    }

    pub fn failing_after(mut self, num_requests: usize) -> Self {
        self.fail_after = Some(num_requests);
        self
    }

    pub fn category_requests(&self) -> Vec<CategoryId> {
        self.requests.lock().unwrap().clone()
    }
}

fn unavailable(reason: &str) -> DataFetchError {
    DataFetchError::Unavailable {
        reason: String::from(reason),
    }
}

#[async_trait]
impl TriviaSource for FakeSource {
    async fn list_categories(&self, count: usize) -> Result<Vec<CategoryRef>, DataFetchError> {
        if self.fail_pool {
            return Err(unavailable("pool is down"));
        }
        Ok(self.pool.iter().take(count).cloned().collect())
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryDetails, DataFetchError> {
        let num_requests = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(id);
            requests.len()
        };
        if self.fail_after.is_some_and(|limit| num_requests > limit) {
            return Err(unavailable("too many requests"));
        }
        if self.failing.contains(&id) {
            return Err(unavailable("category is down"));
        }
        self.details
            .get(&id)
            .cloned()
            .ok_or_else(|| unavailable("unknown category"))
    }
}

/// What a [`RecordingPresenter`] was asked to show, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shown {
    Loading,
    LoadingHidden,
    Board { columns: usize, rows: usize },
    Cell {
        col: usize,
        row: usize,
        text: String,
        style: CellStyle,
    },
    Error(String),
}

#[derive(Default)]
pub struct RecordingPresenter {
    pub shown: Vec<Shown>,
}

impl Presenter for RecordingPresenter {
    fn show_loading(&mut self) {
        self.shown.push(Shown::Loading);
    }

    fn hide_loading(&mut self) {
        self.shown.push(Shown::LoadingHidden);
    }

    fn render_board(&mut self, board: &Board) {
        self.shown.push(Shown::Board {
            columns: board.columns(),
            rows: board.row_count(),
        });
    }

    fn render_cell_update(&mut self, col: usize, row: usize, text: &str, style: CellStyle) {
        self.shown.push(Shown::Cell {
            col,
            row,
            text: String::from(text),
            style,
        });
    }

    fn show_error(&mut self, err: &StartError) {
        self.shown.push(Shown::Error(err.to_string()));
    }
}
