mod error;

pub use error::*;

use crate::{advance, display_text, RevealState, Transition};

/// A question/answer pair and how far it has been revealed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clue {
    question: String,
    answer: String,
    reveal: RevealState,
}

impl Clue {
    /// Creates a clue that is still hidden.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            reveal: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn reveal(&self) -> RevealState {
        self.reveal
    }

    /// The text the clue's cell currently shows.
    pub fn display(&self) -> &str {
        display_text(self.reveal, self)
    }

    // Only the reveal machine calls this. Returns whether the state changed.
    pub(crate) fn set_reveal(&mut self, state: RevealState) -> bool {
        let changed = self.reveal != state;
        self.reveal = state;
        changed
    }
}

/// A titled column of clues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// The grid of categories × clues for one game.
///
/// Columns are in the order the categories were passed to [`Board::new()`].
/// Every column has the same number of clues, so the grid is rectangular.
///
/// A board lives for exactly one game. Starting a new game builds a new
/// board instead of resetting this one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    /// Creates a board, checking that it is rectangular.
    pub fn new(categories: Vec<Category>) -> Result<Self, InconsistentBoard> {
        let expected = categories
            .first()
            .ok_or(InconsistentBoard::NoCategories)?
            .clues
            .len();
        if let Some((column, category)) = categories
            .iter()
            .enumerate()
            .find(|(_, category)| category.clues.len() != expected)
        {
            return Err(InconsistentBoard::MismatchedClueCount {
                column,
                title: category.title.clone(),
                expected,
                found: category.clues.len(),
            });
        }
        Ok(Self { categories })
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.categories.len()
    }

    /// Number of rows, i.e. clues per category.
    pub fn row_count(&self) -> usize {
        self.categories[0].clues.len()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.iter().map(Category::title)
    }

    pub fn category_at(&self, col: usize) -> Option<&Category> {
        self.categories.get(col)
    }

    pub fn clue_at(&self, col: usize, row: usize) -> Option<&Clue> {
        self.categories.get(col)?.clues.get(row)
    }

    /// Clicks the clue at `(col, row)`.
    ///
    /// Returns `None` if there is no such cell. Clicking an answered clue
    /// is not an error; the returned transition just has `changed == false`.
    pub fn advance_reveal(&mut self, col: usize, row: usize) -> Option<Transition<'_>> {
        let clue = self.categories.get_mut(col)?.clues.get_mut(row)?;
        Some(advance(clue))
    }

    /// Iterates over the rows, each yielding one clue per column.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Clue>> + '_ {
        (0..self.row_count()).map(move |row| {
            self.categories
                .iter()
                .map(|category| &category.clues[row])
                .collect()
        })
    }
}
