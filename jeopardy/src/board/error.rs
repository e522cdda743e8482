/// The error type for [`Board::new()`](crate::Board::new).
#[derive(Debug, PartialEq, Eq)]
pub enum InconsistentBoard {
    NoCategories,
    MismatchedClueCount {
        column: usize,
        title: String,
        expected: usize,
        found: usize,
    },
}

impl std::error::Error for InconsistentBoard {}

impl std::fmt::Display for InconsistentBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InconsistentBoard::NoCategories => write!(f, "A board needs at least one category"),
            InconsistentBoard::MismatchedClueCount {
                column,
                title,
                expected,
                found,
            } => write!(
                f,
                "Category '{}' in column {} has {} clues, but the board has {} rows",
                title, column, found, expected
            ),
        }
    }
}
