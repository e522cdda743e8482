/// Default location of the trivia service.
pub const DEFAULT_BASE_URL: &str = "https://rithm-jeopardy.herokuapp.com/api";

/// Sizes of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// How many categories (columns) a board has.
    pub num_categories: usize,
    /// How many candidate categories to list before picking.
    pub pool_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_categories: 6,
            pool_size: 100,
        }
    }
}
