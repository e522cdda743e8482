use serde::{Deserialize, Serialize};

use crate::Clue;

/// What a cell shows before its question has been revealed.
pub const HIDDEN_PLACEHOLDER: &str = "?";

/// How far a single clue has been revealed.
///
/// The only legal progression is `Hidden` → `Question` → `Answer`, and
/// `Answer` is terminal. On the wire this is `null`, `"question"` or
/// `"answer"`; anything else decodes to `Hidden`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum RevealState {
    #[default]
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    /// Decodes a reveal tag. Unknown or missing tags fail closed to `Hidden`.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("question") => RevealState::Question,
            Some("answer") => RevealState::Answer,
            _ => RevealState::Hidden,
        }
    }

    pub fn tag(self) -> Option<&'static str> {
        match self {
            RevealState::Hidden => None,
            RevealState::Question => Some("question"),
            RevealState::Answer => Some("answer"),
        }
    }

    /// The state after one more click.
    pub fn next(self) -> Self {
        match self {
            RevealState::Hidden => RevealState::Question,
            RevealState::Question => RevealState::Answer,
            RevealState::Answer => RevealState::Answer,
        }
    }
}

impl From<Option<String>> for RevealState {
    fn from(tag: Option<String>) -> Self {
        RevealState::from_tag(tag.as_deref())
    }
}

impl From<RevealState> for Option<String> {
    fn from(state: RevealState) -> Self {
        state.tag().map(String::from)
    }
}

/// Presentation hint for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellStyle {
    Unanswered,
    /// Set when the answer is revealed, and kept from then on.
    Answered,
}

impl CellStyle {
    pub fn for_state(state: RevealState) -> Self {
        match state {
            RevealState::Answer => CellStyle::Answered,
            RevealState::Hidden | RevealState::Question => CellStyle::Unanswered,
        }
    }
}

/// The outcome of clicking a clue.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition<'a> {
    pub state: RevealState,
    /// The text the cell should show from now on.
    pub display: &'a str,
    pub style: CellStyle,
    /// `false` only for clicks on an already answered clue.
    pub changed: bool,
}

/// The text a clue shows in the given state.
pub fn display_text(state: RevealState, clue: &Clue) -> &str {
    match state {
        RevealState::Hidden => HIDDEN_PLACEHOLDER,
        RevealState::Question => clue.question(),
        RevealState::Answer => clue.answer(),
    }
}

/// Calculates what clicking the clue would do, without changing it.
pub fn next_transition(clue: &Clue) -> Transition<'_> {
    let current = clue.reveal();
    let state = current.next();
    Transition {
        state,
        display: display_text(state, clue),
        style: CellStyle::for_state(state),
        changed: state != current,
    }
}

/// Clicks the clue: advances its reveal state and returns what to show.
pub fn advance(clue: &mut Clue) -> Transition<'_> {
    let state = clue.reveal().next();
    let changed = clue.set_reveal(state);
    Transition {
        state,
        display: display_text(state, clue),
        style: CellStyle::for_state(state),
        changed,
    }
}
