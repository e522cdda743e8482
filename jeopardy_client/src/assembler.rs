use futures::future::try_join_all;
use jeopardy::{Category, CategoryId, Clue};
use tracing::trace;

use crate::{DataFetchError, TriviaSource};

/// Fetches one category and turns it into a [`Category`] with all clues hidden.
///
/// Fails if the source fails, or if the category has no title or no clues.
/// There are no retries.
pub async fn assemble<S: TriviaSource + ?Sized>(
    source: &S,
    id: CategoryId,
) -> Result<Category, DataFetchError> {
    let details = source.category(id).await?;
    let title = details
        .title
        .ok_or_else(|| DataFetchError::malformed(Some(id), "missing title"))?;
    let raw_clues = details
        .clues
        .ok_or_else(|| DataFetchError::malformed(Some(id), "missing clues"))?;
    if raw_clues.is_empty() {
        return Err(DataFetchError::malformed(Some(id), "no clues"));
    }

    let clues: Vec<Clue> = raw_clues
        .into_iter()
        .map(|raw| Clue::new(clean_text(&raw.question), clean_text(&raw.answer)))
        .collect();
    trace!(category_id = %id, title = %title, num_clues = clues.len(), "Assembled category");
    Ok(Category::new(clean_text(&title), clues))
}

/// Assembles all categories concurrently, keeping the order of `ids`.
///
/// The first failure is returned and the remaining fetches are dropped, so
/// there is never a partial result.
pub async fn assemble_all<S: TriviaSource + ?Sized>(
    source: &S,
    ids: &[CategoryId],
) -> Result<Vec<Category>, DataFetchError> {
    try_join_all(ids.iter().map(|&id| assemble(source, id))).await
}

/// Strips markup from service text for display as plain text.
///
/// Answers often carry HTML like `<i>Hamlet</i>` or entities like `&amp;`,
/// and sometimes backslash-escaped quotes. A `<` only opens a tag when a
/// letter or `/` follows and a `>` closes it; otherwise it is kept.
pub fn clean_text(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('<') {
        stripped.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let opens_tag = after.starts_with(|c: char| c.is_ascii_alphabetic() || c == '/');
        match after.find('>') {
            Some(end) if opens_tag => rest = &after[end + 1..],
            _ => {
                stripped.push('<');
                rest = after;
            }
        }
    }
    stripped.push_str(rest);
    let decoded = stripped
        .replace("\\'", "'")
        .replace("\\\"", "\"")
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}
