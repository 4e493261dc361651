//! Note endpoints.
//!
//! - `POST   /notes`         : append, 201 with the full list
//! - `GET    /notes`         : full list
//! - `DELETE /notes/:index`  : positional removal, later notes shift down
//! - `GET    /`              : HTML view of the current notes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};

use notekeep_core::error::NoteError;

use crate::app_state::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CreateNote {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NotesBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub notes: Vec<String>,
}

pub async fn create_note(
    State(state): State<AppState>,
    Json(req): Json<CreateNote>,
) -> Result<impl IntoResponse, ApiError> {
    let notes = state.store().create(req.content)?;
    Ok((
        StatusCode::CREATED,
        Json(NotesBody { message: Some("Note added"), notes }),
    ))
}

pub async fn list_notes(State(state): State<AppState>) -> Json<NotesBody> {
    Json(NotesBody { message: None, notes: state.store().list() })
}

/// The index arrives as a raw segment: anything but plain ASCII digits
/// (signs included) addresses no note, same as an out-of-range position.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(index): Path<String>,
) -> Result<Json<NotesBody>, ApiError> {
    let index: i64 = Some(index.as_str())
        .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| NoteError::NotFound("Note not found".into()))?;
    let notes = state.store().delete(index)?;
    Ok(Json(NotesBody { message: Some("Note deleted"), notes }))
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.store().list()))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const INDEX_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Notes</title>
</head>
<body>
<h1>Notes</h1>
<form id="add">
  <input id="content" name="content" placeholder="New note" autocomplete="off">
  <button type="submit">Add</button>
</form>
<ul id="notes">
"#;

const INDEX_TAIL: &str = r#"</ul>
<script>
document.getElementById("add").addEventListener("submit", async (e) => {
  e.preventDefault();
  const content = document.getElementById("content").value;
  await fetch("/notes", {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify({ content }),
  });
  location.reload();
});
document.querySelectorAll("button[data-index]").forEach((b) => {
  b.addEventListener("click", async () => {
    await fetch("/notes/" + b.dataset.index, { method: "DELETE" });
    location.reload();
  });
});
</script>
</body>
</html>
"#;

fn render_index(notes: &[String]) -> String {
    let mut out = String::from(INDEX_HEAD);
    for (i, note) in notes.iter().enumerate() {
        out.push_str(&format!(
            "  <li>{} <button data-index=\"{i}\">Delete</button></li>\n",
            escape_html(note)
        ));
    }
    out.push_str(INDEX_TAIL);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_escapes_note_text() {
        let page = render_index(&["<b>hi</b> & \"bye\"".to_string()]);
        assert!(page.contains("&lt;b&gt;hi&lt;/b&gt; &amp; &quot;bye&quot;"));
        assert!(!page.contains("<b>hi</b>"));
    }

    #[test]
    fn index_numbers_notes_by_position() {
        let page = render_index(&["a".to_string(), "b".to_string()]);
        assert!(page.contains("a <button data-index=\"0\">"));
        assert!(page.contains("b <button data-index=\"1\">"));
    }
}
