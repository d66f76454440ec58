//! Typed decoding of structured-generation responses.
//!
//! The response schema is pinned server-side, but models still occasionally
//! wrap JSON in markdown fences or leading prose. Extraction strips that
//! noise before the typed parse, and every shape failure becomes a
//! [`DecodeError`] so callers can distinguish contract mismatches from
//! service failures. Raw payloads are logged for diagnosis, never surfaced
//! to the end user.

use ehon_core::{CoverRegenResult, DraftPage, PageRegenResult, StoryDraft};
use ehon_error::{DecodeError, DecodeErrorKind, EhonResult};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

/// Extract JSON from a response that may contain markdown or extra text.
///
/// Strategies, in order: a ```json code block, then the first balanced
/// `{...}` object.
///
/// # Errors
///
/// Returns a [`DecodeError`] with kind `NoJson` if neither strategy finds
/// a candidate.
///
/// # Examples
///
/// ```
/// use ehon_pipeline::extract_json;
///
/// let response = "Here you go:\n```json\n{\"title\": \"そら\"}\n```";
/// let json = extract_json(response).unwrap();
/// assert!(json.contains("そら"));
/// ```
pub fn extract_json(response: &str) -> EhonResult<&str> {
    if let Some(json) = extract_from_code_block(response) {
        return Ok(json);
    }
    if let Some(json) = extract_balanced(response) {
        return Ok(json);
    }
    error!(response_len = response.len(), "No JSON found in model response");
    Err(DecodeError::new(DecodeErrorKind::NoJson {
        response_len: response.len(),
    })
    .into())
}

fn extract_from_code_block(response: &str) -> Option<&str> {
    let start = response.find("```json")? + "```json".len();
    let rest = &response[start..];
    let end = rest.find("```")?;
    Some(rest[..end].trim())
}

fn extract_balanced(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, c) in response[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&response[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Extract and parse a response into the named shape.
fn decode_shape<T: DeserializeOwned>(response: &str, shape: &'static str) -> EhonResult<T> {
    let json = extract_json(response)?;
    serde_json::from_str(json).map_err(|e| {
        error!(shape, raw = %json, "Response JSON did not match expected shape");
        DecodeError::new(DecodeErrorKind::SchemaMismatch {
            shape,
            message: e.to_string(),
        })
        .into()
    })
}

/// Decode a full-generation response into a [`StoryDraft`] with exactly
/// `expected_pages` pages.
///
/// Pages are reordered by their declared `page_number` and re-validated to
/// be exactly 1..=N; a model that drops, duplicates, or renumbers pages
/// fails here rather than deeper in the pipeline.
///
/// # Errors
///
/// Returns a [`DecodeError`] on missing JSON, shape mismatch, or a page
/// count that differs from the request.
pub fn decode_story_draft(response: &str, expected_pages: usize) -> EhonResult<StoryDraft> {
    let draft: StoryDraft = decode_shape(response, "StoryDraft")?;

    if draft.pages().len() != expected_pages {
        return Err(DecodeError::new(DecodeErrorKind::PageCountMismatch {
            actual: draft.pages().len(),
            expected: expected_pages,
        })
        .into());
    }

    let mut pages: Vec<DraftPage> = draft.pages().clone();
    pages.sort_by_key(|p| *p.page_number());
    for (index, page) in pages.iter().enumerate() {
        let expected = index as u32 + 1;
        if *page.page_number() != expected {
            return Err(DecodeError::new(DecodeErrorKind::SchemaMismatch {
                shape: "StoryDraft",
                message: format!(
                    "page_number {} at position {} (expected {})",
                    page.page_number(),
                    index,
                    expected
                ),
            })
            .into());
        }
    }

    debug!(pages = pages.len(), title = %draft.title(), "Decoded story draft");
    Ok(StoryDraft::new(
        draft.title().clone(),
        draft.character_description().clone(),
        pages,
        draft.afterword().clone(),
    ))
}

/// Decode a page regeneration response.
pub fn decode_page_regen(response: &str) -> EhonResult<PageRegenResult> {
    decode_shape(response, "PageRegenResult")
}

/// Decode a cover regeneration response.
pub fn decode_cover_regen(response: &str) -> EhonResult<CoverRegenResult> {
    decode_shape(response, "CoverRegenResult")
}
