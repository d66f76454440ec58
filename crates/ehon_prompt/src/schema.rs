//! JSON response schemas for structured-generation calls.
//!
//! These are sent verbatim as the endpoint's `responseSchema`, and they
//! mirror the decode targets in `ehon_core` (`StoryDraft`,
//! `PageRegenResult`, `CoverRegenResult`). Keep the two in sync.

use serde_json::{Value, json};

/// Schema for the full story draft: title, character description, one entry
/// per page, and an afterword.
pub fn story_schema(page_count: usize) -> Value {
    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string" },
            "character_description": { "type": "string" },
            "pages": {
                "type": "array",
                "minItems": page_count,
                "maxItems": page_count,
                "items": {
                    "type": "object",
                    "properties": {
                        "page_number": { "type": "integer" },
                        "text": { "type": "string" },
                        "image_prompt": { "type": "string" }
                    },
                    "required": ["page_number", "text", "image_prompt"]
                }
            },
            "afterword": { "type": "string" }
        },
        "required": ["title", "character_description", "pages", "afterword"]
    })
}

/// Schema for a page regeneration response.
pub fn page_regen_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "new_text": { "type": "string" },
            "new_image_prompt": { "type": "string" }
        },
        "required": ["new_text", "new_image_prompt"]
    })
}

/// Schema for a cover regeneration response.
pub fn cover_regen_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "new_title": { "type": "string" },
            "new_image_prompt": { "type": "string" }
        },
        "required": ["new_title", "new_image_prompt"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_schema_pins_the_page_count() {
        let schema = story_schema(6);
        assert_eq!(schema["properties"]["pages"]["minItems"], 6);
        assert_eq!(schema["properties"]["pages"]["maxItems"], 6);
    }

    #[test]
    fn regen_schemas_require_both_fields() {
        let page = page_regen_schema();
        assert_eq!(page["required"].as_array().unwrap().len(), 2);
        let cover = cover_regen_schema();
        assert_eq!(cover["required"].as_array().unwrap().len(), 2);
    }
}
