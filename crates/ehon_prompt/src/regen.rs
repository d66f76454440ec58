//! Targeted regeneration request assembly.

use crate::schema::{cover_regen_schema, page_regen_schema};
use ehon_core::RegenerationInstruction;
use ehon_interface::StructuredRequest;

const REGEN_SYSTEM_INSTRUCTION: &str = "\
あなたは幼い子どものための絵本作家です。\
指示にしたがって、絵本の一部だけを書きなおしてください。\
キャラクターの見た目 (character description) と絵のスタイルは\
どんな指示があってもぜったいに変えないこと。\
出力は指定された JSON スキーマに従うこと。";

/// Build the structured request for regenerating one page.
///
/// The response shape is `{new_text, new_image_prompt}`. The user's
/// instruction is passed through unescaped; the character description and
/// art style ride along as read-only context the model must preserve.
pub fn page_regen_request(instruction: &RegenerationInstruction) -> StructuredRequest {
    let prompt = format!(
        "絵本の1ページを書きなおしてください。\n\
         これまでのおはなし:\n{preceding}\n\n\
         いまのページの文:\n{current}\n\n\
         ユーザーの指示: {request}\n\n\
         参考情報 (変えないこと):\n\
         キャラクター: {character}\n\
         スタイル: {style}\n\n\
         new_text にはあたらしいページの文を、\
         new_image_prompt にはその場面の英語の視覚描写を書いてください。",
        preceding = instruction.preceding_text(),
        current = instruction.current_text(),
        request = instruction.instruction(),
        character = instruction.character_description(),
        style = instruction.art_style().prompt_token(),
    );
    StructuredRequest::new(REGEN_SYSTEM_INSTRUCTION, prompt, page_regen_schema())
}

/// Build the structured request for regenerating the cover.
///
/// The response shape is `{new_title, new_image_prompt}`. Only the title and
/// cover guidance may change; character description and style are context.
pub fn cover_regen_request(instruction: &RegenerationInstruction) -> StructuredRequest {
    let prompt = format!(
        "絵本の表紙をつくりなおしてください。\n\
         いまのタイトル: {current}\n\
         ユーザーの指示: {request}\n\n\
         参考情報 (変えないこと):\n\
         キャラクター: {character}\n\
         スタイル: {style}\n\n\
         new_title にはあたらしいタイトルを、\
         new_image_prompt には表紙の英語の視覚描写を書いてください。",
        current = instruction.current_text(),
        request = instruction.instruction(),
        character = instruction.character_description(),
        style = instruction.art_style().prompt_token(),
    );
    StructuredRequest::new(REGEN_SYSTEM_INSTRUCTION, prompt, cover_regen_schema())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ehon_core::ArtStyle;

    #[test]
    fn page_request_carries_continuity_context() {
        let instruction = RegenerationInstruction::for_page(
            2,
            "make the character smile more",
            "a small white cat",
            ArtStyle::Watercolor,
            "current page text",
            "page one text",
        );
        let structured = page_regen_request(&instruction);
        assert!(structured.prompt.contains("page one text"));
        assert!(structured.prompt.contains("current page text"));
        assert!(structured.prompt.contains("make the character smile more"));
        assert!(structured.prompt.contains("a small white cat"));
        assert_eq!(structured.response_schema["required"][0], "new_text");
    }

    #[test]
    fn cover_request_uses_cover_schema() {
        let instruction = RegenerationInstruction::for_cover(
            "make it about the journey",
            "a small white cat",
            ArtStyle::Watercolor,
            "そらのたび",
        );
        let structured = cover_regen_request(&instruction);
        assert!(structured.prompt.contains("そらのたび"));
        assert_eq!(structured.response_schema["required"][0], "new_title");
    }
}
