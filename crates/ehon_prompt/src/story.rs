//! Full story request assembly.

use crate::schema::story_schema;
use ehon_core::GenerationRequest;
use ehon_interface::StructuredRequest;

/// System instruction sent with every story generation call.
///
/// Fixed independent of input: the audience is always young children, the
/// tone is always gentle, the prose is hiragana-heavy Japanese, and the
/// story always resolves happily.
const STORY_SYSTEM_INSTRUCTION: &str = "\
あなたは幼い子どものための絵本作家です。\
やさしく、あたたかい物語をつくってください。\
文章はひらがなを中心に、むずかしい漢字は使わないこと。\
こわい場面があってもかならず最後はしあわせにおわること。\
各ページの image_prompt は、そのページの場面を英語で視覚的に描写すること。\
キャラクターの見た目は character_description に一度だけ、英語で具体的に書くこと。\
出力は指定された JSON スキーマに従うこと。";

/// Build the structured-generation request for a full story.
///
/// The expected response shape is [`story_schema`] with exactly the
/// requested number of pages. If the request carries a reference image it is
/// attached inline so the model can ground the character description in the
/// user's drawing.
pub fn story_request(request: &GenerationRequest) -> StructuredRequest {
    let page_count = request.page_count().as_usize();
    let prompt = format!(
        "つぎのアイデアから、{page_count}ページの絵本のおはなしをつくってください。\n\
         アイデア: {idea}\n\
         テーマ: {theme}\n\
         ページは page_number が 1 から {page_count} まで、順番にならぶこと。",
        idea = request.idea(),
        theme = request.theme().prompt_hint(),
    );

    let mut structured = StructuredRequest::new(
        STORY_SYSTEM_INSTRUCTION,
        prompt,
        story_schema(page_count),
    );
    if let Some(reference) = request.reference_image() {
        structured = structured.with_reference_image(reference.clone());
    }
    structured
}
