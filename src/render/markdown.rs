//! Release description rendering.

use pulldown_cmark::{Options, Parser, html};

use super::i18n::Language;

/// Converts a release body from Markdown to HTML.
///
/// The output is trusted and inserted into the page as is. Absent or blank
/// bodies yield the language's placeholder phrase.
pub fn render_markdown(body: Option<&str>, language: Language) -> String {
    let Some(text) = body.filter(|text| !text.trim().is_empty()) else {
        return language.messages().no_description.to_string();
    };

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(text, options);
    let mut output = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}
