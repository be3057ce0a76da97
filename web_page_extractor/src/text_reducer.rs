use lazy_static::lazy_static;
use scraper::{Html, Selector};

lazy_static! {
    static ref PARAGRAPHS: Selector = Selector::parse("p").expect("PARAGRAPHS selector to parse");
    static ref CARD_BODY_PARAGRAPHS: Selector =
        Selector::parse("div.card-body p").expect("CARD_BODY_PARAGRAPHS selector to parse");
    static ref BODY: Selector = Selector::parse("body").expect("BODY selector to parse");
}

/// Reduces the CNN page HTML to trimmed, non-empty text lines.
///
/// The page is paragraph text rather than a table, so the reduction walks
/// `<p>` elements first, falls back to paragraphs inside `div.card-body`
/// containers, and as a last resort takes the whole body text.
pub fn reduce_to_lines(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let mut chunks = element_text(&document, &PARAGRAPHS);
    if chunks.is_empty() {
        chunks = element_text(&document, &CARD_BODY_PARAGRAPHS);
    }
    if chunks.is_empty() {
        chunks = element_text(&document, &BODY);
    }

    chunks
        .join("\n")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn element_text(document: &Html, selector: &Selector) -> Vec<String> {
    document
        .select(selector)
        .map(|element| {
            element
                .text()
                .map(str::trim)
                .filter(|fragment| !fragment.is_empty())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .filter(|text| !text.is_empty())
        .collect()
}
