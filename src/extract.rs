use scraper::{Html, Selector};
use thiserror::Error;

use crate::types::UNKNOWN;

/// Spotify-style descriptions read "City, Country · 1,234,567 monthly
/// listeners"; the listener count sits after the last middle dot.
const FIELD_SEPARATOR: char = '\u{00B7}';
const LISTENERS_MARKER: &str = "monthly listeners";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no og:title or <title> element in document")]
    MissingTitle,
    #[error("og:title tag has no content attribute")]
    OgTitleWithoutContent,
    #[error("description tag has no content attribute")]
    DescriptionWithoutContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistMeta {
    pub artist_name: String,
    pub monthly_listeners: String,
}

/// Best-effort metadata heuristics over one page. Pure; no I/O.
pub fn extract_artist_meta(html: &str) -> Result<ArtistMeta, ExtractError> {
    let doc = Html::parse_document(html);
    Ok(ArtistMeta {
        artist_name: artist_name(&doc)?,
        monthly_listeners: monthly_listeners(&doc)?,
    })
}

/// og:title content verbatim when present, else the `<title>` text up to the
/// first '|', trimmed.
fn artist_name(doc: &Html) -> Result<String, ExtractError> {
    let og_sel = Selector::parse(r#"meta[property="og:title"]"#).unwrap();
    if let Some(tag) = doc.select(&og_sel).next() {
        return tag
            .value()
            .attr("content")
            .map(str::to_string)
            .ok_or(ExtractError::OgTitleWithoutContent);
    }

    let title_sel = Selector::parse("title").unwrap();
    let title = doc
        .select(&title_sel)
        .next()
        .ok_or(ExtractError::MissingTitle)?
        .text()
        .collect::<String>();

    Ok(title
        .split('|')
        .next()
        .unwrap_or(&title)
        .trim()
        .to_string())
}

/// Listener count from the description meta, or "Unknown" when the tag is
/// absent or carries no marker. Degrades to "Unknown" silently on upstream
/// format drift.
fn monthly_listeners(doc: &Html) -> Result<String, ExtractError> {
    let desc_sel = Selector::parse(r#"meta[name="description"]"#).unwrap();
    let Some(tag) = doc.select(&desc_sel).next() else {
        return Ok(UNKNOWN.to_string());
    };
    let content = tag
        .value()
        .attr("content")
        .ok_or(ExtractError::DescriptionWithoutContent)?;

    if !content.contains(LISTENERS_MARKER) {
        return Ok(UNKNOWN.to_string());
    }

    Ok(content
        .rsplit(FIELD_SEPARATOR)
        .next()
        .unwrap_or(content)
        .replace(LISTENERS_MARKER, "")
        .trim()
        .to_string())
}
