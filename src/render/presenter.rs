use serde::{Deserialize, Serialize};

use crate::engine::ResultsSummary;
use crate::record::Record;

/// Shown in place of a missing category name.
pub const NO_CATEGORY: &str = "N/A";

/// A record prepared for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: u64,
    pub image: Option<String>,
    pub title: String,
    pub price: String,
    pub category: String,
    pub description: String,
}

impl ProductRow {
    pub fn from_record(record: &Record, description_max_chars: usize) -> Self {
        Self {
            id: record.id,
            image: resolve_image_url(record).map(str::to_string),
            title: record.title.clone(),
            price: format!("${}", record.price),
            category: record
                .category_name()
                .filter(|name| !name.is_empty())
                .unwrap_or(NO_CATEGORY)
                .to_string(),
            description: truncate_text(&record.description, description_max_chars),
        }
    }
}

/// Image to show for a record: the first `images` entry when it is an
/// http(s) URL, else the category image.
pub fn resolve_image_url(record: &Record) -> Option<&str> {
    record
        .images
        .first()
        .map(String::as_str)
        .filter(|url| url.starts_with("http"))
        .or_else(|| record.category_image())
}

/// Image to try after `failed` did not load: the category image, unless that
/// is what just failed. `None` means show the placeholder.
pub fn fallback_image_url<'a>(record: &'a Record, failed: &str) -> Option<&'a str> {
    record.category_image().filter(|image| *image != failed)
}

/// Cut `text` to `max_chars` characters and append `...` when it is longer.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

pub fn summary_text(summary: &ResultsSummary) -> String {
    match summary {
        ResultsSummary::Empty => "No products found".to_string(),
        ResultsSummary::Range { start, end, total } => {
            format!("Showing {} - {} of {} products", start, end, total)
        }
    }
}

pub fn page_label(current: usize, total_pages: usize) -> String {
    format!("Page {}/{}", current, total_pages)
}
