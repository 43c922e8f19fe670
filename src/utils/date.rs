use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};

/// Cell-level date parsing. Sources are inconsistent about the shape, so a
/// few common layouts are tried in order.
pub fn parse_cell_date(s: &str) -> Option<NaiveDate> {
    const FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

    let trimmed = s.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Format a date with a user-supplied strftime pattern without panicking
/// on a bad pattern: `None` signals "could not render" and the caller
/// substitutes its placeholder.
pub fn format_date(date: NaiveDate, pattern: &str) -> Option<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }
    Some(date.format_with_items(items.into_iter()).to_string())
}
