use jiff::civil::Date;

/// Format a release date for display, e.g. "May 1, 2022".
pub fn format_release_date(date: Date) -> String {
    date.strftime("%B %-d, %Y").to_string()
}
