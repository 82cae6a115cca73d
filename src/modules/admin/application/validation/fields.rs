use chrono::NaiveDate;
use url::Url;

use super::ValidationErrors;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Trimmed text that must be at least `min` characters long.
pub fn required_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: &str,
    min: usize,
    message: &str,
) -> String {
    let trimmed = value.trim();
    if trimmed.chars().count() < min {
        errors.push(field, message);
    }
    trimmed.to_string()
}

/// Blank input means "not provided".
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Blank input is accepted as absent; anything else must be an absolute
/// http(s) URL.
pub fn optional_url(errors: &mut ValidationErrors, field: &str, value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
            Some(trimmed.to_string())
        }
        _ => {
            errors.push(field, "Enter a valid URL.");
            None
        }
    }
}

pub fn required_date(
    errors: &mut ValidationErrors,
    field: &str,
    value: &str,
    missing_message: &str,
) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, missing_message);
        return None;
    }
    parse_date(errors, field, trimmed)
}

pub fn optional_date(errors: &mut ValidationErrors, field: &str, value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    parse_date(errors, field, trimmed)
}

fn parse_date(errors: &mut ValidationErrors, field: &str, value: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(field, "Enter a valid date (YYYY-MM-DD).");
            None
        }
    }
}

/// Splits on `delimiter`, trims each segment and drops empty ones.
pub fn split_list(value: &str, delimiter: char) -> Vec<String> {
    value
        .split(delimiter)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_counts_characters_after_trim() {
        let mut errors = ValidationErrors::new();

        assert_eq!(required_text(&mut errors, "name", "  Go  ", 2, "short"), "Go");
        assert!(errors.is_empty());

        required_text(&mut errors, "name", "  é ", 2, "short");
        assert!(errors.has("name"));
    }

    #[test]
    fn test_optional_url_accepts_blank_and_rejects_malformed() {
        let mut errors = ValidationErrors::new();

        assert_eq!(optional_url(&mut errors, "live_url", "   "), None);
        assert_eq!(
            optional_url(&mut errors, "live_url", "https://example.com/app"),
            Some("https://example.com/app".to_string())
        );
        assert!(errors.is_empty());

        assert_eq!(optional_url(&mut errors, "live_url", "example.com"), None);
        assert_eq!(optional_url(&mut errors, "github_url", "ftp://files.example.com"), None);
        assert_eq!(errors.fields().len(), 2);
    }

    #[test]
    fn test_dates_must_be_calendar_dates() {
        let mut errors = ValidationErrors::new();

        assert_eq!(
            required_date(&mut errors, "start_date", "2024-02-29", "required"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert!(errors.is_empty());

        assert_eq!(required_date(&mut errors, "start_date", "2023-02-29", "required"), None);
        assert_eq!(optional_date(&mut errors, "end_date", "soon"), None);
        assert_eq!(optional_date(&mut errors, "end_date", ""), None);
        assert_eq!(errors.fields().len(), 2);
    }

    #[test]
    fn test_split_list_trims_and_drops_empty_segments() {
        assert_eq!(
            split_list(" Rust, ,TypeScript ,, Postgres", ','),
            vec!["Rust", "TypeScript", "Postgres"]
        );
        assert_eq!(
            split_list("Shipped v2\n\n  Cut costs 30%  \n", '\n'),
            vec!["Shipped v2", "Cut costs 30%"]
        );
        assert!(split_list(" , ", ',').is_empty());
    }
}
