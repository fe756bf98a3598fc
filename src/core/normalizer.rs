/// Query-parameter key of the traffic layer's timestamp filter.
pub const DATE_FILTER_MARKER: &str = "daily_ts=";

/// Repairs a raw completion into a request URL. Never fails: whatever the
/// model produced comes back trimmed and, at most, with one quote appended.
pub fn normalize(raw: &str) -> String {
    let mut url = strip_wrapping(raw).to_string();
    close_date_literal(&mut url);
    url
}

/// Drops surrounding whitespace and the double quotes the model tends to wrap
/// URLs in. Quotes inside the URL are left alone.
fn strip_wrapping(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '"')
}

/// Timestamp literals in the traffic CQL filter are single-quoted and the
/// closing quote is sometimes lost at the end of the completion.
fn close_date_literal(url: &mut String) {
    if url.contains(DATE_FILTER_MARKER) && !url.ends_with('\'') {
        url.push('\'');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_missing_date_quote() {
        let out = normalize("\"https://example/ows?CQL_FILTER=daily_ts='2024-01-01T00:00:00Z\"");
        assert_eq!(out, "https://example/ows?CQL_FILTER=daily_ts='2024-01-01T00:00:00Z'");

        let out = normalize("\"https://example/ows?...daily_ts=2024-01-01T00:00:00Z");
        assert!(out.ends_with('\''));
        assert!(!out.starts_with('"'));
    }

    #[test]
    fn keeps_existing_date_quote() {
        let raw = "https://example/ows?CQL_FILTER=daily_ts>'2024-01-01T00:00:00Z' AND daily_ts='2024-02-01T00:00:00Z'";
        assert_eq!(normalize(raw), raw);
    }

    #[test]
    fn strips_only_outer_quotes() {
        let out = normalize("\"https://example/ows?CQL_FILTER=day='Monday'\"");
        assert_eq!(out, "https://example/ows?CQL_FILTER=day='Monday'");
    }

    #[test]
    fn trims_whitespace_and_newlines() {
        assert_eq!(
            normalize("  \n\"https://example/ows?service=WFS\"\n "),
            "https://example/ows?service=WFS"
        );
    }

    #[test]
    fn never_rejects_garbage() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\"\""), "");
        assert_eq!(normalize("Sorry, I cannot help."), "Sorry, I cannot help.");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "",
            "   ",
            "\"\"\"",
            "\" \"x\" \"",
            "\"https://example/ows?daily_ts=2024-01-01T00:00:00Z",
            "https://example/ows?CQL_FILTER=day='Monday'",
            "  \"https://example/ows?daily_ts='x'\"  ",
            "daily_ts=\"",
            "'daily_ts= '",
        ];
        for raw in samples {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "input {raw:?}");
        }
    }
}
