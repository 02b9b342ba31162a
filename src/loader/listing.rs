use regex::Regex;
use std::sync::OnceLock;

/// Suffix of files that hold one agent record.
pub const RECORD_SUFFIX: &str = ".json";

const PARENT_DIR: &str = "../";

fn anchor_href() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?is)<a\s(?:[^>]*?\s)?href\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
            .expect("anchor pattern is valid")
    })
}

/// Extracts record entries from a directory index page, in listing order.
///
/// Only anchors whose `href` ends in `.json` are kept; the parent-directory
/// entry is never returned.
pub fn parse_listing(html: &str) -> Vec<String> {
    anchor_href()
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| html_escape::decode_html_entities(m.as_str().trim()).to_string())
        .filter(|href| is_record_entry(href))
        .collect()
}

pub fn is_record_entry(name: &str) -> bool {
    name != PARENT_DIR && name.ends_with(RECORD_SUFFIX)
}
