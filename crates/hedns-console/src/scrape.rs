//! Small helpers over `scraper` shared by the zone and record extractors

use regex::Regex;
use scraper::{ElementRef, Selector};

/// Compile a selector known at compile time
pub(crate) fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {:?}: {:?}", css, e))
}

/// Compile a pattern known at compile time
pub(crate) fn pattern(re: &'static str) -> Regex {
    Regex::new(re).unwrap_or_else(|e| panic!("invalid pattern {:?}: {}", re, e))
}

/// Whitespace-trimmed text content of an element
pub(crate) fn cell_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// First capture group of `re` within `value`
pub(crate) fn capture<'a>(re: &Regex, value: &'a str) -> Option<&'a str> {
    re.captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
