//! Safe readers over parsed page nodes.
//!
//! Page structure varies by view and fields go missing routinely, so every
//! accessor answers with absence instead of failing. Whitespace-only text
//! and empty attributes count as absent too; the distinction never matters
//! to callers.

use scraper::{ElementRef, Selector};

/// First element under `scope` matching the selector.
pub fn select_first<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    scope.select(&selector).next()
}

/// All elements under `scope` matching the selector, in document order.
pub fn select_all<'a>(scope: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => scope.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

/// Joined descendant text, trimmed.
pub fn text_of(el: ElementRef<'_>) -> Option<String> {
    let text = el.text().collect::<String>();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Attribute value on the element itself, trimmed.
pub fn attr_of(el: ElementRef<'_>, name: &str) -> Option<String> {
    el.value()
        .attr(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Text of the first match, when there is one and it has text.
pub fn first_text(scope: ElementRef<'_>, css: &str) -> Option<String> {
    select_first(scope, css).and_then(text_of)
}

/// Attribute of the first match, when there is one and it carries the
/// attribute.
pub fn first_attr(scope: ElementRef<'_>, css: &str, name: &str) -> Option<String> {
    select_first(scope, css).and_then(|el| attr_of(el, name))
}
