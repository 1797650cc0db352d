//! In-page anchor scrolling and the back-to-top control.

pub const DEFAULT_BACK_TO_TOP_THRESHOLD: f64 = 300.0;
pub const BACK_TO_TOP_VISIBLE_CLASS: &str = "show";

/// Element id named by a same-page link, e.g. `#about` -> `about`.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Window scroll offset that puts an element's top at the viewport top.
pub fn scroll_destination(element_top: f64, scroll_y: f64) -> f64 {
    (element_top + scroll_y).max(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackToTopControl {
    threshold: f64,
}

impl BackToTopControl {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn is_visible(self, scroll_y: f64) -> bool {
        scroll_y > self.threshold
    }
}

impl Default for BackToTopControl {
    fn default() -> Self {
        Self::new(DEFAULT_BACK_TO_TOP_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_links_resolve_to_ids() {
        assert_eq!(fragment_target("#contact"), Some("contact"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("/resume.pdf"), None);
        assert_eq!(fragment_target("https://example.com/#top"), None);
    }

    #[test]
    fn destination_aligns_element_top_with_viewport() {
        assert_eq!(scroll_destination(120.0, 400.0), 520.0);
        assert_eq!(scroll_destination(-250.0, 400.0), 150.0);
        assert_eq!(scroll_destination(-500.0, 100.0), 0.0);
    }

    #[test]
    fn back_to_top_shows_only_past_threshold() {
        let control = BackToTopControl::default();

        assert!(!control.is_visible(0.0));
        assert!(!control.is_visible(300.0));
        assert!(control.is_visible(300.5));
    }
}
