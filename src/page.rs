use scraper::Html;

/// Traversable representation of one fetched document.
pub struct Page {
    doc: Html,
}

impl Page {
    /// Parse raw HTML. Parsing is total: malformed markup is absorbed by the
    /// permissive parser and unparseable fragments come through as text.
    pub fn parse(html: &str) -> Self {
        Page {
            doc: Html::parse_document(html),
        }
    }

    /// Concatenate every text node in document order, markup stripped.
    pub fn flatten_text(&self) -> String {
        self.doc.root_element().text().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markup() {
        let page = Page::parse("<html><body><p>total <b>42</b> items</p></body></html>");
        let text = page.flatten_text();
        assert!(text.contains("total"));
        assert!(text.contains("42"));
        assert!(!text.contains('<'));
    }

    #[test]
    fn malformed_markup_does_not_panic() {
        let page = Page::parse("<p>unclosed <b>tag & stray 7");
        let text = page.flatten_text();
        assert!(text.contains("unclosed"));
        assert!(text.contains('7'));
    }

    #[test]
    fn text_keeps_document_order() {
        let page = Page::parse("<h1>first</h1>\n<p>second</p>\n<p>third</p>");
        let text = page.flatten_text();
        let first = text.find("first").unwrap();
        let second = text.find("second").unwrap();
        let third = text.find("third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn bare_text_parses_as_a_document() {
        assert!(Page::parse("42").flatten_text().contains("42"));
    }
}
