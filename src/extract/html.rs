use scraper::{ElementRef, Html, Node, Selector};

const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// A parsed page, split into the views extraction rules read from.
pub struct Page {
    raw: String,
    document: Html,
    text: String,
    scripts: String,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        let text = visible_text(&document);
        let scripts = script_text(&document);
        Self {
            raw: html.to_string(),
            document,
            text,
            scripts,
        }
    }

    /// The page source as received, for attributes that carry embedded data.
    pub fn markup(&self) -> &str {
        &self.raw
    }

    /// Rendered text, one text node or table row per line, with script and style content
    /// removed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bodies of all inline script blocks.
    pub fn scripts(&self) -> &str {
        &self.scripts
    }

    /// Text of the first element matching `css`, if any.
    pub fn section(&self, css: &str) -> Option<String> {
        let selector = Selector::parse(css).ok()?;
        let element = self.document.select(&selector).next()?;
        let text = join_chunks(element.text());
        (!text.is_empty()).then_some(text)
    }
}

fn join_words<'a>(chunks: impl Iterator<Item = &'a str>) -> String {
    chunks
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_chunks<'a>(chunks: impl Iterator<Item = &'a str>) -> String {
    chunks
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// One `label: value` line per table row. Empty cells are dropped, so a row without
/// a value renders as its bare label.
fn row_line(row: ElementRef<'_>) -> String {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| matches!(cell.value().name(), "td" | "th"))
        .map(|cell| join_words(cell.text()))
        .filter(|cell| !cell.is_empty())
        .collect::<Vec<_>>()
        .join(": ")
}

fn visible_text(document: &Html) -> String {
    let mut chunks = Vec::new();
    for node in document.root_element().descendants() {
        let enclosing: Vec<&str> = node
            .ancestors()
            .filter_map(|a| match a.value() {
                Node::Element(e) => Some(e.name()),
                _ => None,
            })
            .collect();
        if enclosing.iter().any(|name| HIDDEN_ELEMENTS.contains(name)) {
            continue;
        }
        let in_row = enclosing.contains(&"tr");
        match node.value() {
            Node::Element(e) if e.name() == "tr" && !in_row => {
                if let Some(row) = ElementRef::wrap(node) {
                    chunks.push(row_line(row));
                }
            }
            Node::Text(text) if !in_row => chunks.push(String::from(&**text)),
            _ => {}
        }
    }
    join_chunks(chunks.iter().map(String::as_str))
}

fn script_text(document: &Html) -> String {
    let Ok(selector) = Selector::parse("script") else {
        return String::new();
    };
    document
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
