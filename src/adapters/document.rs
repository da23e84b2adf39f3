use crate::core::render::escape_html;
use crate::domain::ports::RenderTarget;
use regex::Regex;
use std::sync::LazyLock;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

// 任何開始或結束標籤；名稱比對交給呼叫端
static TAG_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9-]*)\b[^>]*>").ok());

/// A page template whose elements are addressed by their `id` attribute.
///
/// This is not a full HTML parser: an element is located by its opening tag
/// and its content runs to the matching close tag of the same name, counted
/// by nesting depth. That is enough for hand-written page templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    html: String,
}

#[derive(Debug)]
struct OpenTag {
    name: String,
    start: usize,
    end: usize,
    self_closing: bool,
}

impl HtmlDocument {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }

    fn find_open_tag(&self, id: &str) -> Option<OpenTag> {
        let pattern = format!(
            r#"(?s)<([a-zA-Z][a-zA-Z0-9-]*)\b[^>]*?\s(?i:id)\s*=\s*(?:"{id}"|'{id}')[^>]*>"#,
            id = regex::escape(id)
        );
        let re = Regex::new(&pattern).ok()?;
        let caps = re.captures(&self.html)?;
        let whole = caps.get(0)?;

        Some(OpenTag {
            name: caps.get(1)?.as_str().to_ascii_lowercase(),
            start: whole.start(),
            end: whole.end(),
            self_closing: whole.as_str().ends_with("/>"),
        })
    }

    /// Byte range of the matching close tag for an element opened before `from`.
    fn find_close_tag(&self, name: &str, from: usize) -> Option<(usize, usize)> {
        let re = TAG_RE.as_ref()?;
        let mut depth = 1usize;

        for caps in re.captures_iter(&self.html[from..]) {
            if !caps[2].eq_ignore_ascii_case(name) {
                continue;
            }
            let tag = caps.get(0)?;
            let closing = !caps[1].is_empty();
            if closing {
                depth -= 1;
                if depth == 0 {
                    return Some((from + tag.start(), from + tag.end()));
                }
            } else if !tag.as_str().ends_with("/>") {
                depth += 1;
            }
        }
        None
    }

    fn replace_inner(&mut self, id: &str, content: &str) -> bool {
        let Some(open) = self.find_open_tag(id) else {
            return false;
        };

        if open.self_closing || VOID_ELEMENTS.contains(&open.name.as_str()) {
            tracing::warn!("Element '#{}' <{}> cannot hold content", id, open.name);
            return false;
        }

        match self.find_close_tag(&open.name, open.end) {
            Some((close_start, _)) => {
                self.html.replace_range(open.end..close_start, content);
                true
            }
            None => {
                tracing::warn!("Element '#{}' <{}> has no closing tag", id, open.name);
                false
            }
        }
    }
}

impl RenderTarget for HtmlDocument {
    fn has_region(&self, id: &str) -> bool {
        self.find_open_tag(id).is_some()
    }

    fn set_html(&mut self, id: &str, html: &str) -> bool {
        self.replace_inner(id, html)
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        self.replace_inner(id, &escape_html(text))
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> bool {
        let Some(open) = self.find_open_tag(id) else {
            return false;
        };

        let tag = &self.html[open.start..open.end];
        let quoted = format!("\"{}\"", escape_html(value));
        let existing = Regex::new(&format!(
            r#"(?i)\s{}\s*=\s*("[^"]*"|'[^']*'|[^\s>]+)"#,
            regex::escape(name)
        ))
        .ok()
        .and_then(|re| re.captures(tag).and_then(|caps| caps.get(1)))
        .map(|m| (m.start(), m.end()));

        match existing {
            Some((start, end)) => {
                let range = open.start + start..open.start + end;
                self.html.replace_range(range, &quoted);
            }
            None => {
                let insert_at = if open.self_closing {
                    open.end - 2
                } else {
                    open.end - 1
                };
                // `<img src="x" />` 保留斜線前的空白
                let insert_at = if self.html[..insert_at].ends_with(' ') {
                    insert_at - 1
                } else {
                    insert_at
                };
                self.html
                    .insert_str(insert_at, &format!(" {}={}", name, quoted));
            }
        }
        true
    }
}
