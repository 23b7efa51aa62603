use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::blog::BlogError;

const THEME: &str = "base16-ocean.dark";

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

fn theme() -> Result<&'static Theme, BlogError> {
    THEME_SET
        .themes
        .get(THEME)
        .ok_or_else(|| BlogError::Highlight(format!("missing theme {THEME}")))
}

/// Replace every code block in a pulldown-cmark event stream with a single
/// pre-rendered HTML event. Fenced blocks use the syntax named by their info
/// string, anything unknown falls back to plain text.
pub fn highlight<'a, It>(events: It) -> Result<Vec<Event<'a>>, BlogError>
where
    It: Iterator<Item = Event<'a>>,
{
    let syntaxes = &*SYNTAX_SET;
    let theme = theme()?;
    let plain = syntaxes.find_syntax_plain_text();

    let mut code_block = None;
    let mut to_highlight = String::new();
    let mut out_events = Vec::new();

    for event in events {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let syntax = match kind {
                    CodeBlockKind::Fenced(lang) => {
                        syntaxes.find_syntax_by_token(&lang).unwrap_or(plain)
                    }
                    CodeBlockKind::Indented => plain,
                };
                code_block = Some(syntax);
            }
            Event::End(TagEnd::CodeBlock) => {
                let syntax = code_block
                    .take()
                    .ok_or_else(|| BlogError::Highlight("unbalanced code block".to_string()))?;
                let html = highlighted_html_for_string(&to_highlight, syntaxes, syntax, theme)
                    .map_err(|e| BlogError::Highlight(e.to_string()))?;
                to_highlight.clear();
                out_events.push(Event::Html(CowStr::from(html)));
            }
            Event::Text(t) if code_block.is_some() => to_highlight.push_str(&t),
            e => out_events.push(e),
        }
    }

    Ok(out_events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::Parser;

    fn render(markdown: &str) -> String {
        let events = highlight(Parser::new(markdown)).unwrap();
        let mut out = String::new();
        pulldown_cmark::html::push_html(&mut out, events.into_iter());
        out
    }

    #[test]
    fn test_prose_passes_through() {
        let html = render("# Title\n\nSome *text*.\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>text</em>"));
    }

    #[test]
    fn test_code_block_is_highlighted() {
        let html = render("```rust\nfn main() {}\n```\n");
        assert!(html.contains("<pre style="));
        assert!(!html.contains("<code"));
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let html = render("```klingon\nqapla\n```\n");
        assert!(html.contains("qapla"));
    }
}
