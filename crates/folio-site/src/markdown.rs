// Markdown-lite
// Hand-rolled parser for blog post bodies: headings, paragraphs, unordered
// lists, fenced code blocks, and an inline pass for bold / italic / code
// spans / links. Anything it does not recognize degrades to a plain
// paragraph; there are no error kinds.

use maud::{Markup, PreEscaped};
use once_cell::sync::Lazy;
use regex::Regex;

/// A parsed block-level element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `#`, `##`, or `###` heading with its level (1–3).
    Heading(u8, String),
    /// A run of non-blank lines joined with spaces.
    Paragraph(String),
    /// `- ` items collected until the list ends.
    List(Vec<String>),
    /// Fenced (```) code, stored verbatim.
    Code(String),
}

/// Renders a markdown-lite source to markup.
///
/// The output is pre-escaped HTML: text content is escaped here, so the
/// result can be interpolated into a maud template directly.
pub fn render_markdown(source: &str) -> Markup {
    let rendered = parse_blocks(source)
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n");
    PreEscaped(rendered)
}

/// Splits a source text into block-level elements (pure function).
pub fn parse_blocks(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut list: Vec<String> = Vec::new();
    let mut code: Option<Vec<&str>> = None;

    for line in source.lines() {
        // Inside a fence, everything is code until the closing fence.
        if let Some(buf) = code.as_mut() {
            if line.trim_start().starts_with("```") {
                blocks.push(Block::Code(buf.join("\n")));
                code = None;
            } else {
                buf.push(line);
            }
            continue;
        }

        let trimmed = line.trim();

        if trimmed.starts_with("```") {
            flush_paragraph(&mut blocks, &mut paragraph);
            flush_list(&mut blocks, &mut list);
            code = Some(Vec::new());
            continue;
        }

        if trimmed.is_empty() {
            flush_paragraph(&mut blocks, &mut paragraph);
            flush_list(&mut blocks, &mut list);
            continue;
        }

        if let Some((level, text)) = parse_heading(trimmed) {
            flush_paragraph(&mut blocks, &mut paragraph);
            flush_list(&mut blocks, &mut list);
            blocks.push(Block::Heading(level, text.to_string()));
            continue;
        }

        if let Some(item) = trimmed.strip_prefix("- ") {
            flush_paragraph(&mut blocks, &mut paragraph);
            list.push(item.to_string());
            continue;
        }

        flush_list(&mut blocks, &mut list);
        paragraph.push(trimmed);
    }

    // An unclosed fence still renders as code.
    if let Some(buf) = code {
        blocks.push(Block::Code(buf.join("\n")));
    }
    flush_paragraph(&mut blocks, &mut paragraph);
    flush_list(&mut blocks, &mut list);

    blocks
}

fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if !(1..=3).contains(&hashes) {
        return None;
    }
    let rest = line[hashes..].strip_prefix(' ')?;
    Some((hashes as u8, rest))
}

fn flush_paragraph(blocks: &mut Vec<Block>, paragraph: &mut Vec<&str>) {
    if !paragraph.is_empty() {
        blocks.push(Block::Paragraph(paragraph.join(" ")));
        paragraph.clear();
    }
}

fn flush_list(blocks: &mut Vec<Block>, list: &mut Vec<String>) {
    if !list.is_empty() {
        blocks.push(Block::List(std::mem::take(list)));
    }
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading(level, text) => {
            // Post headings start one level below the page title.
            let tag = match level {
                1 => "h2",
                2 => "h3",
                _ => "h4",
            };
            format!("<{tag}>{}</{tag}>", render_inline(text))
        }
        Block::Paragraph(text) => format!("<p>{}</p>", render_inline(text)),
        Block::List(items) => {
            let items = items
                .iter()
                .map(|item| format!("<li>{}</li>", render_inline(item)))
                .collect::<String>();
            format!("<ul>{}</ul>", items)
        }
        Block::Code(code) => format!("<pre><code>{}</code></pre>", escape_html(code)),
    }
}

static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());

/// Escapes text and applies the inline markup pass.
pub fn render_inline(text: &str) -> String {
    let escaped = escape_html(text);
    let out = CODE_SPAN.replace_all(&escaped, "<code>$1</code>");
    let out = LINK.replace_all(&out, r#"<a href="$2">$1</a>"#);
    let out = BOLD.replace_all(&out, "<strong>$1</strong>");
    let out = ITALIC.replace_all(&out, "<em>$1</em>");
    out.into_owned()
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_blocks_headings_and_paragraphs() {
        let blocks = parse_blocks("# Title\n\nFirst line\nsecond line\n\n## Sub");
        assert_eq!(
            blocks,
            vec![
                Block::Heading(1, "Title".to_string()),
                Block::Paragraph("First line second line".to_string()),
                Block::Heading(2, "Sub".to_string()),
            ]
        );
    }

    #[test]
    fn test_blocks_list() {
        let blocks = parse_blocks("- one\n- two\n\ntail");
        assert_eq!(
            blocks,
            vec![
                Block::List(vec!["one".to_string(), "two".to_string()]),
                Block::Paragraph("tail".to_string()),
            ]
        );
    }

    #[test]
    fn test_blocks_fenced_code_kept_verbatim() {
        let blocks = parse_blocks("```\nlet x = 1;\n\nlet y = 2;\n```");
        assert_eq!(blocks, vec![Block::Code("let x = 1;\n\nlet y = 2;".to_string())]);
    }

    #[test]
    fn test_unclosed_fence_still_renders() {
        let blocks = parse_blocks("```\ndangling");
        assert_eq!(blocks, vec![Block::Code("dangling".to_string())]);
    }

    #[test]
    fn test_hash_without_space_is_a_paragraph() {
        let blocks = parse_blocks("#not a heading");
        assert_eq!(blocks, vec![Block::Paragraph("#not a heading".to_string())]);
    }

    #[rstest]
    #[case("plain", "plain")]
    #[case("**bold**", "<strong>bold</strong>")]
    #[case("*italic*", "<em>italic</em>")]
    #[case("`code`", "<code>code</code>")]
    #[case("[here](https://example.com)", r#"<a href="https://example.com">here</a>"#)]
    #[case("a < b & c", "a &lt; b &amp; c")]
    fn test_inline(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(render_inline(input), expected);
    }

    #[test]
    fn test_render_markdown_end_to_end() {
        let html = render_markdown("# Hi\n\nSome **bold** text.").into_string();
        assert_eq!(html, "<h2>Hi</h2>\n<p>Some <strong>bold</strong> text.</p>");
    }

    #[test]
    fn test_code_block_escapes_html() {
        let html = render_markdown("```\n<script>\n```").into_string();
        assert_eq!(html, "<pre><code>&lt;script&gt;</code></pre>");
    }
}
