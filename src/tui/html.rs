//! HTML markup → ratatui `Text` renderer.
//!
//! Thin walk over a `scraper`-parsed fragment that converts content nodes
//! into styled `Line`/`Span` values. Headings, emphasis, links, inline code,
//! `<pre>` blocks, lists, blockquotes, images and `<mark>` highlights.
//! Script/style subtrees are dropped.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use scraper::{ElementRef, Html, Node};

use crate::content::fragment::collapse_whitespace;

/// Parse fragment markup into styled `Text` using the shell's color scheme.
///
/// Returns owned text (`'static`) so callers aren't constrained by input
/// lifetime.
pub fn render(markup: &str, base_fg: Color) -> Text<'static> {
    let doc = Html::parse_fragment(markup);
    let mut w = Writer::new(base_fg);
    w.walk_children(doc.root_element());
    w.text
}

/// Style used for `<mark>` runs, shared with the search snippet cards so a
/// highlighted query term looks the same everywhere.
pub fn mark_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::Yellow)
}

// ── Writer ──────────────────────────────────────────────────────────────────

struct Writer {
    text: Text<'static>,
    base_fg: Color,
    /// Inline style stack (bold, italic, heading text, etc.). Styles compose
    /// via `patch` so nested bold+italic works.
    styles: Vec<Style>,
    /// Per-line prefix spans (blockquote `│`).
    line_prefixes: Vec<Span<'static>>,
    /// List nesting: None = unordered, Some(n) = ordered at index n.
    list_indices: Vec<Option<u64>>,
    /// True inside `<pre>`: line structure is preserved verbatim.
    in_pre: bool,
    /// Whether the next block element should be preceded by a blank line.
    needs_newline: bool,
}

impl Writer {
    fn new(base_fg: Color) -> Self {
        Self {
            text: Text::default(),
            base_fg,
            styles: vec![],
            line_prefixes: vec![],
            list_indices: vec![],
            in_pre: false,
            needs_newline: false,
        }
    }

    // ── Style helpers ───────────────────────────────────────────────────

    /// Current effective style: top of stack, or base foreground color.
    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.base_fg))
    }

    /// Push a style that composes with the current one.
    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    // ── Line/span helpers ───────────────────────────────────────────────

    fn push_line(&mut self, line: Line<'static>) {
        let mut out = line;
        for pfx in self.line_prefixes.iter().rev().cloned() {
            out.spans.insert(0, pfx);
        }
        self.text.lines.push(out);
    }

    fn push_span(&mut self, span: Span<'static>) {
        if let Some(line) = self.text.lines.last_mut() {
            line.push_span(span);
        } else {
            self.push_line(Line::from(vec![span]));
        }
    }

    fn blank_line_if_needed(&mut self) {
        if self.needs_newline {
            self.push_line(Line::default());
            self.needs_newline = false;
        }
    }

    /// Start a fresh line unless the current one is still empty.
    fn break_line(&mut self) {
        let current_has_content = self
            .text
            .lines
            .last()
            .is_some_and(|line| line.spans.iter().any(|s| !s.content.is_empty()));
        if current_has_content || self.text.lines.is_empty() {
            self.push_line(Line::default());
        }
    }

    /// Whether a word separator is still owed at the end of the current line.
    fn line_wants_space(&self) -> bool {
        self.text.lines.last().is_some_and(|line| {
            line.spans.iter().any(|s| !s.content.is_empty())
                && !line
                    .spans
                    .last()
                    .is_some_and(|s| s.content.ends_with(char::is_whitespace))
        })
    }

    // ── Tree walk ───────────────────────────────────────────────────────

    fn walk_children(&mut self, element: ElementRef<'_>) {
        for child in element.children() {
            match child.value() {
                Node::Text(t) => self.text_node(t),
                Node::Element(_) => {
                    if let Some(child_el) = ElementRef::wrap(child) {
                        self.element(child_el);
                    }
                }
                _ => {} // comments, doctype, processing instructions
            }
        }
    }

    fn element(&mut self, node: ElementRef<'_>) {
        let el = node.value();

        match el.name() {
            // ── Block elements ──────────────────────────────────────────
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                self.blank_line_if_needed();
                self.push_line(Line::default());
                self.push_style(heading_style(self.base_fg, el.name()));
                self.walk_children(node);
                self.pop_style();
                self.needs_newline = true;
            }
            "p" => {
                self.blank_line_if_needed();
                self.push_line(Line::default());
                self.walk_children(node);
                self.needs_newline = true;
            }
            "div" | "section" | "article" | "header" | "footer" | "main" | "aside" => {
                self.break_line();
                self.walk_children(node);
            }
            "blockquote" => {
                self.blank_line_if_needed();
                self.line_prefixes
                    .push(Span::styled("│ ", Style::default().fg(Color::DarkGray)));
                self.push_style(
                    Style::default()
                        .fg(self.base_fg)
                        .add_modifier(Modifier::DIM | Modifier::ITALIC),
                );
                self.push_line(Line::default());
                self.walk_children(node);
                self.pop_style();
                self.line_prefixes.pop();
                self.needs_newline = true;
            }
            "pre" => {
                self.blank_line_if_needed();
                self.in_pre = true;
                self.walk_children(node);
                self.in_pre = false;
                self.needs_newline = true;
            }
            "ul" | "ol" => {
                if self.list_indices.is_empty() {
                    self.blank_line_if_needed();
                }
                self.list_indices
                    .push(if el.name() == "ol" { Some(1) } else { None });
                self.walk_children(node);
                self.list_indices.pop();
                self.needs_newline = true;
            }
            "li" => {
                self.push_line(Line::default());
                let depth = self.list_indices.len().saturating_sub(1);
                let indent = "  ".repeat(depth);
                if let Some(idx) = self.list_indices.last_mut() {
                    let marker = match idx {
                        None => format!("{indent}- "),
                        Some(n) => {
                            let s = format!("{indent}{}. ", n);
                            *n += 1;
                            s
                        }
                    };
                    self.push_span(Span::styled(marker, Style::default().fg(Color::DarkGray)));
                }
                self.walk_children(node);
            }
            "br" => self.push_line(Line::default()),
            "hr" => {
                self.blank_line_if_needed();
                self.push_line(Line::from(Span::styled(
                    "─".repeat(40),
                    Style::default().fg(Color::DarkGray),
                )));
                self.needs_newline = true;
            }

            // ── Inline elements ─────────────────────────────────────────
            "strong" | "b" => {
                self.push_style(Style::default().add_modifier(Modifier::BOLD));
                self.walk_children(node);
                self.pop_style();
            }
            "em" | "i" => {
                self.push_style(Style::default().add_modifier(Modifier::ITALIC));
                self.walk_children(node);
                self.pop_style();
            }
            "u" => {
                self.push_style(Style::default().add_modifier(Modifier::UNDERLINED));
                self.walk_children(node);
                self.pop_style();
            }
            "s" | "del" | "strike" => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT));
                self.walk_children(node);
                self.pop_style();
            }
            "mark" => {
                self.push_style(mark_style());
                self.walk_children(node);
                self.pop_style();
            }
            "code" => {
                self.push_style(Style::default().fg(Color::White).bg(Color::DarkGray));
                self.walk_children(node);
                self.pop_style();
            }
            "a" => {
                self.push_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                );
                self.walk_children(node);
                self.pop_style();
                if let Some(href) = el.attr("href")
                    && !href.is_empty()
                    && href != "#"
                {
                    self.push_span(Span::raw(" ("));
                    self.push_span(Span::styled(
                        href.to_string(),
                        Style::default().fg(Color::Cyan),
                    ));
                    self.push_span(Span::raw(")"));
                }
            }
            "img" => {
                let label = match el.attr("alt").filter(|alt| !alt.trim().is_empty()) {
                    Some(alt) => format!("[image: {}]", alt.trim()),
                    None => "[image]".to_string(),
                };
                self.push_span(Span::styled(
                    label,
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
                ));
            }

            // Non-content subtrees are dropped entirely.
            "script" | "style" | "template" | "head" | "title" => {}

            // Unknown elements are transparent.
            _ => self.walk_children(node),
        }
    }

    fn text_node(&mut self, raw: &str) {
        // Preformatted text keeps its line structure (tabs → 4 spaces,
        // ratatui renders \t as zero-width).
        if self.in_pre {
            let code_style = Style::default().fg(Color::White);
            for line in raw.trim_matches('\n').split('\n') {
                self.push_line(Line::from(Span::styled(
                    line.replace('\t', "    "),
                    code_style,
                )));
            }
            return;
        }

        let core = collapse_whitespace(raw);
        if core.is_empty() {
            // Whitespace between inline siblings still separates words.
            if !raw.is_empty() && self.line_wants_space() {
                let style = self.style();
                self.push_span(Span::styled(" ".to_string(), style));
            }
            return;
        }

        let mut out = String::new();
        if raw.starts_with(char::is_whitespace) && self.line_wants_space() {
            out.push(' ');
        }
        out.push_str(&core);
        if raw.ends_with(char::is_whitespace) {
            out.push(' ');
        }
        let style = self.style();
        self.push_span(Span::styled(out, style));
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn heading_style(base_fg: Color, name: &str) -> Style {
    match name {
        "h1" => Style::default()
            .fg(base_fg)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        "h2" => Style::default().fg(base_fg).add_modifier(Modifier::BOLD),
        _ => Style::default()
            .fg(base_fg)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
    }
}
