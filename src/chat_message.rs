use crate::models::{Message, Role};
use crate::theme::{Palette, Theme};
use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Renders one message as a framed block of styled lines. `reveal` overrides
/// the content for the message currently being typed out.
pub fn render_message(
    message: &Message,
    reveal: Option<&str>,
    width: u16,
    theme: Theme,
) -> Vec<Line<'static>> {
    let palette = theme.palette();
    let from_user = message.role == Role::User;
    let base = Style::default().fg(if from_user {
        palette.user
    } else {
        palette.assistant
    });
    let indent = if from_user { "  " } else { "" };
    let label = if from_user { "Anda" } else { "Coach" };
    let content = reveal.unwrap_or(&message.content);

    let mut lines = Vec::new();
    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), base),
        Span::styled("┌─ ".to_string(), base),
        Span::styled(label.to_string(), base.add_modifier(Modifier::BOLD)),
    ]));

    let wrap_width = (width as usize).saturating_sub(4 + indent.len());
    for body_line in markdown_lines(content, wrap_width, &palette, base) {
        let mut spans = vec![
            Span::styled(indent.to_string(), base),
            Span::styled("│ ".to_string(), base),
        ];
        spans.extend(body_line.spans);
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), base),
        Span::styled("╰─".to_string(), base),
    ]));

    lines
}

fn inline_style(base: Style, bold: usize, italic: usize) -> Style {
    let mut style = base;
    if bold > 0 {
        style = style.add_modifier(Modifier::BOLD);
    }
    if italic > 0 {
        style = style.add_modifier(Modifier::ITALIC);
    }
    style
}

/// Greedy word wrap over pre-styled words. The first line starts with
/// `first_prefix`, continuation lines with `cont_prefix`.
fn wrap_words(
    words: &[(String, Style)],
    width: usize,
    first_prefix: &str,
    cont_prefix: &str,
    prefix_style: Style,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0usize;

    if !first_prefix.is_empty() {
        current.push(Span::styled(first_prefix.to_string(), prefix_style));
        current_width = first_prefix.width();
    }
    let mut has_content = false;

    for (word, style) in words {
        let word_width = word.width();
        let needed = if has_content { word_width + 1 } else { word_width };

        if has_content && current_width + needed > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            if !cont_prefix.is_empty() {
                current.push(Span::styled(cont_prefix.to_string(), prefix_style));
            }
            current_width = cont_prefix.width();
            has_content = false;
        }

        if has_content {
            current.push(Span::styled(format!(" {}", word), *style));
            current_width += word_width + 1;
        } else {
            current.push(Span::styled(word.clone(), *style));
            current_width += word_width;
            has_content = true;
        }
    }

    if has_content || !current.is_empty() {
        lines.push(Line::from(current));
    }

    lines
}

/// Turns markdown into wrapped, styled lines: paragraphs, emphasis, inline
/// code, bullet lists, and fenced code blocks with a gutter.
fn markdown_lines(
    content: &str,
    width: usize,
    palette: &Palette,
    base: Style,
) -> Vec<Line<'static>> {
    let width = width.max(8);
    let code_style = Style::default().fg(palette.code);
    let gutter_style = Style::default().fg(palette.dim);

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut words: Vec<(String, Style)> = Vec::new();
    let mut bold = 0usize;
    let mut italic = 0usize;
    let mut in_code_block = false;
    let mut code_buffer = String::new();
    let mut in_item = false;

    fn flush_block(
        words: &mut Vec<(String, Style)>,
        lines: &mut Vec<Line<'static>>,
        width: usize,
        bullet: bool,
        prefix_style: Style,
    ) {
        if words.is_empty() {
            return;
        }
        let (first, cont) = if bullet { ("• ", "  ") } else { ("", "") };
        lines.extend(wrap_words(words, width, first, cont, prefix_style));
        words.clear();
        lines.push(Line::from(""));
    }

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => {
                flush_block(&mut words, &mut lines, width, in_item, base);
                in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                for code_line in code_buffer.lines() {
                    lines.push(Line::from(vec![
                        Span::styled("▎ ".to_string(), gutter_style),
                        Span::styled(code_line.to_string(), code_style),
                    ]));
                }
                lines.push(Line::from(""));
                code_buffer.clear();
                in_code_block = false;
            }
            Event::Start(Tag::Strong) => bold += 1,
            Event::End(TagEnd::Strong) => bold = bold.saturating_sub(1),
            Event::Start(Tag::Emphasis) => italic += 1,
            Event::End(TagEnd::Emphasis) => italic = italic.saturating_sub(1),
            Event::Start(Tag::Heading { .. }) => bold += 1,
            Event::End(TagEnd::Heading(_)) => {
                bold = bold.saturating_sub(1);
                flush_block(&mut words, &mut lines, width, false, base);
            }
            Event::Start(Tag::Item) => in_item = true,
            Event::End(TagEnd::Item) => {
                flush_block(&mut words, &mut lines, width, true, base);
                // list items sit tight; drop the paragraph gap
                if lines.last().map(|l| l.spans.is_empty()).unwrap_or(false) {
                    lines.pop();
                }
                in_item = false;
            }
            Event::End(TagEnd::Paragraph) => {
                flush_block(&mut words, &mut lines, width, in_item, base);
            }
            Event::Text(text) => {
                if in_code_block {
                    code_buffer.push_str(&text);
                } else {
                    let style = inline_style(base, bold, italic);
                    words.extend(
                        text.split_whitespace()
                            .map(|w| (w.to_string(), style)),
                    );
                }
            }
            Event::Code(code) => {
                words.extend(
                    code.split_whitespace()
                        .map(|w| (w.to_string(), code_style)),
                );
            }
            Event::SoftBreak | Event::HardBreak => {}
            _ => {}
        }
    }

    flush_block(&mut words, &mut lines, width, in_item, base);

    // trim trailing blank lines left by the last block
    while lines.last().map(|l| l.spans.is_empty()).unwrap_or(false) {
        lines.pop();
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn line_width(line: &Line) -> usize {
        line.spans.iter().map(|s| s.content.width()).sum()
    }

    #[test]
    fn test_render_frames_message() {
        let message = Message::assistant("Halo, ada yang bisa dibantu?");
        let lines = render_message(&message, None, 60, Theme::Dark);

        assert!(line_text(&lines[0]).contains("Coach"));
        assert!(line_text(lines.last().unwrap()).contains("╰─"));
        assert!(lines.iter().any(|l| line_text(l).contains("dibantu")));
    }

    #[test]
    fn test_user_message_is_indented() {
        let message = Message::user("Halo");
        let lines = render_message(&message, None, 60, Theme::Dark);
        assert!(line_text(&lines[0]).starts_with("  "));
    }

    #[test]
    fn test_reveal_overrides_content() {
        let message = Message::assistant("jawaban panjang sekali");
        let lines = render_message(&message, Some("jawaban"), 60, Theme::Dark);
        let body: String = lines.iter().map(|l| line_text(l)).collect();
        assert!(body.contains("jawaban"));
        assert!(!body.contains("panjang"));
    }

    #[test]
    fn test_markdown_bullets_get_prefix() {
        let palette = Theme::Dark.palette();
        let lines = markdown_lines("- satu\n- dua", 40, &palette, Style::default());
        let texts: Vec<String> = lines.iter().map(|l| line_text(l)).collect();
        assert!(texts.iter().any(|t| t.starts_with("• satu")));
        assert!(texts.iter().any(|t| t.starts_with("• dua")));
    }

    #[test]
    fn test_markdown_code_block_gets_gutter() {
        let palette = Theme::Dark.palette();
        let lines = markdown_lines("```\nlet x = 1;\n```", 40, &palette, Style::default());
        assert!(lines.iter().any(|l| line_text(l).contains("▎ let x = 1;")));
    }

    #[test]
    fn test_wrapping_respects_width() {
        let palette = Theme::Dark.palette();
        let text = "kata ".repeat(40);
        let lines = markdown_lines(&text, 24, &palette, Style::default());
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line_width(line) <= 24, "line too wide: {:?}", line_text(line));
        }
    }
}
