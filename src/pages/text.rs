use maud::html;
use maud::Markup;

const BULLET: char = '•';

#[derive(Clone, Debug, PartialEq)]
pub enum TextBlock {
    Bullet(String),
    Paragraph(String),
}

/// Splits stored multi-line text into list items and paragraphs. Lines
/// starting with a bullet become items with the marker stripped; blank
/// lines are dropped.
pub fn split_text(raw: &str) -> Vec<TextBlock> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.strip_prefix(BULLET) {
            Some(item) => TextBlock::Bullet(item.trim().to_string()),
            None => TextBlock::Paragraph(line.to_string()),
        })
        .collect()
}

pub fn render_text(raw: &str) -> Markup {
    html! {
        div.text-section {
            @for block in split_text(raw) {
                @match block {
                    TextBlock::Bullet(item) => {
                        div.bullet { span.marker { "✦" } span { (item) } }
                    }
                    TextBlock::Paragraph(text) => {
                        p { (text) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets_paragraphs_and_blank_lines() {
        assert_eq!(
            split_text("• First\nSecond\n\n• Third"),
            vec![
                TextBlock::Bullet("First".to_string()),
                TextBlock::Paragraph("Second".to_string()),
                TextBlock::Bullet("Third".to_string()),
            ]
        );
    }

    #[test]
    fn indented_bullets_and_crlf_are_handled() {
        assert_eq!(
            split_text("  •Landed on the Moon\r\n   \r\nReturned safely"),
            vec![
                TextBlock::Bullet("Landed on the Moon".to_string()),
                TextBlock::Paragraph("Returned safely".to_string()),
            ]
        );
    }

    #[test]
    fn only_blank_lines_yield_nothing() {
        assert!(split_text("\n \n\t\n").is_empty());
    }

    #[test]
    fn rendered_text_escapes_markup() {
        let out = render_text("• <b>bold</b>\nplain").into_string();
        assert!(out.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(out.contains("<p>plain</p>"));
    }
}
