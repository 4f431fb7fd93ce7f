use serde::Serialize;

use crate::blocks::Block;

#[derive(Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Serialize)]
pub struct BlockSnap {
    pub kind: String,
    pub text: String,
}

/// Truncates to `max` bytes with "..." suffix if needed, on a char boundary.
///
/// Used for human-readable snapshot output.
pub fn preview(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

pub fn normalize(blocks: &[Block]) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| {
            let (kind, text) = match b {
                Block::Header(h) => (format!("Header({})", h.level), h.text.clone()),
                Block::Paragraph(p) => ("Paragraph".to_string(), p.text.clone()),
                Block::Code(c) => (format!("Code({})", c.language), c.code.clone()),
                Block::Table(t) => (
                    format!("Table({}x{})", t.content.len(), t.columns()),
                    t.content
                        .iter()
                        .map(|row| row.join(" | "))
                        .collect::<Vec<_>>()
                        .join(" / "),
                ),
                Block::List(l) => (format!("List({:?})", l.style), l.items.join(" / ")),
                Block::Quote(q) => ("Quote".to_string(), q.text.clone()),
                Block::Checklist(c) => (
                    "Checklist".to_string(),
                    c.items
                        .iter()
                        .map(|i| format!("[{}] {}", if i.checked { "x" } else { " " }, i.text))
                        .collect::<Vec<_>>()
                        .join(" / "),
                ),
            };
            BlockSnap {
                kind,
                text: preview(&text, 80),
            }
        })
        .collect();

    Snap { blocks }
}
