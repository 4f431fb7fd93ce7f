use crate::blocks::Block;
use crate::parsing::extract::Placeholder;

fn assert_no_placeholder(text: &str) {
    for sentinel in [Placeholder::TABLE, Placeholder::CODE] {
        assert!(
            !text.contains(sentinel),
            "placeholder {sentinel} leaked into block text: {text:?}"
        );
    }
}

pub fn check(blocks: &[Block]) {
    for b in blocks {
        match b {
            Block::Header(h) => {
                assert!(
                    (1..=6).contains(&h.level),
                    "header level out of range: {}",
                    h.level
                );
                assert!(!h.text.is_empty(), "header with empty text");
                assert_no_placeholder(&h.text);
            }
            Block::Paragraph(p) => {
                assert!(!p.text.is_empty(), "empty paragraph emitted");
                assert_no_placeholder(&p.text);
            }
            Block::Code(c) => {
                assert!(!c.language.is_empty(), "code block without language");
                assert_no_placeholder(&c.code);
            }
            Block::Table(t) => {
                assert!(t.with_headings, "table without heading row flag");
                assert!(
                    t.content.len() >= 2,
                    "table needs a heading and a data row: {:?}",
                    t.content
                );
                let width = t.columns();
                assert!(
                    t.content.iter().all(|row| row.len() == width),
                    "table is not rectangular: {:?}",
                    t.content
                );
                for cell in t.content.iter().flatten() {
                    assert_no_placeholder(cell);
                }
            }
            Block::List(_) | Block::Quote(_) | Block::Checklist(_) => {
                panic!("converter emitted unexpected block kind: {}", b.kind())
            }
        }
    }
}
