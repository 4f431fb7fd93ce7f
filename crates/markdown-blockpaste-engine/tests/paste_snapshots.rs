use markdown_blockpaste_engine::parsing::{ConvertOptions, convert_markdown, snapshot};

fn convert_fixture(name: &str) -> snapshot::Snap {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let blocks = convert_markdown(&md, &ConvertOptions::default());
    snapshot::invariants(&blocks);
    snapshot::normalize(&blocks)
}

#[test]
fn fixture_release_notes() {
    insta::assert_json_snapshot!(convert_fixture("release_notes"), @r#"
    {
      "blocks": [
        {
          "kind": "Table(3x2)",
          "text": "Feature | Status / Paste | done / Export | planned"
        },
        {
          "kind": "Code(rust)",
          "text": "fn main() {}"
        },
        {
          "kind": "Header(1)",
          "text": "Release notes"
        },
        {
          "kind": "Paragraph",
          "text": "Version 2 ships today.<br>It is faster."
        },
        {
          "kind": "Header(2)",
          "text": "Thanks"
        }
      ]
    }
    "#);
}

#[test]
fn fixture_fence_with_markdown() {
    insta::assert_json_snapshot!(convert_fixture("fence_with_markdown"), @r##"
    {
      "blocks": [
        {
          "kind": "Code(sh)",
          "text": "# not a header\ncargo install markdown-blockpaste-cli"
        },
        {
          "kind": "Paragraph",
          "text": "Install it:"
        },
        {
          "kind": "Paragraph",
          "text": "Then run `markdown-blockpaste-cli convert`."
        }
      ]
    }
    "##);
}

#[test]
fn fixture_broken_constructs() {
    insta::assert_json_snapshot!(convert_fixture("broken_constructs"), @r#"
    {
      "blocks": [
        {
          "kind": "Header(3)",
          "text": "Almost a table"
        },
        {
          "kind": "Paragraph",
          "text": "| only | header |<br>|------|--------|"
        },
        {
          "kind": "Paragraph",
          "text": "```python<br>print(\"never closed\")"
        }
      ]
    }
    "#);
}

#[test]
fn fixture_fence_with_table() {
    insta::assert_json_snapshot!(convert_fixture("fence_with_table"), @r#"
    {
      "blocks": [
        {
          "kind": "Table(2x2)",
          "text": "Real | Table / x | y"
        },
        {
          "kind": "Code(md)",
          "text": "| Name | Value |\n|------|-------|\n| a    | 1     |"
        },
        {
          "kind": "Paragraph",
          "text": "Example input:"
        }
      ]
    }
    "#);
}
