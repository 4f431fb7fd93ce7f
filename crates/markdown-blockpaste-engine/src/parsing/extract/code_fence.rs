use std::sync::OnceLock;

use regex::Regex;

use crate::blocks::CodeData;

use super::Placeholder;

/// Triple-backtick fenced code.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const DEFAULT_LANGUAGE: &'static str = "plaintext";

    /// Opener with optional info string, lazily matched body, closer on its
    /// own line. The body group is skipped entirely for an empty fence so a
    /// bare "```\n```" never swallows a later fence.
    fn pattern() -> &'static Regex {
        static FENCE: OnceLock<Regex> = OnceLock::new();
        FENCE.get_or_init(|| {
            Regex::new(r"(?ms)^```[ \t]*([^\n`]*?)[ \t]*\n(?:(.*?)\n)??```[ \t]*$")
                .expect("Invalid code fence regex")
        })
    }

    /// Normalizes an info string into a language tag.
    pub fn language(info: &str, default_language: &str) -> String {
        match info.trim() {
            "" => default_language.to_string(),
            tag => tag.to_string(),
        }
    }
}

/// Pulls every closed code fence out of `text`.
///
/// Bodies are kept byte for byte. Unterminated fences are left in the
/// residual where they read as ordinary paragraph lines.
pub fn extract_code_fences(text: &str, default_language: &str) -> (Vec<CodeData>, String) {
    let mut blocks = Vec::new();
    let mut residual = String::with_capacity(text.len());
    let mut last = 0;

    for caps in CodeFence::pattern().captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        residual.push_str(&text[last..whole.start()]);
        residual.push_str(Placeholder::CODE);
        last = whole.end();

        blocks.push(CodeData {
            code: caps.get(2).map_or("", |m| m.as_str()).to_string(),
            language: CodeFence::language(
                caps.get(1).map_or("", |m| m.as_str()),
                default_language,
            ),
        });
    }
    residual.push_str(&text[last..]);

    (blocks, residual)
}
