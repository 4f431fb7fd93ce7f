// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_paste(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content.\nA second line.\n\n| Name | Value |\n| --- | --- |\n| a | 1 |\n| b | 2 |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_plain_paste(size: usize) -> String {
    "Just an ordinary sentence copied from somewhere else, nothing special.\n".repeat(size)
}
