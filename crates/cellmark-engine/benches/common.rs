// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_cell(size: usize) -> String {
    let base = "# Title\n\nParagraph with **bold**, *italic* and `code`.\n\n- Bullet point\n  - Nested [link](https://example.com)\n- Another item\n\n```\nfn example() {}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_html_cell(size: usize) -> String {
    let base = "<h2>Section</h2><p>Some <b>bold</b> and <i>italic</i><br>text</p><ul><li>one</li><li>two<ol><li>three</li></ol></li></ul>";
    base.repeat(size)
}
