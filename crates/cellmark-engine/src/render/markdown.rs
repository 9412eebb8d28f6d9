use crate::parsing::{blocks::BlockToken, inline::InlineToken};

use super::model::{RichBlock, StyledRun};

/// Renders Markdown block tokens into rich blocks.
///
/// Empty paragraphs are blank-line markers and produce nothing. Each list
/// item becomes its own `ListItem` carrying the list's marker style and the
/// item's nesting depth. Code blocks pass through verbatim.
pub fn render_markdown(blocks: &[BlockToken]) -> Vec<RichBlock> {
    let mut out = vec![];

    for block in blocks {
        match block {
            BlockToken::Header { level, content } => out.push(RichBlock::Heading {
                level: *level,
                runs: runs(content),
            }),
            BlockToken::Paragraph { content } => {
                if !content.is_empty() {
                    out.push(RichBlock::Paragraph {
                        runs: runs(content),
                    });
                }
            }
            BlockToken::List { ordered, items } => {
                out.extend(items.iter().map(|item| RichBlock::ListItem {
                    ordered: *ordered,
                    indent: item.indent,
                    runs: runs(&item.content),
                }));
            }
            BlockToken::Blockquote { content } => out.push(RichBlock::BlockquoteLine {
                runs: runs(content),
            }),
            BlockToken::Codeblock { content } => out.push(RichBlock::CodeBlock {
                text: content.clone(),
            }),
        }
    }

    out
}

fn runs(tokens: &[InlineToken]) -> Vec<StyledRun> {
    tokens.iter().map(StyledRun::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_markdown;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_markers_are_dropped() {
        let blocks = render_markdown(&parse_markdown("# Title\n\nbody"));
        assert_eq!(
            blocks,
            vec![
                RichBlock::Heading {
                    level: 1,
                    runs: vec![StyledRun::plain("Title")]
                },
                RichBlock::Paragraph {
                    runs: vec![StyledRun::plain("body")]
                },
            ]
        );
    }

    #[test]
    fn list_items_keep_marker_style_and_depth() {
        let blocks = render_markdown(&parse_markdown("1. one\n   - two"));
        assert_eq!(
            blocks,
            vec![
                RichBlock::ListItem {
                    ordered: true,
                    indent: 0,
                    runs: vec![StyledRun::plain("one")]
                },
                RichBlock::ListItem {
                    ordered: false,
                    indent: 1,
                    runs: vec![StyledRun::plain("two")]
                },
            ]
        );
    }

    #[test]
    fn inline_styles_become_run_flags() {
        let blocks = render_markdown(&parse_markdown("> `x` and [y](z)"));
        assert_eq!(
            blocks,
            vec![RichBlock::BlockquoteLine {
                runs: vec![
                    StyledRun::plain("x").code(),
                    StyledRun::plain(" and "),
                    StyledRun::plain("y").link("z"),
                ]
            }]
        );
    }

    #[test]
    fn code_block_is_verbatim() {
        let blocks = render_markdown(&parse_markdown("```\n**raw**\n```"));
        assert_eq!(
            blocks,
            vec![RichBlock::CodeBlock {
                text: "**raw**".into()
            }]
        );
    }
}
