use super::model::{RichBlock, StyledRun};

/// Renders unclassified text as a single unstyled paragraph.
///
/// Empty text gives one paragraph with no runs.
pub fn render_plain(text: &str) -> Vec<RichBlock> {
    let runs = if text.is_empty() {
        vec![]
    } else {
        vec![StyledRun::plain(text)]
    };
    vec![RichBlock::Paragraph { runs }]
}
