use crate::config::AnalyzerConfig;
use crate::model::{SectionBlock, SectionLabel, SectionMap};

/// Split resume text into labeled sections.
///
/// A line is a section header when its lowercased content matches one of
/// the configured section patterns and it has at most `max_header_tokens`
/// whitespace tokens. Lines before the first header belong to
/// [`SectionLabel::Header`]. Header lines themselves are not stored.
pub fn segment(text: &str, config: &AnalyzerConfig) -> SectionMap {
    let mut blocks = Vec::new();
    let mut current = SectionLabel::Header;
    let mut buffer: Vec<String> = Vec::new();

    for line in text.split('\n') {
        match detect_header(line, config) {
            Some(label) => {
                if !buffer.is_empty() {
                    blocks.push(SectionBlock {
                        label: current,
                        lines: std::mem::take(&mut buffer),
                    });
                }
                current = label;
            }
            None => buffer.push(line.to_string()),
        }
    }

    if !buffer.is_empty() {
        blocks.push(SectionBlock {
            label: current,
            lines: buffer,
        });
    }

    SectionMap { blocks }
}

/// Section label for a header line, or None for body text.
pub fn detect_header(line: &str, config: &AnalyzerConfig) -> Option<SectionLabel> {
    if line.split_whitespace().count() > config.max_header_tokens {
        return None;
    }
    let lower = line.trim().to_lowercase();
    config
        .section_rules
        .iter()
        .find(|rule| rule.pattern.is_match(&lower))
        .map(|rule| rule.label)
}
