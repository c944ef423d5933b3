//! Documentation comment extraction.
//!
//! The front end hands over each `///` doc comment as a raw text block: the
//! text after the comment markers, lines joined with `\n`. Code generators
//! store those lines verbatim (see [`extract_lines`]), so an emitter can put
//! its own marker in front of each one and reproduce the original layout,
//! indentation included.
//!
//! Documentation generators want a little more structure. [`DocComment`]
//! drops the conventional separator space and pulls out a leading
//! `# Heading` line.

/// Split raw comment blocks into lines, preserving every line verbatim.
///
/// Line terminators (`\n` or `\r\n`) are removed. A block's trailing
/// terminator does not produce an empty last line; blank lines inside a
/// block are kept.
pub fn extract_lines<S: AsRef<str>>(blocks: &[S]) -> Vec<String> {
    blocks
        .iter()
        .flat_map(|block| block.as_ref().lines())
        .map(str::to_owned)
        .collect()
}

/// Remove at most one leading space, leaving deeper indentation intact.
pub fn strip_separator(line: &str) -> &str {
    line.strip_prefix(' ').unwrap_or(line)
}

/// A doc comment prepared for documentation output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    /// Text of a leading `# Heading` line, if there was one.
    pub heading: Option<String>,
    /// Remaining lines with the separator space stripped.
    pub body: Vec<String>,
}

impl DocComment {
    /// Build from the lines stored on a declaration.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut lines = lines.iter().map(|l| strip_separator(l.as_ref()));

        let mut body: Vec<String> = Vec::new();
        let mut heading = None;

        if let Some(first) = lines.next() {
            match parse_heading(first) {
                Some(text) => heading = Some(text.to_string()),
                None => body.push(first.to_string()),
            }
        }

        // Blank lines directly under a heading separate it from the body.
        let skip_blank = heading.is_some();
        body.extend(
            lines
                .skip_while(|l| skip_blank && l.trim().is_empty())
                .map(str::to_owned),
        );

        DocComment { heading, body }
    }

    pub fn is_empty(&self) -> bool {
        self.heading.is_none() && self.body.is_empty()
    }
}

/// `# Title` is a level-one heading; `## Title` and `#Title` are not.
fn parse_heading(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("# ")?;
    let text = rest.trim();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
