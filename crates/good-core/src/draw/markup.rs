//! Sub- and superscript markup in label texts.
//!
//! Index labels such as `a₆⁽¹⁾` are stored as literal strings with a tiny
//! HTML-like markup, `a<sub>6</sub><sup>[1]</sup>`. Only the four tags
//! `<sub>`, `</sub>`, `<sup>` and `</sup>` are recognised; any other `<` is
//! ordinary text. Tags do not nest: an opening tag switches the baseline and
//! either closing tag returns to normal.
//!
//! # Examples
//!
//! ```
//! use good_core::draw::markup::{self, Baseline};
//!
//! let segments = markup::segments("a<sub>6</sub><sup>[1]</sup>");
//! assert_eq!(segments.len(), 3);
//! assert_eq!(segments[1].text(), "6");
//! assert_eq!(segments[1].baseline(), Baseline::Subscript);
//! assert_eq!(markup::plain_text("x<sub>2</sub>"), "x2");
//! ```

/// Vertical placement of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    Normal,
    Subscript,
    Superscript,
}

impl Baseline {
    /// Returns the SVG `baseline-shift` value, or `None` for normal text
    pub fn to_svg_value(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Subscript => Some("sub"),
            Self::Superscript => Some("super"),
        }
    }
}

/// A run of text sharing one baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    text: &'a str,
    baseline: Baseline,
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn baseline(&self) -> Baseline {
        self.baseline
    }
}

const TAGS: [(&str, Baseline); 4] = [
    ("<sub>", Baseline::Subscript),
    ("<sup>", Baseline::Superscript),
    ("</sub>", Baseline::Normal),
    ("</sup>", Baseline::Normal),
];

/// Splits `source` into runs of text, dropping the markup tags.
///
/// Empty runs are omitted, so `"<sub></sub>"` yields no segments.
pub fn segments(source: &str) -> Vec<Segment<'_>> {
    let mut result = Vec::new();
    let mut baseline = Baseline::Normal;
    let mut run_start = 0;
    let mut cursor = 0;

    while let Some(offset) = source[cursor..].find('<') {
        let tag_start = cursor + offset;
        let rest = &source[tag_start..];

        match TAGS.iter().find(|(tag, _)| rest.starts_with(tag)) {
            Some((tag, next_baseline)) => {
                push_segment(&mut result, &source[run_start..tag_start], baseline);
                baseline = *next_baseline;
                cursor = tag_start + tag.len();
                run_start = cursor;
            }
            None => cursor = tag_start + 1,
        }
    }
    push_segment(&mut result, &source[run_start..], baseline);

    result
}

/// Returns the text with all recognised markup removed.
pub fn plain_text(source: &str) -> String {
    segments(source).iter().map(Segment::text).collect()
}

fn push_segment<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str, baseline: Baseline) {
    if !text.is_empty() {
        segments.push(Segment { text, baseline });
    }
}
