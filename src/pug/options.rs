/// How text next to sibling elements keeps its separating space.
///
/// Pug joins a piped text line directly to the element before or after it,
/// so whitespace between them in the HTML is lost unless it is spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum SiblingSpacing {
    /// Only spacing already present in the text (a single leading or
    /// trailing space) is kept.
    #[default]
    Off,
    /// Text next to an element gets a leading or trailing space on the
    /// adjoining line.
    Inline,
    /// The separating space is emitted as a `|  ` line of its own.
    Lines,
}

/// Options for Pug output.
///
/// ```rust
/// use pugot::Options;
///
/// let options = Options {
///     tabs: true,
///     collapse: false,
///     ..Default::default()
/// };
/// let pug = pugot::convert(r#"<ul id="nav"><li>Home</li></ul>"#, &options)?;
/// assert_eq!(pug, "ul#nav\n\tli Home");
/// # Ok::<(), pugot::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct Options {
    /// Indent with tabs instead of spaces.
    pub tabs: bool,
    /// Spaces per indentation level when not using tabs. `0` means the
    /// default of 2.
    pub indent_width: usize,
    /// Flatten chains of single-child elements onto one `:`-joined line.
    pub collapse: bool,
    /// Separate attributes with `, ` rather than a space.
    pub commas: bool,
    /// Quote attribute values with `"` rather than `'`.
    pub double_quotes: bool,
    /// Tags whose multi-line text is emitted verbatim as a dot block.
    /// Matched case-insensitively.
    pub preserve_tags: Vec<String>,
    /// Spacing between text and adjacent sibling elements.
    pub sibling_spacing: SiblingSpacing,
    /// Replace the content of `pre` elements with an unbuffered comment.
    pub omit_pre: bool,
}

pub(crate) const DEFAULT_INDENT_WIDTH: usize = 2;

impl Default for Options {
    fn default() -> Self {
        Options {
            tabs: false,
            indent_width: DEFAULT_INDENT_WIDTH,
            collapse: true,
            commas: false,
            double_quotes: true,
            preserve_tags: ["pre", "script", "style", "textarea"]
                .iter()
                .map(|tag| tag.to_string())
                .collect(),
            sibling_spacing: SiblingSpacing::Off,
            omit_pre: false,
        }
    }
}
