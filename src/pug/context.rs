use ahash::{HashSet, HashSetExt};

use super::options::{Options, SiblingSpacing, DEFAULT_INDENT_WIDTH};

/// Ambient state threaded through one conversion.
#[derive(Debug)]
pub(crate) struct RenderContext {
    indent_unit: String,
    pub(crate) quote: char,
    pub(crate) separator: &'static str,
    preserve_tags: HashSet<String>,
    pub(crate) collapse: bool,
    pub(crate) sibling_spacing: SiblingSpacing,
    pub(crate) omit_pre: bool,
}

impl RenderContext {
    pub(crate) fn new(options: &Options) -> Self {
        let indent_unit = if options.tabs {
            "\t".to_string()
        } else {
            let width = match options.indent_width {
                0 => DEFAULT_INDENT_WIDTH,
                width => width,
            };
            " ".repeat(width)
        };
        let mut preserve_tags = HashSet::with_capacity(options.preserve_tags.len());
        for tag in &options.preserve_tags {
            preserve_tags.insert(tag.to_ascii_lowercase());
        }
        RenderContext {
            indent_unit,
            quote: if options.double_quotes { '"' } else { '\'' },
            separator: if options.commas { ", " } else { " " },
            preserve_tags,
            collapse: options.collapse,
            sibling_spacing: options.sibling_spacing,
            omit_pre: options.omit_pre,
        }
    }

    pub(crate) fn indent(&self, depth: usize) -> String {
        self.indent_unit.repeat(depth)
    }

    pub(crate) fn is_preserve_tag(&self, name: &str) -> bool {
        self.preserve_tags.contains(&name.to_ascii_lowercase())
    }

    pub(crate) fn is_omitted_pre(&self, name: &str) -> bool {
        self.omit_pre && name.eq_ignore_ascii_case("pre")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_defaults_to_two_spaces() {
        let context = RenderContext::new(&Options::default());
        assert_eq!(context.indent(2), "    ");
    }

    #[test]
    fn test_zero_width_falls_back_to_default() {
        let context = RenderContext::new(&Options {
            indent_width: 0,
            ..Default::default()
        });
        assert_eq!(context.indent(1), "  ");
    }

    #[test]
    fn test_tabs_ignore_width() {
        let context = RenderContext::new(&Options {
            tabs: true,
            indent_width: 4,
            ..Default::default()
        });
        assert_eq!(context.indent(2), "\t\t");
    }

    #[test]
    fn test_preserve_tags_case_insensitive() {
        let context = RenderContext::new(&Options {
            preserve_tags: vec!["PRE".to_string()],
            ..Default::default()
        });
        assert!(context.is_preserve_tag("pre"));
        assert!(context.is_preserve_tag("Pre"));
        assert!(!context.is_preserve_tag("script"));
    }
}
