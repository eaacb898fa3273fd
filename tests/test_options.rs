use rstest::rstest;

use pugot::{convert, Options, SiblingSpacing};

#[test]
fn test_tabs() {
    let options = Options {
        tabs: true,
        ..Default::default()
    };
    let html = "<ul><li>a</li><li>b</li></ul>";
    assert_eq!(convert(html, &options).unwrap(), "ul\n\tli a\n\tli b");
}

#[rstest]
#[case(0, "ul\n  li a\n  li b")]
#[case(3, "ul\n   li a\n   li b")]
fn test_indent_width(#[case] indent_width: usize, #[case] expected: &str) {
    let options = Options {
        indent_width,
        ..Default::default()
    };
    let html = "<ul><li>a</li><li>b</li></ul>";
    assert_eq!(convert(html, &options).unwrap(), expected);
}

#[rstest]
#[case(false, true, r#"a(href="/" title="x") y"#)]
#[case(true, true, r#"a(href="/", title="x") y"#)]
#[case(false, false, r#"a(href='/' title='x') y"#)]
#[case(true, false, r#"a(href='/', title='x') y"#)]
fn test_attribute_style(#[case] commas: bool, #[case] double_quotes: bool, #[case] expected: &str) {
    let options = Options {
        commas,
        double_quotes,
        ..Default::default()
    };
    let html = r#"<a href="/" title="x">y</a>"#;
    assert_eq!(convert(html, &options).unwrap(), expected);
}

#[test]
fn test_textarea_is_preserved_by_default() {
    let html = "<textarea>\n  line one\n    line two\n</textarea>";
    assert_eq!(
        convert(html, &Options::default()).unwrap(),
        "textarea.\n  line one\n    line two"
    );
}

#[test]
fn test_custom_preserve_tags() {
    let options = Options {
        preserve_tags: vec!["CODE".to_string()],
        ..Default::default()
    };
    let html = "<div><code>\n  a\n    b\n</code><pre>\n  a\n    b\n</pre></div>";
    assert_eq!(
        convert(html, &options).unwrap(),
        "div\n  code.\n    a\n      b\n  pre\n    | a\n    | b"
    );
}

#[test]
fn test_sibling_spacing_off() {
    let html = "<p>Hello<b>big</b>world</p>";
    assert_eq!(
        convert(html, &Options::default()).unwrap(),
        "p\n  | Hello\n  b big\n  | world"
    );
}

#[test]
fn test_sibling_spacing_inline() {
    let options = Options {
        sibling_spacing: SiblingSpacing::Inline,
        ..Default::default()
    };
    let html = "<p>Hello<b>big</b>world</p>";
    assert_eq!(
        convert(html, &options).unwrap(),
        "p\n  | Hello \n  b big\n  |  world"
    );
}

#[test]
fn test_sibling_spacing_lines() {
    let options = Options {
        sibling_spacing: SiblingSpacing::Lines,
        ..Default::default()
    };
    let html = "<p>Hello <b>big</b> world</p>";
    assert_eq!(
        convert(html, &options).unwrap(),
        "p\n  | Hello\n  |  \n  b big\n  |  \n  | world"
    );
}

#[test]
fn test_omit_pre() {
    let options = Options {
        omit_pre: true,
        ..Default::default()
    };
    let html = "<pre>\n  secret\n</pre>";
    assert_eq!(
        convert(html, &options).unwrap(),
        "pre\n  //- content omitted"
    );
}
