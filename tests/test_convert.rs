use insta::assert_snapshot;
use rstest::rstest;

use pugot::{convert, Options};

fn pug(html: &str) -> String {
    convert(html, &Options::default()).unwrap()
}

#[rstest]
#[case(r#"<div class="foo"/>"#, ".foo")]
#[case(r#"<div class="foo:hover"/>"#, r#"div(class="foo:hover")"#)]
#[case(r#"<div class="x-translate-1/2"/>"#, r#"div(class="x-translate-1/2")"#)]
#[case(r#"<div class="p-1.5"/>"#, r#"div(class="p-1.5")"#)]
#[case(r#"<div class="p-a foo:hover"/>"#, r#".p-a(class="foo:hover")"#)]
#[case(r#"<div id="app" class="p-a foo:hover"/>"#, r#"#app.p-a(class="foo:hover")"#)]
#[case(
    r#"<div data-position="0" class="foo:hover"/>"#,
    r#"div(data-position="0" class="foo:hover")"#
)]
#[case(r#"<span class="foo"/>"#, "span.foo")]
#[case(r#"<div id="app"/>"#, "#app")]
fn test_attributes(#[case] html: &str, #[case] expected: &str) {
    assert_eq!(pug(html), expected);
}

#[rstest]
#[case(
    r#"<div class="foo:hover">Hello World</div>"#,
    r#"div(class="foo:hover") Hello World"#
)]
#[case("<div>Hello World </div>", "div Hello World ")]
#[case("<pre>Hello World</pre>", "pre Hello World")]
#[case("<p>Tom &amp; Jerry</p>", "p Tom & Jerry")]
#[case("<p>a < b</p>", "p a < b")]
fn test_inline_text(#[case] html: &str, #[case] expected: &str) {
    assert_eq!(pug(html), expected);
}

#[test]
fn test_text_between_elements_keeps_spaces() {
    let html = "<div><a>Hello World</a> | <a>Hello Universe</a></div>";
    assert_eq!(
        pug(html),
        "div\n  a Hello World\n  |  | \n  a Hello Universe"
    );
}

#[test]
fn test_pre_multiline() {
    let html = "\n<pre>\n  Hello World\n  Hello Universe\n</pre>";
    assert_eq!(pug(html), "pre.\n  Hello World\n  Hello Universe");
}

#[test]
fn test_pre_multiline_empty_line() {
    let html = "\n<pre>\n  Hello World\n\n  Hello Universe\n</pre>";
    assert_eq!(pug(html), "pre.\n  Hello World\n\n  Hello Universe");
}

const COMPLEX_STRUCTURE: &str = r#"div(class="sm:mr-6")
  svg.w-6.h-6(fill="currentColor" viewBox="0 0 20 20")
    path(fill-rule="evenodd" d="..." clip-rule="evenodd")
    path(d="...")
  | Full-time"#;

#[rstest]
#[case(
    r#"
  <div class="sm:mr-6">
    <svg class="w-6 h-6" fill="currentColor" viewBox="0 0 20 20">
      <path fill-rule="evenodd" d="..." clip-rule="evenodd" />
      <path d="..." />
    </svg>
    Full-time
  </div>"#
)]
#[case(
    "
  <div class=\"sm:mr-6\">
  \t<svg class=\"w-6 h-6\" fill=\"currentColor\" viewBox=\"0 0 20 20\">
  \t\t<path fill-rule=\"evenodd\" d=\"...\" clip-rule=\"evenodd\" />
  \t\t<path d=\"...\" />
  \t</svg>
  \tFull-time
  </div>"
)]
fn test_complex_structure(#[case] html: &str) {
    assert_eq!(pug(html), COMPLEX_STRUCTURE);
}

#[test]
fn test_collapse() {
    let html = r#"<div id="app"><span>Hello World</span></div>"#;
    assert_eq!(pug(html), "#app: span Hello World");
}

#[test]
fn test_no_collapse() {
    let html = r#"<div id="app"><span>Hello World</span></div>"#;
    let options = Options {
        collapse: false,
        ..Default::default()
    };
    assert_eq!(convert(html, &options).unwrap(), "#app\n  span Hello World");
}

#[test]
fn test_whitespace_between_elements_produces_no_lines() {
    let html = "<ul>\n\n  <li>a</li>\n  \n  <li>b</li>\n</ul>";
    assert_eq!(pug(html), "ul\n  li a\n  li b");
}

#[test]
fn test_document() {
    let html = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Example</title>
    <link rel="stylesheet" href="style.css">
  </head>
  <body>
    <!-- main content -->
    <main class="container">
      <h1>Hello</h1>
      <p>
        Some
        <em>emphasized</em>
        text.
      </p>
    </main>
    <script>
      window.ready = true;
      start();
    </script>
  </body>
</html>"#;
    assert_snapshot!(pug(html), @r###"
    doctype html
    html(lang="en")
      head
        meta(charset="utf-8")
        title Example
        link(rel="stylesheet" href="style.css")
      body
        // main content
        main.container
          h1 Hello
          p
            | Some
            em emphasized
            | text.
        script.
          window.ready = true;
          start();
    "###);
}

#[test]
fn test_absent_and_blank_input() {
    assert_eq!(convert(None::<&str>, &Options::default()).unwrap(), "");
    assert_eq!(convert("", &Options::default()).unwrap(), "");
    assert_eq!(convert(" \n\t ", &Options::default()).unwrap(), "");
}

#[rstest]
#[case(r#"<input type="checkbox" checked>"#, r#"input(type="checkbox" checked)"#)]
#[case("<input type=text>", r#"input(type="text")"#)]
#[case(r#"<script async src="a.js"></script>"#, r#"script(async src="a.js")"#)]
#[case(r#"<a title="one" title="two">x</a>"#, r#"a(title="one") x"#)]
#[case("<ul><li>a<li>b</ul>", "ul\n  li a\n  li b")]
fn test_everyday_html(#[case] html: &str, #[case] expected: &str) {
    assert_eq!(pug(html), expected);
}

#[test]
fn test_comment_before_doctype() {
    let html = "<!-- a --><!DOCTYPE html><html></html>";
    assert_eq!(pug(html), "// a\ndoctype html\nhtml\n  head\n  body");
}

#[test]
fn test_any_markup_converts() {
    for html in ["<div <", "</p>", "<", "<!DOCTYPE", "a & b <<< >"] {
        assert!(convert(html, &Options::default()).is_ok(), "{:?}", html);
    }
}

#[test]
fn test_deterministic() {
    let html = r#"<nav id="top"><a href="/">Home</a> <a href="/about">About</a></nav>"#;
    assert_eq!(pug(html), pug(html));
}
