//! End-to-end tests for `minify_document` over whole documents
//!
//! Each case exercises one observable property of the pipeline: comment
//! removal, whitespace collapse, attribute unquoting, self-closing trim,
//! literal protection, newline elimination and idempotence.

use htmlslim::{minify_document, Minifier};
use rstest::rstest;

#[rstest]
#[case("<p>a</p><!-- secret -->\n<p>b</p>", "<p>a</p><p>b</p>")]
#[case("<div>\n\n   <span>x</span>\n</div>", "<div><span>x</span></div>")]
#[case(r#"<div class="foo">"#, "<div class=foo>")]
#[case("<img src=x />", "<img src=x/>")]
#[case(
    "<div>\n  <code>hello   world</code>\n</div>",
    "<div><code>hello   world</code></div>"
)]
fn test_minified_output(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(minify_document(input), expected);
}

#[test]
fn test_comment_content_is_gone() {
    let out = minify_document("<p>a</p><!-- secret -->\n<p>b</p>");
    assert!(!out.contains("secret"));
    assert!(!out.contains("<!--"));
}

#[test]
fn test_quoted_url_with_space_is_untouched() {
    let input = r#"<a href="/path with space">"#;
    assert_eq!(minify_document(input), input);
}

#[test]
fn test_no_match_input_is_untouched() {
    let input = "<p>a b</p>";
    assert_eq!(minify_document(input), input);
}

#[test]
fn test_inline_script_blocks_are_joined() {
    let input = "<script>\nfunction f() {\n  if (x) {\n    g();\n  }\n}\n</script>";
    assert_eq!(
        minify_document(input),
        "<script>function f(){if (x){g(); }}</script>"
    );
}

#[test]
fn test_full_page() {
    let page = concat!(
        "<!DOCTYPE html>\n",
        "<html>\n",
        "  <head>\n",
        "    <title>Demo</title>\n",
        "    <!-- build: 2024 -->\n",
        "  </head>\n",
        "  <body class=\"page home\">\n",
        "    <div id=\"main\" class=\"content\">\n",
        "      <p>Hello   world</p>\n",
        "      <img src=\"logo.png\" />\n",
        "      <a href=\"/path with space\">link</a>\n",
        "      <code>let x  =  1;</code>\n",
        "    </div>\n",
        "  </body>\n",
        "</html>\n",
    );
    let out = minify_document(page);

    // Literal region survives byte-for-byte
    assert!(out.contains("<code>let x  =  1;</code>"));
    // Comment gone
    assert!(!out.contains("build"));
    // Quoted values with spaces or dots keep their quotes
    assert!(out.contains(r#"class="page home""#));
    assert!(out.contains(r#"src="logo.png"/>"#));
    assert!(out.contains(r#"href="/path with space""#));
    // Simple values lose theirs
    assert!(out.contains("id=main"));
    assert!(out.contains("class=content"));
    // No raw line breaks outside the protected region
    assert!(!out.replace("let x  =  1;", "").contains('\n'));
    assert!(out.len() < page.len());
}

#[rstest]
#[case("<div>\n\n   <span>x</span>\n</div>")]
#[case("<p>a</p>\n<code>a   b</code>")]
#[case("<script>\nfunction f() {\n  if (x) {\n    g();\n  }\n}\n</script>")]
#[case("<div id=\"a\" class=\"b\">\n  text\n</div>")]
#[case("")]
fn test_minify_is_idempotent(#[case] input: &str) {
    let once = minify_document(input);
    let twice = minify_document(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_concurrent_use_needs_no_coordination() {
    let minifier = Minifier::new();
    let input = "<div>\n  <p>x</p>\n</div>";
    let expected = minify_document(input);
    std::thread::scope(|scope| {
        for _ in 0..4 {
            let minifier = &minifier;
            let expected = &expected;
            scope.spawn(move || {
                assert_eq!(&minifier.minify(input), expected);
            });
        }
    });
}
