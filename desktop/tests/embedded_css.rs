#![cfg(test)]
//! The desktop binary inlines `ui/assets/theme/main.css`; a broken path or a
//! truncated file would only show up as an unstyled window at runtime.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "embedded theme is empty"
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", "body {", ".dashboard__panels", ".tooltip {"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn line_reveal_runs_for_one_second() {
    assert!(EMBEDDED_CSS.contains("--reveal-duration: 1000ms;"));
    assert!(EMBEDDED_CSS.contains("@keyframes chart-line-reveal"));
}
