#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The dashboard components emit these class names and toggles; if a refactor
drops one from `ui/assets/theme/main.css` the packaged desktop app silently
loses that styling. A substring check is enough as an early warning.

When renaming a selector, update the component markup and this list together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".theme-night",
    // Buttons & shared UI
    ".button {",
    ".button--ghost",
    ".chip[aria-pressed=\"true\"]",
    ".badge--focus",
    ".badge--hint",
    ".banner--error",
    // Mode switch, summary and tabs
    ".mode-switch__button[aria-pressed=\"true\"]",
    ".summary {",
    ".tabs__tab[aria-selected=\"true\"]",
    ".panel[hidden]",
    // Chart cards
    ".chart-card {",
    ".chart-card__chart",
    ".chart-canvas--faded",
    ".chart-shape--active",
    ".chart-tooltip",
    ".callouts.show",
    // Compare extras
    ".compare-grid.show",
    ".compare-grid__row",
    ".combined-charts__grid",
    // Export & modals
    ".export__actions",
    ".export__status--error",
    ".modal-backdrop",
    ".modal {",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(**sel))
        .copied()
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars); \
         did the file get truncated or the path change?"
    );
}

#[test]
fn fade_and_callout_toggles_come_in_pairs() {
    // Each toggled class needs its hidden base state too.
    for (base, on) in [
        (".callouts {", ".callouts.show"),
        (".compare-grid {", ".compare-grid.show"),
        (".chart-canvas {", ".chart-canvas--faded"),
    ] {
        assert!(
            THEME_CSS.contains(base) && THEME_CSS.contains(on),
            "Expected both `{base}` and `{on}` in theme"
        );
    }
}
