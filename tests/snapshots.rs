//! Snapshot tests for briefmark output.
//!
//! These use inline snapshots of whole documents rendered with bare
//! tags (list item classes are kept, since they tell the kinds apart).

use briefmark_render::{Markup, MarkupClasses, Renderer};

/// Helper to render markdown with bare tags.
fn render(input: &str) -> String {
    let markup = Markup::new(MarkupClasses::default().bare()).unwrap();
    Renderer::with_markup(markup).render(input)
}

// =============================================================================
// Heading Snapshots
// =============================================================================

#[test]
fn test_snapshot_heading_all_levels() {
    let input = r#"# H1
## H2
### H3
#### H4"#;
    insta::assert_snapshot!(render(input), @"<h1>H1</h1><br /><h2>H2</h2><br /><h3>H3</h3><br /><p>#### H4</p>");
}

// =============================================================================
// List Snapshots
// =============================================================================

#[test]
fn test_snapshot_unordered_list() {
    let input = r#"- Item 1
- Item 2
- Item 3"#;
    insta::assert_snapshot!(render(input), @r#"<ul><li class="ml-6 list-disc">Item 1</li><li class="ml-6 list-disc">Item 2</li><li class="ml-6 list-disc">Item 3</li></ul>"#);
}

#[test]
fn test_snapshot_ordered_list() {
    let input = r#"1. First
2. Second
3. Third"#;
    insta::assert_snapshot!(render(input), @r#"<ol><li class="ml-6 list-decimal">First</li><li class="ml-6 list-decimal">Second</li><li class="ml-6 list-decimal">Third</li></ol>"#);
}

#[test]
fn test_snapshot_indented_items_flatten() {
    let input = r#"- Level 1
  - Level 2
- Back to 1"#;
    insta::assert_snapshot!(render(input), @r#"<ul><li class="ml-6 list-disc">Level 1</li><li class="ml-6 list-disc">Level 2</li><li class="ml-6 list-disc">Back to 1</li></ul>"#);
}

// =============================================================================
// Document Snapshots
// =============================================================================

#[test]
fn test_snapshot_analysis_answer() {
    let input = r#"## Summary
The contract contains a **non-compete** clause.

### Risks
- Duration exceeds two years
- No compensation is offered

Consult a lawyer before signing."#;
    insta::assert_snapshot!(render(input), @r#"<h2>Summary</h2><br /><p>The contract contains a <strong>non-compete</strong> clause.</p><br /><h3>Risks</h3><br /><ul><li class="ml-6 list-disc">Duration exceeds two years</li><li class="ml-6 list-disc">No compensation is offered</li></ul><br /><br /><p>Consult a lawyer before signing.</p>"#);
}

#[test]
fn test_snapshot_default_classes() {
    let output = Renderer::new().render("# Notice\nPay **now**.");
    insta::assert_snapshot!(output, @r#"<h1 class="text-2xl font-bold my-4">Notice</h1><br /><p class="my-2">Pay <strong>now</strong>.</p>"#);
}
