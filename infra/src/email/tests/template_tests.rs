//! Tests for template rendering

use std::collections::HashMap;

use ma_core::services::notification::TemplateKind;

use crate::email::templates::{render, subject};

fn data(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn test_verification_code_template() {
    let rendered = render(
        TemplateKind::VerificationCode,
        &data(&[("code", "04817263"), ("user", "nina@clinic.org")]),
    );

    assert_eq!(rendered.subject, "Email Verification Code");
    assert!(rendered.html.contains("04817263"));
    assert!(rendered.html.contains("Dear nina@clinic.org,"));
    assert!(!rendered.html.contains("{{"));
}

#[test]
fn test_reset_template_includes_link_twice() {
    let link = "https://portal.example/reset?token=abc";
    let rendered = render(TemplateKind::PasswordReset, &data(&[("resetLink", link), ("user", "lee")]));

    assert_eq!(rendered.subject, "Password Reset");
    assert_eq!(rendered.html.matches(link).count(), 2);
}

#[test]
fn test_missing_values_render_empty() {
    let rendered = render(TemplateKind::VerificationCode, &HashMap::new());
    assert!(rendered.html.contains("Dear ,"));
    assert!(rendered.html.contains(r#"<div class="verification-code"></div>"#));
}

#[test]
fn test_values_are_escaped() {
    let rendered = render(TemplateKind::Custom, &data(&[("body", "<script>alert(1)</script>")]));
    assert!(rendered.html.contains("&lt;script&gt;"));
    assert!(!rendered.html.contains("<script>"));
}

#[test]
fn test_custom_subject_uses_header() {
    assert_eq!(subject(TemplateKind::Custom, &data(&[("header", "Clinic update")])), "Clinic update");
    assert_eq!(subject(TemplateKind::Custom, &HashMap::new()), "Notification");
}
