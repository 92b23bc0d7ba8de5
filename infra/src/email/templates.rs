//! HTML email templates
//!
//! Placeholders are written `{{key}}` and filled from the notification data.
//! Values are HTML-escaped; a key with no value renders as an empty string.

use std::collections::HashMap;

use ma_core::services::notification::TemplateKind;

/// Subject and HTML body ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; background-color: #f4f4f4; margin: 0; padding: 0; }
    .container { max-width: 600px; margin: 20px auto; background-color: #fff; padding: 20px; border-radius: 10px; box-shadow: 0 0 10px rgba(0, 0, 0, 0.1); }
    h2 { color: #333; }
    p { color: #666; line-height: 1.6; }
    .button { display: inline-block; background-color: #007bff; color: #fff; text-decoration: none; padding: 10px 20px; border-radius: 5px; margin-top: 20px; }
    .verification-code { font-size: 24px; font-weight: bold; padding: 10px 20px; color: #808080; border-radius: 5px; margin-top: 20px; }
"#;

const PASSWORD_RESET: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Password Reset</title>
<style>{{style}}</style>
</head>
<body>
<div class="container">
    <h2>Password Reset</h2>
    <p>Dear {{user}},</p>
    <p>We received a request to reset your password. If you did not make this request, you can ignore this email.</p>
    <p>To reset your password, click the button below:</p>
    <a href="{{resetLink}}" class="button">Reset Password</a>
    <p>If the button above doesn't work, copy and paste the following link into your browser:</p>
    <p>{{resetLink}}</p>
    <p>This link expires in 5 minutes.</p>
</div>
</body>
</html>
"#;

const VERIFICATION_CODE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Email Verification Code</title>
<style>{{style}}</style>
</head>
<body>
<div class="container">
    <h2>Email Verification Code</h2>
    <p>Dear {{user}},</p>
    <p>Your verification code is:</p>
    <div class="verification-code">{{code}}</div>
    <p>This code expires in 2 minutes. Please use it to verify your email address.</p>
    <p>If you didn't request this verification code, you can safely ignore this email.</p>
</div>
</body>
</html>
"#;

const CUSTOM: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{{header}}</title>
<style>{{style}}</style>
</head>
<body>
<div class="container">
    <h2>{{subHeader}}</h2>
    <p>{{title}}</p>
    <p>{{subTitle}}</p>
    <a href="{{buttonLink}}" class="button">{{buttonLabel}}</a>
    <p>{{body}}</p>
    <p>{{footer}}</p>
</div>
</body>
</html>
"#;

/// Subject line for a template
pub fn subject(kind: TemplateKind, data: &HashMap<String, String>) -> String {
    match kind {
        TemplateKind::PasswordReset => "Password Reset".to_string(),
        TemplateKind::VerificationCode => "Email Verification Code".to_string(),
        TemplateKind::Custom => data
            .get("header")
            .filter(|h| !h.is_empty())
            .cloned()
            .unwrap_or_else(|| "Notification".to_string()),
    }
}

/// Render the subject and HTML body of a notification
pub fn render(kind: TemplateKind, data: &HashMap<String, String>) -> RenderedEmail {
    let template = match kind {
        TemplateKind::PasswordReset => PASSWORD_RESET,
        TemplateKind::VerificationCode => VERIFICATION_CODE,
        TemplateKind::Custom => CUSTOM,
    };

    RenderedEmail {
        subject: subject(kind, data),
        html: substitute(template, data),
    }
}

fn substitute(template: &str, data: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = after[..end].trim();
                if key == "style" {
                    out.push_str(STYLE);
                } else if let Some(value) = data.get(key) {
                    out.push_str(&escape_html(value));
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
