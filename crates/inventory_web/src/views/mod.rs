//! Server-rendered HTML pages.
//!
//! # Responsibility
//! - Render every page from plain domain values.
//!
//! # Invariants
//! - Every user-provided string passes through [`escape`] before it is
//!   written into markup.
//! - Views never touch storage.

use actix_web::http::StatusCode;
use std::fmt::Write;

pub mod categories;
pub mod inventory;
pub mod items;

pub const APP_TITLE: &str = "Inventory Manager";

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Wraps page content in the shared document shell.
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | {app}</title>
</head>
<body>
    <nav>
        <a href="/inventory">Overview</a>
        <a href="/inventory/all">All Items</a>
        <a href="/inventory/cat">Categories</a>
        <a href="/inventory/create/item">New Item</a>
        <a href="/inventory/create/cat">New Category</a>
    </nav>
    <main>
        <h1>{title}</h1>
{content}
    </main>
</body>
</html>"#,
        title = escape(title),
        app = APP_TITLE,
        content = content,
    )
}

/// Renders the error list shown above a rejected form.
pub fn error_list(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let mut html = String::from("        <ul class=\"errors\">\n");
    for message in errors {
        let _ = writeln!(html, "            <li>{}</li>", escape(message));
    }
    html.push_str("        </ul>\n");
    html
}

/// Generic page for unexpected failures.
pub fn error_page(status: StatusCode) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    layout(
        reason,
        &format!(
            "        <p>Something went wrong ({}). Please try again.</p>\n",
            status.as_u16()
        ),
    )
}
