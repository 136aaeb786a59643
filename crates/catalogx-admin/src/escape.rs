// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Escaping for values written into HTML attributes and CSS.

/// Escape a value for use inside a double- or single-quoted attribute.
pub fn esc_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Reduce a class name to `[A-Za-z0-9_-]`.
///
/// Percent-encoded octets are removed first so `a%20b` becomes `ab`.
pub fn sanitize_html_class(class: &str) -> String {
    let mut out = String::with_capacity(class.len());
    let mut chars = class.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '%' {
            let hex: String = chars.clone().take(2).collect();
            if hex.len() == 2 && hex.chars().all(|h| h.is_ascii_hexdigit()) {
                chars.nth(1);
                continue;
            }
        }
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            out.push(c);
        }
    }
    out
}

/// Make a JSON document safe to embed inside a `<script>` element.
pub(crate) fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/")
}
