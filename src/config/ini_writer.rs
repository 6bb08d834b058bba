use std::fmt::Write;

use ini::Ini;

/// Renders `document` as INI text that `Ini::load_from_*` reads back unchanged.
///
/// Values with surrounding whitespace or a leading/trailing quote are written
/// double-quoted, since the reader trims bare values and strips quotes.
pub fn render_document(document: &Ini) -> String {
    let mut out = String::new();
    let mut first = true;

    for (section, props) in document.iter() {
        if props.is_empty() && section.is_none() {
            continue;
        }

        if !first {
            out.push('\n');
        }
        first = false;

        if let Some(name) = section {
            let _ = writeln!(out, "[{}]", encode_section(name));
        }

        for (key, value) in props.iter() {
            let _ = writeln!(out, "{}={}", encode_key(key), encode_value(value));
        }
    }

    out
}

fn encode_section(name: &str) -> String {
    let mut encoded = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '[' | ']' => {
                encoded.push('\\');
                encoded.push(c);
            }
            _ => push_escaped(&mut encoded, c, false),
        }
    }
    encoded
}

fn encode_key(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    for (index, c) in key.chars().enumerate() {
        match c {
            ';' | '#' | '=' | ':' => {
                encoded.push('\\');
                encoded.push(c);
            }
            '[' if index == 0 => encoded.push_str("\\["),
            _ => push_escaped(&mut encoded, c, false),
        }
    }
    encoded
}

fn encode_value(value: &str) -> String {
    if needs_quotes(value) {
        return format!("\"{}\"", escape(value, true));
    }

    escape(value, false)
}

fn needs_quotes(value: &str) -> bool {
    value.trim() != value
        || value.starts_with(['"', '\''])
        || value.ends_with(['"', '\''])
}

fn escape(raw: &str, quoted: bool) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        push_escaped(&mut escaped, c, quoted);
    }
    escaped
}

fn push_escaped(out: &mut String, c: char, quoted: bool) {
    match c {
        '\\' => out.push_str("\\\\"),
        '"' if quoted => out.push_str("\\\""),
        '\0' => out.push_str("\\0"),
        '\t' => out.push_str("\\t"),
        '\r' => out.push_str("\\r"),
        '\n' => out.push_str("\\n"),
        c if c.is_ascii_control() => {
            let _ = write!(out, "\\x{:04x}", u32::from(c));
        }
        c => out.push(c),
    }
}
