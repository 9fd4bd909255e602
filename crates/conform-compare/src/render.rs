//! Text renderings of values used in failure reports.
//!
//! All helpers are pure. The block layout shared by [`print`], [`export`]
//! and the comparator diffs is:
//!
//! ```text
//! Array
//! (
//!     [key] => value
//!     [nested] => Array
//!         (
//!             [0] => 1
//!         )
//! )
//! ```

use conform_types::{Key, KeyedArray, Value};

/// Continuation prefix added by [`indent`].
pub const INDENT_UNIT: &str = "        ";

/// Title of a keyed-collection block.
pub const ARRAY_TITLE: &str = "Array";

/// Opening lines of a block titled `title`.
pub fn block_header(title: &str) -> String {
    format!("{title}\n(\n")
}

/// Append one `    [key] => rendered` line to a block buffer.
pub fn push_line(buf: &mut String, key: &Key, rendered: &str) {
    buf.push_str(&format!("    [{key}] => {rendered}\n"));
}

/// Re-indent a multi-line rendering so it nests under a parent line.
///
/// Every line after the first gains [`INDENT_UNIT`]; surrounding whitespace
/// is trimmed.
pub fn indent(text: &str) -> String {
    text.replace('\n', &format!("\n{INDENT_UNIT}"))
        .trim()
        .to_string()
}

/// Depth-1 preview of a value for a diff line.
///
/// Non-empty collections render as `Array (...)`, empty ones as `Array`,
/// objects as `<Class> Object (...)`. Scalars use their printed form.
pub fn shortened_export(value: &Value) -> String {
    match value {
        Value::Array(array) if array.is_empty() => ARRAY_TITLE.to_string(),
        Value::Array(_) => format!("{ARRAY_TITLE} (...)"),
        Value::Object(object) => format!("{} Object (...)", object.class),
        scalar => print(scalar),
    }
}

/// Full recursive rendering with strings printed raw.
pub fn print(value: &Value) -> String {
    render(value, false)
}

/// Full recursive rendering with strings single-quoted and escaped.
pub fn export(value: &Value) -> String {
    render(value, true)
}

/// Rendering of a value nested under a parent key: composite values are
/// indented, scalars are printed as-is.
pub fn nested(value: &Value) -> String {
    if value.is_scalar() {
        print(value)
    } else {
        indent(&print(value))
    }
}

fn render(value: &Value, quote: bool) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Str(s) if quote => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
        Value::Str(s) => s.clone(),
        Value::Array(array) => render_block(ARRAY_TITLE, array, quote),
        Value::Object(object) => {
            render_block(&format!("{} Object", object.class), &object.properties, quote)
        }
    }
}

fn render_block(title: &str, entries: &KeyedArray, quote: bool) -> String {
    let mut out = block_header(title);
    for (key, value) in entries {
        let rendered = render(value, quote);
        let rendered = if value.is_scalar() { rendered } else { indent(&rendered) };
        push_line(&mut out, key, &rendered);
    }
    out.push(')');
    out
}
