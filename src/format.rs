//! Plain-text table rendering for the "show" actions.

/// Width of the `=` rule printed under the header.
const SEPARATOR_WIDTH: usize = 60;

/// Build a tab-delimited text block: header, separator, then one line per row
/// in the order given. Every line ends with a newline.
pub fn render_table<R, C>(headers: &[&str], rows: R) -> String
where
    R: IntoIterator<Item = Vec<C>>,
    C: AsRef<str>,
{
    let mut text = headers.join("\t");
    text.push('\n');
    text.push_str(&"=".repeat(SEPARATOR_WIDTH));
    text.push('\n');

    for row in rows {
        let cells: Vec<&str> = row.iter().map(|c| c.as_ref()).collect();
        text.push_str(&cells.join("\t"));
        text.push('\n');
    }

    text
}

/// Render a nullable cell, NULL becoming an empty string.
pub fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Render a REAL column the way it reads back from SQLite: whole values keep
/// a trailing `.0` so an amount never looks like an integer column.
pub fn decimal(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}
