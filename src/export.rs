//! Flat tabular export of aspect results.

use crate::matcher::AspectResult;

/// Serializes results as CSV with columns From, To, Aspect, Orb.
///
/// Labels are user text, so fields containing the delimiter, quotes or
/// newlines are quoted per RFC 4180.
pub fn to_csv(results: &[AspectResult]) -> String {
    let mut out = String::from("From,To,Aspect,Orb\n");
    for result in results {
        out.push_str(&csv_field(&result.from));
        out.push(',');
        out.push_str(&csv_field(&result.to));
        out.push(',');
        out.push_str(&csv_field(&result.aspect));
        out.push(',');
        out.push_str(&result.orb_display());
        out.push('\n');
    }
    out
}

fn csv_field(field: &str) -> String {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
