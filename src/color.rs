//! Deterministic chart colors.
//!
//! Category colors must stay stable across sessions so the same insurance
//! line always renders in the same color. The hue comes from a rolling hash
//! of the label's UTF-16 code units; only the shift term wraps to 32 bits,
//! the accumulator keeps full precision. That exact mix is what keeps colors
//! identical to those produced for data exported by older versions of the
//! app.

/// Map a tailwind color family name to its 500-shade hex value. Unknown
/// names get a neutral gray.
pub fn tailwind_hex(name: &str) -> &'static str {
    match name.to_ascii_lowercase().as_str() {
        "blue" => "#3B82F6",
        "yellow" => "#EAB308",
        "orange" => "#F97316",
        "purple" => "#8B5CF6",
        "indigo" => "#6366F1",
        "green" => "#10B981",
        "red" => "#EF4444",
        "gray" => "#6B7280",
        _ => "#CCCCCC",
    }
}

/// Deterministic HSL color for a category label, at 70% saturation and 50%
/// lightness.
pub fn string_hue_color(label: &str) -> String {
    format!("hsl({}, 70%, 50%)", string_hue(label))
}

fn string_hue(label: &str) -> u32 {
    let mut hash: i64 = 0;
    for unit in label.encode_utf16() {
        let shifted = i64::from((hash as i32).wrapping_shl(5));
        hash = i64::from(unit) + (shifted - hash);
    }
    (hash % 360).unsigned_abs() as u32
}
