/// Convert a `#rrggbb` colour into an `rgba()` expression.
///
/// Missing or unparseable channels read as zero.
pub fn hex_to_rgba(hex: &str, alpha: f32) -> String {
    let digits = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(0)
    };
    format!(
        "rgba({}, {}, {}, {alpha})",
        channel(0..2),
        channel(2..4),
        channel(4..6)
    )
}
