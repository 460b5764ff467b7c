//! Shared formatting helpers for sensor fragments.

pub const ICON_OS: &str = "🐧";
pub const ICON_CLOCK: &str = "⏰";
pub const ICON_MEDIA: &str = "🎵";
pub const ICON_CPU: &str = "💻";
pub const ICON_RAM: &str = "💾";
pub const ICON_GPU: &str = "🎮";

/// Placeholder used when a GPU utility answered with an unexpected shape
pub const GPU_PARSE_ERROR: &str = "Error retrieving GPU stats";
/// Placeholder used when a GPU utility could not be run at all
pub const GPU_UNAVAILABLE: &str = "No GPU or error retrieving GPU stats";

pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Prefix `body` with a source icon.
pub fn fragment(icon: &str, body: &str) -> String {
    format!("{} {}", icon, body)
}

/// Round to `decimals` places and render in shortest form, keeping at least
/// one decimal digit (`16.0`, `3.2`, `0.5`, `7.25`).
pub fn format_rounded(value: f64, decimals: u32) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    let mut text = format!("{:.*}", decimals.max(1) as usize, rounded);

    if text.contains('.') {
        while text.ends_with('0') && !text.ends_with(".0") {
            text.pop();
        }
    }

    text
}

/// Round like [`format_rounded`] but keep the number for further arithmetic.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Keep at most `max` characters of `text` (characters, not bytes).
pub fn clip_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rounded_keeps_one_decimal() {
        assert_eq!(format_rounded(16.0, 1), "16.0");
        assert_eq!(format_rounded(3.2, 2), "3.2");
        assert_eq!(format_rounded(0.5, 2), "0.5");
        assert_eq!(format_rounded(7.254, 2), "7.25");
        assert_eq!(format_rounded(15.55555, 1), "15.6");
    }

    #[test]
    fn test_clip_chars_respects_multibyte() {
        assert_eq!(clip_chars("héllo wörld", 4), "héll");
        assert_eq!(clip_chars("short", 25), "short");
        assert_eq!(clip_chars("", 3), "");
    }

    #[test]
    fn test_fragment_prefixes_icon() {
        assert_eq!(fragment(ICON_GPU, GPU_PARSE_ERROR), "🎮 Error retrieving GPU stats");
    }
}
