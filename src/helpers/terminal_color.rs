/// ANSI 24-bit color helpers for printing chart colors in a terminal.
pub struct TerminalColor;

impl TerminalColor {
    /// Parses `#RRGGBB` (the leading `#` is optional). Any trailing alpha
    /// digits are ignored.
    pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
        let hex = color.trim_start_matches('#');
        if hex.len() < 6 || !hex.is_ascii() {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn foreground(color: &str, text: &str) -> String {
        match Self::parse_hex(color) {
            Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m"),
            None => text.to_string(),
        }
    }

    pub fn block(color: &str) -> String {
        Self::foreground(color, "■")
    }
}
