//! Loading indicator driven by the tick counter

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Glyph for the given tick. Ticks arrive every 50ms; one frame per two ticks.
pub fn glyph(tick: usize) -> &'static str {
    FRAMES[(tick / 2) % FRAMES.len()]
}

/// `"<glyph> <text>"`
pub fn label(tick: usize, text: &str) -> String {
    format!("{} {}", glyph(tick), text)
}
