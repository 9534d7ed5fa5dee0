use owo_colors::OwoColorize;

/// Hue sweep used to colour multi-line banners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    /// Hue of the first column, in degrees
    pub start_hue: f32,
    /// Degrees travelled from the first to the last column
    pub sweep: f32,
    pub saturation: f32,
    pub value: f32,
}

/// Soft pastel sweep starting at #74ebd5 and going once around the wheel
pub const PASTEL: Gradient = Gradient {
    start_hue: 168.9,
    sweep: 360.0,
    saturation: 0.506,
    value: 0.92,
};

/// Convert an HSV colour (hue in degrees, saturation and value in 0..=1) to RGB
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> (u8, u8, u8) {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = value * saturation;
    let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
    let m = value - c;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}

impl Gradient {
    /// Colour at position `t` (0.0 is the first column, 1.0 the last)
    pub fn color_at(&self, t: f32) -> (u8, u8, u8) {
        let t = t.clamp(0.0, 1.0);
        hsv_to_rgb(self.start_hue + self.sweep * t, self.saturation, self.value)
    }

    /// Colour `text` column by column, so every line shares the same sweep
    pub fn multiline(&self, text: &str) -> String {
        let width = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let span = width.saturating_sub(1).max(1) as f32;

        let mut out = String::with_capacity(text.len() * 8);
        for (n, line) in text.lines().enumerate() {
            if n > 0 {
                out.push('\n');
            }
            for (column, ch) in line.chars().enumerate() {
                if ch.is_whitespace() {
                    out.push(ch);
                    continue;
                }
                let (r, g, b) = self.color_at(column as f32 / span);
                out.push_str(&ch.truecolor(r, g, b).to_string());
            }
        }
        out
    }
}
