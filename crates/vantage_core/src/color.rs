//! Color type

/// RGBA color (linear space)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Linear interpolation between two colors
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }

    /// Euclidean distance in RGBA space
    ///
    /// Used as the remaining-delta magnitude when deciding whether a color
    /// transition has effectively arrived.
    pub fn distance(a: &Color, b: &Color) -> f32 {
        let dr = a.r - b.r;
        let dg = a.g - b.g;
        let db = a.b - b.b;
        let da = a.a - b.a;
        (dr * dr + dg * dg + db * db + da * da).sqrt()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lerp_clamps_t() {
        let mid = Color::lerp(&Color::BLACK, &Color::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);

        // t outside [0,1] clamps to the endpoints
        let over = Color::lerp(&Color::BLACK, &Color::WHITE, 2.0);
        assert_eq!(over, Color::WHITE);
        let under = Color::lerp(&Color::BLACK, &Color::WHITE, -1.0);
        assert_eq!(under, Color::BLACK);
    }

    #[test]
    fn test_color_distance() {
        assert!((Color::distance(&Color::BLACK, &Color::BLACK)).abs() < 1e-6);

        // Black to white: sqrt(3) across r/g/b, alpha equal
        let d = Color::distance(&Color::BLACK, &Color::WHITE);
        assert!((d - 3.0_f32.sqrt()).abs() < 1e-6);

        // Symmetric
        let a = Color::rgb(0.2, 0.4, 0.6);
        let b = Color::rgb(0.9, 0.1, 0.3);
        assert!((Color::distance(&a, &b) - Color::distance(&b, &a)).abs() < 1e-6);
    }

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex(0xFF8000);
        assert!((c.r - 1.0).abs() < 1e-6);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 0.0).abs() < 1e-6);
        assert!((c.a - 1.0).abs() < 1e-6);
    }
}
