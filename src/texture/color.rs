// color.rs - CSS-style HSL colors
//
// Hue in degrees, saturation and lightness in percent. Out-of-range
// percentages clamp the way a browser does, so a lightness of 140% is
// plain white.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub const fn gray(l: f64) -> Self {
        Self::new(0.0, 0.0, l)
    }

    pub fn to_rgb(self) -> (u8, u8, u8) {
        let h = self.h.rem_euclid(360.0);
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        (channel(r + m), channel(g + m), channel(b + m))
    }

    /// Opaque RGBA
    pub fn to_rgba(self) -> [u8; 4] {
        let (r, g, b) = self.to_rgb();
        [r, g, b, 255]
    }

    pub fn to_css(self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

#[inline]
fn channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
