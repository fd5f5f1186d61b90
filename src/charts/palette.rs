//! Chart colors shared by the egui plots and the SVG renderer.

/// An sRGB color as (red, green, blue).
pub type Rgb = (u8, u8, u8);

const PASTEL: [Rgb; 4] = [
    (161, 201, 244), // Blue
    (255, 180, 130), // Orange
    (141, 229, 161), // Green
    (255, 159, 155), // Red
];

const SET2: [Rgb; 4] = [
    (102, 194, 165), // Teal
    (252, 141, 98),  // Orange
    (141, 160, 203), // Lavender
    (231, 138, 195), // Pink
];

/// Colors of the weather series, in series order.
const TAB10: [Rgb; 4] = [
    (31, 119, 180), // Blue
    (255, 127, 14), // Orange
    (44, 160, 44),  // Green
    (214, 39, 40),  // Red
];

/// Which palette a bar chart uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarPalette {
    /// Working day / holiday bars
    Pastel,
    /// Season bars
    Set2,
}

impl BarPalette {
    fn colors(self) -> &'static [Rgb] {
        match self {
            BarPalette::Pastel => &PASTEL,
            BarPalette::Set2 => &SET2,
        }
    }

    /// Color of the `index`-th bar, cycling through the palette.
    pub fn color(self, index: usize) -> Rgb {
        let colors = self.colors();
        colors[index % colors.len()]
    }
}

/// Color of the `index`-th line series, cycling through [`TAB10`].
pub fn series_color(index: usize) -> Rgb {
    TAB10[index % TAB10.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_cycle() {
        assert_eq!(BarPalette::Set2.color(0), (102, 194, 165));
        assert_eq!(BarPalette::Pastel.color(5), BarPalette::Pastel.color(1));
        assert_eq!(series_color(4), series_color(0));
        assert_ne!(BarPalette::Pastel.colors(), BarPalette::Set2.colors());
    }
}
