//! Advance-width metrics for the PDF standard-14 Helvetica fonts.
//!
//! The cover page is drawn with Helvetica and Helvetica-Bold, which every
//! conforming PDF reader ships built in, so no font program is embedded.
//! Word wrapping still needs to measure text, and for the standard fonts the
//! advance widths are fixed by their AFM files. The tables below carry those
//! widths (in 1/1000 em units) for the printable ASCII range.

/// AFM advance widths for Helvetica, characters 0x20..=0x7E.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20-0x2F
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0x30-0x3F
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // 0x40-0x4F
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 0x50-0x5F
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 0x60-0x6F
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 0x70-0x7E
];

/// AFM advance widths for Helvetica-Bold, characters 0x20..=0x7E.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20-0x2F
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0x30-0x3F
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // 0x40-0x4F
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 0x50-0x5F
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 0x60-0x6F
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 0x70-0x7E
];

/// Fallback advance width for characters outside the table (digit width).
const DEFAULT_WIDTH: u16 = 556;

/// Metrics for one of the standard-14 Helvetica faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontMetrics {
    Helvetica,
    HelveticaBold,
}

impl FontMetrics {
    /// PDF BaseFont name for this face.
    pub const fn base_font(self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Advance width of a single character in 1/1000 em units.
    pub fn char_width(self, c: char) -> u16 {
        let table = match self {
            Self::Helvetica => &HELVETICA_WIDTHS,
            Self::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        };
        let code = c as u32;
        if (0x20..=0x7E).contains(&code) {
            table[(code - 0x20) as usize]
        } else {
            DEFAULT_WIDTH
        }
    }

    /// Calculate the width of a string in PDF points at the given font size.
    #[allow(clippy::cast_precision_loss)] // Precision loss acceptable for width calculations
    pub fn string_width(self, text: &str, font_size: f32) -> f32 {
        let total_units: u32 = text.chars().map(|c| u32::from(self.char_width(c))).sum();
        total_units as f32 * font_size / 1000.0
    }
}
