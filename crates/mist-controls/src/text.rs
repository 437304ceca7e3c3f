//! Label measurement.

/// Measures label widths in pixels. Implemented by whatever owns fonts.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> i32;
}

/// Monospace stand-in: every character advances by the same width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidthMeasure {
    pub advance: i32,
}

impl FixedWidthMeasure {
    pub fn new(advance: i32) -> Self {
        Self { advance }
    }
}

impl TextMeasure for FixedWidthMeasure {
    fn measure(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.advance
    }
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> i32,
{
    fn measure(&self, text: &str) -> i32 {
        self(text)
    }
}
