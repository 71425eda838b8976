//! Colour statistics of a leaf photo.
//!
//! The dashboard resizes an uploaded photo to 224x224 and hands over the raw
//! RGBA buffer. Each pixel is tested against four colour classes; a pixel
//! may fall into several classes or none. Alpha is ignored.
//!
//! | Class  | Rule                                   |
//! |--------|----------------------------------------|
//! | brown  | `r > 100 && r > g && g > 50 && b < 100` |
//! | yellow | `r > 150 && g > 150 && b < 100`         |
//! | dark   | `r < 80 && g < 80 && b < 80`            |
//! | green  | `g > r && g > b && g > 100`             |

use crate::error::AdvisorError;

/// Side length of the square sample the dashboard extracts.
pub const SAMPLE_SIDE: u32 = 224;

/// Bytes per RGBA pixel.
const BYTES_PER_PIXEL: usize = 4;

/// Pixel counts per colour class over one image sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageStatistics {
    total: u64,
    brown: u64,
    yellow: u64,
    dark: u64,
    green: u64,
}

impl ImageStatistics {
    /// Classify every pixel of an RGBA buffer.
    ///
    /// Fails when the buffer is empty or its length is not a multiple of 4.
    pub fn from_rgba(buffer: &[u8]) -> Result<Self, AdvisorError> {
        if buffer.is_empty() {
            return Err(AdvisorError::EmptyImage);
        }
        if buffer.len() % BYTES_PER_PIXEL != 0 {
            return Err(AdvisorError::MalformedPixelBuffer { len: buffer.len() });
        }

        let mut stats = Self {
            total: 0,
            brown: 0,
            yellow: 0,
            dark: 0,
            green: 0,
        };
        for pixel in buffer.chunks_exact(BYTES_PER_PIXEL) {
            if let &[r, g, b, _alpha] = pixel {
                stats.record(r, g, b);
            }
        }
        Ok(stats)
    }

    /// Build statistics from pre-computed class counts.
    ///
    /// Each class count must not exceed `total`, and `total` must be
    /// non-zero.
    pub fn from_counts(
        total: u64,
        brown: u64,
        yellow: u64,
        dark: u64,
        green: u64,
    ) -> Result<Self, AdvisorError> {
        if total == 0 {
            return Err(AdvisorError::EmptyImage);
        }
        let clamp = |count: u64| count.min(total);
        Ok(Self {
            total,
            brown: clamp(brown),
            yellow: clamp(yellow),
            dark: clamp(dark),
            green: clamp(green),
        })
    }

    fn record(&mut self, r: u8, g: u8, b: u8) {
        self.total = self.total.saturating_add(1);
        if r > 100 && r > g && g > 50 && b < 100 {
            self.brown = self.brown.saturating_add(1);
        }
        if r > 150 && g > 150 && b < 100 {
            self.yellow = self.yellow.saturating_add(1);
        }
        if r < 80 && g < 80 && b < 80 {
            self.dark = self.dark.saturating_add(1);
        }
        if g > r && g > b && g > 100 {
            self.green = self.green.saturating_add(1);
        }
    }

    /// Number of pixels sampled.
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Fraction of brown pixels.
    pub fn brown_ratio(&self) -> f64 {
        self.ratio(self.brown)
    }

    /// Fraction of yellow pixels.
    pub fn yellow_ratio(&self) -> f64 {
        self.ratio(self.yellow)
    }

    /// Fraction of dark pixels.
    pub fn dark_ratio(&self) -> f64 {
        self.ratio(self.dark)
    }

    /// Fraction of green pixels.
    pub fn green_ratio(&self) -> f64 {
        self.ratio(self.green)
    }

    // `total` is never zero once constructed.
    #[allow(clippy::cast_precision_loss)]
    fn ratio(&self, count: u64) -> f64 {
        count as f64 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(rgb: [u8; 3], pixels: usize) -> Vec<u8> {
        let [r, g, b] = rgb;
        std::iter::repeat_n([r, g, b, 255], pixels).flatten().collect()
    }

    #[test]
    fn empty_buffer_is_rejected() {
        assert!(matches!(
            ImageStatistics::from_rgba(&[]),
            Err(AdvisorError::EmptyImage)
        ));
    }

    #[test]
    fn partial_pixel_is_rejected() {
        assert!(matches!(
            ImageStatistics::from_rgba(&[1, 2, 3, 4, 5]),
            Err(AdvisorError::MalformedPixelBuffer { len: 5 })
        ));
    }

    #[test]
    fn leaf_green_counts_as_green_only() {
        let stats = ImageStatistics::from_rgba(&solid([40, 160, 50], 10));
        assert!(stats.is_ok());
        if let Ok(stats) = stats {
            assert_eq!(stats.total(), 10);
            assert!((stats.green_ratio() - 1.0).abs() < f64::EPSILON);
            assert!(stats.brown_ratio().abs() < f64::EPSILON);
            assert!(stats.dark_ratio().abs() < f64::EPSILON);
        }
    }

    #[test]
    fn pixel_can_be_brown_and_yellow() {
        // r > g, g > 150, b < 100: satisfies both rules.
        let stats = ImageStatistics::from_rgba(&solid([200, 160, 40], 4));
        assert!(stats.is_ok());
        if let Ok(stats) = stats {
            assert!((stats.brown_ratio() - 1.0).abs() < f64::EPSILON);
            assert!((stats.yellow_ratio() - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn mixed_buffer_ratios() {
        let mut buffer = solid([20, 20, 20], 3);
        buffer.extend(solid([40, 160, 50], 1));
        let stats = ImageStatistics::from_rgba(&buffer);
        assert!(stats.is_ok());
        if let Ok(stats) = stats {
            assert!((stats.dark_ratio() - 0.75).abs() < f64::EPSILON);
            assert!((stats.green_ratio() - 0.25).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn counts_are_clamped_to_total() {
        let stats = ImageStatistics::from_counts(10, 20, 0, 0, 0);
        assert!(stats.is_ok());
        if let Ok(stats) = stats {
            assert!((stats.brown_ratio() - 1.0).abs() < f64::EPSILON);
        }
        assert!(ImageStatistics::from_counts(0, 0, 0, 0, 0).is_err());
    }
}
