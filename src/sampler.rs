//! Perceptual color sampling
//!
//! Averages the pixels of a sampling region in CIE Lab space. Lab is the
//! correctness-critical choice here: ambient lighting shifts brightness far
//! more than hue, and the classifier's Euclidean distance must track
//! perceptual color difference rather than raw display-channel values.
//!
//! Samples are encoded on the byte-oriented Lab scale (L * 255/100, a + 128,
//! b + 128) so every channel lives in [0, 255], matching the persisted
//! reference table schema.

use image::RgbImage;
use palette::{FromColor, Lab, Srgb};

use crate::error::{Result, ScanError};
use crate::geometry::GridRegion;

/// Average Lab color of one sampled region, channels on the 0-255 scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample {
    /// Lightness, 0-255 (L* scaled by 255/100)
    pub l: f32,
    /// Green-red axis, 0-255 (a* shifted by +128)
    pub a: f32,
    /// Blue-yellow axis, 0-255 (b* shifted by +128)
    pub b: f32,
}

impl ColorSample {
    /// Construct a sample from raw channel values
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Channels as an array, in (L, a, b) order
    pub fn channels(&self) -> [f32; 3] {
        [self.l, self.a, self.b]
    }

    /// Euclidean distance to a reference channel vector
    pub fn distance_to(&self, reference: [f32; 3]) -> f32 {
        let dl = self.l - reference[0];
        let da = self.a - reference[1];
        let db = self.b - reference[2];
        (dl * dl + da * da + db * db).sqrt()
    }
}

/// Encode a palette Lab color onto the byte-oriented channel scale
fn encode_lab(lab: Lab) -> [f32; 3] {
    [lab.l * 255.0 / 100.0, lab.a + 128.0, lab.b + 128.0]
}

/// Sample the average perceptual color of a region of a frame
///
/// Converts every pixel inside `region` from sRGB to CIE Lab and averages
/// the three channels independently.
///
/// # Errors
///
/// Returns `ScanError::EmptyRegion` if the region, clipped to the frame
/// bounds, contains zero pixels.
pub fn sample(frame: &RgbImage, region: GridRegion) -> Result<ColorSample> {
    let x_end = (region.x + region.width).min(frame.width());
    let y_end = (region.y + region.height).min(frame.height());

    let empty = || ScanError::EmptyRegion {
        x: region.x,
        y: region.y,
        width: region.width,
        height: region.height,
    };

    if region.x >= x_end || region.y >= y_end {
        return Err(empty());
    }

    let mut sums = [0.0f64; 3];
    let mut count = 0u64;

    for y in region.y..y_end {
        for x in region.x..x_end {
            let px = frame.get_pixel(x, y);
            let srgb = Srgb::new(
                px[0] as f32 / 255.0,
                px[1] as f32 / 255.0,
                px[2] as f32 / 255.0,
            );
            let channels = encode_lab(Lab::from_color(srgb));
            for (sum, c) in sums.iter_mut().zip(channels) {
                *sum += c as f64;
            }
            count += 1;
        }
    }

    if count == 0 {
        return Err(empty());
    }

    Ok(ColorSample::new(
        (sums[0] / count as f64) as f32,
        (sums[1] / count as f64) as f32,
        (sums[2] / count as f64) as f32,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use image::Rgb;

    fn solid_frame(width: u32, height: u32, rgb: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb(rgb))
    }

    fn full_region(frame: &RgbImage) -> GridRegion {
        GridRegion {
            x: 0,
            y: 0,
            width: frame.width(),
            height: frame.height(),
        }
    }

    #[test]
    fn test_sample_white() {
        let frame = solid_frame(16, 16, [255, 255, 255]);
        let s = sample(&frame, full_region(&frame)).unwrap();

        assert_relative_eq!(s.l, 255.0, epsilon = 1.0);
        assert_relative_eq!(s.a, 128.0, epsilon = 1.0);
        assert_relative_eq!(s.b, 128.0, epsilon = 1.0);
    }

    #[test]
    fn test_sample_black() {
        let frame = solid_frame(16, 16, [0, 0, 0]);
        let s = sample(&frame, full_region(&frame)).unwrap();

        assert!(s.l < 2.0);
        assert_relative_eq!(s.a, 128.0, epsilon = 1.0);
        assert_relative_eq!(s.b, 128.0, epsilon = 1.0);
    }

    #[test]
    fn test_sample_red_has_positive_a() {
        let frame = solid_frame(8, 8, [255, 0, 0]);
        let s = sample(&frame, full_region(&frame)).unwrap();

        // sRGB red in Lab: a* strongly positive, b* positive
        assert!(s.a > 180.0);
        assert!(s.b > 150.0);
    }

    #[test]
    fn test_sample_uniform_subregion_matches_full() {
        let frame = solid_frame(32, 32, [10, 120, 200]);
        let full = sample(&frame, full_region(&frame)).unwrap();
        let sub = sample(
            &frame,
            GridRegion {
                x: 8,
                y: 8,
                width: 4,
                height: 4,
            },
        )
        .unwrap();

        assert_relative_eq!(full.l, sub.l, epsilon = 1e-3);
        assert_relative_eq!(full.a, sub.a, epsilon = 1e-3);
        assert_relative_eq!(full.b, sub.b, epsilon = 1e-3);
    }

    #[test]
    fn test_sample_empty_region() {
        let frame = solid_frame(8, 8, [0, 0, 0]);
        let zero = GridRegion {
            x: 2,
            y: 2,
            width: 0,
            height: 0,
        };
        assert!(matches!(
            sample(&frame, zero),
            Err(ScanError::EmptyRegion { .. })
        ));
    }

    #[test]
    fn test_sample_region_outside_frame() {
        let frame = solid_frame(8, 8, [0, 0, 0]);
        let outside = GridRegion {
            x: 20,
            y: 20,
            width: 4,
            height: 4,
        };
        assert!(matches!(
            sample(&frame, outside),
            Err(ScanError::EmptyRegion { .. })
        ));
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let s = ColorSample::new(51.0, 11.0, 9.0);
        assert_relative_eq!(s.distance_to(s.channels()), 0.0);
    }

    #[test]
    fn test_distance_euclidean() {
        let s = ColorSample::new(0.0, 0.0, 0.0);
        assert_relative_eq!(s.distance_to([3.0, 4.0, 0.0]), 5.0);
    }
}
