//! Image transcoding for donated item photos.
//!
//! Uploads arrive in whatever format the donor's phone produced. Before a
//! photo is stored it is normalized to JPEG, downscaled to fit a bounding
//! box, and compressed toward a target byte size. Compression is best effort:
//! when even the most aggressive settings cannot reach the target, the
//! smallest blob produced so far is returned rather than an error.

use image::{codecs::jpeg::JpegEncoder, imageops::FilterType, DynamicImage};

use crate::server::error::image::ImageError;

/// Hard ceiling on accepted input size.
pub const MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;

const QUALITY_FLOOR: u8 = 10;
const QUALITY_STEP: u8 = 5;
const MAX_QUALITY_ATTEMPTS: u32 = 15;
const MAX_SHRINK_ATTEMPTS: u32 = 5;
const SHRINK_FACTOR: f64 = 0.9;
const MIN_WIDTH: u32 = 640;
const MIN_HEIGHT: u32 = 360;

#[derive(Debug, Clone, Copy)]
pub struct TranscodeOptions {
    pub max_width: u32,
    pub max_height: u32,
    pub initial_quality: u8,
    pub max_size_kb: usize,
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        Self {
            max_width: 1280,
            max_height: 720,
            initial_quality: 85,
            max_size_kb: 768,
        }
    }
}

/// Transcodes `input` to a JPEG no larger than the bounding box in `options`.
///
/// The quality ladder starts at `initial_quality` and steps down by 5 until
/// the encoded size fits under `max_size_kb` or the floor of 10 is reached.
/// If quality alone is not enough, dimensions shrink by 10% per round (down
/// to 640x360) with the ladder restarted at each size. Decodable input never
/// fails: the smallest candidate wins when no attempt meets the target.
pub fn transcode(input: &[u8], options: &TranscodeOptions) -> Result<Vec<u8>, ImageError> {
    if input.len() > MAX_INPUT_BYTES {
        return Err(ImageError::OversizedInput {
            size: input.len(),
            limit: MAX_INPUT_BYTES,
        });
    }

    let decoded =
        image::load_from_memory(input).map_err(|err| ImageError::Decode(err.to_string()))?;

    let target_bytes = options.max_size_kb * 1024;
    let mut current = fit_within(&decoded, options.max_width, options.max_height);
    let mut smallest: Option<Vec<u8>> = None;

    for shrink_round in 0..=MAX_SHRINK_ATTEMPTS {
        let mut quality = options.initial_quality;

        for _ in 0..=MAX_QUALITY_ATTEMPTS {
            let encoded = encode_jpeg(&current, quality)?;

            if encoded.len() <= target_bytes {
                return Ok(encoded);
            }

            if smallest
                .as_ref()
                .is_none_or(|best| encoded.len() < best.len())
            {
                smallest = Some(encoded);
            }

            if quality <= QUALITY_FLOOR {
                break;
            }
            quality = quality.saturating_sub(QUALITY_STEP).max(QUALITY_FLOOR);
        }

        if shrink_round == MAX_SHRINK_ATTEMPTS
            || (current.width() <= MIN_WIDTH && current.height() <= MIN_HEIGHT)
        {
            break;
        }

        let next_width = scale_dimension(current.width(), SHRINK_FACTOR);
        let next_height = scale_dimension(current.height(), SHRINK_FACTOR);
        current = current.resize_exact(next_width, next_height, FilterType::Triangle);
    }

    smallest.ok_or_else(|| ImageError::Encode("no encode attempt produced output".to_string()))
}

/// Downscales to fit within `max_width` x `max_height`, preserving aspect
/// ratio. Images already inside the box are returned unchanged.
fn fit_within(image: &DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    let (width, height) = (image.width(), image.height());

    if width <= max_width && height <= max_height {
        return image.clone();
    }

    let ratio = f64::min(
        f64::from(max_width) / f64::from(width),
        f64::from(max_height) / f64::from(height),
    );

    image.resize_exact(
        scale_dimension(width, ratio),
        scale_dimension(height, ratio),
        FilterType::Triangle,
    )
}

fn scale_dimension(value: u32, ratio: f64) -> u32 {
    ((f64::from(value) * ratio).round() as u32).max(1)
}

fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Vec<u8>, ImageError> {
    // JPEG has no alpha channel, so flatten to RGB first.
    let rgb = image.to_rgb8();
    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut out, quality);

    rgb.write_with_encoder(encoder)
        .map_err(|err| ImageError::Encode(err.to_string()))?;

    Ok(out)
}
