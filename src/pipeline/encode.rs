//! Looping GIF encoding.
//!
//! The only stage with an external codec dependency. Frames are written
//! sequentially; the GIF format does not allow parallel frame writes, so
//! this stage always runs serialized.

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame};

use crate::error::{FlipbookError, Result};
use crate::types::Animation;

/// Encode an animation into a looping GIF byte stream.
///
/// Frame order in the stream matches the animation's order. Fails with
/// `EmptyAnimation` for zero frames, `DimensionMismatch` when frames are
/// not uniformly sized, and `Encoding` wrapping any codec failure.
pub fn encode_animation(animation: &Animation) -> Result<Vec<u8>> {
    let frames = animation.frames();
    let first = frames.first().ok_or(FlipbookError::EmptyAnimation)?;

    let (expected_width, expected_height) = (first.width(), first.height());
    for (index, frame) in frames.iter().enumerate().skip(1) {
        if frame.width() != expected_width || frame.height() != expected_height {
            return Err(FlipbookError::DimensionMismatch {
                index,
                expected_width,
                expected_height,
                actual_width: frame.width(),
                actual_height: frame.height(),
            });
        }
    }

    let mut buffer = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut buffer);
        if animation.loops_forever() {
            encoder.set_repeat(Repeat::Infinite)?;
        }

        for frame in frames {
            let delay_ms = (frame.duration_secs() * 1000.0).round() as u32;
            let delay = Delay::from_numer_denom_ms(delay_ms, 1);
            let rgba = DynamicImage::ImageRgb8(frame.image().clone()).to_rgba8();
            encoder.encode_frame(Frame::from_parts(rgba, 0, 0, delay))?;
        }
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::codecs::gif::GifDecoder;
    use image::{AnimationDecoder, RgbImage};

    use crate::types::AnimationFrame;

    use super::*;

    fn solid_frame(width: u32, height: u32, rgb: [u8; 3], duration: f64) -> AnimationFrame {
        AnimationFrame::new(
            RgbImage::from_pixel(width, height, image::Rgb(rgb)),
            duration,
        )
    }

    #[test]
    fn test_roundtrip_frame_count_and_dimensions() {
        let animation = Animation::looping(vec![
            solid_frame(6, 4, [255, 0, 0], 0.2),
            solid_frame(6, 4, [0, 255, 0], 0.2),
            solid_frame(6, 4, [0, 0, 255], 0.2),
        ]);

        let bytes = encode_animation(&animation).unwrap();

        let decoder = GifDecoder::new(Cursor::new(&bytes)).unwrap();
        let frames = decoder.into_frames().collect_frames().unwrap();

        assert_eq!(frames.len(), 3);
        for frame in &frames {
            assert_eq!(frame.buffer().dimensions(), (6, 4));
        }
    }

    #[test]
    fn test_roundtrip_delay() {
        let animation = Animation::looping(vec![
            solid_frame(2, 2, [0, 0, 0], 0.5),
            solid_frame(2, 2, [255, 255, 255], 0.5),
        ]);

        let bytes = encode_animation(&animation).unwrap();

        let decoder = GifDecoder::new(Cursor::new(&bytes)).unwrap();
        let frames = decoder.into_frames().collect_frames().unwrap();
        for frame in &frames {
            assert_eq!(frame.delay().numer_denom_ms(), (500, 1));
        }
    }

    #[test]
    fn test_loop_forever_extension_present() {
        let animation = Animation::looping(vec![solid_frame(2, 2, [1, 2, 3], 0.1)]);
        let bytes = encode_animation(&animation).unwrap();

        // Loop-forever GIFs carry the Netscape application extension
        assert!(bytes
            .windows(11)
            .any(|window| window == b"NETSCAPE2.0"));
    }

    #[test]
    fn test_empty_animation() {
        let err = encode_animation(&Animation::looping(vec![])).unwrap_err();
        assert!(matches!(err, FlipbookError::EmptyAnimation));
    }

    #[test]
    fn test_dimension_mismatch() {
        let animation = Animation::looping(vec![
            solid_frame(4, 4, [0, 0, 0], 0.1),
            solid_frame(4, 4, [0, 0, 0], 0.1),
            solid_frame(4, 2, [0, 0, 0], 0.1),
        ]);

        let err = encode_animation(&animation).unwrap_err();
        match err {
            FlipbookError::DimensionMismatch { index, .. } => assert_eq!(index, 2),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_frame_order_preserved() {
        let animation = Animation::looping(vec![
            solid_frame(2, 2, [255, 0, 0], 0.1),
            solid_frame(2, 2, [0, 0, 255], 0.1),
        ]);

        let bytes = encode_animation(&animation).unwrap();

        let decoder = GifDecoder::new(Cursor::new(&bytes)).unwrap();
        let frames = decoder.into_frames().collect_frames().unwrap();

        // Red first, blue second; allow a little quantizer wiggle
        let first = frames[0].buffer().get_pixel(0, 0).0;
        let second = frames[1].buffer().get_pixel(0, 0).0;
        assert!(first[0] > 200 && first[2] < 50, "first frame {:?}", first);
        assert!(second[2] > 200 && second[0] < 50, "second frame {:?}", second);
    }
}
