use std::path::Path;

use image::ImageFormat;

use crate::error::{Error, Result};

/// Transcode a PPM render into a JPEG.
///
/// The destination is overwritten if it already exists. Alpha is dropped
/// since JPEG only carries RGB.
pub fn ppm_to_jpeg(input: &Path, output: &Path) -> Result<()> {
    if !input.exists() {
        return Err(Error::RenderMissing(input.display().to_string()));
    }

    let img = image::open(input)?;
    img.into_rgb8().save_with_format(output, ImageFormat::Jpeg)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2x2 P6 image: red, green, blue, white
    fn write_test_ppm(path: &Path) {
        let mut data = b"P6\n2 2\n255\n".to_vec();
        data.extend_from_slice(&[
            255, 0, 0, 0, 255, 0, //
            0, 0, 255, 255, 255, 255,
        ]);
        std::fs::write(path, data).unwrap();
    }

    #[test]
    fn converts_valid_ppm() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("out.ppm");
        let output = temp.path().join("output.jpg");
        write_test_ppm(&input);

        ppm_to_jpeg(&input, &output).unwrap();

        let converted = image::open(&output).unwrap();
        assert_eq!(converted.width(), 2);
        assert_eq!(converted.height(), 2);
    }

    #[test]
    fn overwrites_existing_destination() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("out.ppm");
        let output = temp.path().join("output.jpg");
        write_test_ppm(&input);
        std::fs::write(&output, b"stale").unwrap();

        ppm_to_jpeg(&input, &output).unwrap();
        assert!(image::open(&output).is_ok());
    }

    #[test]
    fn missing_source_is_typed_error() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("out.ppm");
        let output = temp.path().join("output.jpg");

        let err = ppm_to_jpeg(&input, &output).unwrap_err();
        assert_eq!(err.code(), "RENDER_MISSING");
        assert!(!output.exists());
    }

    #[test]
    fn corrupt_source_is_image_error() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("out.ppm");
        let output = temp.path().join("output.jpg");
        std::fs::write(&input, b"not a ppm at all").unwrap();

        let err = ppm_to_jpeg(&input, &output).unwrap_err();
        assert_eq!(err.code(), "IMAGE_ERROR");
    }
}
