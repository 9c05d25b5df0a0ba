//! Trait for vision detection backends.

use crate::guidance::DetectionSample;

/// Trait for vision backends that locate the hand and the target item in
/// a video frame.
///
/// Implement this to connect any detector (a hand-landmark model plus an
/// item locator, a multimodal API, a test stub) to the guidance pipeline.
/// Positions the backend cannot find this frame are simply left `None` in
/// the returned sample.
///
/// # Example
///
/// ```ignore
/// use pantry_assist_rs::{SampleBuilder, SampleSource};
/// use pantry_assist_rs::guidance::DetectionSample;
///
/// struct MyDetector {
///     // Your models here
/// }
///
/// impl SampleSource for MyDetector {
///     type Error = std::io::Error;
///
///     fn detect(
///         &mut self,
///         input: &[u8],
///         width: u32,
///         height: u32,
///         frame_time: f64,
///     ) -> Result<DetectionSample, Self::Error> {
///         // Run inference, then:
///         Ok(SampleBuilder::new(frame_time).build())
///     }
/// }
/// ```
pub trait SampleSource {
    /// Error type for detection failures.
    type Error;

    /// Run inference on raw image data and return one detection sample.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `frame_time` - Capture time in seconds, supplied by the caller
    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
        frame_time: f64,
    ) -> Result<DetectionSample, Self::Error>;
}
