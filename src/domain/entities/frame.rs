//! Animation frames, sequences, and playback handles.

use std::sync::Arc;
use std::time::{Duration, Instant};

use image::DynamicImage;

use crate::domain::errors::ResolveError;

/// One still image plus its on-screen duration within an animation.
#[derive(Clone)]
pub struct Frame {
    image: Arc<DynamicImage>,
    duration: Duration,
}

impl Frame {
    /// Creates a frame from a decoded image and its display delay.
    #[must_use]
    pub fn new(image: Arc<DynamicImage>, delay_ms: u32) -> Self {
        Self {
            image,
            duration: Duration::from_millis(u64::from(delay_ms)),
        }
    }

    /// Returns the frame's image.
    #[must_use]
    pub fn image(&self) -> &Arc<DynamicImage> {
        &self.image
    }

    /// Returns how long the frame stays on screen.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .field("duration", &self.duration)
            .finish()
    }
}

/// Ordered list of frames for one animated emote.
///
/// The sequence is built once during resolution and cached; consumers never
/// play the sequence itself. Each consumer mints its own [`Animation`] handle
/// so that playback state is never shared.
pub struct AnimationSequence {
    frames: Vec<Frame>,
    #[cfg(test)]
    fail_mints: std::sync::atomic::AtomicUsize,
}

impl AnimationSequence {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            #[cfg(test)]
            fail_mints: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Appends a frame; insertion order is playback order.
    pub fn push_frame(&mut self, image: Arc<DynamicImage>, delay_ms: u32) {
        self.frames.push(Frame::new(image, delay_ms));
    }

    /// Returns the number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if the sequence holds no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Returns the stored frames in playback order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Mints a fresh, independent, indefinitely looping playback handle.
    ///
    /// Frames are shared with the sequence via `Arc`; playback state is not.
    /// Mutating one handle never affects another or the stored sequence.
    ///
    /// # Errors
    /// Returns [`ResolveError::ResourceExhausted`] if the handle's frame list
    /// cannot be allocated.
    pub fn new_animation(&self) -> Result<Animation, ResolveError> {
        #[cfg(test)]
        {
            use std::sync::atomic::Ordering;
            if self
                .fail_mints
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
            {
                return Err(ResolveError::exhausted("animation handle"));
            }
        }

        let mut frames = Vec::new();
        frames
            .try_reserve_exact(self.frames.len())
            .map_err(|_| ResolveError::exhausted("animation handle"))?;
        frames.extend(self.frames.iter().cloned());

        Ok(Animation::new(frames))
    }

    /// Forces the next `count` mints to fail with resource exhaustion.
    #[cfg(test)]
    pub fn fail_next_mints(&self, count: usize) {
        self.fail_mints
            .store(count, std::sync::atomic::Ordering::SeqCst);
    }
}

impl Default for AnimationSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AnimationSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationSequence")
            .field("frames", &self.frames.len())
            .finish_non_exhaustive()
    }
}

/// Independently controllable looping playback handle.
///
/// Playback repeats indefinitely; the handle never stops on its own after a
/// full pass through the frames.
pub struct Animation {
    frames: Vec<Frame>,
    total: Duration,
    started_at: Option<Instant>,
}

impl Animation {
    fn new(frames: Vec<Frame>) -> Self {
        let total = frames.iter().map(Frame::duration).sum();
        Self {
            frames,
            total,
            started_at: None,
        }
    }

    /// Starts (or restarts) playback from the first frame.
    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// Stops playback; the handle rewinds to the first frame.
    pub fn stop(&mut self) {
        self.started_at = None;
    }

    /// Returns true while playback is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Returns the number of frames.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Returns the combined duration of one pass through all frames.
    #[must_use]
    pub const fn total_duration(&self) -> Duration {
        self.total
    }

    /// Returns the frame visible `elapsed` time into playback.
    ///
    /// Elapsed time wraps modulo the total duration, so any elapsed value maps
    /// to a frame. Returns `None` only for a frameless handle.
    #[must_use]
    pub fn frame_at(&self, elapsed: Duration) -> Option<&Frame> {
        if self.frames.is_empty() {
            return None;
        }
        if self.total.is_zero() {
            return self.frames.first();
        }

        let mut remaining = Duration::from_nanos(
            u64::try_from(elapsed.as_nanos() % self.total.as_nanos()).unwrap_or(0),
        );
        for frame in &self.frames {
            if remaining < frame.duration() {
                return Some(frame);
            }
            remaining -= frame.duration();
        }
        self.frames.last()
    }

    /// Returns the frame that should be on screen right now.
    ///
    /// While stopped this is the first frame.
    #[must_use]
    pub fn current_frame(&self) -> Option<&Frame> {
        match self.started_at {
            Some(started) => self.frame_at(started.elapsed()),
            None => self.frames.first(),
        }
    }
}

impl std::fmt::Debug for Animation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animation")
            .field("frames", &self.frames.len())
            .field("total", &self.total)
            .field("running", &self.is_running())
            .finish()
    }
}
