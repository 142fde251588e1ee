// Looping carousel - index state machine behind the landing page slideshow
//
// The slide list is padded with a copy of the last slide in front and a copy
// of the first slide at the end. Moving onto one of these phantom copies
// animates normally; once the animation settles the index is snapped, without
// animation, to the real slide the phantom duplicates. Animation comes back on
// the following tick.

use crate::models::{CarouselSettings, Slide};
use thiserror::Error;

/// Errors raised by carousel construction and navigation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("Carousel needs at least one slide")]
    Empty,

    #[error("Slide {index} out of range, carousel has {len} slides")]
    OutOfRange { index: usize, len: usize },
}

/// Slide geometry used to compute the horizontal offset of the strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselLayout {
    pub slide_width_percent: f64,
    pub gap_percent: f64,
}

impl CarouselLayout {
    pub fn new(slide_width_percent: f64, gap_percent: f64) -> Self {
        Self {
            slide_width_percent,
            gap_percent,
        }
    }

    /// Horizontal translation (percent of the container) that centers the
    /// slide at `index` of the padded sequence, leaving equal-sized peeks of
    /// its neighbours on both sides.
    pub fn translate_percent(&self, index: isize) -> f64 {
        let step = self.slide_width_percent + self.gap_percent;
        -(index as f64 * step) + (50.0 - self.slide_width_percent / 2.0)
    }
}

impl Default for CarouselLayout {
    fn default() -> Self {
        CarouselSettings::default().into()
    }
}

impl From<CarouselSettings> for CarouselLayout {
    fn from(settings: CarouselSettings) -> Self {
        Self::new(settings.slide_width_percent, settings.gap_percent)
    }
}

/// Where the index currently points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    /// Resting on a real slide (1..=N)
    Settled(usize),
    /// On the copy of the last slide at index 0
    PhantomLow,
    /// On the copy of the first slide at index N+1
    PhantomHigh,
    /// Moved past a phantom before a settle arrived
    Overshoot,
}

/// Infinite-looking carousel over a fixed, non-empty list of items.
///
/// Single-threaded UI state: every method takes `&mut self`, so index updates
/// are applied strictly in call order.
#[derive(Debug, Clone)]
pub struct LoopingCarousel<T = Slide> {
    slides: Vec<T>,
    looped: Vec<T>,
    current_index: isize,
    transition_enabled: bool,
    reenable_pending: bool,
    layout: CarouselLayout,
}

impl<T: Clone> LoopingCarousel<T> {
    pub fn new(slides: Vec<T>, layout: CarouselLayout) -> Result<Self, CarouselError> {
        let (first, last) = match (slides.first(), slides.last()) {
            (Some(first), Some(last)) => (first.clone(), last.clone()),
            _ => return Err(CarouselError::Empty),
        };

        let mut looped = Vec::with_capacity(slides.len() + 2);
        looped.push(last);
        looped.extend(slides.iter().cloned());
        looped.push(first);

        Ok(Self {
            slides,
            looped,
            current_index: 1,
            transition_enabled: true,
            reenable_pending: false,
            layout,
        })
    }

    /// Move one slide forward. May land on the trailing phantom.
    pub fn next(&mut self) {
        self.begin_move();
        self.current_index += 1;
    }

    /// Move one slide back. May land on the leading phantom.
    pub fn prev(&mut self) {
        self.begin_move();
        self.current_index -= 1;
    }

    /// Jump to the zero-based real slide `offset`.
    pub fn go_to(&mut self, offset: usize) -> Result<(), CarouselError> {
        if offset >= self.slides.len() {
            return Err(CarouselError::OutOfRange {
                index: offset,
                len: self.slides.len(),
            });
        }
        self.begin_move();
        self.current_index = offset as isize + 1;
        Ok(())
    }

    /// Called when a move's animation has finished.
    ///
    /// Snaps a phantom (or overshot) index back onto the real slide it shows,
    /// with animation disabled until the next [`on_tick`](Self::on_tick).
    /// Returns `true` when a snap happened.
    pub fn on_settle(&mut self) -> bool {
        let len = self.slides.len() as isize;
        if (1..=len).contains(&self.current_index) {
            return false;
        }

        let target = (self.current_index - 1).rem_euclid(len) + 1;
        tracing::debug!("Carousel re-snap: {} -> {}", self.current_index, target);

        self.transition_enabled = false;
        self.current_index = target;
        self.reenable_pending = true;
        true
    }

    /// The scheduling tick after a re-snap. Returns `true` when animation was
    /// turned back on.
    pub fn on_tick(&mut self) -> bool {
        if !self.reenable_pending {
            return false;
        }
        self.reenable_pending = false;
        self.transition_enabled = true;
        true
    }

    // A move must animate, so a re-enable still waiting for its tick is applied first.
    fn begin_move(&mut self) {
        if self.reenable_pending {
            self.on_tick();
        }
    }

    pub fn current_index(&self) -> isize {
        self.current_index
    }

    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    pub fn reenable_pending(&self) -> bool {
        self.reenable_pending
    }

    /// Number of real slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[T] {
        &self.slides
    }

    /// Padded sequence: last slide, all slides, first slide.
    pub fn looped_slides(&self) -> &[T] {
        &self.looped
    }

    /// Zero-based index of the real slide currently shown.
    pub fn real_index(&self) -> usize {
        (self.current_index - 1).rem_euclid(self.slides.len() as isize) as usize
    }

    pub fn active_slide(&self) -> &T {
        &self.slides[self.real_index()]
    }

    pub fn phase(&self) -> CarouselPhase {
        let len = self.slides.len() as isize;
        match self.current_index {
            0 => CarouselPhase::PhantomLow,
            index if index == len + 1 => CarouselPhase::PhantomHigh,
            index if (1..=len).contains(&index) => CarouselPhase::Settled(index as usize),
            _ => CarouselPhase::Overshoot,
        }
    }

    pub fn layout(&self) -> CarouselLayout {
        self.layout
    }

    /// Translation of the slide strip for the current index.
    pub fn translate_percent(&self) -> f64 {
        self.layout.translate_percent(self.current_index)
    }
}
