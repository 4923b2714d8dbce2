use std::time::Duration;

use crate::{
    demo::{
        combination::{Combination, builtin_combinations},
        timer::IntervalTimer,
    },
    foundation::error::{CardError, CardResult},
    random::xorshift::XorShift32,
    scene::model::CardSpec,
};

/// Time each slide stays up while playing.
pub const SLIDE_DURATION: Duration = Duration::from_secs(5);

/// Cycles through combinations, applying each one to a card.
#[derive(Clone, Debug)]
pub struct Slideshow {
    slides: Vec<Combination>,
    current: usize,
    open: bool,
    timer: IntervalTimer,
    generated: usize,
}

impl Slideshow {
    pub fn new(slides: Vec<Combination>) -> CardResult<Self> {
        if slides.is_empty() {
            return Err(CardError::validation("slideshow needs at least one slide"));
        }
        Ok(Self {
            slides,
            current: 0,
            open: false,
            timer: IntervalTimer::new(SLIDE_DURATION),
            generated: 0,
        })
    }

    pub fn builtin() -> Self {
        Self {
            slides: builtin_combinations(),
            current: 0,
            open: false,
            timer: IntervalTimer::new(SLIDE_DURATION),
            generated: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Combination {
        &self.slides[self.current]
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_running()
    }

    /// Share of the deck shown so far, `(index + 1) / len` in percent.
    pub fn progress_pct(&self) -> f64 {
        (self.current + 1) as f64 / self.slides.len() as f64 * 100.0
    }

    pub fn open(&mut self, now: Duration, spec: &mut CardSpec) {
        self.open = true;
        self.show(self.current, now, spec);
    }

    /// Hide the slideshow; playback stops with it.
    pub fn close(&mut self) {
        self.open = false;
        self.pause();
    }

    /// Show slide `index`; out-of-range indices are ignored.
    ///
    /// While playing, showing a slide restarts the auto-advance countdown.
    pub fn show(&mut self, index: usize, now: Duration, spec: &mut CardSpec) -> bool {
        let Some(slide) = self.slides.get(index) else {
            tracing::debug!(index, len = self.slides.len(), "slide index out of range");
            return false;
        };
        slide.apply(spec);
        self.current = index;
        if self.timer.is_running() {
            self.timer.start(now);
        }
        true
    }

    pub fn next(&mut self, now: Duration, spec: &mut CardSpec) {
        let next = (self.current + 1) % self.slides.len();
        self.show(next, now, spec);
    }

    pub fn previous(&mut self, now: Duration, spec: &mut CardSpec) {
        let prev = if self.current == 0 {
            self.slides.len() - 1
        } else {
            self.current - 1
        };
        self.show(prev, now, spec);
    }

    pub fn play(&mut self, now: Duration) {
        self.timer.start(now);
    }

    pub fn pause(&mut self) {
        self.timer.stop();
    }

    pub fn toggle(&mut self, now: Duration) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play(now);
        }
    }

    /// Advance when the slide timer is due. Returns whether the slide changed.
    pub fn tick(&mut self, now: Duration, spec: &mut CardSpec) -> bool {
        if !self.timer.poll(now) {
            return false;
        }
        self.next(now, spec);
        true
    }

    /// Append a random combination and show it.
    pub fn add_random(&mut self, rng: &mut XorShift32, now: Duration, spec: &mut CardSpec) {
        self.generated += 1;
        self.slides.push(Combination::random(rng, self.generated));
        self.show(self.slides.len() - 1, now, spec);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demo/slideshow.rs"]
mod tests;
