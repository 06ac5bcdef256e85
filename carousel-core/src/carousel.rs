//! Wraparound slide-index state machine.
//!
//! `current` is the only piece of mutable state; every transition keeps it
//! inside `[0, len - 1]`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    /// The offset formula and the wraparound arithmetic assume N >= 1.
    #[error("carousel requires at least one slide")]
    EmptyDeck,
}

/// Why a jump target was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JumpError {
    #[error("jump target is not an index: {0:?}")]
    NotAnIndex(String),
    #[error("jump target {index} out of range for {count} slides")]
    OutOfRange { index: usize, count: usize },
}

/// Slide-index state machine with wraparound navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    /// Start at slide 0. The slide count is fixed for the carousel's lifetime.
    pub fn new(slide_count: usize) -> Result<Self, CarouselError> {
        if slide_count == 0 {
            return Err(CarouselError::EmptyDeck);
        }
        Ok(Self {
            current: 0,
            len: slide_count,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.len
    }

    /// Move to the next slide, wrapping from the last back to the first.
    pub fn advance(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }

    /// Move to the previous slide, wrapping from the first to the last.
    pub fn retreat(&mut self) -> usize {
        self.current = (self.current + self.len - 1) % self.len;
        self.current
    }

    /// Jump to the slide named by a raw indicator identity.
    ///
    /// The identity arrives as an untyped tag value, so it is parsed and
    /// range-checked before any state changes. On error the index is
    /// untouched.
    pub fn jump(&mut self, raw: &str) -> Result<usize, JumpError> {
        let index: usize = raw
            .trim()
            .parse()
            .map_err(|_| JumpError::NotAnIndex(raw.to_string()))?;
        if index >= self.len {
            return Err(JumpError::OutOfRange {
                index,
                count: self.len,
            });
        }
        self.current = index;
        Ok(self.current)
    }

    /// Horizontal offset for `slide`, in percent: the current slide sits at
    /// 0, earlier slides at negative multiples of 100, later ones positive.
    pub fn offset_pct(&self, slide: usize) -> i64 {
        (slide as i64 - self.current as i64) * 100
    }
}
