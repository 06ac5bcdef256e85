//! Slide content model.
//!
//! The slide set is fixed at load time; the carousel never adds or removes
//! slides after initialization.

use serde::{Deserialize, Serialize};

/// One unit of carousel content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub attribution: String,
}

/// An ordered, fixed-size set of slides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Built-in testimonial deck used when no deck file is supplied.
    pub fn sample() -> Self {
        Self {
            slides: vec![
                Slide {
                    title: "Best decision of my life".into(),
                    body: "I moved everything over in an afternoon and never \
                           looked back. The whole experience feels effortless."
                        .into(),
                    attribution: "Aarav P.".into(),
                },
                Slide {
                    title: "The last step to becoming a complete minimalist".into(),
                    body: "One account, one card, one app. Everything else went \
                           in the shredder."
                        .into(),
                    attribution: "Miyah L.".into(),
                },
                Slide {
                    title: "Finally free from old-school banks".into(),
                    body: "No branches, no queues, no paperwork. Support \
                           answered in minutes the one time I needed them."
                        .into(),
                    attribution: "Francisco G.".into(),
                },
            ],
        }
    }
}
