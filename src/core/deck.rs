use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

use super::{Slide, SlideKind, SlideVisualState};

/// Ordered, non-empty sequence of slides fixed at construction.
///
/// Slides are addressed with 1-based indices throughout the crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Slide>", into = "Vec<Slide>")]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> DeckResult<Self> {
        if slides.is_empty() {
            return Err(DeckError::InvalidDeck(
                "deck must contain at least one slide".to_owned(),
            ));
        }
        Ok(Self { slides })
    }

    pub fn from_kinds(kinds: impl IntoIterator<Item = SlideKind>) -> DeckResult<Self> {
        Self::new(kinds.into_iter().map(Slide::new).collect())
    }

    /// Builds a deck of `len` content slides.
    pub fn uniform(len: usize) -> DeckResult<Self> {
        Self::new(vec![Slide::content(); len])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always `false`; kept for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        (1..=self.slides.len()).contains(&index)
    }

    #[must_use]
    pub fn slide(&self, index: usize) -> Option<Slide> {
        index
            .checked_sub(1)
            .and_then(|offset| self.slides.get(offset))
            .copied()
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn is_title(&self, index: usize) -> bool {
        self.slide(index).is_some_and(Slide::is_title)
    }

    /// Visual state of every slide when `active_index` is shown.
    #[must_use]
    pub fn visual_states(&self, active_index: usize) -> Vec<SlideVisualState> {
        (1..=self.slides.len())
            .map(|index| SlideVisualState::for_position(index, active_index))
            .collect()
    }
}

impl TryFrom<Vec<Slide>> for Deck {
    type Error = DeckError;

    fn try_from(slides: Vec<Slide>) -> DeckResult<Self> {
        Self::new(slides)
    }
}

impl From<Deck> for Vec<Slide> {
    fn from(deck: Deck) -> Self {
        deck.slides
    }
}
