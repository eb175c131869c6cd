pub mod clock;
pub mod deck;
pub mod progress;
pub mod slide;
pub mod timer;

pub use clock::MonotonicClock;
pub use deck::Deck;
pub use progress::{counter_text, progress_percent};
pub use slide::{Slide, SlideKind, SlideVisualState, TransitionDirection};
pub use timer::{DeadlineTimer, WakeSlot};
