use crate::error::{DeckError, DeckResult};

/// Progress through the deck as a percentage in `[0, 100]`.
///
/// A single-slide deck is always on its last slide and reports 100.
pub fn progress_percent(current: usize, total: usize) -> DeckResult<f64> {
    if total == 0 || current == 0 || current > total {
        return Err(DeckError::InvalidData(format!(
            "slide {current} is outside deck of {total} slides"
        )));
    }
    if total == 1 {
        return Ok(100.0);
    }
    Ok((current - 1) as f64 / (total - 1) as f64 * 100.0)
}

#[must_use]
pub fn counter_text(current: usize, total: usize) -> String {
    format!("{current} / {total}")
}
