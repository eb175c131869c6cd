use crate::core::TransitionDirection;

/// Mutable navigation model owned by the navigator facade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct NavigationState {
    pub(super) current_slide: usize,
    pub(super) is_animating: bool,
    pub(super) last_direction: Option<TransitionDirection>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_slide: 1,
            is_animating: false,
            last_direction: None,
        }
    }
}
