use crate::extensions::{NavigatorEvent, PluginContext};
use crate::render::Presenter;

use super::SlideNavigator;

impl<P: Presenter> SlideNavigator<P> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            current_slide: self.state.current_slide,
            total_slides: self.deck.len(),
            is_animating: self.state.is_animating,
            scroll_accumulator: self.wheel.accumulated(),
            now_ms: self.clock.now_ms(),
        }
    }

    pub(super) fn emit_event(&mut self, event: NavigatorEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
