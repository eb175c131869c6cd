use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, Event, EventTarget, KeyboardEvent, TouchEvent, WheelEvent, Window,
};

use crate::api::SlideNavigator;
use crate::core::WakeSlot;
use crate::error::DeckResult;

use super::{DomPresenter, SharedNavigator, js_error, now_ms};

type Listener = Closure<dyn FnMut(Event)>;

/// `setTimeout` handle of the single pending wake-up.
type SharedWake = Rc<RefCell<WakeSlot<i32>>>;

/// Registered DOM listeners. Dropping the value detaches them and cancels the
/// pending wake-up.
pub struct DomBindings {
    window: Window,
    wake: SharedWake,
    registrations: Vec<(EventTarget, &'static str, Listener)>,
}

impl DomBindings {
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registrations.len()
    }

    /// Keeps the listeners attached for the lifetime of the page.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for DomBindings {
    fn drop(&mut self) {
        for (target, event_name, listener) in &self.registrations {
            let _ = target
                .remove_event_listener_with_callback(event_name, listener.as_ref().unchecked_ref());
        }
        if let Some(handle) = self.wake.borrow_mut().take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

/// Ticks the navigator to the current time, runs `action` and re-arms the
/// wake-up for the next pending deadline.
fn drive<F>(navigator: &SharedNavigator, window: &Window, wake: &SharedWake, action: F)
where
    F: FnOnce(&mut SlideNavigator<DomPresenter>) -> DeckResult<()>,
{
    let result = match navigator.try_borrow_mut() {
        Ok(mut guard) => guard.tick(now_ms(window)).and_then(|_| action(&mut guard)),
        Err(_) => {
            warn!("navigator is busy, dropping re-entrant input");
            return;
        }
    };
    if let Err(err) = result {
        warn!(error = %err, "deck input handling failed");
    }
    schedule_next_tick(navigator, window, wake);
}

/// Keeps exactly one `setTimeout` in flight, aimed at the earliest deadline.
fn schedule_next_tick(navigator: &SharedNavigator, window: &Window, wake: &SharedWake) {
    let next_deadline = navigator.borrow().next_deadline();
    let Some(deadline) = next_deadline else {
        if let Some(stale) = wake.borrow_mut().take() {
            window.clear_timeout_with_handle(stale);
        }
        return;
    };
    let delay_ms = (deadline - now_ms(window)).max(0.0).ceil() as i32;

    let navigator = Rc::clone(navigator);
    let window_for_cb = window.clone();
    let wake_for_cb = Rc::clone(wake);
    let callback = Closure::once_into_js(move || {
        // Fired handles are no longer cancellable.
        wake_for_cb.borrow_mut().take();
        drive(&navigator, &window_for_cb, &wake_for_cb, |_| Ok(()));
    });
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms,
    ) {
        Ok(handle) => {
            let stale = wake.borrow_mut().arm(handle);
            if let Some(stale) = stale {
                window.clear_timeout_with_handle(stale);
            }
        }
        Err(err) => warn!(error = ?err, "failed to schedule deck timer"),
    }
}

struct Registrar<'a> {
    navigator: &'a SharedNavigator,
    window: &'a Window,
    wake: &'a SharedWake,
    registrations: Vec<(EventTarget, &'static str, Listener)>,
}

impl Registrar<'_> {
    fn listen<F>(
        &mut self,
        target: &EventTarget,
        event_name: &'static str,
        passive: bool,
        mut handler: F,
    ) -> DeckResult<()>
    where
        F: FnMut(&mut SlideNavigator<DomPresenter>, &Event) -> DeckResult<()> + 'static,
    {
        let navigator = Rc::clone(self.navigator);
        let window = self.window.clone();
        let wake = Rc::clone(self.wake);
        let listener: Listener = Closure::wrap(Box::new(move |event: Event| {
            drive(&navigator, &window, &wake, |nav| handler(nav, &event));
        }) as Box<dyn FnMut(Event)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event_name,
                listener.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|err| js_error("failed to register listener", &err))?;
        self.registrations
            .push((target.clone(), event_name, listener));
        Ok(())
    }
}

fn first_touch_point(list: web_sys::TouchList) -> Option<(f64, f64)> {
    list.get(0)
        .map(|touch| (f64::from(touch.client_x()), f64::from(touch.client_y())))
}

/// Wires keyboard, wheel, touch and click input into `navigator`.
pub fn bind(navigator: &SharedNavigator, window: &Window) -> DeckResult<DomBindings> {
    let document = window
        .document()
        .ok_or_else(|| crate::error::DeckError::Presenter("window has no document".to_owned()))?;
    let document_target: EventTarget = document.into();

    let wake = SharedWake::default();
    let mut registrar = Registrar {
        navigator,
        window,
        wake: &wake,
        registrations: Vec::new(),
    };

    registrar.listen(&document_target, "keydown", false, |nav, event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return Ok(());
        };
        if nav.handle_key(&event.key())?.prevent_default {
            event.prevent_default();
        }
        Ok(())
    })?;

    registrar.listen(&document_target, "wheel", true, |nav, event| {
        if let Some(event) = event.dyn_ref::<WheelEvent>() {
            nav.handle_wheel(event.delta_y())?;
        }
        Ok(())
    })?;

    registrar.listen(&document_target, "touchstart", true, |nav, event| {
        let point = event
            .dyn_ref::<TouchEvent>()
            .and_then(|event| first_touch_point(event.touches()));
        if let Some((x, y)) = point {
            nav.touch_start(x, y)?;
        }
        Ok(())
    })?;

    registrar.listen(&document_target, "touchend", true, |nav, event| {
        let point = event
            .dyn_ref::<TouchEvent>()
            .and_then(|event| first_touch_point(event.changed_touches()));
        if let Some((x, y)) = point {
            nav.touch_end(x, y)?;
        }
        Ok(())
    })?;

    let (prev_button, next_button, dots) = {
        let guard = navigator.borrow();
        let presenter = guard.presenter();
        (
            presenter.prev_button().cloned(),
            presenter.next_button().cloned(),
            presenter.dot_elements().to_vec(),
        )
    };

    if let Some(button) = prev_button {
        registrar.listen(&button.into(), "click", false, |nav, _| {
            nav.click_prev().map(|_| ())
        })?;
    }
    if let Some(button) = next_button {
        registrar.listen(&button.into(), "click", false, |nav, _| {
            nav.click_next().map(|_| ())
        })?;
    }
    for (index, dot) in dots.into_iter().enumerate() {
        let slide = index + 1;
        registrar.listen(&dot.into(), "click", false, move |nav, _| {
            nav.click_dot(slide).map(|_| ())
        })?;
    }

    let registrations = registrar.registrations;
    Ok(DomBindings {
        window: window.clone(),
        wake,
        registrations,
    })
}
