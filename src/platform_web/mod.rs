//! Browser adapter built on `web-sys`.
//!
//! `DomPresenter` is the DOM side of the `Presenter` port, `bind` wires DOM
//! input events into a shared navigator and `ChartJsBackend` forwards chart
//! definitions to a global Chart.js constructor.

mod bindings;
mod chart_js;
mod dom_presenter;

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::api::{NavigatorConfig, SlideNavigator};
use crate::charts::{ChartSetupReport, init_charts};
use crate::error::{DeckError, DeckResult};

pub use bindings::{DomBindings, bind};
pub use chart_js::ChartJsBackend;
pub use dom_presenter::DomPresenter;

pub type SharedNavigator = Rc<RefCell<SlideNavigator<DomPresenter>>>;

/// Everything `start` wires up. Dropping it detaches the input listeners.
pub struct DeckApp {
    pub navigator: SharedNavigator,
    pub bindings: DomBindings,
    pub charts: Option<ChartSetupReport>,
}

/// Boots the deck on the current page.
///
/// Charts are initialized only when a global `Chart` constructor exists.
pub fn start(config: NavigatorConfig) -> DeckResult<DeckApp> {
    let window = web_sys::window()
        .ok_or_else(|| DeckError::Presenter("no global window available".to_owned()))?;
    let document = window
        .document()
        .ok_or_else(|| DeckError::Presenter("window has no document".to_owned()))?;

    let presenter = DomPresenter::from_document(document.clone())?;
    let deck = presenter.read_deck()?;
    let navigator = SlideNavigator::new(presenter, deck, config)?;
    let navigator = Rc::new(RefCell::new(navigator));
    let bindings = bind(&navigator, &window)?;

    let charts = match ChartJsBackend::from_global(document) {
        Ok(mut backend) => Some(init_charts(&mut backend)?),
        Err(err) => {
            debug!(error = %err, "Chart.js not available, skipping chart setup");
            None
        }
    };

    Ok(DeckApp {
        navigator,
        bindings,
        charts,
    })
}

pub(crate) fn now_ms(window: &Window) -> f64 {
    window
        .performance()
        .map_or_else(js_sys::Date::now, |performance| performance.now())
}

pub(crate) fn js_error(context: &str, err: &JsValue) -> DeckError {
    DeckError::Presenter(format!("{context}: {err:?}"))
}
