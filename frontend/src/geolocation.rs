use gloo_console::error;
use gloo_utils::window;
use wasm_bindgen::{prelude::*, JsCast};
use workout_logger_lib::coordinate::Coordinate;
use yew::Callback;

#[wasm_bindgen]
extern "C" {
    /// What `getCurrentPosition` hands to its success callback
    type Position;

    #[wasm_bindgen(method, getter)]
    fn coords(this: &Position) -> PositionCoords;

    type PositionCoords;

    #[wasm_bindgen(method, getter)]
    fn latitude(this: &PositionCoords) -> f64;

    #[wasm_bindgen(method, getter)]
    fn longitude(this: &PositionCoords) -> f64;
}

/// Asks the browser for the current position, once. Exactly one of the
/// callbacks is eventually called.
pub fn request_position(on_found: Callback<Coordinate>, on_failed: Callback<()>) {
    let geolocation = match window().navigator().geolocation() {
        Ok(geolocation) => geolocation,
        Err(err) => {
            error!("Geolocation is not available", err);
            on_failed.emit(());
            return;
        }
    };

    let success = Closure::once_into_js(move |position: Position| {
        let coords = position.coords();
        on_found.emit(Coordinate::new(coords.latitude(), coords.longitude()));
    });

    let failed = on_failed.clone();
    let failure = Closure::once_into_js(move |_err: JsValue| failed.emit(()));

    if let Err(err) = geolocation.get_current_position_with_error_callback(success.unchecked_ref(), Some(failure.unchecked_ref())) {
        error!("Failed to request position", err);
        on_failed.emit(());
    }
}
