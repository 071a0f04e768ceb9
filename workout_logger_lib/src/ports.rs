//! Handles to everything outside the controller: the map library, the form,
//! the rendered workout list and the user facing alert.

use std::time::Duration;

use crate::{
    config::TileLayerConfig,
    coordinate::Coordinate,
    entry::{MarkerPopup, WorkoutEntry},
    workout::WorkoutType,
};

pub trait MapView {
    /// Create the map view centered at `center`, add the tile layer and
    /// start forwarding map clicks to the controller.
    fn load(&mut self, center: Coordinate, zoom: f64, tiles: &TileLayerConfig);

    fn add_marker(&mut self, at: Coordinate, popup: &MarkerPopup);

    fn set_view(&mut self, center: Coordinate, zoom: f64);
}

pub trait FormView {
    /// Show the form and focus the distance input.
    fn reveal(&mut self);

    /// Clear the numeric inputs and hide the form. The form is kept out of
    /// the layout for `layout_delay` so the next reveal does not animate.
    fn hide_and_reset(&mut self, layout_delay: Duration);

    /// Show the metric row belonging to `workout_type`, hide the other one.
    fn show_metric_row(&mut self, workout_type: WorkoutType);
}

pub trait EntryList {
    fn insert(&mut self, entry: WorkoutEntry);
}

pub trait Notifier {
    /// Blocking alert with a static message.
    fn alert(&mut self, message: &str);
}

pub struct Ports<M, F, L, N> {
    pub map: M,
    pub form: F,
    pub list: L,
    pub notifier: N,
}
