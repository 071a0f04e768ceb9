use std::time::Duration;

use crate::{
    app::WorkoutLog,
    config::{AppConfig, TileLayerConfig},
    coordinate::Coordinate,
    entry::{MarkerPopup, WorkoutEntry},
    form::FormInput,
    ports::{EntryList, FormView, MapView, Notifier, Ports},
    workout::WorkoutType,
};

pub type FakeLog = WorkoutLog<FakeMap, FakeForm, FakeList, FakeNotifier>;

#[derive(Debug, Default)]
pub struct FakeMap {
    pub loads: Vec<(Coordinate, f64)>,
    pub markers: Vec<(Coordinate, MarkerPopup)>,
    pub views: Vec<(Coordinate, f64)>,
}

impl MapView for FakeMap {
    fn load(&mut self, center: Coordinate, zoom: f64, _tiles: &TileLayerConfig) {
        self.loads.push((center, zoom));
    }

    fn add_marker(&mut self, at: Coordinate, popup: &MarkerPopup) {
        self.markers.push((at, popup.clone()));
    }

    fn set_view(&mut self, center: Coordinate, zoom: f64) {
        self.views.push((center, zoom));
    }
}

#[derive(Debug, Default)]
pub struct FakeForm {
    pub reveals: usize,
    pub resets: Vec<Duration>,
    pub metric_rows: Vec<WorkoutType>,
}

impl FormView for FakeForm {
    fn reveal(&mut self) {
        self.reveals += 1;
    }

    fn hide_and_reset(&mut self, layout_delay: Duration) {
        self.resets.push(layout_delay);
    }

    fn show_metric_row(&mut self, workout_type: WorkoutType) {
        self.metric_rows.push(workout_type);
    }
}

#[derive(Debug, Default)]
pub struct FakeList {
    pub entries: Vec<WorkoutEntry>,
}

impl EntryList for FakeList {
    fn insert(&mut self, entry: WorkoutEntry) {
        self.entries.push(entry);
    }
}

#[derive(Debug, Default)]
pub struct FakeNotifier {
    pub alerts: Vec<String>,
}

impl Notifier for FakeNotifier {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }
}

pub fn test_log() -> FakeLog {
    let ports = Ports {
        map: FakeMap::default(),
        form: FakeForm::default(),
        list: FakeList::default(),
        notifier: FakeNotifier::default(),
    };
    WorkoutLog::new(ports, AppConfig::default())
}

/// A log whose map has already been loaded
pub fn ready_log() -> FakeLog {
    let mut log = test_log();
    log.location_found(Coordinate::new(56.175188, 10.196123));
    log
}

pub fn input(workout_type: &str, distance: &str, duration: &str, cadence: &str, elevation: &str) -> FormInput {
    FormInput {
        workout_type: workout_type.into(),
        distance: distance.into(),
        duration: duration.into(),
        cadence: cadence.into(),
        elevation: elevation.into(),
    }
}
