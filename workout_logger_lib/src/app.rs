use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::{
    config::AppConfig,
    coordinate::Coordinate,
    entry::{MarkerPopup, WorkoutEntry},
    form::{FormInput, ValidationError},
    id::IdGenerator,
    ports::{EntryList, FormView, MapView, Notifier, Ports},
    workout::{Workout, WorkoutId, WorkoutType},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormState {
    Hidden,
    /// Waiting for a submission at the most recently clicked coordinate
    Open { pending: Coordinate },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapState {
    Locating,
    Ready,
    /// The position could not be found. There is no map for the rest of the session.
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("no map location has been picked")]
    FormClosed,
    #[error("invalid workout: {0}")]
    Invalid(#[from] ValidationError),
}

/// Owns the logged workouts and drives the map, form and list handles.
pub struct WorkoutLog<M, F, L, N> {
    workouts: Vec<Workout>,
    ports: Ports<M, F, L, N>,
    form_state: FormState,
    map_state: MapState,
    visible_metric: WorkoutType,
    ids: IdGenerator,
    config: AppConfig,
}

impl<M, F, L, N> WorkoutLog<M, F, L, N>
where
    M: MapView,
    F: FormView,
    L: EntryList,
    N: Notifier,
{
    /// The caller is expected to request the user's position right away and
    /// report back through `location_found` or `location_failed`.
    pub fn new(ports: Ports<M, F, L, N>, config: AppConfig) -> Self {
        Self {
            workouts: Vec::new(),
            ports,
            form_state: FormState::Hidden,
            map_state: MapState::Locating,
            visible_metric: WorkoutType::Running,
            ids: IdGenerator::new(),
            config,
        }
    }

    pub fn location_found(&mut self, position: Coordinate) {
        if self.map_state != MapState::Locating {
            warn!("Ignoring position {:?}, map is {:?}", position, self.map_state);
            return;
        }

        info!("Loading map at {}, {}", position.latitude, position.longitude);
        self.ports.map.load(position, self.config.map.zoom, &self.config.map.tiles);
        self.map_state = MapState::Ready;
    }

    pub fn location_failed(&mut self) {
        if self.map_state != MapState::Locating {
            return;
        }

        warn!("Could not get the current position");
        self.map_state = MapState::Unavailable;
        self.ports.notifier.alert(&self.config.location_error_message);
    }

    pub fn map_clicked(&mut self, at: Coordinate) {
        if self.map_state != MapState::Ready {
            return;
        }

        debug!("Map clicked at {:?}", at);
        self.form_state = FormState::Open { pending: at };
        self.ports.form.reveal();
    }

    /// Called with the value of the workout type selector whenever it changes.
    pub fn type_changed(&mut self, value: &str) {
        match value.parse::<WorkoutType>() {
            Ok(workout_type) => {
                self.visible_metric = workout_type;
                self.ports.form.show_metric_row(workout_type);
            }
            Err(err) => warn!("Type selector: {err}"),
        }
    }

    pub fn submit(&mut self, input: &FormInput, now: DateTime<Local>) -> Result<WorkoutId, SubmitError> {
        let FormState::Open { pending } = self.form_state else {
            warn!("Submission without a picked location");
            return Err(SubmitError::FormClosed);
        };

        let draft = match input.parse() {
            Ok(draft) => draft,
            Err(err) => {
                warn!("Rejected workout: {err}");
                self.ports.notifier.alert(&self.config.invalid_input_message);
                return Err(err.into());
            }
        };

        let id = self.ids.next(&now);
        let workout = draft.into_workout(id, now, pending);
        info!("New workout {}: {}", id, workout.description());

        let popup = MarkerPopup::for_workout(&workout, &self.config.popup);
        self.ports.map.add_marker(workout.coordinate(), &popup);
        self.ports.list.insert(WorkoutEntry::from(&workout));
        self.workouts.push(workout);

        self.ports.form.hide_and_reset(self.config.layout_restore_delay);
        self.form_state = FormState::Hidden;

        Ok(id)
    }

    /// `data_id` is the id attribute of the clicked list entry, `None` when
    /// the click landed outside of any entry.
    pub fn move_to(&mut self, data_id: Option<&str>) {
        let Some(data_id) = data_id else {
            return;
        };

        if self.map_state != MapState::Ready {
            return;
        }

        let Ok(id) = data_id.parse::<WorkoutId>() else {
            warn!("Malformed workout id {:?}", data_id);
            return;
        };

        let Some(center) = self.find(id).map(Workout::coordinate) else {
            warn!("No workout with id {}", id);
            return;
        };

        self.ports.map.set_view(center, self.config.map.zoom);
    }

    pub fn find(&self, id: WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|workout| workout.id() == id)
    }

    /// In submission order
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn form_state(&self) -> FormState {
        self.form_state
    }

    pub fn map_state(&self) -> MapState {
        self.map_state
    }

    pub fn visible_metric(&self) -> WorkoutType {
        self.visible_metric
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn ports(&self) -> &Ports<M, F, L, N> {
        &self.ports
    }
}
