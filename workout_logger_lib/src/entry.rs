use crate::{
    config::PopupConfig,
    workout::{Workout, WorkoutId, WorkoutKind, WorkoutType},
};

/// One `icon value unit` row of a rendered workout.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDetail {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

/// Everything the workout list needs to display a workout.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutEntry {
    pub id: WorkoutId,
    pub workout_type: WorkoutType,
    pub title: String,
    /// Type icon, also leading the distance row
    pub icon: &'static str,
    pub details: Vec<EntryDetail>,
}

impl WorkoutEntry {
    pub fn class_name(&self) -> String {
        format!("workout workout--{}", self.workout_type)
    }
}

impl From<&Workout> for WorkoutEntry {
    fn from(workout: &Workout) -> Self {
        let workout_type = workout.workout_type();

        let mut details = vec![
            detail(workout_type.icon(), workout.distance().to_string(), "km"),
            detail("⏱", workout.duration().to_string(), "min"),
        ];

        match workout.kind() {
            WorkoutKind::Running { cadence, pace } => {
                details.push(detail("⚡️", format!("{:.1}", pace), "min/km"));
                details.push(detail("🦶🏼", cadence.to_string(), "spm"));
            }
            WorkoutKind::Cycling { elevation_gain, speed } => {
                details.push(detail("⚡️", format!("{:.1}", speed), "min/km"));
                details.push(detail("⛰", elevation_gain.to_string(), "m"));
            }
        }

        Self {
            id: workout.id(),
            workout_type,
            title: workout.description().to_owned(),
            icon: workout_type.icon(),
            details,
        }
    }
}

fn detail(icon: &'static str, value: String, unit: &'static str) -> EntryDetail {
    EntryDetail { icon, value, unit }
}

/// Popup bound to the marker of a workout. It stays open until closed by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPopup {
    pub content: String,
    pub class_name: String,
    pub max_width: f64,
    pub max_height: f64,
    pub auto_close: bool,
    pub close_on_click: bool,
}

impl MarkerPopup {
    pub fn for_workout(workout: &Workout, config: &PopupConfig) -> Self {
        Self {
            content: workout.description().to_owned(),
            class_name: format!("{}-popup", workout.workout_type()),
            max_width: config.max_width,
            max_height: config.max_height,
            auto_close: false,
            close_on_click: false,
        }
    }
}
