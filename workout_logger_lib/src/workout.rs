use std::{fmt, num::ParseIntError, str::FromStr};

use chrono::{DateTime, Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::{coordinate::Coordinate, form::ValidationError};

/// Indexed by zero-based month
pub const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(pub i64);

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WorkoutId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(WorkoutId)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Running,
    Cycling,
}

impl WorkoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
        }
    }

    /// Capitalized name, as used in descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cycling => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutType::Running => "🏃‍♂️",
            WorkoutType::Cycling => "🚴‍♀️",
        }
    }
}

impl FromStr for WorkoutType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(WorkoutType::Running),
            "cycling" => Ok(WorkoutType::Cycling),
            other => Err(ValidationError::UnknownType(other.to_owned())),
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type specific part of a workout, including the derived metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutKind {
    Running {
        cadence: f64,
        pace: f64,
    },
    Cycling {
        #[serde(rename = "elevationGain")]
        elevation_gain: f64,
        speed: f64,
    },
}

impl WorkoutKind {
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            WorkoutKind::Running { .. } => WorkoutType::Running,
            WorkoutKind::Cycling { .. } => WorkoutType::Cycling,
        }
    }
}

/// A logged activity. Everything is computed at construction and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    id: WorkoutId,
    date: DateTime<Local>,
    #[serde(rename = "coord")]
    coordinate: Coordinate,
    distance: f64,
    duration: f64,
    description: String,
    #[serde(flatten)]
    kind: WorkoutKind,
}

impl Workout {
    /// Inputs are expected to be validated by the caller.
    pub fn running(id: WorkoutId, date: DateTime<Local>, coordinate: Coordinate, distance: f64, duration: f64, cadence: f64) -> Self {
        let pace = duration / distance;
        Self::new(id, date, coordinate, distance, duration, WorkoutKind::Running { cadence, pace })
    }

    /// Inputs are expected to be validated by the caller.
    pub fn cycling(id: WorkoutId, date: DateTime<Local>, coordinate: Coordinate, distance: f64, duration: f64, elevation_gain: f64) -> Self {
        let speed = duration / distance;
        Self::new(id, date, coordinate, distance, duration, WorkoutKind::Cycling { elevation_gain, speed })
    }

    fn new(id: WorkoutId, date: DateTime<Local>, coordinate: Coordinate, distance: f64, duration: f64, kind: WorkoutKind) -> Self {
        let description = describe(kind.workout_type(), &date);

        Self {
            id,
            date,
            coordinate,
            distance,
            duration,
            description,
            kind,
        }
    }

    pub fn id(&self) -> WorkoutId {
        self.id
    }

    pub fn date(&self) -> &DateTime<Local> {
        &self.date
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Kilometers
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Minutes
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &WorkoutKind {
        &self.kind
    }

    pub fn workout_type(&self) -> WorkoutType {
        self.kind.workout_type()
    }
}

fn describe(workout_type: WorkoutType, date: &DateTime<Local>) -> String {
    format!("{} on {} {}", workout_type.label(), date.day(), MONTHS[date.month0() as usize])
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn may_22() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 5, 22, 12, 9, 14).unwrap()
    }

    #[test]
    fn running_pace_is_duration_over_distance() {
        let workout = Workout::running(WorkoutId(1), may_22(), Coordinate::new(10., 20.), 5., 30., 150.);

        assert_eq!(workout.workout_type(), WorkoutType::Running);
        assert_eq!(workout.kind(), &WorkoutKind::Running { cadence: 150., pace: 6. });
        assert_eq!(workout.description(), "Running on 22 May");
        assert_eq!(workout.coordinate(), Coordinate::new(10., 20.));
    }

    #[test]
    fn cycling_speed_is_duration_over_distance() {
        let workout = Workout::cycling(WorkoutId(2), may_22(), Coordinate::new(0., 0.), 10., 40., 200.);

        assert_eq!(workout.workout_type(), WorkoutType::Cycling);
        assert_eq!(workout.kind(), &WorkoutKind::Cycling { elevation_gain: 200., speed: 4. });
        assert_eq!(workout.description(), "Cycling on 22 May");
    }

    #[test]
    fn description_uses_month_table() {
        for month in 1..=12 {
            let date = Local.with_ymd_and_hms(2024, month, 3, 12, 0, 0).unwrap();
            let workout = Workout::running(WorkoutId(0), date, Coordinate::new(0., 0.), 1., 1., 1.);
            assert_eq!(workout.description(), format!("Running on 3 {}", MONTHS[month as usize - 1]));
        }
    }

    #[test]
    fn parse_workout_type() {
        assert_eq!("running".parse::<WorkoutType>().unwrap(), WorkoutType::Running);
        assert_eq!("cycling".parse::<WorkoutType>().unwrap(), WorkoutType::Cycling);
        assert_eq!("swimming".parse::<WorkoutType>(), Err(ValidationError::UnknownType("swimming".into())));
        assert!("Running".parse::<WorkoutType>().is_err());
    }

    #[test]
    fn parse_workout_id() {
        assert_eq!("1716379754274".parse::<WorkoutId>().unwrap(), WorkoutId(1716379754274));
        assert!("abc".parse::<WorkoutId>().is_err());
        assert!("".parse::<WorkoutId>().is_err());
    }

    #[test]
    fn serializes_with_type_tag() {
        let workout = Workout::cycling(WorkoutId(7), may_22(), Coordinate::new(1., 2.), 10., 40., 200.);
        let json = serde_json::to_value(&workout).unwrap();

        assert_eq!(json["type"], "cycling");
        assert_eq!(json["id"], 7);
        assert_eq!(json["elevationGain"], 200.);
        assert_eq!(json["speed"], 4.);
        assert_eq!(json["coord"]["latitude"], 1.);
    }
}
