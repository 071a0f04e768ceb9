use chrono::{DateTime, Local};

use crate::{
    coordinate::Coordinate,
    workout::{Workout, WorkoutId, WorkoutType},
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown workout type {0:?}")]
    UnknownType(String),
    #[error("{field} is not a number")]
    NotANumber { field: &'static str },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

/// Raw values of the workout form, exactly as read from the inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    pub workout_type: String,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

/// A validated form submission, waiting for an id, a date and a location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutDraft {
    pub workout_type: WorkoutType,
    pub distance: f64,
    pub duration: f64,
    /// Cadence for running, elevation gain for cycling
    pub metric: f64,
}

impl FormInput {
    pub fn parse(&self) -> Result<WorkoutDraft, ValidationError> {
        let workout_type = self.workout_type.parse::<WorkoutType>()?;

        let distance = positive_number("distance", &self.distance)?;
        let duration = positive_number("duration", &self.duration)?;
        let metric = match workout_type {
            WorkoutType::Running => positive_number("cadence", &self.cadence)?,
            WorkoutType::Cycling => positive_number("elevation gain", &self.elevation)?,
        };

        Ok(WorkoutDraft {
            workout_type,
            distance,
            duration,
            metric,
        })
    }
}

impl WorkoutDraft {
    pub fn into_workout(self, id: WorkoutId, date: DateTime<Local>, coordinate: Coordinate) -> Workout {
        match self.workout_type {
            WorkoutType::Running => Workout::running(id, date, coordinate, self.distance, self.duration, self.metric),
            WorkoutType::Cycling => Workout::cycling(id, date, coordinate, self.distance, self.duration, self.metric),
        }
    }
}

fn positive_number(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::NotANumber { field })?;

    if !value.is_finite() {
        return Err(ValidationError::NotANumber { field });
    }

    if value <= 0. {
        return Err(ValidationError::NotPositive { field, value });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::input;

    #[test]
    fn valid_running() {
        let draft = input("running", "5", "30", "150", "").parse().unwrap();
        assert_eq!(draft, WorkoutDraft { workout_type: WorkoutType::Running, distance: 5., duration: 30., metric: 150. });
    }

    #[test]
    fn valid_cycling_ignores_cadence() {
        let draft = input("cycling", " 10 ", "40", "garbage", "200").parse().unwrap();
        assert_eq!(draft, WorkoutDraft { workout_type: WorkoutType::Cycling, distance: 10., duration: 40., metric: 200. });
    }

    #[test]
    fn rejects_non_positive() {
        assert_eq!(
            input("running", "-1", "30", "150", "").parse(),
            Err(ValidationError::NotPositive { field: "distance", value: -1. })
        );
        assert_eq!(
            input("running", "5", "0", "150", "").parse(),
            Err(ValidationError::NotPositive { field: "duration", value: 0. })
        );
        assert_eq!(
            input("cycling", "5", "30", "150", "-20").parse(),
            Err(ValidationError::NotPositive { field: "elevation gain", value: -20. })
        );
    }

    #[test]
    fn rejects_non_numbers() {
        for bad in ["", "abc", "NaN", "inf", "-infinity", "1e400"] {
            assert_eq!(
                input("running", bad, "30", "150", "").parse(),
                Err(ValidationError::NotANumber { field: "distance" }),
                "{bad:?} should not be accepted"
            );
        }

        assert_eq!(
            input("running", "5", "30", "", "200").parse(),
            Err(ValidationError::NotANumber { field: "cadence" })
        );
    }

    #[test]
    fn rejects_unknown_type() {
        assert_eq!(
            input("hiking", "5", "30", "150", "200").parse(),
            Err(ValidationError::UnknownType("hiking".into()))
        );
    }
}
