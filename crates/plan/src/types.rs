use std::{borrow::Cow, collections::HashSet};

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// A plan as submitted by the plan editor: name, schedule and the ordered
/// days with their ordered exercises.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_days"))]
pub struct PlanInput {
    #[validate(length(min = 1, message = "Plan name is required"))]
    pub name: String,
    #[validate(range(min = 1, max = 7, message = "Days per week must be between 1 and 7"))]
    pub days_per_week: u32,
    #[validate(nested)]
    pub days: Vec<DayInput>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DayInput {
    /// Persisted id, absent for a day added in the editor.
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "Day headline is required"))]
    pub headline: String,
    #[validate(nested)]
    pub exercises: Vec<ExerciseInput>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExerciseInput {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "Exercise name is required"))]
    pub name: String,
    pub sets: u32,
    pub reps: String,
}

/// Behaviour switches for plan reconciliation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Delete days and exercises that exist in the store but were left out
    /// of the submitted plan. Their logs go with them.
    pub prune_removed: bool,
}

fn validate_days(input: &PlanInput) -> Result<(), ValidationError> {
    if input.days.len() != input.days_per_week as usize {
        return Err(ValidationError::new("days").with_message(Cow::Owned(format!(
            "Expected {} days, got {}",
            input.days_per_week,
            input.days.len()
        ))));
    }

    let mut day_ids = HashSet::new();
    let mut exercise_ids = HashSet::new();

    for (index, day) in input.days.iter().enumerate() {
        if day.exercises.is_empty() {
            return Err(ValidationError::new("exercises").with_message(Cow::Owned(format!(
                "Please add at least one exercise for Day {}",
                index + 1
            ))));
        }

        if let Some(id) = &day.id
            && !day_ids.insert(id)
        {
            return Err(ValidationError::new("days")
                .with_message(Cow::Owned(format!("Day {id} submitted twice"))));
        }

        for exercise in &day.exercises {
            if let Some(id) = &exercise.id
                && !exercise_ids.insert(id)
            {
                return Err(ValidationError::new("exercises")
                    .with_message(Cow::Owned(format!("Exercise {id} submitted twice"))));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(name: &str) -> ExerciseInput {
        ExerciseInput {
            id: None,
            name: name.to_owned(),
            sets: 3,
            reps: "8-12".to_owned(),
        }
    }

    fn day(headline: &str, exercises: Vec<ExerciseInput>) -> DayInput {
        DayInput {
            id: None,
            headline: headline.to_owned(),
            exercises,
        }
    }

    #[test]
    fn test_valid_plan() {
        let input = PlanInput {
            name: "Upper Lower".to_owned(),
            days_per_week: 2,
            days: vec![
                day("Upper", vec![exercise("Bench Press")]),
                day("Lower", vec![exercise("Squat")]),
            ],
        };

        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_missing_name() {
        let input = PlanInput {
            name: String::new(),
            days_per_week: 1,
            days: vec![day("Full Body", vec![exercise("Deadlift")])],
        };

        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_days_per_week_out_of_range() {
        let input = PlanInput {
            name: "Every day".to_owned(),
            days_per_week: 8,
            days: (0..8)
                .map(|i| day(&format!("Day {i}"), vec![exercise("Plank")]))
                .collect(),
        };

        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("days_per_week"));
    }

    #[test]
    fn test_day_count_must_match_schedule() {
        let input = PlanInput {
            name: "PPL".to_owned(),
            days_per_week: 3,
            days: vec![day("Push", vec![exercise("Bench Press")])],
        };

        let errors = input.validate().unwrap_err();
        assert!(errors.to_string().contains("Expected 3 days, got 1"));
    }

    #[test]
    fn test_missing_headline_and_exercise_name() {
        let input = PlanInput {
            name: "PPL".to_owned(),
            days_per_week: 1,
            days: vec![day("", vec![exercise("")])],
        };

        assert!(input.validate().is_err());
    }

    #[test]
    fn test_day_without_exercises() {
        let input = PlanInput {
            name: "PPL".to_owned(),
            days_per_week: 2,
            days: vec![day("Push", vec![exercise("Dips")]), day("Pull", vec![])],
        };

        let errors = input.validate().unwrap_err();
        assert!(
            errors
                .to_string()
                .contains("Please add at least one exercise for Day 2")
        );
    }

    #[test]
    fn test_duplicate_exercise_id() {
        let mut first = exercise("Row");
        first.id = Some("01JEXERCISE".to_owned());
        let second = first.clone();

        let input = PlanInput {
            name: "Pull".to_owned(),
            days_per_week: 1,
            days: vec![day("Pull", vec![first, second])],
        };

        let errors = input.validate().unwrap_err();
        assert!(errors.to_string().contains("submitted twice"));
    }
}
