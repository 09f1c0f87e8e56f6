use crate::models::{MoodOption, NewEntryRequest};
use std::collections::BTreeMap;

/// Validates a submitted entry form against the currently loaded option set.
/// Returns every failure message so the form can show them all at once; an
/// empty vec means the form is acceptable.
pub fn validate_entry(
    form: &NewEntryRequest,
    options: &BTreeMap<String, Vec<MoodOption>>,
) -> Vec<String> {
    let mut errors = Vec::new();

    check_choice(
        &mut errors,
        options,
        "overallMood",
        &form.overall_mood,
        "Please select your overall mood",
    );
    check_choice(
        &mut errors,
        options,
        "energyLevel",
        &form.energy_level,
        "Please select your energy level",
    );
    check_choice(
        &mut errors,
        options,
        "primaryThoughts",
        &form.primary_thoughts,
        "Please select what dominated your thoughts",
    );

    if let Some(choices) = options.get("socialInteractions") {
        for tag in &form.social_interactions {
            if !choices.iter().any(|option| option.value == *tag) {
                errors.push(format!("\"{tag}\" is not a known social interaction"));
            }
        }
    }

    if !(1..=10).contains(&form.stress_level) {
        errors.push("Stress level must be between 1 and 10".to_string());
    }

    errors
}

fn check_choice(
    errors: &mut Vec<String>,
    options: &BTreeMap<String, Vec<MoodOption>>,
    category: &str,
    value: &str,
    empty_message: &str,
) {
    if value.is_empty() {
        errors.push(empty_message.to_string());
        return;
    }
    if let Some(choices) = options.get(category) {
        if !choices.iter().any(|option| option.value == value) {
            errors.push(format!("\"{value}\" is not an available choice"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_options;

    fn valid_form() -> NewEntryRequest {
        NewEntryRequest {
            overall_mood: "happy".into(),
            energy_level: "medium".into(),
            social_interactions: vec!["friends".into()],
            stress_level: 5,
            primary_thoughts: "work".into(),
            gratitude: "coffee".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_form_passes() {
        let errors = validate_entry(&valid_form(), &default_options());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let form = NewEntryRequest {
            stress_level: 5,
            ..Default::default()
        };
        let errors = validate_entry(&form, &default_options());
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("overall mood"));
        assert!(errors[1].contains("energy level"));
        assert!(errors[2].contains("thoughts"));
    }

    #[test]
    fn stress_level_must_be_in_range() {
        for level in [0, 11, -3] {
            let form = NewEntryRequest {
                stress_level: level,
                ..valid_form()
            };
            let errors = validate_entry(&form, &default_options());
            assert_eq!(
                errors,
                vec!["Stress level must be between 1 and 10".to_string()]
            );
        }
    }

    #[test]
    fn boundary_stress_levels_pass() {
        for level in [1, 10] {
            let form = NewEntryRequest {
                stress_level: level,
                ..valid_form()
            };
            assert!(validate_entry(&form, &default_options()).is_empty());
        }
    }

    #[test]
    fn unknown_enum_values_are_rejected() {
        let form = NewEntryRequest {
            overall_mood: "giddy".into(),
            social_interactions: vec!["pets".into()],
            ..valid_form()
        };
        let errors = validate_entry(&form, &default_options());
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("giddy"));
        assert!(errors[1].contains("pets"));
    }
}
