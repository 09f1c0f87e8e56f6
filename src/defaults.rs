use crate::models::{MoodColor, MoodOption};
use std::collections::BTreeMap;

/// Option categories, in the order the entry form presents them.
pub const OPTION_CATEGORIES: [&str; 4] = [
    "overallMood",
    "energyLevel",
    "socialInteractions",
    "primaryThoughts",
];

/// Seed option set materialized on first local use.
pub fn default_options() -> BTreeMap<String, Vec<MoodOption>> {
    let mut options = BTreeMap::new();
    options.insert(
        "overallMood".to_string(),
        option_list(&[
            ("ecstatic", "Ecstatic - On top of the world!"),
            ("happy", "Happy - Feeling great"),
            ("content", "Content - Satisfied and calm"),
            ("neutral", "Neutral - Neither good nor bad"),
            ("anxious", "Anxious - Worried or stressed"),
            ("sad", "Sad - Feeling down"),
            ("frustrated", "Frustrated - Annoyed or agitated"),
        ]),
    );
    options.insert(
        "energyLevel".to_string(),
        option_list(&[("high", "High"), ("medium", "Medium"), ("low", "Low")]),
    );
    options.insert(
        "socialInteractions".to_string(),
        option_list(&[
            ("family", "Family"),
            ("friends", "Friends"),
            ("colleagues", "Colleagues"),
            ("strangers", "Strangers"),
            ("none", "Mostly alone"),
        ]),
    );
    options.insert(
        "primaryThoughts".to_string(),
        option_list(&[
            ("work", "Work/Career"),
            ("relationships", "Relationships"),
            ("health", "Health/Wellness"),
            ("future", "Future plans"),
            ("past", "Past memories"),
            ("creative", "Creative projects"),
            ("learning", "Learning/Growth"),
            ("relaxation", "Rest and relaxation"),
        ]),
    );
    options
}

/// Seed color table: one color per overall mood.
pub fn default_colors() -> BTreeMap<String, MoodColor> {
    let mut colors = BTreeMap::new();
    for (mood, color, name, description) in [
        (
            "ecstatic",
            "#FF69B4",
            "Hot Pink",
            "A vibrant, energetic color that reflects your amazing high spirits!",
        ),
        (
            "happy",
            "#FFD700",
            "Golden Yellow",
            "A bright, cheerful color that captures your positive energy.",
        ),
        (
            "content",
            "#87CEEB",
            "Sky Blue",
            "A calm, peaceful color that represents your inner satisfaction.",
        ),
        (
            "neutral",
            "#98FB98",
            "Pale Green",
            "A balanced color that reflects your steady, composed state.",
        ),
        (
            "anxious",
            "#DDA0DD",
            "Plum",
            "A thoughtful color that acknowledges your current concerns.",
        ),
        (
            "sad",
            "#4169E1",
            "Royal Blue",
            "A deep, reflective color that honors your emotions.",
        ),
        (
            "frustrated",
            "#FF6347",
            "Tomato",
            "An intense color that captures your current agitation.",
        ),
    ] {
        colors.insert(
            mood.to_string(),
            MoodColor {
                color: color.to_string(),
                name: name.to_string(),
                description: description.to_string(),
            },
        );
    }
    colors
}

/// Neutral gray used when a mood key has no entry in the color table.
pub fn fallback_color() -> MoodColor {
    MoodColor {
        color: "#808080".to_string(),
        name: "Unknown".to_string(),
        description: "A unique color that represents your current emotional state.".to_string(),
    }
}

pub fn resolve_color(colors: &BTreeMap<String, MoodColor>, mood: &str) -> MoodColor {
    colors.get(mood).cloned().unwrap_or_else(fallback_color)
}

fn option_list(pairs: &[(&str, &str)]) -> Vec<MoodOption> {
    pairs
        .iter()
        .map(|(value, label)| MoodOption {
            value: (*value).to_string(),
            label: (*label).to_string(),
        })
        .collect()
}
