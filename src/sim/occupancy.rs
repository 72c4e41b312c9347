//! Building classification and occupancy curves.
//!
//! Buildings are sorted into one of eight categories by case-insensitive
//! keyword matching on their display name, and each category carries a
//! hand-authored 24-hour occupancy curve reflecting expected diurnal usage:
//! dormitories peak at night, lecture buildings mid-morning and afternoon
//! with a lunch dip, cafeterias at the three meal windows, and so on.
//!
//! The keyword lists and curves are static configuration data; the rest of
//! the engine depends on them verbatim.

use serde::{Deserialize, Serialize};

/// Building categories recognized by the campus roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingType {
    /// Residence halls and student housing
    Dormitory,
    /// Classroom and general academic buildings
    Lecture,
    /// Research and laboratory facilities
    Lab,
    /// Dining halls and food service
    Cafeteria,
    /// Libraries and study annexes
    Library,
    /// Recreation and student union facilities
    StudentCenter,
    /// Administrative and support offices
    Admin,
    /// Everything else (stadiums, chapels, utility plants)
    Specialty,
}

/// Keyword lists evaluated top to bottom; the first matching category wins.
const CLASSIFIER_RULES: [(BuildingType, &[&str]); 7] = [
    (
        BuildingType::Dormitory,
        &["residence", "hall residence", "dorm", "housing"],
    ),
    (
        BuildingType::Lecture,
        &[
            "classroom",
            "academic",
            "liberal arts",
            "engineering",
            "sciences building",
            "blocker",
            "business",
        ],
    ),
    (
        BuildingType::Lab,
        &[
            "lab",
            "laboratory",
            "research",
            "veterinary",
            "medical",
            "science complex",
        ],
    ),
    (
        BuildingType::Cafeteria,
        &["dining", "cafeteria", "food", "commons", "sbisa", "underground"],
    ),
    (
        BuildingType::Library,
        &["library", "evans", "annex library"],
    ),
    (
        BuildingType::StudentCenter,
        &[
            "recreation",
            "rec center",
            "student center",
            "memorial student",
            "koldus",
        ],
    ),
    (
        BuildingType::Admin,
        &[
            "admin",
            "office",
            "services",
            "facility",
            "maintenance",
            "general services",
        ],
    ),
];

impl BuildingType {
    /// Classifies a building by its free-text display name.
    ///
    /// Matching is case-insensitive substring search against the category
    /// keyword lists, evaluated in a fixed priority order. Names matching no
    /// list fall through to [`BuildingType::Specialty`].
    pub fn classify(name: &str) -> BuildingType {
        let name = name.to_lowercase();

        for (category, keywords) in CLASSIFIER_RULES.iter() {
            if keywords.iter().any(|keyword| name.contains(keyword)) {
                return *category;
            }
        }

        BuildingType::Specialty
    }

    /// Returns the snake_case label used in reports and logs.
    pub fn label(&self) -> &'static str {
        match self {
            BuildingType::Dormitory => "dormitory",
            BuildingType::Lecture => "lecture",
            BuildingType::Lab => "lab",
            BuildingType::Cafeteria => "cafeteria",
            BuildingType::Library => "library",
            BuildingType::StudentCenter => "student_center",
            BuildingType::Admin => "admin",
            BuildingType::Specialty => "specialty",
        }
    }
}

/// A 24-hour fractional occupancy curve for one building type.
///
/// Each entry is an independent per-hour fraction in [0, 1]; the values are
/// not a probability distribution and need not sum to anything. Curves are
/// built once per building type and shared by every building of that type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancyProfile {
    values: [f64; 24],
}

impl OccupancyProfile {
    /// Fills hours [start, end) with a constant fraction.
    fn fill_range(&mut self, start: usize, end: usize, value: f64) {
        for hour in start..end.min(24) {
            self.values[hour] = value;
        }
    }

    /// Builds the occupancy curve for a building type.
    pub fn for_type(building_type: BuildingType) -> Self {
        let mut profile = OccupancyProfile { values: [0.0; 24] };

        match building_type {
            BuildingType::Dormitory => {
                profile.fill_range(0, 7, 0.9); // Night
                profile.fill_range(7, 9, 0.6); // Morning
                profile.fill_range(9, 17, 0.2); // Day (classes)
                profile.fill_range(17, 22, 0.8); // Evening
                profile.fill_range(22, 24, 0.9); // Night
            }
            BuildingType::Lecture => {
                profile.fill_range(0, 8, 0.05); // Night
                profile.fill_range(8, 12, 0.85); // Morning classes
                profile.fill_range(12, 13, 0.3); // Lunch
                profile.fill_range(13, 17, 0.75); // Afternoon
                profile.fill_range(17, 18, 0.4); // Transition
                profile.fill_range(18, 22, 0.5); // Evening classes
                profile.fill_range(22, 24, 0.1); // Night
            }
            BuildingType::Lab => {
                profile.fill_range(0, 8, 0.1); // Some overnight research
                profile.fill_range(8, 12, 0.7);
                profile.fill_range(12, 13, 0.4);
                profile.fill_range(13, 17, 0.7);
                profile.fill_range(17, 22, 0.6); // Research continues
                profile.fill_range(22, 24, 0.15);
            }
            BuildingType::Cafeteria => {
                profile.fill_range(0, 6, 0.05);
                profile.fill_range(6, 9, 0.7); // Breakfast
                profile.fill_range(9, 11, 0.2);
                profile.fill_range(11, 14, 0.95); // Lunch
                profile.fill_range(14, 17, 0.1);
                profile.fill_range(17, 20, 0.9); // Dinner
                profile.fill_range(20, 24, 0.15);
            }
            BuildingType::Library => {
                profile.fill_range(0, 8, 0.2); // Some overnight
                profile.fill_range(8, 12, 0.5);
                profile.fill_range(12, 17, 0.6);
                profile.fill_range(17, 24, 0.85); // Peak evening/night studying
            }
            BuildingType::StudentCenter => {
                profile.fill_range(0, 7, 0.05);
                profile.fill_range(7, 9, 0.4);
                profile.fill_range(9, 17, 0.7); // Peak day use
                profile.fill_range(17, 22, 0.8); // Evening activities
                profile.fill_range(22, 24, 0.2);
            }
            BuildingType::Admin => {
                profile.fill_range(0, 8, 0.02); // Security/overnight
                profile.fill_range(8, 17, 0.7); // Business hours
                profile.fill_range(17, 24, 0.05);
            }
            BuildingType::Specialty => {
                profile.fill_range(0, 24, 0.3);
            }
        }

        profile
    }

    /// Returns the occupancy fraction for a given hour of day.
    pub fn fraction(&self, hour: usize) -> f64 {
        self.values[hour % 24]
    }
}
