use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::config::GeneratorConfig;

// Type aliases for clarity
pub type AssignmentId = String;
pub type TeacherId = String;
/// 1-based period index within a day.
pub type Period = u32;

/// A teaching day. Weekends are never scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (day, period) coordinate in the weekly grid.
pub type Slot = (Day, Period);

/// One course-section-teacher binding, as handed over by the assignment source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: AssignmentId,
    pub course_code: String,
    pub course_name: String,
    #[serde(default)]
    pub teacher_id: Option<TeacherId>,
}

/// One occupied timetable cell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub day: Day,
    pub period: Period,
    pub course_code: String,
    pub course_name: String,
    pub teacher_name: Option<String>,
    pub location: String,
    pub class_label: String,
    pub source_assignment_id: AssignmentId,
}

impl ScheduleEntry {
    pub fn slot(&self) -> Slot {
        (self.day, self.period)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ViewKind {
    /// Every assignment of the section interleaved.
    Class,
    #[serde(rename_all = "camelCase")]
    Teacher {
        teacher_id: TeacherId,
        teacher_name: String,
    },
}

/// A complete generated timetable, either for the whole class or for one teacher.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleView {
    pub view: ViewKind,
    pub entries: Vec<ScheduleEntry>,
}

impl ScheduleView {
    pub fn entry_at(&self, day: Day, period: Period) -> Option<&ScheduleEntry> {
        self.entries
            .iter()
            .find(|e| e.day == day && e.period == period)
    }

    pub fn entries_on(&self, day: Day) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.iter().filter(move |e| e.day == day)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Body of a generation request.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub assignments: Vec<Assignment>,
    /// Teacher directory: teacher id to display name.
    #[serde(default)]
    pub teachers: HashMap<TeacherId, String>,
    #[serde(default)]
    pub class_label: String,
    #[serde(default)]
    pub config: Option<GeneratorConfig>,
}

/// The final output of the generator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub class_view: ScheduleView,
    pub teacher_views: Vec<ScheduleView>,
}
