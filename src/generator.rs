use crate::config::{GeneratorConfig, PointerMode};
use crate::data::{
    Assignment, GenerateResponse, ScheduleEntry, ScheduleView, Slot, TeacherId, ViewKind,
};
use crate::hash::stable_hash;
use crate::policy::{assign_room, is_scheduled};
use itertools::Itertools;
use log::{debug, info, trace};
use std::collections::HashMap;

/// Per-view knobs for [`build_schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewParams {
    pub threshold: u32,
    pub room_base: u32,
    /// Refuse a candidate whose course already holds the previous period of the same day.
    pub avoid_repeats: bool,
    pub pointer: PointerMode,
}

impl ViewParams {
    pub fn class(config: &GeneratorConfig) -> Self {
        Self {
            threshold: config.aggregate_threshold,
            room_base: config.aggregate_room_base,
            avoid_repeats: true,
            pointer: PointerMode::Wrap,
        }
    }

    pub fn teacher(config: &GeneratorConfig) -> Self {
        Self {
            threshold: config.teacher_threshold,
            room_base: config.teacher_room_base,
            avoid_repeats: false,
            pointer: config.teacher_pointer,
        }
    }
}

/// Read-only data shared by every view of one generation run.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleContext<'a> {
    pub config: &'a GeneratorConfig,
    pub directory: &'a HashMap<TeacherId, String>,
    pub class_label: &'a str,
}

/// Fills one weekly grid from `assignments`, visiting days then periods in order.
///
/// A rotating pointer picks the candidate for each slot; the slot is taken
/// when the candidate's seed passes the threshold, otherwise the same
/// candidate is tried on the next slot. All state is local to the call.
pub fn build_schedule(
    assignments: &[&Assignment],
    params: &ViewParams,
    ctx: &ScheduleContext<'_>,
) -> Vec<ScheduleEntry> {
    let mut entries: Vec<ScheduleEntry> = Vec::new();
    if assignments.is_empty() {
        return entries;
    }

    // slot -> index into `entries`
    let mut occupied: HashMap<Slot, usize> = HashMap::new();
    let mut pointer = 0usize;

    for &day in &ctx.config.days {
        for period in 1..=ctx.config.periods_per_day {
            // only reachable with PointerMode::Stop
            if pointer >= assignments.len() {
                break;
            }
            if occupied.contains_key(&(day, period)) {
                continue;
            }

            let candidate = assignments[pointer];
            let seed = stable_hash(&format!("{}-{}-{}", candidate.id, day, period));
            if !is_scheduled(seed, params.threshold) {
                continue;
            }

            if params.avoid_repeats && period > 1 {
                let repeats = occupied
                    .get(&(day, period - 1))
                    .is_some_and(|&prev| entries[prev].course_code == candidate.course_code);
                if repeats {
                    trace!(
                        "{} {}: skipping {} to avoid a back-to-back repeat",
                        day,
                        period,
                        candidate.course_code
                    );
                    continue;
                }
            }

            trace!("{} {}: scheduling {}", day, period, candidate.course_code);
            occupied.insert((day, period), entries.len());
            entries.push(ScheduleEntry {
                day,
                period,
                course_code: candidate.course_code.clone(),
                course_name: candidate.course_name.clone(),
                teacher_name: candidate
                    .teacher_id
                    .as_ref()
                    .and_then(|t| ctx.directory.get(t))
                    .cloned(),
                location: assign_room(&candidate.id, period, params.room_base),
                class_label: ctx.class_label.to_string(),
                source_assignment_id: candidate.id.clone(),
            });

            pointer = match params.pointer {
                PointerMode::Wrap => (pointer + 1) % assignments.len(),
                PointerMode::Stop => pointer + 1,
            };
        }
    }

    entries
}

/// Builds the class view from every assignment plus one view per teacher
/// found in the directory. Teachers missing from the directory get no view.
pub fn generate(
    assignments: &[Assignment],
    directory: &HashMap<TeacherId, String>,
    class_label: &str,
    config: &GeneratorConfig,
) -> GenerateResponse {
    info!(
        "Generating timetable for '{}' from {} assignments...",
        class_label,
        assignments.len()
    );
    let ctx = ScheduleContext {
        config,
        directory,
        class_label,
    };

    let all: Vec<&Assignment> = assignments.iter().collect();
    let class_view = ScheduleView {
        view: ViewKind::Class,
        entries: build_schedule(&all, &ViewParams::class(config), &ctx),
    };

    let teacher_params = ViewParams::teacher(config);
    let mut teacher_views = Vec::new();
    for teacher_id in assignments
        .iter()
        .filter_map(|a| a.teacher_id.as_ref())
        .unique()
    {
        let Some(teacher_name) = directory.get(teacher_id) else {
            debug!("No directory entry for teacher {}, skipping their view", teacher_id);
            continue;
        };
        let own: Vec<&Assignment> = assignments
            .iter()
            .filter(|a| a.teacher_id.as_ref() == Some(teacher_id))
            .collect();
        teacher_views.push(ScheduleView {
            view: ViewKind::Teacher {
                teacher_id: teacher_id.clone(),
                teacher_name: teacher_name.clone(),
            },
            entries: build_schedule(&own, &teacher_params, &ctx),
        });
    }

    info!(
        "Generated class view with {} entries and {} teacher views.",
        class_view.len(),
        teacher_views.len()
    );
    GenerateResponse {
        class_view,
        teacher_views,
    }
}
