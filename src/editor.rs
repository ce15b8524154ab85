//! Field edits on a time bucket draft.
//!
//! Every edit takes the current draft by reference and produces a whole new
//! draft. [`TimeBucketEditor`] wires those transforms to an update callback.

use jiff::civil::Time;
use tracing::{debug, info, warn};

use crate::bucket::{Skill, TimeBucket};
use crate::catalog::SkillCatalog;
use crate::error::Result;
use crate::time_of_day::parse_time_of_day;
use crate::view::EditorView;
use crate::weekday::Weekday;

/// A single user interaction on the editor form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// `HH:mm` text from the start time input.
    StartTime(String),
    /// `HH:mm` text from the end time input.
    EndTime(String),
    AdditionalSkills(Vec<Skill>),
    ToggleWeekday(Weekday),
}

pub fn set_start_time(draft: &TimeBucket, start_time: Time) -> TimeBucket {
    TimeBucket {
        start_time,
        ..draft.clone()
    }
}

pub fn set_end_time(draft: &TimeBucket, end_time: Time) -> TimeBucket {
    TimeBucket {
        end_time,
        ..draft.clone()
    }
}

pub fn set_additional_skills(draft: &TimeBucket, additional_skill_set: Vec<Skill>) -> TimeBucket {
    TimeBucket {
        additional_skill_set,
        ..draft.clone()
    }
}

/// Appends `weekday` to the repeat days. Seats are never created here.
pub fn add_weekday(draft: &TimeBucket, weekday: Weekday) -> TimeBucket {
    if draft.repeats_on(weekday) {
        return draft.clone();
    }
    let mut repeat_on_day_set_list = draft.repeat_on_day_set_list.clone();
    repeat_on_day_set_list.push(weekday);
    TimeBucket {
        repeat_on_day_set_list,
        ..draft.clone()
    }
}

/// Deselects the weekday at `day_index` and drops every seat whose rotation
/// day falls on it. Dropped seats are not recoverable.
pub fn remove_weekday(draft: &TimeBucket, day_index: usize) -> Result<TimeBucket> {
    let weekday = Weekday::from_index(day_index)?;
    Ok(deselect(draft, weekday))
}

pub fn toggle_weekday(draft: &TimeBucket, weekday: Weekday) -> TimeBucket {
    if draft.repeats_on(weekday) {
        deselect(draft, weekday)
    } else {
        add_weekday(draft, weekday)
    }
}

fn deselect(draft: &TimeBucket, weekday: Weekday) -> TimeBucket {
    let day_index = weekday.index();
    let repeat_on_day_set_list = draft
        .repeat_on_day_set_list
        .iter()
        .copied()
        .filter(|day| *day != weekday)
        .collect();
    let seat_list: Vec<_> = draft
        .seat_list
        .iter()
        .filter(|seat| (seat.day_in_rotation % 7) as usize != day_index)
        .cloned()
        .collect();

    let dropped = draft.seat_list.len() - seat_list.len();
    if dropped > 0 {
        info!(%weekday, dropped, "dropped seats of deselected weekday");
    }

    TimeBucket {
        repeat_on_day_set_list,
        seat_list,
        ..draft.clone()
    }
}

/// Computes the draft that results from `edit`.
///
/// Malformed time text is rejected with [`crate::Error::InvalidTime`]; the
/// caller keeps its current draft.
pub fn apply(draft: &TimeBucket, edit: &Edit) -> Result<TimeBucket> {
    let next = match edit {
        Edit::StartTime(text) => set_start_time(draft, parse_time_of_day(text)?),
        Edit::EndTime(text) => set_end_time(draft, parse_time_of_day(text)?),
        Edit::AdditionalSkills(skills) => set_additional_skills(draft, skills.clone()),
        Edit::ToggleWeekday(weekday) => toggle_weekday(draft, *weekday),
    };
    Ok(next)
}

/// Editor form over one draft. Holds no state of its own: each edit is
/// reported to `on_update` as a full replacement draft.
pub struct TimeBucketEditor<'a, F> {
    name: &'a str,
    time_bucket: &'a TimeBucket,
    on_update: F,
}

impl<'a, F> TimeBucketEditor<'a, F>
where
    F: FnMut(TimeBucket),
{
    pub fn new(name: &'a str, time_bucket: &'a TimeBucket, on_update: F) -> Self {
        Self {
            name,
            time_bucket,
            on_update,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn time_bucket(&self) -> &TimeBucket {
        self.time_bucket
    }

    pub fn apply(&mut self, edit: &Edit) -> Result<()> {
        match apply(self.time_bucket, edit) {
            Ok(next) => {
                debug!(editor = self.name, ?edit, "applied edit");
                (self.on_update)(next);
                Ok(())
            }
            Err(err) => {
                warn!(editor = self.name, %err, "rejected edit");
                Err(err)
            }
        }
    }

    pub fn set_start_time(&mut self, text: &str) -> Result<()> {
        self.apply(&Edit::StartTime(text.to_string()))
    }

    pub fn set_end_time(&mut self, text: &str) -> Result<()> {
        self.apply(&Edit::EndTime(text.to_string()))
    }

    pub fn set_additional_skills(&mut self, skills: Vec<Skill>) {
        debug!(editor = self.name, count = skills.len(), "set additional skills");
        let next = set_additional_skills(self.time_bucket, skills);
        (self.on_update)(next);
    }

    pub fn toggle_weekday(&mut self, weekday: Weekday) {
        debug!(editor = self.name, %weekday, "toggled weekday");
        let next = toggle_weekday(self.time_bucket, weekday);
        (self.on_update)(next);
    }

    pub fn view(&self, catalog: &SkillCatalog) -> EditorView {
        EditorView::new(self.name, self.time_bucket, catalog)
    }
}
