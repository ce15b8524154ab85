use std::fmt::{self, Write};

use crate::bucket::TimeBucket;
use crate::catalog::SkillCatalog;
use crate::time_of_day::format_time_of_day;
use crate::weekday::Weekday;

pub const SKILLS_PLACEHOLDER: &str = "Select additional skills...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayToggle {
    pub weekday: Weekday,
    pub title: char,
    pub selected: bool,
}

/// What the editor form shows for one draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub skills: Vec<String>,
    pub skill_options: Vec<String>,
    pub days: [DayToggle; 7],
}

impl EditorView {
    pub fn new(name: &str, time_bucket: &TimeBucket, catalog: &SkillCatalog) -> Self {
        let days = Weekday::ALL.map(|weekday| DayToggle {
            weekday,
            title: weekday.title(),
            selected: time_bucket.repeats_on(weekday),
        });
        Self {
            title: name.to_string(),
            start_time: format_time_of_day(time_bucket.start_time),
            end_time: format_time_of_day(time_bucket.end_time),
            skills: time_bucket
                .additional_skill_set
                .iter()
                .map(|skill| skill.name.clone())
                .collect(),
            skill_options: catalog
                .options()
                .iter()
                .map(|skill| skill.name.clone())
                .collect(),
            days,
        }
    }

    pub fn selected_days(&self) -> impl Iterator<Item = Weekday> {
        self.days
            .iter()
            .filter(|toggle| toggle.selected)
            .map(|toggle| toggle.weekday)
    }

    pub fn render(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "{}", self.title)?;
        writeln!(out, "{} to {}", self.start_time, self.end_time)?;

        if self.skills.is_empty() {
            writeln!(out, "Additional Skills: {SKILLS_PLACEHOLDER}")?;
        } else {
            writeln!(out, "Additional Skills: {}", self.skills.join(", "))?;
        }
        if !self.skill_options.is_empty() {
            writeln!(out, "  options: {}", self.skill_options.join(", "))?;
        }

        write!(out, "Repeat on")?;
        for toggle in &self.days {
            if toggle.selected {
                write!(out, " [{}]", toggle.title)?;
            } else {
                write!(out, "  {} ", toggle.title.to_ascii_lowercase())?;
            }
        }
        writeln!(out)?;
        Ok(())
    }
}

impl fmt::Display for EditorView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.render(&mut buf)?;
        f.write_str(&buf)
    }
}
