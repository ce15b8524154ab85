use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::bucket::Skill;
use crate::error::{Error, Result};

/// Skills offered by the additional-skills selector. Owned by the caller.
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    skills: Vec<Skill>,
}

impl SkillCatalog {
    pub fn new(skills: Vec<Skill>) -> Self {
        Self { skills }
    }

    /// Reads a JSON array of skills.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let skills = serde_json::from_reader(reader)?;
        Ok(Self { skills })
    }

    pub fn options(&self) -> &[Skill] {
        &self.skills
    }

    pub fn find(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|skill| skill.name == name)
    }

    /// Maps selected names to catalog entries, preserving the given order.
    pub fn resolve<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Result<Vec<Skill>> {
        names
            .into_iter()
            .map(|name| {
                self.find(name)
                    .cloned()
                    .ok_or_else(|| Error::UnknownSkill(name.to_string()))
            })
            .collect()
    }
}
