use crate::catalog::SkillCatalog;
use crate::editor::Edit;
use crate::error::{Error, Result};

/// Parses a `key=value` edit step as given on the command line.
///
/// Recognized keys are `start`, `end`, `skills` (comma separated catalog
/// names, empty to clear) and `toggle` (a weekday name).
pub fn parse_step(step: &str, catalog: &SkillCatalog) -> Result<Edit> {
    let Some((key, value)) = step.split_once('=') else {
        return Err(Error::InvalidStep(step.to_string()));
    };
    let edit = match key.trim() {
        "start" => Edit::StartTime(value.to_string()),
        "end" => Edit::EndTime(value.to_string()),
        "skills" => {
            let names = value
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty());
            Edit::AdditionalSkills(catalog.resolve(names)?)
        }
        "toggle" => Edit::ToggleWeekday(value.parse()?),
        _ => return Err(Error::InvalidStep(step.to_string())),
    };
    Ok(edit)
}
