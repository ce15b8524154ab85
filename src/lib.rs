pub mod bucket;
pub mod catalog;
pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
pub mod session;
pub mod step;
pub mod time_of_day;
pub mod view;
pub mod weekday;

pub use bucket::{Employee, Seat, Skill, Spot, TimeBucket};
pub use catalog::SkillCatalog;
pub use editor::{Edit, TimeBucketEditor, remove_weekday, toggle_weekday};
pub use error::{Error, Result};
pub use session::{EditSession, SessionOwner, SessionState};
pub use weekday::Weekday;
