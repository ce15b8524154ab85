use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid time of day {input:?}, expected HH:mm: {source}")]
    InvalidTime {
        input: String,
        #[source]
        source: jiff::Error,
    },
    #[error("weekday index {0} is out of range (0..=6)")]
    DayIndex(usize),
    #[error("unknown weekday: {0}")]
    UnknownWeekday(String),
    #[error("skill {0:?} is not in the catalog")]
    UnknownSkill(String),
    #[error("invalid edit step {0:?}")]
    InvalidStep(String),
    #[error("no editing session is open")]
    SessionClosed,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(#[from] Box<figment::Error>),
}

pub type Result<T> = std::result::Result<T, Error>;
