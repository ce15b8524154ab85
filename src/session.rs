//! Editing session hosted by the time bucket modal.
//!
//! A session is either closed or open with a draft copied from the source
//! record. Edits replace the draft; [`EditSession::save`] hands the final
//! draft to the owner, [`EditSession::cancel`] throws it away.

use tracing::{debug, info};

use crate::bucket::TimeBucket;
use crate::catalog::SkillCatalog;
use crate::editor::{Edit, TimeBucketEditor};
use crate::error::{Error, Result};
use crate::view::EditorView;

pub const DEFAULT_MODAL_TITLE: &str = "Create Working Time Bucket";
pub const DEFAULT_EDITOR_NAME: &str = "Time Bucket";

/// Receives the outcome of a session.
pub trait SessionOwner {
    fn on_update_time_bucket(&mut self, time_bucket: TimeBucket);
    fn on_close(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    Open { draft: TimeBucket },
}

#[derive(Debug, Clone)]
pub struct EditSession {
    title: String,
    editor_name: String,
    state: SessionState,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(DEFAULT_MODAL_TITLE, DEFAULT_EDITOR_NAME)
    }
}

impl EditSession {
    pub fn new(title: impl Into<String>, editor_name: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            editor_name: editor_name.into(),
            state: SessionState::Closed,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SessionState::Open { .. })
    }

    pub fn draft(&self) -> Option<&TimeBucket> {
        match &self.state {
            SessionState::Open { draft } => Some(draft),
            SessionState::Closed => None,
        }
    }

    pub fn open(&mut self, source: &TimeBucket) {
        self.sync(true, source);
    }

    /// Resynchronizes with the host's `(is_open, source)` pair.
    ///
    /// While open, the draft is reseeded from `source` every time this is
    /// called, discarding unsaved edits.
    pub fn sync(&mut self, is_open: bool, source: &TimeBucket) {
        if is_open {
            if self.is_open() {
                info!(title = %self.title, "reseeded draft from source");
            } else {
                info!(title = %self.title, "opened session");
            }
            self.state = SessionState::Open {
                draft: source.clone(),
            };
        } else if self.is_open() {
            info!(title = %self.title, "session closed by host");
            self.state = SessionState::Closed;
        }
    }

    /// Routes `edit` through the editor and keeps the replacement draft.
    pub fn apply(&mut self, edit: &Edit) -> Result<()> {
        let SessionState::Open { draft } = &mut self.state else {
            return Err(Error::SessionClosed);
        };
        let mut next = None;
        TimeBucketEditor::new(&self.editor_name, draft, |updated| next = Some(updated))
            .apply(edit)?;
        if let Some(updated) = next {
            *draft = updated;
        }
        Ok(())
    }

    pub fn view(&self, catalog: &SkillCatalog) -> Option<EditorView> {
        self.draft().map(|draft| {
            TimeBucketEditor::new(&self.editor_name, draft, |_| {}).view(catalog)
        })
    }

    /// Discards the draft. No update is reported.
    pub fn cancel(&mut self, owner: &mut impl SessionOwner) {
        if !self.is_open() {
            debug!(title = %self.title, "cancel on closed session ignored");
            return;
        }
        self.state = SessionState::Closed;
        info!(title = %self.title, "discarded draft");
        owner.on_close();
    }

    /// Reports the final draft to the owner exactly once, then closes.
    pub fn save(&mut self, owner: &mut impl SessionOwner) -> Result<()> {
        let SessionState::Open { draft } = std::mem::replace(&mut self.state, SessionState::Closed)
        else {
            return Err(Error::SessionClosed);
        };
        info!(title = %self.title, "saved draft");
        owner.on_update_time_bucket(draft);
        owner.on_close();
        Ok(())
    }
}
