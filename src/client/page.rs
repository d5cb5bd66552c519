use super::api::{ApiClient, ClientError};
use crate::models::mood::{CreateMoodRequest, MoodEntry};

pub const LOAD_ERROR: &str = "Failed to load mood entries.";
pub const MOOD_MISSING: &str = "Please select a mood.";
pub const SAVE_FALLBACK: &str = "An error occurred while saving your mood.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    Idle,
    Loading,
    Loaded,
    LoadError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

/// State of one journal page session: the form fields, the entry list, and
/// the two independent request lifecycles (list fetch and form submit).
///
/// The `begin_*`/`finish_*` pairs are the transitions; [`JournalPage::load`]
/// and [`JournalPage::submit`] drive them against an [`ApiClient`].
#[derive(Debug, Default)]
pub struct JournalPage {
    pub mood: String,
    pub note: String,
    entries: Vec<MoodEntry>,
    list_state: ListState,
    submit_state: SubmitState,
    error: Option<String>,
}

impl JournalPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn list_state(&self) -> ListState {
        self.list_state
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit_state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.list_state == ListState::Loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_state == SubmitState::Submitting
    }

    pub fn begin_load(&mut self) {
        self.list_state = ListState::Loading;
    }

    pub fn finish_load(&mut self, result: Result<Vec<MoodEntry>, ClientError>) {
        match result {
            Ok(entries) => {
                self.entries = entries;
                self.list_state = ListState::Loaded;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load mood entries");
                self.entries.clear();
                self.error = Some(LOAD_ERROR.into());
                self.list_state = ListState::LoadError;
            }
        }
    }

    /// Validates the form and moves to `Submitting`, returning the request to
    /// send. Returns `None` when nothing should be sent: a submit is already
    /// in flight, or the mood is empty (the inline error is set).
    pub fn begin_submit(&mut self) -> Option<CreateMoodRequest> {
        if self.is_submitting() {
            return None;
        }

        self.error = None;
        if self.mood.is_empty() {
            self.error = Some(MOOD_MISSING.into());
            return None;
        }

        self.submit_state = SubmitState::Submitting;
        let note = Some(self.note.clone()).filter(|n| !n.is_empty());
        Some(CreateMoodRequest::new(self.mood.clone(), note))
    }

    pub fn finish_submit(&mut self, result: Result<MoodEntry, ClientError>) {
        match result {
            Ok(entry) => {
                // Newest first, without refetching.
                self.entries.insert(0, entry);
                self.mood.clear();
                self.note.clear();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to save mood");
                let message = e.to_string();
                self.error = Some(if message.is_empty() {
                    SAVE_FALLBACK.into()
                } else {
                    message
                });
            }
        }
        self.submit_state = SubmitState::Idle;
    }

    pub async fn load(&mut self, api: &ApiClient) {
        self.begin_load();
        let result = api.list_moods().await;
        self.finish_load(result);
    }

    /// Returns true when an entry was saved.
    pub async fn submit(&mut self, api: &ApiClient) -> bool {
        let Some(request) = self.begin_submit() else {
            return false;
        };
        let result = api.create_mood(&request).await;
        let saved = result.is_ok();
        self.finish_submit(result);
        saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(id: i64, mood: &str) -> MoodEntry {
        MoodEntry {
            id,
            mood: mood.into(),
            note: None,
            created_at: Utc.with_ymd_and_hms(2026, 10, 15, 9, id as u32, 0).unwrap(),
        }
    }

    #[test]
    fn test_load_success_populates_entries() {
        let mut page = JournalPage::new();
        assert_eq!(page.list_state(), ListState::Idle);

        page.begin_load();
        assert!(page.is_loading());

        page.finish_load(Ok(vec![entry(2, "Calm"), entry(1, "Sad")]));
        assert_eq!(page.list_state(), ListState::Loaded);
        assert_eq!(page.entries().len(), 2);
        assert_eq!(page.error(), None);
    }

    #[test]
    fn test_load_failure_sets_error_and_empty_list() {
        let mut page = JournalPage::new();
        page.begin_load();
        page.finish_load(Err(ClientError::NonJson { status: 502 }));

        assert_eq!(page.list_state(), ListState::LoadError);
        assert!(page.entries().is_empty());
        assert_eq!(page.error(), Some(LOAD_ERROR));
    }

    #[test]
    fn test_submit_without_mood_is_blocked() {
        let mut page = JournalPage::new();
        page.note = "forgot the mood".into();

        assert!(page.begin_submit().is_none());
        assert_eq!(page.error(), Some(MOOD_MISSING));
        assert_eq!(page.submit_state(), SubmitState::Idle);
        assert_eq!(page.note, "forgot the mood");
    }

    #[test]
    fn test_submit_success_prepends_and_clears_form() {
        let mut page = JournalPage::new();
        page.finish_load(Ok(vec![entry(1, "Sad")]));
        page.mood = "Happy".into();
        page.note = "ok".into();

        let request = page.begin_submit().unwrap();
        assert_eq!(request.mood.as_deref(), Some("Happy"));
        assert_eq!(request.note.as_deref(), Some("ok"));
        assert!(page.is_submitting());
        assert!(page.begin_submit().is_none(), "no second submit while in flight");

        page.finish_submit(Ok(entry(2, "Happy")));
        assert_eq!(page.submit_state(), SubmitState::Idle);
        assert_eq!(page.entries()[0].id, 2);
        assert_eq!(page.entries()[1].id, 1);
        assert!(page.mood.is_empty());
        assert!(page.note.is_empty());
    }

    #[test]
    fn test_blank_note_is_sent_as_absent() {
        let mut page = JournalPage::new();
        page.mood = "Neutral".into();
        let request = page.begin_submit().unwrap();
        assert_eq!(request.note, None);
    }

    #[test]
    fn test_submit_failure_keeps_list_and_form() {
        let mut page = JournalPage::new();
        page.finish_load(Ok(vec![entry(1, "Sad")]));
        page.mood = "Happy".into();

        page.begin_submit().unwrap();
        page.finish_submit(Err(ClientError::Api {
            status: 500,
            message: "Failed to save mood".into(),
        }));

        assert_eq!(page.submit_state(), SubmitState::Idle);
        assert_eq!(page.error(), Some("Failed to save mood"));
        assert_eq!(page.entries().len(), 1);
        assert_eq!(page.mood, "Happy");
    }

    #[test]
    fn test_empty_server_message_uses_fallback() {
        let mut page = JournalPage::new();
        page.mood = "Happy".into();
        page.begin_submit().unwrap();
        page.finish_submit(Err(ClientError::Api {
            status: 500,
            message: String::new(),
        }));
        assert_eq!(page.error(), Some(SAVE_FALLBACK));
    }

    #[test]
    fn test_new_submit_clears_previous_error() {
        let mut page = JournalPage::new();
        assert!(page.begin_submit().is_none());
        assert!(page.error().is_some());

        page.mood = "Calm".into();
        assert!(page.begin_submit().is_some());
        assert_eq!(page.error(), None);
    }
}
