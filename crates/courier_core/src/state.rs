use crate::view_model::AppViewModel;

pub type RequestId = u64;

/// Where the handler is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SubmitPhase {
    #[default]
    Idle,
    Submitting {
        request: RequestId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    title: String,
    author: String,
    file_path: Option<String>,
    phase: SubmitPhase,
    status: String,
    last_request: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            title: self.title.clone(),
            author: self.author.clone(),
            file_path: self.file_path.clone(),
            submit_enabled: self.phase == SubmitPhase::Idle,
            status: self.status.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and clears it; shells call this to decide
    /// whether a render pass is due.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn author(&self) -> &str {
        &self.author
    }

    pub(crate) fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref()
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
        self.dirty = true;
    }

    pub(crate) fn set_author(&mut self, author: String) {
        self.author = author;
        self.dirty = true;
    }

    pub(crate) fn choose_file(&mut self, path: String) {
        self.file_path = Some(path);
        self.dirty = true;
    }

    /// Moves to `Submitting` and returns the id allocated for the request.
    pub(crate) fn begin_submission(&mut self) -> RequestId {
        self.last_request += 1;
        self.phase = SubmitPhase::Submitting {
            request: self.last_request,
        };
        self.dirty = true;
        self.last_request
    }

    /// Returns to `Idle` with `status` as the new display text.
    pub(crate) fn settle_submission(&mut self, status: String) {
        self.phase = SubmitPhase::Idle;
        self.status = status;
        self.dirty = true;
    }
}
