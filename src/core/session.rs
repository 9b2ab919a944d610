use crate::core::form::{self, FormFields};
use crate::core::notices::NoticeBoard;
use crate::core::selection::SelectionState;
use crate::domain::model::ProfessorRank;
use crate::domain::ports::{ConfigProvider, Storage, WorksheetGateway};
use crate::utils::error::Result;

/// Result of a submission attempt. `Rejected` carries the validation
/// messages that were also posted to the notice board; no request was sent.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved { file_name: String },
    Rejected(Vec<String>),
}

/// Drives the worksheet flow end to end: catalog loading, professor and
/// group selection, validation, submission, and saving the generated
/// document. Generic over its ports, so the gateway, storage, and config
/// are all swappable.
pub struct WorksheetSession<G, S, C> {
    gateway: G,
    storage: S,
    config: C,
    state: SelectionState,
    notices: NoticeBoard,
}

impl<G: WorksheetGateway, S: Storage, C: ConfigProvider> WorksheetSession<G, S, C> {
    pub fn new(gateway: G, storage: S, config: C) -> Self {
        Self {
            gateway,
            storage,
            config,
            state: SelectionState::new(),
            notices: NoticeBoard::new(),
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// Loads the group catalog and both rank partitions of the professor
    /// catalog. Replacement is wholesale; on failure the error propagates
    /// and the catalogs keep their previous contents.
    pub async fn load_catalogs(&mut self) -> Result<()> {
        tracing::info!("Loading catalogs from {}", self.config.api_base_url());

        let groups = self.gateway.fetch_groups().await?;
        let professors = self.gateway.fetch_professors(ProfessorRank::Professor).await?;
        let assistants = self.gateway.fetch_professors(ProfessorRank::Assistant).await?;

        tracing::info!(
            "Catalogs loaded: {} groups, {} professors, {} assistants",
            groups.len(),
            professors.len(),
            assistants.len()
        );

        self.state.set_groups(groups);
        self.state.set_professors(professors);
        self.state.set_assistant_catalog(assistants);
        Ok(())
    }

    /// Resolves the professor by exact full name, fetches their course
    /// list, and refreshes the derived course/assistant views. Unknown
    /// names are a no-op; a response that lost the race to a newer
    /// selection is discarded. Returns whether the state was updated.
    pub async fn select_professor(&mut self, full_name: &str) -> Result<bool> {
        let Some(ticket) = self.state.begin_course_lookup(full_name) else {
            tracing::warn!("No professor named {:?} in the catalog", full_name);
            return Ok(false);
        };

        let courses = self.gateway.fetch_courses(ticket.professor_id).await?;
        Ok(self.state.apply_course_lookup(ticket, courses))
    }

    pub fn add_group(&mut self, code: &str) -> bool {
        self.state.add_group(code)
    }

    pub fn remove_group(&mut self, index: usize) -> bool {
        self.state.remove_group(index)
    }

    pub fn set_pending_group_code(&mut self, code: Option<String>) {
        self.state.set_pending_group_code(code);
    }

    pub fn commit_pending_group(&mut self) -> bool {
        self.state.commit_pending_group()
    }

    /// Validates the form and, when it passes, sends the assembled request
    /// and writes the returned document under its derived filename. On
    /// validation failure the messages go to the notice board (they clear
    /// themselves after the display window) and nothing is sent. A gateway
    /// failure propagates; the selection is left intact so the user can
    /// correct and retry.
    pub async fn submit(&mut self, fields: &FormFields) -> Result<SubmitOutcome> {
        let request = match form::build_request(fields, self.state.selected_groups()) {
            Ok(request) => request,
            Err(messages) => {
                tracing::warn!("Submission rejected: {} validation errors", messages.len());
                self.notices.post(messages.clone());
                return Ok(SubmitOutcome::Rejected(messages));
            }
        };

        tracing::info!(
            "Requesting worksheet for {} group(s), course {:?}",
            request.groups.len(),
            request.course_name
        );
        let bytes = self.gateway.generate_worksheet(&request).await?;

        let file_name = request.suggested_filename();
        tracing::debug!("Writing document ({} bytes) to {}", bytes.len(), file_name);
        self.storage.write_file(&file_name, &bytes).await?;

        self.notices.clear();
        Ok(SubmitOutcome::Saved { file_name })
    }

    /// Clears selections and messages, the catalog data stays loaded.
    pub fn reset(&mut self) {
        self.state.reset();
        self.notices.clear();
    }
}
