use crate::domain::model::{Group, Professor};

/// Tag for an outgoing course query. Only the ticket from the most recent
/// `begin_course_lookup` is allowed to mutate the derived lists, so a slow
/// response for a previously selected professor cannot clobber the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseLookupTicket {
    pub seq: u64,
    pub professor_id: i64,
}

/// Catalogs and user selections behind the worksheet form. Pure state:
/// every operation is a synchronous transition, the session layer owns
/// all I/O.
#[derive(Debug, Default)]
pub struct SelectionState {
    groups: Vec<Group>,
    professors: Vec<Professor>,
    all_assistants: Vec<Professor>,
    assistants: Vec<Professor>,
    courses: Vec<String>,
    selected_groups: Vec<Group>,
    pending_group_code: Option<String>,
    current_professor: Option<Professor>,
    course_lookup_seq: u64,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    // Catalog replacement is wholesale, there is no incremental merge.

    pub fn set_groups(&mut self, groups: Vec<Group>) {
        tracing::debug!("Group catalog replaced: {} entries", groups.len());
        self.groups = groups;
    }

    pub fn set_professors(&mut self, professors: Vec<Professor>) {
        tracing::debug!("Professor catalog replaced: {} entries", professors.len());
        self.professors = professors;
    }

    pub fn set_assistant_catalog(&mut self, assistants: Vec<Professor>) {
        tracing::debug!("Assistant catalog replaced: {} entries", assistants.len());
        self.all_assistants = assistants;
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn professors(&self) -> &[Professor] {
        &self.professors
    }

    /// Assistant candidates for the currently selected professor.
    pub fn assistants(&self) -> &[Professor] {
        &self.assistants
    }

    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    pub fn selected_groups(&self) -> &[Group] {
        &self.selected_groups
    }

    pub fn pending_group_code(&self) -> Option<&str> {
        self.pending_group_code.as_deref()
    }

    pub fn find_professor(&self, full_name: &str) -> Option<&Professor> {
        self.professors.iter().find(|p| p.full_name == full_name)
    }

    /// Starts a course lookup for the professor matching `full_name` exactly.
    /// Unknown names are a no-op and return `None`. The returned ticket must
    /// be handed back to `apply_course_lookup` with the query result.
    pub fn begin_course_lookup(&mut self, full_name: &str) -> Option<CourseLookupTicket> {
        let professor = self.find_professor(full_name)?.clone();
        self.course_lookup_seq += 1;
        let ticket = CourseLookupTicket {
            seq: self.course_lookup_seq,
            professor_id: professor.id,
        };
        tracing::debug!(
            "Course lookup #{} started for professor {} (id {})",
            ticket.seq,
            professor.full_name,
            professor.id
        );
        self.current_professor = Some(professor);
        Some(ticket)
    }

    /// Applies a course-query result. Returns false and leaves the state
    /// untouched when the ticket is stale, i.e. a newer lookup has been
    /// started since this one was issued.
    pub fn apply_course_lookup(&mut self, ticket: CourseLookupTicket, courses: Vec<String>) -> bool {
        if ticket.seq != self.course_lookup_seq {
            tracing::debug!(
                "Discarding stale course lookup #{} (latest is #{})",
                ticket.seq,
                self.course_lookup_seq
            );
            return false;
        }
        self.courses = courses;
        self.recompute_assistants();
        true
    }

    // Every assistant whose course set overlaps the selected professor's
    // courses, with the professor themself appended last so they stay
    // selectable as their own assistant.
    fn recompute_assistants(&mut self) {
        let mut assistants: Vec<Professor> = self
            .all_assistants
            .iter()
            .filter(|a| a.shares_course(&self.courses))
            .cloned()
            .collect();
        if let Some(professor) = &self.current_professor {
            assistants.push(professor.clone());
        }
        tracing::debug!("Assistant candidates recomputed: {} entries", assistants.len());
        self.assistants = assistants;
    }

    pub fn set_pending_group_code(&mut self, code: Option<String>) {
        self.pending_group_code = code;
    }

    /// Appends the catalog group with `code` to the selection. No-op when
    /// the code is unknown or the group is already selected (duplicates are
    /// prevented by code equality, not identity). Clears the pending code
    /// on success.
    pub fn add_group(&mut self, code: &str) -> bool {
        let Some(group) = self.groups.iter().find(|g| g.code == code) else {
            tracing::warn!("Group code {} is not in the catalog, ignoring", code);
            return false;
        };
        if self.selected_groups.iter().any(|g| g.code == code) {
            tracing::debug!("Group {} already selected, ignoring", code);
            return false;
        }
        self.selected_groups.push(group.clone());
        self.pending_group_code = None;
        true
    }

    /// Commits the pending group code, if one is set.
    pub fn commit_pending_group(&mut self) -> bool {
        match self.pending_group_code.clone() {
            Some(code) => self.add_group(&code),
            None => false,
        }
    }

    /// Positional removal; out-of-range indices are ignored.
    pub fn remove_group(&mut self, index: usize) -> bool {
        if index >= self.selected_groups.len() {
            tracing::debug!(
                "remove_group({}) out of range (len {}), ignoring",
                index,
                self.selected_groups.len()
            );
            return false;
        }
        self.selected_groups.remove(index);
        true
    }

    /// Clears selections and derived lists. Catalogs are kept, they are
    /// read-only reference data for the session.
    pub fn reset(&mut self) {
        self.selected_groups.clear();
        self.pending_group_code = None;
        self.courses.clear();
        self.assistants.clear();
        self.current_professor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ProfessorRank;

    fn group(code: &str) -> Group {
        Group::new(format!("g-{}", code), code, 3, vec![])
    }

    fn professor(id: i64, name: &str, courses: &[&str], rank: ProfessorRank) -> Professor {
        Professor {
            id,
            full_name: name.to_string(),
            courses: courses.iter().map(|c| c.to_string()).collect(),
            email: None,
            rank,
        }
    }

    fn state_with_groups(codes: &[&str]) -> SelectionState {
        let mut state = SelectionState::new();
        state.set_groups(codes.iter().map(|c| group(c)).collect());
        state
    }

    #[test]
    fn test_add_group_unknown_code_is_noop() {
        let mut state = state_with_groups(&["30424", "30425"]);

        assert!(!state.add_group("99999"));
        assert!(state.selected_groups().is_empty());
    }

    #[test]
    fn test_add_group_rejects_duplicates_by_code() {
        let mut state = state_with_groups(&["30424", "30425"]);

        assert!(state.add_group("30424"));
        assert!(!state.add_group("30424"));
        assert_eq!(state.selected_groups().len(), 1);
    }

    #[test]
    fn test_add_group_preserves_insertion_order_and_clears_pending() {
        let mut state = state_with_groups(&["30424", "30425", "30426"]);
        state.set_pending_group_code(Some("30425".to_string()));

        assert!(state.add_group("30425"));
        assert!(state.add_group("30424"));

        let codes: Vec<&str> = state.selected_groups().iter().map(|g| g.code.as_str()).collect();
        assert_eq!(codes, vec!["30425", "30424"]);
        assert!(state.pending_group_code().is_none());
    }

    #[test]
    fn test_commit_pending_group() {
        let mut state = state_with_groups(&["30424"]);

        assert!(!state.commit_pending_group());

        state.set_pending_group_code(Some("30424".to_string()));
        assert!(state.commit_pending_group());
        assert_eq!(state.selected_groups().len(), 1);
        assert!(state.pending_group_code().is_none());
    }

    #[test]
    fn test_remove_group_shifts_remaining_elements() {
        let mut state = state_with_groups(&["30424", "30425", "30426"]);
        state.add_group("30424");
        state.add_group("30425");
        state.add_group("30426");

        assert!(state.remove_group(1));

        let codes: Vec<&str> = state.selected_groups().iter().map(|g| g.code.as_str()).collect();
        assert_eq!(codes, vec!["30424", "30426"]);
    }

    #[test]
    fn test_remove_group_out_of_range_is_ignored() {
        let mut state = state_with_groups(&["30424"]);
        state.add_group("30424");

        assert!(!state.remove_group(5));
        assert_eq!(state.selected_groups().len(), 1);
    }

    #[test]
    fn test_begin_course_lookup_unknown_name_is_noop() {
        let mut state = SelectionState::new();
        state.set_professors(vec![professor(1, "Ion Pop", &["Algorithms"], ProfessorRank::Professor)]);

        assert!(state.begin_course_lookup("Nobody Here").is_none());
        assert!(state.courses().is_empty());
    }

    #[test]
    fn test_assistant_filter_keeps_overlap_and_appends_professor() {
        let mut state = SelectionState::new();
        let p = professor(1, "Ion Pop", &["Algorithms"], ProfessorRank::Professor);
        let a = professor(2, "Maria Enache", &["Algorithms", "Networks"], ProfessorRank::Assistant);
        let b = professor(3, "Vlad Georgescu", &["Databases"], ProfessorRank::Assistant);
        state.set_professors(vec![p.clone()]);
        state.set_assistant_catalog(vec![a.clone(), b]);

        let ticket = state.begin_course_lookup("Ion Pop").unwrap();
        assert!(state.apply_course_lookup(ticket, vec!["Algorithms".to_string()]));

        let names: Vec<&str> = state.assistants().iter().map(|x| x.full_name.as_str()).collect();
        assert_eq!(names, vec!["Maria Enache", "Ion Pop"]);
        assert_eq!(state.courses(), ["Algorithms".to_string()]);
    }

    #[test]
    fn test_stale_course_lookup_is_discarded() {
        let mut state = SelectionState::new();
        state.set_professors(vec![
            professor(1, "Ion Pop", &["Algorithms"], ProfessorRank::Professor),
            professor(2, "Dan Marin", &["Databases"], ProfessorRank::Professor),
        ]);
        state.set_assistant_catalog(vec![professor(
            3,
            "Maria Enache",
            &["Databases"],
            ProfessorRank::Assistant,
        )]);

        let first = state.begin_course_lookup("Ion Pop").unwrap();
        let second = state.begin_course_lookup("Dan Marin").unwrap();

        // The first response arrives after the professor changed: dropped.
        assert!(!state.apply_course_lookup(first, vec!["Algorithms".to_string()]));
        assert!(state.courses().is_empty());

        assert!(state.apply_course_lookup(second, vec!["Databases".to_string()]));
        let names: Vec<&str> = state.assistants().iter().map(|x| x.full_name.as_str()).collect();
        assert_eq!(names, vec!["Maria Enache", "Dan Marin"]);
    }

    #[test]
    fn test_reset_keeps_catalogs() {
        let mut state = state_with_groups(&["30424"]);
        state.set_professors(vec![professor(1, "Ion Pop", &["Algorithms"], ProfessorRank::Professor)]);
        state.add_group("30424");
        let ticket = state.begin_course_lookup("Ion Pop").unwrap();
        state.apply_course_lookup(ticket, vec!["Algorithms".to_string()]);

        state.reset();

        assert!(state.selected_groups().is_empty());
        assert!(state.courses().is_empty());
        assert!(state.assistants().is_empty());
        assert_eq!(state.groups().len(), 1);
        assert_eq!(state.professors().len(), 1);
    }
}
