use chrono::NaiveDate;

use crate::domain::model::{DocumentRequest, Group};

pub const MSG_PROFESSOR_REQUIRED: &str = "Professor name is required.";
pub const MSG_COURSE_REQUIRED: &str = "Course name is required.";
pub const MSG_ASSISTANT_REQUIRED: &str = "Assistant name is required.";
pub const MSG_PLACE_REQUIRED: &str = "Place is required.";
pub const MSG_FROM_DATE_REQUIRED: &str = "Preparation date is required.";
pub const MSG_TO_DATE_REQUIRED: &str = "Semester-end date is required.";
pub const MSG_NO_GROUP_SELECTED: &str = "At least one group must be selected.";

/// The six scalar fields of the worksheet form. Dates stay optional until
/// the user supplies them; everything else is free text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub professor_name: String,
    pub course_name: String,
    pub assistant_name: String,
    pub place: String,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

/// Checks every requirement independently and collects all applicable
/// messages, in field order. An empty result means the form is valid.
pub fn validate(fields: &FormFields, selected_groups: &[Group]) -> Vec<String> {
    let mut messages = Vec::new();

    if fields.professor_name.trim().is_empty() {
        messages.push(MSG_PROFESSOR_REQUIRED.to_string());
    }
    if fields.course_name.trim().is_empty() {
        messages.push(MSG_COURSE_REQUIRED.to_string());
    }
    if fields.assistant_name.trim().is_empty() {
        messages.push(MSG_ASSISTANT_REQUIRED.to_string());
    }
    if fields.place.trim().is_empty() {
        messages.push(MSG_PLACE_REQUIRED.to_string());
    }
    if fields.from_date.is_none() {
        messages.push(MSG_FROM_DATE_REQUIRED.to_string());
    }
    if fields.to_date.is_none() {
        messages.push(MSG_TO_DATE_REQUIRED.to_string());
    }
    if selected_groups.is_empty() {
        messages.push(MSG_NO_GROUP_SELECTED.to_string());
    }

    messages
}

/// All-or-nothing request assembly: either every check passes and the
/// request carries the inputs verbatim, or the ordered message list comes
/// back and nothing is built.
pub fn build_request(
    fields: &FormFields,
    selected_groups: &[Group],
) -> std::result::Result<DocumentRequest, Vec<String>> {
    let messages = validate(fields, selected_groups);
    let (Some(from_date), Some(to_date)) = (fields.from_date, fields.to_date) else {
        return Err(messages);
    };
    if !messages.is_empty() {
        return Err(messages);
    }

    Ok(DocumentRequest {
        professor_name: fields.professor_name.clone(),
        course_name: fields.course_name.clone(),
        assistant_name: fields.assistant_name.clone(),
        place: fields.place.clone(),
        from_date,
        to_date,
        groups: selected_groups.to_vec(),
    })
}
