use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::error::{Result, WorksheetError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub year: i32,
    pub email: String,
    pub paternal_initial: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub code: String,
    pub year: i32,
    #[serde(default)]
    pub students: Vec<Student>,
    pub group_leader: Option<Student>,
}

impl Group {
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        year: i32,
        students: Vec<Student>,
    ) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            year,
            students,
            group_leader: None,
        }
    }

    /// Fallible constructor: the leader must be one of the group's students.
    pub fn with_leader(
        id: impl Into<String>,
        code: impl Into<String>,
        year: i32,
        students: Vec<Student>,
        leader: Student,
    ) -> Result<Self> {
        let code = code.into();
        if !students.iter().any(|s| s.id == leader.id) {
            return Err(WorksheetError::InvalidGroupLeader { code });
        }
        Ok(Self {
            id: id.into(),
            code,
            year,
            students,
            group_leader: Some(leader),
        })
    }

    pub fn leader_is_member(&self) -> bool {
        match &self.group_leader {
            Some(leader) => self.students.iter().any(|s| s.id == leader.id),
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfessorRank {
    Professor,
    Assistant,
}

impl ProfessorRank {
    // Doubles as the path label of the professors-by-rank route.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfessorRank::Professor => "Professor",
            ProfessorRank::Assistant => "Assistant",
        }
    }
}

impl std::fmt::Display for ProfessorRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professor {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub courses: Vec<String>,
    pub email: Option<String>,
    pub rank: ProfessorRank,
}

impl Professor {
    pub fn shares_course(&self, courses: &[String]) -> bool {
        self.courses.iter().any(|c| courses.contains(c))
    }
}

/// Request body of the document-generation endpoint. Built all-or-nothing
/// by `core::form`, serialized once per submission, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    pub professor_name: String,
    pub course_name: String,
    pub assistant_name: String,
    pub place: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub groups: Vec<Group>,
}

impl DocumentRequest {
    /// Local filename for the downloaded worksheet, derived from the course
    /// name (spaces become underscores) and the selected group codes.
    pub fn suggested_filename(&self) -> String {
        let course = self.course_name.replace(' ', "_");
        let codes: Vec<&str> = self.groups.iter().map(|g| g.code.as_str()).collect();
        format!("Fisa_de_protectia_muncii_{}_{}.docx", course, codes.join("_"))
    }
}
