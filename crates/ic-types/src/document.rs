//! Library documents as returned by the `documents` table.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::Semester;

/// Kind of document. Exams get the primary badge, everything else the
/// secondary one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentType {
    Examen,
    Other(String),
}

impl DocumentType {
    pub fn as_str(&self) -> &str {
        match self {
            DocumentType::Examen => "examen",
            DocumentType::Other(kind) => kind,
        }
    }

    pub fn is_exam(&self) -> bool {
        matches!(self, DocumentType::Examen)
    }

    /// Upper-cased text shown in the card badge.
    pub fn badge_label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl From<String> for DocumentType {
    fn from(value: String) -> Self {
        if value == "examen" { DocumentType::Examen } else { DocumentType::Other(value) }
    }
}

impl From<DocumentType> for String {
    fn from(value: DocumentType) -> Self {
        match value {
            DocumentType::Examen => "examen".to_string(),
            DocumentType::Other(kind) => kind,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A downloadable document. Created by the upload flow, read-only here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Stable identifier, used as the card key.
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub document_type: DocumentType,
    pub semester: Semester,
    /// Public URL of the stored file.
    pub file_url: String,
    pub created_at: DateTime<Utc>,
}

impl Document {
    /// Description to render, with blank strings treated as absent.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().map(str::trim).filter(|d| !d.is_empty())
    }

    /// Creation date in the French short form (`dd/mm/yyyy`).
    pub fn display_date(&self) -> String {
        self.created_at.format("%d/%m/%Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": "5b1c6a2e-8f3d-4c1a-9e7b-2d4f6a8c0e13",
            "title": "Examen Algorithmique",
            "description": "",
            "document_type": "examen",
            "semester": 2,
            "file_url": "https://files.example.org/algo.pdf",
            "created_at": "2024-10-03T08:15:00.123456+00:00",
            "uploaded_by": "ignored"
        }"#
    }

    #[test]
    fn test_document_deserializes_store_row() {
        let doc: Document = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(doc.semester.number(), 2);
        assert!(doc.document_type.is_exam());
        assert_eq!(doc.document_type.badge_label(), "EXAMEN");
        assert_eq!(doc.description(), None);
        assert_eq!(doc.display_date(), "03/10/2024");
    }

    #[test]
    fn test_other_document_type_keeps_raw_text() {
        let kind = DocumentType::from("td".to_string());
        assert_eq!(kind, DocumentType::Other("td".to_string()));
        assert!(!kind.is_exam());
        assert_eq!(kind.badge_label(), "TD");
        assert_eq!(String::from(kind), "td");
    }

    #[test]
    fn test_out_of_range_semester_rejected() {
        let json = sample_json().replace("\"semester\": 2", "\"semester\": 9");
        assert!(serde_json::from_str::<Document>(&json).is_err());
    }
}
