// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, NaiveDate, Utc};
use dose_certa_core::RecordId;
use serde::{Deserialize, Serialize};

use crate::validation::{require_text, ValidationError};

/// Upload ceiling per file (10 MiB).
pub const MAX_EXAM_FILE_BYTES: u64 = 10 * 1024 * 1024;

labeled_enum! {
    pub enum ExamCategory ("exam category") {
        Blood => "blood" | "sangue",
        Urine => "urine" | "urina",
        Imaging => "imaging" | "imagem",
        Cardiology => "cardiology" | "cardiologico",
        Neurology => "neurology" | "neurologico",
        Gynecology => "gynecology" | "ginecologico",
        Other => "other" | "outros",
    }
}

labeled_enum! {
    pub enum ExamMimeType ("exam file type") {
        Pdf => "application/pdf",
        Jpeg => "image/jpeg" | "image/jpg",
        Png => "image/png",
    }
}

impl ExamMimeType {
    /// Maps a file name extension to an accepted type.
    #[must_use]
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamFile {
    pub id: RecordId,
    pub name: String,
    pub size: u64,
    pub mime_type: ExamMimeType,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamRecord {
    pub id: RecordId,
    pub title: String,
    pub category: ExamCategory,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub files: Vec<ExamFile>,
    pub upload_date: DateTime<Utc>,
}

impl ExamRecord {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("exam title", &self.title)?;
        for file in &self.files {
            if file.size > MAX_EXAM_FILE_BYTES {
                return Err(ValidationError(format!(
                    "exam {}: file {} exceeds {MAX_EXAM_FILE_BYTES} bytes",
                    self.id, file.name
                )));
            }
        }
        Ok(())
    }
}

/// A locally selected file before it is accepted into an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamFileDraft {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub url: String,
}

impl ExamFileDraft {
    pub fn accepted_type(&self) -> Result<ExamMimeType, ValidationError> {
        ExamMimeType::parse(&self.mime_type).map_err(|_| {
            ValidationError(format!(
                "file {} has unsupported type `{}`; only PDF, JPEG and PNG are accepted",
                self.name, self.mime_type
            ))
        })
    }

    pub fn validate(&self) -> Result<ExamMimeType, ValidationError> {
        let mime = self.accepted_type()?;
        if self.size > MAX_EXAM_FILE_BYTES {
            return Err(ValidationError(format!(
                "file {} is larger than 10MB",
                self.name
            )));
        }
        Ok(mime)
    }
}

/// Exam form as submitted. Required fields stay optional here so that the
/// validation step can report which one is missing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExamUpload {
    pub title: String,
    pub category: Option<ExamCategory>,
    pub date: Option<NaiveDate>,
    pub doctor: Option<String>,
    pub notes: Option<String>,
    pub files: Vec<ExamFileDraft>,
}

impl ExamUpload {
    /// Returns the validated category, date and per-file types, in file order.
    pub fn validate(
        &self,
    ) -> Result<(ExamCategory, NaiveDate, Vec<ExamMimeType>), ValidationError> {
        if self.files.is_empty() {
            return Err(ValidationError::new("add at least one file to upload an exam"));
        }
        let (Some(category), Some(date)) = (self.category, self.date) else {
            return Err(ValidationError::new("title, category and date are required"));
        };
        require_text("exam title", &self.title)
            .map_err(|_| ValidationError::new("title, category and date are required"))?;
        let types = self
            .files
            .iter()
            .map(ExamFileDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((category, date, types))
    }
}
