use uuid::Uuid;

use crate::vacancy_request::domain::model::{
    enums::{
        dictionary_kind::DictionaryKind, request_urgency::RequestUrgency,
        selection_type::SelectionType,
    },
    value_objects::field_change::FieldChange,
};

const MAX_TITLE_LENGTH: usize = 255;

/// Descriptive fields shared by a request and the vacancy created from it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VacancyRequestDetails {
    pub title: String,
    pub company_id: Option<Uuid>,
    pub company_name: Option<String>,
    pub department_id: Option<Uuid>,
    pub job_title_id: Option<Uuid>,
    pub city_id: Option<Uuid>,
    pub company_structure_id: Option<Uuid>,
    pub urgency: RequestUrgency,
    pub selection_type: SelectionType,
    pub place_of_work: Option<String>,
    pub requirements: Option<String>,
    pub responsibilities: Option<String>,
    pub positions_count: i32,
    pub salary_from: Option<i64>,
    pub salary_to: Option<i64>,
    pub description: Option<String>,
}

impl VacancyRequestDetails {
    pub fn validate(&self) -> Result<(), String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("title is required".to_string());
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(format!("title exceeds {MAX_TITLE_LENGTH} characters"));
        }
        if self.positions_count < 1 {
            return Err("positions count must be at least 1".to_string());
        }
        if self.salary_from.is_some_and(|v| v < 0) || self.salary_to.is_some_and(|v| v < 0) {
            return Err("salary cannot be negative".to_string());
        }
        if let (Some(from), Some(to)) = (self.salary_from, self.salary_to) {
            if from > to {
                return Err("salary_from cannot exceed salary_to".to_string());
            }
        }
        Ok(())
    }

    pub fn dictionary_references(&self) -> Vec<(DictionaryKind, Uuid)> {
        [
            (DictionaryKind::Company, self.company_id),
            (DictionaryKind::Department, self.department_id),
            (DictionaryKind::JobTitle, self.job_title_id),
            (DictionaryKind::City, self.city_id),
            (DictionaryKind::CompanyStructure, self.company_structure_id),
        ]
        .into_iter()
        .filter_map(|(kind, id)| id.map(|id| (kind, id)))
        .collect()
    }

    /// Free-text company name to resolve when no company id was given.
    pub fn pending_company_name(&self) -> Option<&str> {
        if self.company_id.is_some() {
            return None;
        }
        self.company_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn diff(&self, other: &Self) -> Vec<FieldChange> {
        let before = self.as_fields();
        let after = other.as_fields();

        before
            .into_iter()
            .zip(after)
            .filter(|((_, old), (_, new))| old != new)
            .map(|((field, old), (_, new))| FieldChange::new(field, old, new))
            .collect()
    }

    fn as_fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("title", Some(self.title.clone())),
            ("company_id", self.company_id.map(|v| v.to_string())),
            ("company_name", self.company_name.clone()),
            ("department_id", self.department_id.map(|v| v.to_string())),
            ("job_title_id", self.job_title_id.map(|v| v.to_string())),
            ("city_id", self.city_id.map(|v| v.to_string())),
            (
                "company_structure_id",
                self.company_structure_id.map(|v| v.to_string()),
            ),
            ("urgency", Some(self.urgency.as_str().to_string())),
            (
                "selection_type",
                Some(self.selection_type.as_str().to_string()),
            ),
            ("place_of_work", self.place_of_work.clone()),
            ("requirements", self.requirements.clone()),
            ("responsibilities", self.responsibilities.clone()),
            ("positions_count", Some(self.positions_count.to_string())),
            ("salary_from", self.salary_from.map(|v| v.to_string())),
            ("salary_to", self.salary_to.map(|v| v.to_string())),
            ("description", self.description.clone()),
        ]
    }
}
