use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::vacancy_request::domain::model::{
    enums::{
        request_urgency::RequestUrgency, selection_type::SelectionType,
        vacancy_request_domain_error::VacancyRequestDomainError,
    },
    value_objects::vacancy_request_details::VacancyRequestDetails,
};

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct VacancyRequestDetailsResource {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub company_id: Option<Uuid>,
    #[validate(length(max = 255))]
    pub company_name: Option<String>,
    pub department_id: Option<Uuid>,
    pub job_title_id: Option<Uuid>,
    pub city_id: Option<Uuid>,
    pub company_structure_id: Option<Uuid>,
    /// `low`, `normal`, `high` or `urgent`; defaults to `normal`.
    pub urgency: Option<String>,
    /// `individual` or `mass`; defaults to `individual`.
    pub selection_type: Option<String>,
    pub place_of_work: Option<String>,
    pub requirements: Option<String>,
    pub responsibilities: Option<String>,
    #[validate(range(min = 1))]
    pub positions_count: i32,
    #[validate(range(min = 0))]
    pub salary_from: Option<i64>,
    #[validate(range(min = 0))]
    pub salary_to: Option<i64>,
    pub description: Option<String>,
}

impl VacancyRequestDetailsResource {
    pub fn into_details(self) -> Result<VacancyRequestDetails, VacancyRequestDomainError> {
        Ok(VacancyRequestDetails {
            title: self.title.trim().to_string(),
            company_id: self.company_id,
            company_name: self.company_name,
            department_id: self.department_id,
            job_title_id: self.job_title_id,
            city_id: self.city_id,
            company_structure_id: self.company_structure_id,
            urgency: self
                .urgency
                .as_deref()
                .map(str::parse::<RequestUrgency>)
                .transpose()?
                .unwrap_or_default(),
            selection_type: self
                .selection_type
                .as_deref()
                .map(str::parse::<SelectionType>)
                .transpose()?
                .unwrap_or_default(),
            place_of_work: self.place_of_work,
            requirements: self.requirements,
            responsibilities: self.responsibilities,
            positions_count: self.positions_count,
            salary_from: self.salary_from,
            salary_to: self.salary_to,
            description: self.description,
        })
    }
}

impl From<&VacancyRequestDetails> for VacancyRequestDetailsResource {
    fn from(details: &VacancyRequestDetails) -> Self {
        Self {
            title: details.title.clone(),
            company_id: details.company_id,
            company_name: details.company_name.clone(),
            department_id: details.department_id,
            job_title_id: details.job_title_id,
            city_id: details.city_id,
            company_structure_id: details.company_structure_id,
            urgency: Some(details.urgency.as_str().to_string()),
            selection_type: Some(details.selection_type.as_str().to_string()),
            place_of_work: details.place_of_work.clone(),
            requirements: details.requirements.clone(),
            responsibilities: details.responsibilities.clone(),
            positions_count: details.positions_count,
            salary_from: details.salary_from,
            salary_to: details.salary_to,
            description: details.description.clone(),
        }
    }
}
