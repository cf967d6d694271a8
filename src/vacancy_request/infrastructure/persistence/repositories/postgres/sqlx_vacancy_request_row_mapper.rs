use sqlx::{
    Postgres, Row,
    postgres::{PgArguments, PgRow},
    query::Query,
};

use crate::vacancy_request::domain::model::{
    enums::vacancy_request_domain_error::VacancyRequestDomainError,
    value_objects::vacancy_request_details::VacancyRequestDetails,
};

/// Detail columns shared by `vacancy_requests` and `vacancies`, in bind order.
pub const DETAILS_COLUMNS: &str = "title, company_id, company_name, department_id, job_title_id, \
     city_id, company_structure_id, urgency, selection_type, place_of_work, requirements, \
     responsibilities, positions_count, salary_from, salary_to, description";

pub const DETAILS_COLUMN_COUNT: usize = 16;

pub fn map_infra_error(error: sqlx::Error) -> VacancyRequestDomainError {
    VacancyRequestDomainError::InfrastructureError(error.to_string())
}

/// `$first, $first+1, ...` for the detail columns.
pub fn details_placeholders(first: usize) -> String {
    (first..first + DETAILS_COLUMN_COUNT)
        .map(|index| format!("${index}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `title = $first, company_id = $first+1, ...` for updates.
pub fn details_assignments(first: usize) -> String {
    DETAILS_COLUMNS
        .split(',')
        .map(str::trim)
        .zip(first..)
        .map(|(column, index)| format!("{column} = ${index}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn bind_details<'q>(
    query: Query<'q, Postgres, PgArguments>,
    details: &'q VacancyRequestDetails,
) -> Query<'q, Postgres, PgArguments> {
    query
        .bind(details.title.as_str())
        .bind(details.company_id)
        .bind(details.company_name.as_deref())
        .bind(details.department_id)
        .bind(details.job_title_id)
        .bind(details.city_id)
        .bind(details.company_structure_id)
        .bind(details.urgency.as_str())
        .bind(details.selection_type.as_str())
        .bind(details.place_of_work.as_deref())
        .bind(details.requirements.as_deref())
        .bind(details.responsibilities.as_deref())
        .bind(details.positions_count)
        .bind(details.salary_from)
        .bind(details.salary_to)
        .bind(details.description.as_deref())
}

pub fn details_from_row(row: &PgRow) -> Result<VacancyRequestDetails, VacancyRequestDomainError> {
    Ok(VacancyRequestDetails {
        title: row.try_get("title").map_err(map_infra_error)?,
        company_id: row.try_get("company_id").map_err(map_infra_error)?,
        company_name: row.try_get("company_name").map_err(map_infra_error)?,
        department_id: row.try_get("department_id").map_err(map_infra_error)?,
        job_title_id: row.try_get("job_title_id").map_err(map_infra_error)?,
        city_id: row.try_get("city_id").map_err(map_infra_error)?,
        company_structure_id: row
            .try_get("company_structure_id")
            .map_err(map_infra_error)?,
        urgency: row
            .try_get::<String, _>("urgency")
            .map_err(map_infra_error)?
            .parse()?,
        selection_type: row
            .try_get::<String, _>("selection_type")
            .map_err(map_infra_error)?
            .parse()?,
        place_of_work: row.try_get("place_of_work").map_err(map_infra_error)?,
        requirements: row.try_get("requirements").map_err(map_infra_error)?,
        responsibilities: row.try_get("responsibilities").map_err(map_infra_error)?,
        positions_count: row.try_get("positions_count").map_err(map_infra_error)?,
        salary_from: row.try_get("salary_from").map_err(map_infra_error)?,
        salary_to: row.try_get("salary_to").map_err(map_infra_error)?,
        description: row.try_get("description").map_err(map_infra_error)?,
    })
}
