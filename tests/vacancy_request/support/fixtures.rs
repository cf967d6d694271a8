use uuid::Uuid;
use vacancy_approval_api::vacancy_request::domain::model::{
    commands::{
        change_vacancy_request_status_command::ChangeVacancyRequestStatusCommand,
        create_vacancy_from_request_command::CreateVacancyFromRequestCommand,
        create_vacancy_request_command::{
            CreateVacancyRequestCommand, CreateVacancyRequestCommandParts,
        },
        decide_approval_task_command::{DecideApprovalTaskCommand, DecideApprovalTaskCommandParts},
        save_approval_tasks_command::SaveApprovalTasksCommand,
        update_vacancy_request_command::{
            UpdateVacancyRequestCommand, UpdateVacancyRequestCommandParts,
        },
    },
    enums::{
        approval_decision::ApprovalDecision, request_urgency::RequestUrgency,
        selection_type::SelectionType,
    },
    queries::vacancy_request_scope_query::VacancyRequestScopeQuery,
    value_objects::{space_id::SpaceId, user_id::UserId, vacancy_request_details::VacancyRequestDetails},
};

pub const SPACE_ID: &str = "0192f3a0-1111-7000-8000-000000000001";
pub const OTHER_SPACE_ID: &str = "0192f3a0-1111-7000-8000-000000000002";
pub const AUTHOR_ID: &str = "0192f3a0-2222-7000-8000-0000000000a1";
pub const APPROVER_A_ID: &str = "0192f3a0-2222-7000-8000-0000000000a2";
pub const APPROVER_B_ID: &str = "0192f3a0-2222-7000-8000-0000000000a3";
pub const APPROVER_C_ID: &str = "0192f3a0-2222-7000-8000-0000000000a4";
pub const OUTSIDER_ID: &str = "0192f3a0-2222-7000-8000-0000000000f0";
pub const DEPARTMENT_ID: &str = "0192f3a0-3333-7000-8000-000000000010";

pub fn space_id() -> SpaceId {
    SpaceId::new(SPACE_ID.to_string()).expect("valid space id")
}

pub fn user_id(value: &str) -> UserId {
    UserId::new(value.to_string()).expect("valid user id")
}

pub fn department_id() -> Uuid {
    Uuid::parse_str(DEPARTMENT_ID).expect("valid department id")
}

pub fn sample_details() -> VacancyRequestDetails {
    VacancyRequestDetails {
        title: "Backend engineer".to_string(),
        company_id: None,
        company_name: None,
        department_id: Some(department_id()),
        job_title_id: None,
        city_id: None,
        company_structure_id: None,
        urgency: RequestUrgency::High,
        selection_type: SelectionType::Individual,
        place_of_work: Some("Remote".to_string()),
        requirements: Some("Rust, PostgreSQL".to_string()),
        responsibilities: None,
        positions_count: 2,
        salary_from: Some(4000),
        salary_to: Some(6000),
        description: None,
    }
}

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn create_command(assignees: &[&str], as_draft: bool) -> CreateVacancyRequestCommand {
    create_command_with_details(sample_details(), assignees, as_draft)
}

pub fn create_command_with_details(
    details: VacancyRequestDetails,
    assignees: &[&str],
    as_draft: bool,
) -> CreateVacancyRequestCommand {
    CreateVacancyRequestCommand::new(CreateVacancyRequestCommandParts {
        space_id: SPACE_ID.to_string(),
        author_id: AUTHOR_ID.to_string(),
        details,
        assignee_ids: ids(assignees),
        as_draft,
    })
    .expect("valid create command")
}

pub fn update_command(
    request_id: Uuid,
    details: VacancyRequestDetails,
    assignees: &[&str],
) -> UpdateVacancyRequestCommand {
    UpdateVacancyRequestCommand::new(UpdateVacancyRequestCommandParts {
        space_id: SPACE_ID.to_string(),
        request_id: request_id.to_string(),
        actor_id: AUTHOR_ID.to_string(),
        details,
        assignee_ids: ids(assignees),
    })
    .expect("valid update command")
}

pub fn save_tasks_command(request_id: Uuid, assignees: &[&str]) -> SaveApprovalTasksCommand {
    SaveApprovalTasksCommand::new(
        SPACE_ID.to_string(),
        request_id.to_string(),
        AUTHOR_ID.to_string(),
        ids(assignees),
    )
    .expect("valid save tasks command")
}

pub fn change_status_command(request_id: Uuid, status: &str) -> ChangeVacancyRequestStatusCommand {
    ChangeVacancyRequestStatusCommand::new(
        SPACE_ID.to_string(),
        request_id.to_string(),
        AUTHOR_ID.to_string(),
        status.to_string(),
    )
    .expect("valid change status command")
}

pub fn decide_command(
    request_id: Uuid,
    task_id: Uuid,
    actor: &str,
    decision: ApprovalDecision,
    comment: Option<&str>,
) -> DecideApprovalTaskCommand {
    DecideApprovalTaskCommand::new(DecideApprovalTaskCommandParts {
        space_id: SPACE_ID.to_string(),
        request_id: request_id.to_string(),
        task_id: task_id.to_string(),
        actor_id: actor.to_string(),
        decision,
        comment: comment.map(str::to_string),
    })
    .expect("valid decide command")
}

pub fn create_vacancy_command(request_id: Uuid) -> CreateVacancyFromRequestCommand {
    CreateVacancyFromRequestCommand::new(
        SPACE_ID.to_string(),
        request_id.to_string(),
        AUTHOR_ID.to_string(),
    )
    .expect("valid create vacancy command")
}

pub fn scope_query(space: &str, request_id: Uuid) -> VacancyRequestScopeQuery {
    VacancyRequestScopeQuery::new(space.to_string(), request_id.to_string())
        .expect("valid scope query")
}
