use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;
use vacancy_approval_api::authorization::{
    domain::model::enums::authorization_domain_error::AuthorizationDomainError,
    interfaces::acl::request_ownership_facade::RequestOwnershipFacade,
};

#[derive(Default)]
struct FakeOwnershipState {
    authors: Vec<(Uuid, Uuid)>,
    assignees: Vec<(Uuid, Uuid, Uuid)>,
    author_calls: usize,
    assignee_calls: usize,
    fail: bool,
}

pub struct FakeRequestOwnershipFacade {
    state: Mutex<FakeOwnershipState>,
}

impl FakeRequestOwnershipFacade {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeOwnershipState::default()),
        }
    }

    pub fn add_author(&self, request_id: Uuid, author_id: Uuid) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .authors
            .push((request_id, author_id));
    }

    pub fn add_assignee(&self, request_id: Uuid, task_id: Uuid, assignee_id: Uuid) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .assignees
            .push((request_id, task_id, assignee_id));
    }

    pub fn fail_lookups(&self) {
        self.state.lock().expect("mutex poisoned").fail = true;
    }

    pub fn author_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").author_calls
    }

    pub fn assignee_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").assignee_calls
    }
}

#[async_trait]
impl RequestOwnershipFacade for FakeRequestOwnershipFacade {
    async fn is_request_author(
        &self,
        _space_id: Uuid,
        caller_id: Uuid,
        request_id: Uuid,
    ) -> Result<bool, AuthorizationDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.author_calls += 1;
        if state.fail {
            return Err(AuthorizationDomainError::InfrastructureError(
                "ownership store unavailable".to_string(),
            ));
        }
        Ok(state.authors.contains(&(request_id, caller_id)))
    }

    async fn is_task_assignee(
        &self,
        _space_id: Uuid,
        caller_id: Uuid,
        request_id: Uuid,
        task_id: Uuid,
    ) -> Result<bool, AuthorizationDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.assignee_calls += 1;
        if state.fail {
            return Err(AuthorizationDomainError::InfrastructureError(
                "ownership store unavailable".to_string(),
            ));
        }
        Ok(state.assignees.contains(&(request_id, task_id, caller_id)))
    }
}
