use std::collections::{HashMap, HashSet};

use crate::vacancy_request::domain::model::{
    entities::approval_task::ApprovalTask,
    enums::vacancy_request_rejection::VacancyRequestRejection,
    value_objects::user_id::UserId,
};

#[derive(Clone, Debug, Default)]
pub struct ReconciliationPlan {
    pub keep: Vec<ApprovalTask>,
    pub add: Vec<UserId>,
    pub remove: Vec<ApprovalTask>,
}

impl ReconciliationPlan {
    pub fn is_noop(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}

/// Diffs the active tasks against the desired assignee list.
///
/// `members` maps every desired assignee that belongs to the space to its
/// display name; anything missing from it is rejected as unknown. Duplicates
/// in `desired` are rejected, naming the member. An empty desired list is
/// rejected because a request cannot be approved by nobody.
pub fn plan_reconciliation(
    current: &[ApprovalTask],
    desired: &[UserId],
    members: &HashMap<UserId, String>,
) -> Result<ReconciliationPlan, VacancyRequestRejection> {
    if desired.is_empty() {
        return Err(VacancyRequestRejection::NoApprovers);
    }

    let mut remove_candidates: HashMap<UserId, &ApprovalTask> = current
        .iter()
        .map(|task| (task.assignee_id(), task))
        .collect();
    let mut seen = HashSet::new();
    let mut plan = ReconciliationPlan::default();

    for assignee_id in desired {
        let Some(name) = members.get(assignee_id) else {
            return Err(VacancyRequestRejection::UnknownAssignee(assignee_id.value()));
        };
        if !seen.insert(*assignee_id) {
            return Err(VacancyRequestRejection::DuplicateAssignee(name.clone()));
        }
        match remove_candidates.remove(assignee_id) {
            Some(task) => plan.keep.push(task.clone()),
            None => plan.add.push(*assignee_id),
        }
    }

    // Keep the store's order for removals.
    plan.remove = current
        .iter()
        .filter(|task| remove_candidates.contains_key(&task.assignee_id()))
        .cloned()
        .collect();

    Ok(plan)
}
