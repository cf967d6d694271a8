mod approval_task_reconciliation_tests;
mod decision_tests;
mod query_service_tests;
mod vacancy_request_endpoint_tests;
