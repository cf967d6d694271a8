pub mod vacancy_request_scope_query;
