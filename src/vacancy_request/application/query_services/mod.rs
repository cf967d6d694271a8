pub mod vacancy_request_query_service_impl;
