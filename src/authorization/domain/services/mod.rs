pub mod authorization_query_service;
pub mod rule_table;
