pub mod controllers;
pub mod resources;
pub mod vacancy_request_rule_catalog;
