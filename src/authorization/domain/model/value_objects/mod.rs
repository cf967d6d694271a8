pub mod predicate_context;
pub mod route_declaration;
pub mod route_pattern;
