use vacancy_approval_api::{
    authorization::domain::{
        model::enums::{
            authorization_domain_error::AuthorizationDomainError, http_method::HttpMethod,
            space_role::SpaceRole,
        },
        services::rule_table::{RuleTable, RuleTableBuilder},
    },
    shared::{app_context::build_rule_table, app_context_error::AppContextError},
    vacancy_request::interfaces::rest::vacancy_request_rule_catalog::register_vacancy_request_rules,
};

use crate::support::widget_rule_table;

#[test]
fn exact_path_wins_over_earlier_templated_pattern() {
    let table = widget_rule_table();

    let resolved = table
        .resolve(HttpMethod::Get, "/widgets/export")
        .expect("rule expected");

    assert_eq!(resolved.rule.permission(), "export");
    assert!(resolved.path_params.is_empty());
}

#[test]
fn templated_pattern_captures_parameters() {
    let table = widget_rule_table();

    let resolved = table
        .resolve(HttpMethod::Get, "/widgets/42")
        .expect("rule expected");

    assert_eq!(resolved.rule.permission(), "view");
    assert_eq!(resolved.path_params.get("id").map(String::as_str), Some("42"));
}

#[test]
fn templated_pattern_matches_single_segment_only() {
    let table = widget_rule_table();

    assert!(table.resolve(HttpMethod::Put, "/widgets/42").is_some());
    assert!(table.resolve(HttpMethod::Put, "/widgets/42/sub").is_none());
}

#[test]
fn resolve_normalizes_slashes_and_query() {
    let table = widget_rule_table();

    let resolved = table
        .resolve(HttpMethod::Get, "//widgets//42/?expand=true")
        .expect("rule expected");

    assert_eq!(resolved.path_params.get("id").map(String::as_str), Some("42"));
}

#[test]
fn resolve_is_scoped_by_method() {
    let table = widget_rule_table();

    assert!(table.resolve(HttpMethod::Post, "/widgets").is_none());
    assert!(table.resolve(HttpMethod::Delete, "/widgets/42").is_none());
}

#[test]
fn first_registered_templated_pattern_wins() {
    let mut builder = RuleTable::builder();
    builder
        .register("files", "read", &[SpaceRole::Admin], "/files/{name} [GET]", None)
        .expect("named rule")
        .register("files", "browse", &[SpaceRole::Admin], "/files/* [GET]", None)
        .expect("wildcard rule");
    let table = builder.build();

    let single = table
        .resolve(HttpMethod::Get, "/files/report")
        .expect("rule expected");
    let nested = table
        .resolve(HttpMethod::Get, "/files/2026/report")
        .expect("rule expected");

    assert_eq!(single.rule.permission(), "read");
    assert_eq!(nested.rule.permission(), "browse");
}

#[test]
fn duplicate_exact_declaration_is_rejected() {
    let mut builder = RuleTable::builder();
    builder
        .register("widgets", "view", &[SpaceRole::Admin], "/widgets [GET]", None)
        .expect("first rule");

    let result = builder.register("widgets", "list", &[SpaceRole::Admin], "/widgets/ [GET]", None);

    assert!(matches!(result, Err(AuthorizationDomainError::DuplicateRule(_))));
}

#[test]
fn same_path_with_other_method_is_not_a_duplicate() {
    let mut builder = RuleTable::builder();
    builder
        .register("widgets", "view", &[SpaceRole::Admin], "/widgets [GET]", None)
        .expect("get rule")
        .register("widgets", "create", &[SpaceRole::Admin], "/widgets [POST]", None)
        .expect("post rule");

    assert_eq!(builder.build().len(), 2);
}

#[test]
fn malformed_declarations_are_rejected() {
    let cases = [
        "/widgets",
        "/widgets GET",
        "/widgets/{id}/{id} [GET]",
        "/widgets/x{id} [GET]",
        "/widgets/{1id} [GET]",
    ];

    for declaration in cases {
        let mut builder = RuleTable::builder();
        let result = builder.register("widgets", "view", &[SpaceRole::Admin], declaration, None);
        assert!(
            matches!(result, Err(AuthorizationDomainError::InvalidRuleDeclaration(_))),
            "{declaration} should be rejected"
        );
    }
}

#[test]
fn unknown_method_in_declaration_is_rejected() {
    let mut builder = RuleTable::builder();

    let result = builder.register("widgets", "view", &[SpaceRole::Admin], "/widgets [FETCH]", None);

    assert!(matches!(result, Err(AuthorizationDomainError::InvalidHttpMethod(_))));
}

#[test]
fn permissions_are_grouped_by_module_and_sorted() {
    let table = widget_rule_table();

    let admin = table.permissions_for(SpaceRole::Admin);
    let hr = table.permissions_for(SpaceRole::Hr);
    let observer = table.permissions_for(SpaceRole::Observer);

    assert_eq!(admin["widgets"], vec!["edit", "export", "view"]);
    assert_eq!(hr["widgets"], vec!["approve", "view"]);
    assert_eq!(observer["widgets"], vec!["view"]);
    assert_eq!(table.len(), 5);
}

#[test]
fn role_without_rules_has_no_permissions() {
    let table = RuleTable::builder().build();

    assert!(table.is_empty());
    assert!(table.permissions_for(SpaceRole::Manager).is_empty());
}

#[test]
fn catalog_builds_a_populated_rule_table() {
    let table = build_rule_table().expect("catalog rules register");

    assert!(!table.is_empty());
    assert!(
        table
            .resolve(HttpMethod::Post, "/vacancy-requests")
            .is_some()
    );
}

#[test]
fn catalog_registration_errors_surface_as_startup_errors() {
    let mut builder = RuleTableBuilder::new();
    register_vacancy_request_rules(&mut builder).expect("first registration succeeds");

    let error: AppContextError = register_vacancy_request_rules(&mut builder)
        .expect_err("second registration collides")
        .into();

    assert!(matches!(
        error,
        AppContextError::RuleCatalog(AuthorizationDomainError::DuplicateRule(_))
    ));
    assert!(
        error
            .to_string()
            .starts_with("rule catalog is invalid: rule already registered")
    );
}
