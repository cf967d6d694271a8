use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    sync::Arc,
};

use crate::authorization::domain::model::{
    entities::authorization_rule::AuthorizationRule,
    enums::{
        auth_predicate::AuthPredicate, authorization_domain_error::AuthorizationDomainError,
        http_method::HttpMethod, space_role::SpaceRole,
    },
    value_objects::{route_declaration::RouteDeclaration, route_pattern::normalize_path},
};

#[derive(Debug, Default)]
struct MethodRoutes {
    exact: HashMap<String, Arc<AuthorizationRule>>,
    templated: Vec<Arc<AuthorizationRule>>,
}

#[derive(Clone, Debug)]
pub struct ResolvedRule {
    pub rule: Arc<AuthorizationRule>,
    pub path_params: HashMap<String, String>,
}

/// Method + path lookup table. Immutable once built; share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct RuleTable {
    routes: HashMap<HttpMethod, MethodRoutes>,
    permissions: BTreeMap<SpaceRole, BTreeMap<String, BTreeSet<String>>>,
    rule_count: usize,
}

impl RuleTable {
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::default()
    }

    /// Exact paths win over templated ones; templated patterns are tried in
    /// registration order.
    pub fn resolve(&self, method: HttpMethod, path: &str) -> Option<ResolvedRule> {
        let routes = self.routes.get(&method)?;
        let normalized = normalize_path(path);

        if let Some(rule) = routes.exact.get(&normalized) {
            return Some(ResolvedRule {
                rule: rule.clone(),
                path_params: HashMap::new(),
            });
        }

        routes.templated.iter().find_map(|rule| {
            rule.pattern()
                .match_path(&normalized)
                .map(|path_params| ResolvedRule {
                    rule: rule.clone(),
                    path_params,
                })
        })
    }

    pub fn permissions_for(&self, role: SpaceRole) -> BTreeMap<String, Vec<String>> {
        self.permissions
            .get(&role)
            .map(|modules| {
                modules
                    .iter()
                    .map(|(module, permissions)| {
                        (module.clone(), permissions.iter().cloned().collect())
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.rule_count
    }

    pub fn is_empty(&self) -> bool {
        self.rule_count == 0
    }
}

#[derive(Debug, Default)]
pub struct RuleTableBuilder {
    table: RuleTable,
}

impl RuleTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        module: &str,
        permission: &str,
        roles: &[SpaceRole],
        declaration: &str,
        predicate: Option<AuthPredicate>,
    ) -> Result<&mut Self, AuthorizationDomainError> {
        let (method, pattern) = declaration.parse::<RouteDeclaration>()?.into_parts();
        let rule = Arc::new(AuthorizationRule::new(
            module,
            permission,
            roles.iter().copied().collect(),
            method,
            pattern,
            predicate,
        ));

        let routes = self.table.routes.entry(method).or_default();
        if rule.pattern().is_exact() {
            let path = rule.pattern().path().to_string();
            if routes.exact.contains_key(&path) {
                return Err(AuthorizationDomainError::DuplicateRule(rule.declaration()));
            }
            routes.exact.insert(path, rule.clone());
        } else {
            routes.templated.push(rule.clone());
        }

        for role in rule.roles() {
            self.table
                .permissions
                .entry(*role)
                .or_default()
                .entry(rule.module().to_string())
                .or_default()
                .insert(rule.permission().to_string());
        }
        self.table.rule_count += 1;

        Ok(self)
    }

    pub fn build(self) -> RuleTable {
        self.table
    }
}
