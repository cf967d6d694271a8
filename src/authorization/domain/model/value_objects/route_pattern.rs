use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::authorization::domain::model::enums::authorization_domain_error::AuthorizationDomainError;

lazy_static! {
    static ref DUPLICATE_SLASHES: Regex = Regex::new("/{2,}").expect("valid regex");
    static ref PATH_PARAMETER: Regex =
        Regex::new(r"^\{([A-Za-z_][A-Za-z0-9_]*)\}$").expect("valid regex");
}

const WILDCARD_SEGMENT: &str = "*";

/// Leading slash, no repeated slashes, no trailing slash, query and fragment
/// stripped.
pub fn normalize_path(raw: &str) -> String {
    let path = raw
        .trim()
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    let collapsed = DUPLICATE_SLASHES.replace_all(path, "/");
    let trimmed = collapsed.trim_end_matches('/');

    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[derive(Clone, Debug)]
enum RoutePatternKind {
    Exact,
    Templated {
        regex: Regex,
        parameters: Vec<String>,
    },
}

#[derive(Clone, Debug)]
pub struct RoutePattern {
    path: String,
    kind: RoutePatternKind,
}

impl RoutePattern {
    pub fn new(raw: &str) -> Result<Self, AuthorizationDomainError> {
        let path = normalize_path(raw);

        let mut parameters = Vec::new();
        let mut expression = String::from("^");
        let mut templated = false;

        for segment in path.split('/').skip(1) {
            expression.push('/');

            if segment == WILDCARD_SEGMENT {
                templated = true;
                expression.push_str(".+?");
                continue;
            }

            if let Some(captures) = PATH_PARAMETER.captures(segment) {
                let name = captures[1].to_string();
                if parameters.contains(&name) {
                    return Err(AuthorizationDomainError::InvalidRuleDeclaration(format!(
                        "parameter `{name}` repeated in `{path}`"
                    )));
                }
                templated = true;
                expression.push_str(&format!("(?P<{name}>[^/]+)"));
                parameters.push(name);
                continue;
            }

            if segment.contains(['{', '}', '*']) {
                return Err(AuthorizationDomainError::InvalidRuleDeclaration(format!(
                    "malformed segment `{segment}` in `{path}`"
                )));
            }

            expression.push_str(&regex::escape(segment));
        }
        expression.push('$');

        if !templated {
            return Ok(Self {
                path,
                kind: RoutePatternKind::Exact,
            });
        }

        let regex = Regex::new(&expression)
            .map_err(|e| AuthorizationDomainError::InvalidRuleDeclaration(e.to_string()))?;

        Ok(Self {
            path,
            kind: RoutePatternKind::Templated { regex, parameters },
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_exact(&self) -> bool {
        matches!(self.kind, RoutePatternKind::Exact)
    }

    /// `normalized_path` must already be normalised. Returns the captured
    /// parameters on a match.
    pub fn match_path(&self, normalized_path: &str) -> Option<HashMap<String, String>> {
        match &self.kind {
            RoutePatternKind::Exact => (self.path == normalized_path).then(HashMap::new),
            RoutePatternKind::Templated { regex, parameters } => {
                let captures = regex.captures(normalized_path)?;
                Some(
                    parameters
                        .iter()
                        .filter_map(|name| {
                            captures
                                .name(name)
                                .map(|value| (name.clone(), value.as_str().to_string()))
                        })
                        .collect(),
                )
            }
        }
    }
}
