use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::authorization::domain::model::{
    enums::{authorization_domain_error::AuthorizationDomainError, http_method::HttpMethod},
    value_objects::route_pattern::RoutePattern,
};

lazy_static! {
    static ref DECLARATION: Regex =
        Regex::new(r"^\s*(\S+)\s+\[\s*([A-Za-z]+)\s*\]\s*$").expect("valid regex");
}

/// Parsed form of `"<path> [<METHOD>]"`.
#[derive(Clone, Debug)]
pub struct RouteDeclaration {
    method: HttpMethod,
    pattern: RoutePattern,
}

impl RouteDeclaration {
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn into_parts(self) -> (HttpMethod, RoutePattern) {
        (self.method, self.pattern)
    }
}

impl FromStr for RouteDeclaration {
    type Err = AuthorizationDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let captures = DECLARATION
            .captures(value)
            .ok_or_else(|| AuthorizationDomainError::InvalidRuleDeclaration(value.to_string()))?;

        Ok(Self {
            method: captures[2].parse()?,
            pattern: RoutePattern::new(&captures[1])?,
        })
    }
}
