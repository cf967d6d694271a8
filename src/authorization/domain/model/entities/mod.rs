pub mod authorization_rule;
