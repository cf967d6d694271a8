mod rule_table_tests;
mod support;
