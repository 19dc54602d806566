pub mod scoring_rule_handler;
