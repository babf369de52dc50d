pub mod aggregate;
pub mod analyzer;
pub mod conclusion;
pub mod context;
pub mod experience;
pub mod handlers;
pub mod jd_parser;
pub mod prompts;
pub mod report;
pub mod responsibilities;
pub mod scoring_config;
pub mod similarity;
pub mod skills;
