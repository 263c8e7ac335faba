pub mod campaign_metadata;
pub mod normalization;
pub mod rules;
pub mod shared_types;
pub mod topic_classifier;
