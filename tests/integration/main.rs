#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;

mod autopilot_tests;
mod config_tests;
mod linear_tests;
mod modal_tests;
mod pipeline_tests;
