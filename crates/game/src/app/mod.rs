mod audio;
mod bootstrap;
mod config;
mod gameplay;
mod loop_runner;
mod presenter;
mod scene_impl;

pub(crate) use bootstrap::build_app;
pub(crate) use loop_runner::run;
