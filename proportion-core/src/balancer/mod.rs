pub(crate) mod config;
pub(crate) mod samples;
pub(crate) mod size;
