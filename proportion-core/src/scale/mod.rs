pub(crate) mod config;
pub(crate) mod engine;
pub(crate) mod format;
pub(crate) mod harmonic;
pub(crate) mod naming;
pub(crate) mod token;
