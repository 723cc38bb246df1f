pub(crate) mod animation;
pub(crate) mod config;
pub(crate) mod driver;
pub(crate) mod fill;
pub(crate) mod options;
