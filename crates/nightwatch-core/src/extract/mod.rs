pub mod brightness;
pub mod environment;
pub mod structure;
