pub mod defaults;
pub mod envvars;
pub mod topics;
pub mod widgets;
