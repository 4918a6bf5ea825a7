// Module exports for models

pub mod calendar_cell;
pub mod route;
pub mod session;
pub mod settings;
