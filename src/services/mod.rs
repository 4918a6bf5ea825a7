// Service module exports

pub mod calendar;
pub mod route;
pub mod session;
pub mod session_form;
pub mod settings;
