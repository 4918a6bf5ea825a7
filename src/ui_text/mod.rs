//! Plain-text views.
//!
//! Each view renders screen state to a `String` so the CLI can print it and
//! tests can compare it.

pub mod day_view;
pub mod month_view;
pub mod route_list;

pub use day_view::DayView;
pub use month_view::MonthView;
pub use route_list::RouteList;
