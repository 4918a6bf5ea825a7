use std::fmt::Write;

use crate::models::route::Route;
use crate::services::route::RouteCatalog;

/// Route cards as one line each: name, area, tags, ascents.
pub struct RouteList;

impl RouteList {
    pub fn render(catalog: &RouteCatalog, routes: &[&Route]) -> String {
        if routes.is_empty() {
            return "No routes match\n".to_string();
        }

        let name_width = routes.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
        let area_width = routes
            .iter()
            .map(|r| catalog.area_name(r).chars().count())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for route in routes {
            let line = format!(
                "{:<nw$}  {:<aw$}  {}  Ascents: {}",
                route.name,
                catalog.area_name(route),
                route.hashtags(),
                route.ascents,
                nw = name_width,
                aw = area_width,
            );
            let _ = writeln!(out, "{}", line);
        }
        out
    }
}
