//! Route catalog for the home screen.
//!
//! Holds the gym's areas and the routes set in them, and answers the
//! "find route by grade / style" filters and the search box.

use crate::models::route::{Grade, GymArea, Route};

/// Combined route filters; unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteFilter {
    pub min_grade: Option<Grade>,
    pub max_grade: Option<Grade>,
    pub style: Option<String>,
    pub search: Option<String>,
}

impl RouteFilter {
    fn matches(&self, catalog: &RouteCatalog, route: &Route) -> bool {
        if self.min_grade.is_some_and(|m| route.grade < m) {
            return false;
        }
        if self.max_grade.is_some_and(|m| route.grade > m) {
            return false;
        }
        if let Some(style) = &self.style {
            if !route.has_tag(style) {
                return false;
            }
        }
        match self.search.as_deref().map(|q| q.trim().to_lowercase()) {
            Some(query) if !query.is_empty() => {
                route.name.to_lowercase().contains(&query)
                    || catalog.area_name(route).to_lowercase().contains(&query)
            }
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    areas: Vec<GymArea>,
    routes: Vec<Route>,
}

impl RouteCatalog {
    pub fn new(areas: Vec<GymArea>, routes: Vec<Route>) -> Self {
        Self { areas, routes }
    }

    /// The sample gym shown on the home screen map.
    pub fn default_gym() -> Self {
        let areas = vec![
            GymArea::new("buddha", "Buddha").with_label("23"),
            GymArea::new("3d", "3D"),
            GymArea::new("bulge", "Bulge, Prow, Corner"),
            GymArea::new("alcove", "Alcove & 45"),
            GymArea::new("slab", "Slab"),
            GymArea::new("mezzanine", "Mezzanine").with_label("11"),
        ];

        let routes = vec![
            Route::new("route-1", "White V4", grade(4), "mezzanine")
                .with_tag("Crimp")
                .with_tag("Coordination")
                .with_ascents(12),
            Route::new("route-2", "Yellow V1", grade(1), "slab")
                .with_tag("Balance")
                .with_tag("Footwork")
                .with_ascents(41),
            Route::new("route-3", "Blue V5", grade(5), "buddha")
                .with_tag("Sloper")
                .with_tag("Compression")
                .with_ascents(7),
            Route::new("route-4", "Pink V2", grade(2), "alcove")
                .with_tag("Jug")
                .with_tag("Overhang")
                .with_ascents(28),
            Route::new("route-5", "Black V7", grade(7), "bulge")
                .with_tag("Crimp")
                .with_tag("Power")
                .with_ascents(3),
            Route::new("route-6", "Green V3", grade(3), "3d")
                .with_tag("Coordination")
                .with_tag("Dyno")
                .with_ascents(15),
        ];

        Self::new(areas, routes)
    }

    pub fn areas(&self) -> &[GymArea] {
        &self.areas
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn find(&self, id: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }

    pub fn area(&self, id: &str) -> Option<&GymArea> {
        self.areas.iter().find(|a| a.id == id)
    }

    /// Name of the area a route is set in, falling back to its raw id.
    pub fn area_name<'a>(&'a self, route: &'a Route) -> &'a str {
        self.area(&route.area_id)
            .map(|a| a.name.as_str())
            .unwrap_or(route.area_id.as_str())
    }

    /// Routes passing every set field of `filter`, in catalog order.
    pub fn filter(&self, filter: &RouteFilter) -> Vec<&Route> {
        self.routes
            .iter()
            .filter(|r| filter.matches(self, r))
            .collect()
    }

    /// Routes graded within `min..=max`; an open end matches everything.
    pub fn filter_by_grade(&self, min: Option<Grade>, max: Option<Grade>) -> Vec<&Route> {
        self.filter(&RouteFilter {
            min_grade: min,
            max_grade: max,
            ..RouteFilter::default()
        })
    }

    /// Routes carrying a style tag, matched case-insensitively.
    pub fn filter_by_style(&self, tag: &str) -> Vec<&Route> {
        self.filter(&RouteFilter {
            style: Some(tag.to_string()),
            ..RouteFilter::default()
        })
    }

    /// Case-insensitive substring search over route and area names.
    pub fn search(&self, query: &str) -> Vec<&Route> {
        self.filter(&RouteFilter {
            search: Some(query.to_string()),
            ..RouteFilter::default()
        })
    }
}

fn grade(value: u8) -> Grade {
    Grade::saturating(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(routes: Vec<&Route>) -> Vec<&str> {
        routes.into_iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_default_gym_contents() {
        let catalog = RouteCatalog::default_gym();
        assert_eq!(catalog.areas().len(), 6);
        assert_eq!(catalog.routes().len(), 6);

        let white = catalog.find("route-1").unwrap();
        assert_eq!(white.name, "White V4");
        assert_eq!(catalog.area_name(white), "Mezzanine");
        assert_eq!(white.ascents, 12);
    }

    #[test]
    fn test_filter_by_grade_range() {
        let catalog = RouteCatalog::default_gym();
        let mid = catalog.filter_by_grade(Some(grade(3)), Some(grade(5)));
        assert_eq!(ids(mid), vec!["route-1", "route-3", "route-6"]);

        let hard = catalog.filter_by_grade(Some(grade(6)), None);
        assert_eq!(ids(hard), vec!["route-5"]);

        assert_eq!(catalog.filter_by_grade(None, None).len(), 6);
    }

    #[test]
    fn test_filter_by_style() {
        let catalog = RouteCatalog::default_gym();
        assert_eq!(ids(catalog.filter_by_style("#crimp")), vec!["route-1", "route-5"]);
        assert!(catalog.filter_by_style("Heel hook").is_empty());
    }

    #[test]
    fn test_search_matches_route_and_area() {
        let catalog = RouteCatalog::default_gym();
        assert_eq!(ids(catalog.search("white")), vec!["route-1"]);
        assert_eq!(ids(catalog.search("SLAB")), vec!["route-2"]);
        assert_eq!(catalog.search("  ").len(), 6);
    }

    #[test]
    fn test_combined_filter() {
        let catalog = RouteCatalog::default_gym();
        let filter = RouteFilter {
            min_grade: Some(grade(2)),
            max_grade: Some(grade(4)),
            style: Some("Coordination".to_string()),
            search: None,
        };
        assert_eq!(ids(catalog.filter(&filter)), vec!["route-1", "route-6"]);

        let narrowed = RouteFilter {
            search: Some("mezz".to_string()),
            ..filter
        };
        assert_eq!(ids(catalog.filter(&narrowed)), vec!["route-1"]);
    }

    #[test]
    fn test_area_name_falls_back_to_id() {
        let catalog = RouteCatalog::new(
            Vec::new(),
            vec![Route::new("r", "Orange V0", grade(0), "cave")],
        );
        let route = &catalog.routes()[0];
        assert_eq!(catalog.area_name(route), "cave");
    }
}
