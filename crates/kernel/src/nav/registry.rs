//! Navigation registry: site sections, route matching, detail paths.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::ContentKind;

/// Top-level areas of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Blog,
    Projects,
    Events,
    Team,
    Leaderboard,
}

impl Section {
    /// Catalog backing this section, if any.
    pub fn content_kind(self) -> Option<ContentKind> {
        match self {
            Section::Blog => Some(ContentKind::Blog),
            Section::Projects => Some(ContentKind::Project),
            Section::Events => Some(ContentKind::Event),
            Section::Home | Section::Team | Section::Leaderboard => None,
        }
    }

    pub fn for_kind(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Blog => Section::Blog,
            ContentKind::Project => Section::Projects,
            ContentKind::Event => Section::Events,
        }
    }
}

/// A route in the site map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavRoute {
    /// Path pattern (e.g., "/blog", "/blog/:id")
    pub path: String,
    /// Human-readable title
    pub title: String,
    pub section: Section,
    /// Sort weight in the menu (lower = earlier)
    #[serde(default)]
    pub weight: i32,
    /// Whether this appears in the navigation menu
    #[serde(default = "default_true")]
    pub visible: bool,
}

fn default_true() -> bool {
    true
}

impl NavRoute {
    fn new(path: &str, title: &str, section: Section, weight: i32, visible: bool) -> Self {
        Self {
            path: path.to_string(),
            title: title.to_string(),
            section,
            weight,
            visible,
        }
    }
}

/// Result of matching a path against registered routes.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    pub route: NavRoute,
    /// Path parameters extracted (e.g., {"id": "intro-to-rust"})
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    /// Item id for detail routes.
    pub fn item_id(&self) -> Option<&str> {
        self.params.get("id").map(String::as_str)
    }
}

/// All routes of the site.
#[derive(Debug)]
pub struct NavRegistry {
    routes: HashMap<String, NavRoute>,
    /// Patterns in match order (most specific first)
    order: Vec<String>,
}

impl NavRegistry {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// The club site's standard sections with a detail route per catalog.
    pub fn site() -> Self {
        let mut registry = Self::new();
        registry.register(NavRoute::new("/", "Home", Section::Home, 0, true));
        registry.register(NavRoute::new("/blog", "Blog", Section::Blog, 10, true));
        registry.register(NavRoute::new("/projects", "Projects", Section::Projects, 20, true));
        registry.register(NavRoute::new("/events", "Events", Section::Events, 30, true));
        registry.register(NavRoute::new("/team", "Team", Section::Team, 40, true));
        registry.register(NavRoute::new(
            "/leaderboard",
            "Leaderboard",
            Section::Leaderboard,
            50,
            true,
        ));
        for kind in ContentKind::ALL {
            let path = format!("/{}/:id", kind.route_segment());
            registry.register(NavRoute::new(&path, kind.label(), Section::for_kind(kind), 0, false));
        }
        registry
    }

    /// Register (or replace) a route.
    pub fn register(&mut self, route: NavRoute) {
        let path = route.path.clone();
        if self.routes.insert(path.clone(), route).is_none() {
            self.order.push(path);
        }
        self.sort_routes();
    }

    /// Fewer params first, then deeper paths first.
    fn sort_routes(&mut self) {
        self.order.sort_by_key(|path| {
            let param_count = path.matches(':').count();
            let segment_count = path.matches('/').count();
            (param_count, -(segment_count as i32), path.clone())
        });
        debug!(routes = self.order.len(), "built route table");
    }

    /// Match a request path against registered routes.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        let path = normalize_path(path);
        self.order.iter().find_map(|pattern| {
            let params = match_pattern(pattern, path)?;
            let route = self.routes.get(pattern)?;
            Some(RouteMatch {
                route: route.clone(),
                params,
            })
        })
    }

    /// Listing path for a catalog kind.
    pub fn listing_path(&self, kind: ContentKind) -> String {
        format!("/{}", kind.route_segment())
    }

    /// Detail path for an item of `kind`.
    pub fn detail_path(&self, kind: ContentKind, id: &str) -> String {
        format!("/{}/{id}", kind.route_segment())
    }

    /// Visible routes in menu order.
    pub fn menu(&self) -> Vec<&NavRoute> {
        let mut menu: Vec<&NavRoute> = self.routes.values().filter(|r| r.visible).collect();
        menu.sort_by(|a, b| a.weight.cmp(&b.weight).then_with(|| a.path.cmp(&b.path)));
        menu
    }

    pub fn get(&self, path: &str) -> Option<&NavRoute> {
        self.routes.get(path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for NavRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip a trailing slash, keeping "/" itself.
fn normalize_path(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

/// Match a route pattern against a path, extracting parameters.
///
/// Pattern: "/events/:id"
/// Path: "/events/spring-hackathon"
/// Result: Some({"id": "spring-hackathon"})
fn match_pattern(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    let pattern_parts: Vec<&str> = pattern.split('/').collect();
    let path_parts: Vec<&str> = path.split('/').collect();

    if pattern_parts.len() != path_parts.len() {
        return None;
    }

    let mut params = HashMap::new();

    for (pat, actual) in pattern_parts.iter().zip(path_parts.iter()) {
        if let Some(param_name) = pat.strip_prefix(':') {
            if actual.is_empty() {
                return None;
            }
            params.insert(param_name.to_string(), actual.to_string());
        } else if pat != actual {
            return None;
        }
    }

    Some(params)
}

/// Open/closed state of the mobile menu, owned by the page chrome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Navigating anywhere closes the menu.
    pub fn navigated(&mut self) {
        self.open = false;
    }
}
