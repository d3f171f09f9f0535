//! Console route table.
//!
//! Every registered resource owns four routes:
//!
//! | Route                 | Intent   |
//! |-----------------------|----------|
//! | `/{name}`             | list     |
//! | `/{name}/create`      | create   |
//! | `/{name}/edit/:id`    | edit     |
//! | `/{name}/view/:id`    | view     |

use std::collections::HashMap;

use super::intent::{Navigation, NavigationIntent};
use crate::domains::resources::{ResourceDescriptor, get_all_resources, parse_id};

/// Resolves console paths to navigations.
#[derive(Debug, Clone)]
pub struct RouteTable {
    resources: HashMap<&'static str, ResourceDescriptor>,
}

impl RouteTable {
    /// Routes of every registered resource.
    pub fn from_registry() -> Self {
        Self::new(get_all_resources())
    }

    pub fn new(resources: impl IntoIterator<Item = ResourceDescriptor>) -> Self {
        Self {
            resources: resources.into_iter().map(|r| (r.name, r)).collect(),
        }
    }

    pub fn descriptor(&self, name: &str) -> Option<&ResourceDescriptor> {
        self.resources.get(name)
    }

    /// All paths without parameters, sorted.
    pub fn static_paths(&self) -> Vec<String> {
        let mut paths: Vec<_> = self
            .resources
            .values()
            .flat_map(|r| {
                let base = r.route_base();
                [
                    NavigationIntent::List.path(&base),
                    NavigationIntent::Create.path(&base),
                ]
            })
            .collect();
        paths.sort();
        paths
    }

    /// Resolve a console path. Trailing slashes and query strings are ignored.
    pub fn resolve(&self, path: &str) -> Option<Navigation> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<_> = path.split('/').filter(|s| !s.is_empty()).collect();

        let (name, rest) = segments.split_first()?;
        let descriptor = self.resources.get(*name)?;

        let intent = match rest {
            [] => NavigationIntent::List,
            ["create"] => NavigationIntent::Create,
            ["view", id] => NavigationIntent::View(parse_id(id).ok()?),
            ["edit", id] => NavigationIntent::Edit(parse_id(id).ok()?),
            _ => return None,
        };

        Some(Navigation::new(descriptor.name, intent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_routes() {
        let routes = RouteTable::from_registry();

        assert_eq!(
            routes.resolve("/doctors"),
            Some(Navigation::new("doctors", NavigationIntent::List))
        );
        assert_eq!(
            routes.resolve("/doctors/create/"),
            Some(Navigation::new("doctors", NavigationIntent::Create))
        );
        assert_eq!(
            routes.resolve("/service-centers/edit/12"),
            Some(Navigation::new("service-centers", NavigationIntent::Edit(12)))
        );
        assert_eq!(
            routes.resolve("/patients/view/3?tab=files"),
            Some(Navigation::new("patients", NavigationIntent::View(3)))
        );
    }

    #[test]
    fn test_resolve_rejects_unknown_paths() {
        let routes = RouteTable::from_registry();
        assert_eq!(routes.resolve("/"), None);
        assert_eq!(routes.resolve("/spaceships"), None);
        assert_eq!(routes.resolve("/doctors/view/abc"), None);
        assert_eq!(routes.resolve("/doctors/delete/1"), None);
    }

    #[test]
    fn test_every_intent_path_resolves_back() {
        let routes = RouteTable::from_registry();
        for name in crate::domains::resources::resource_names() {
            for intent in [
                NavigationIntent::List,
                NavigationIntent::Create,
                NavigationIntent::View(1),
                NavigationIntent::Edit(1),
            ] {
                let navigation = Navigation::new(name, intent);
                assert_eq!(routes.resolve(&navigation.path()), Some(navigation));
            }
        }
    }

    #[test]
    fn test_static_paths() {
        let paths = RouteTable::from_registry().static_paths();
        assert_eq!(paths.len(), 24);
        assert!(paths.contains(&"/associations/create".to_string()));
    }
}
