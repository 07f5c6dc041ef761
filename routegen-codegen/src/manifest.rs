//! Route collection and ordering.

use routegen_core::Scaffold;

use crate::handlers::HandlerDeclaration;

/// Routes discovered in a single page file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteFile {
    pub route: String,
    /// Root-relative path of the page file.
    pub source: String,
    /// Handlers, sorted by name.
    pub handlers: Vec<HandlerDeclaration>,
}

/// One registration statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub route: String,
    pub handler: String,
}

/// Ordered registrations plus the scaffold they are emitted into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteManifest {
    pub entries: Vec<RouteEntry>,
    pub scaffold: Scaffold,
}

impl RouteManifest {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Order route files by route path and flatten them into a manifest.
///
/// The sort is stable: files sharing a route keep their discovery order,
/// and handlers keep their per-file order.
pub fn collect_routes(files: &[RouteFile], scaffold: Scaffold) -> RouteManifest {
    let mut ordered: Vec<&RouteFile> = files.iter().collect();
    ordered.sort_by(|a, b| a.route.cmp(&b.route));

    let entries = ordered
        .into_iter()
        .flat_map(|file| {
            file.handlers.iter().map(|handler| RouteEntry {
                route: file.route.clone(),
                handler: handler.name.clone(),
            })
        })
        .collect();

    RouteManifest { entries, scaffold }
}
