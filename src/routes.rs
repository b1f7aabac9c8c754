//! Route Table
//!
//! Static mapping from URL paths to top-level pages. The table is fixed at
//! compile time; `app::App` builds its `<Routes>` from these constants so the
//! mapping tested here is the one the router actually serves.

/// Path of the landing page.
pub const HOME: &str = "/";
/// Path of the adviser chat page.
pub const CHAT: &str = "/chat";
/// Path of the hospital directory page.
pub const HOSPITALS: &str = "/hospitals";
/// Path of the drug-disease graph page.
pub const DRUG_DISEASE_GRAPH: &str = "/drug-disease-graph";

/// Top-level pages, one per route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Chat,
    Hospitals,
    DrugDiseaseGraph,
}

/// The full route table, in declaration order.
pub const ROUTES: [(&str, Page); 4] = [
    (HOME, Page::Home),
    (CHAT, Page::Chat),
    (HOSPITALS, Page::Hospitals),
    (DRUG_DISEASE_GRAPH, Page::DrugDiseaseGraph),
];

impl Page {
    /// The path this page is served under.
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => HOME,
            Page::Chat => CHAT,
            Page::Hospitals => HOSPITALS,
            Page::DrugDiseaseGraph => DRUG_DISEASE_GRAPH,
        }
    }

    /// Human-readable label, used by the navigation header.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Chat => "Chat",
            Page::Hospitals => "Hospitals",
            Page::DrugDiseaseGraph => "Drug-Disease Graph",
        }
    }
}

/// Resolve a browser path against the route table.
///
/// Matching is exact: no parameters, no wildcards, no trailing-slash
/// forgiveness. Paths outside the table resolve to `None` and the router
/// renders nothing for them (there is deliberately no fallback route).
pub fn resolve(path: &str) -> Option<Page> {
    ROUTES
        .iter()
        .find(|(route_path, _)| *route_path == path)
        .map(|(_, page)| *page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_declared_paths_resolve() {
        assert_eq!(resolve("/"), Some(Page::Home));
        assert_eq!(resolve("/chat"), Some(Page::Chat));
        assert_eq!(resolve("/hospitals"), Some(Page::Hospitals));
        assert_eq!(resolve("/drug-disease-graph"), Some(Page::DrugDiseaseGraph));
    }

    #[test]
    fn test_unknown_paths_resolve_to_none() {
        assert_eq!(resolve("/nope"), None);
        assert_eq!(resolve("/unknown"), None);
        assert_eq!(resolve(""), None);
        // Exact match only: prefixes and trailing slashes do not count.
        assert_eq!(resolve("/chat/"), None);
        assert_eq!(resolve("/chat/history"), None);
        assert_eq!(resolve("/hosp"), None);
    }

    #[test]
    fn test_paths_are_unique() {
        for (i, (a, _)) in ROUTES.iter().enumerate() {
            for (b, _) in ROUTES.iter().skip(i + 1) {
                assert_ne!(a, b, "duplicate route path {a}");
            }
        }
    }

    #[test]
    fn test_page_path_round_trips() {
        for (_, page) in ROUTES {
            assert_eq!(resolve(page.path()), Some(page));
        }
    }
}
