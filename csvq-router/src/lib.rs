/// The views the application can show. Rendering them is the caller's
/// concern; the router only decides which one a path maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    DataImport,
    Query,
}

#[derive(Debug, Clone)]
pub enum RouteAction {
    Render(View),
    /// Terminal action: dispatch again on the given path.
    Redirect(String),
}

#[derive(Debug, Clone)]
pub struct Route {
    pub path: String,
    pub action: RouteAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub view: View,
    /// Final path after following redirects.
    pub path: String,
}

// Bound on redirect re-dispatch so a cyclic table cannot loop forever.
const MAX_REDIRECTS: usize = 8;

/// Ordered route table with history-based (non-hash) dispatch.
/// There is deliberately no catch-all entry: an unknown path matches
/// nothing.
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The application's route table: `/` redirects to `/import`,
    /// `/import` and `/query` render their views.
    pub fn with_default_routes() -> Self {
        Self::new(vec![
            Route {
                path: "/".to_string(),
                action: RouteAction::Redirect("/import".to_string()),
            },
            Route {
                path: "/import".to_string(),
                action: RouteAction::Render(View::DataImport),
            },
            Route {
                path: "/query".to_string(),
                action: RouteAction::Render(View::Query),
            },
        ])
    }

    /// First matching entry for `path`, redirects not followed. This is
    /// what a server uses to answer a redirect with an HTTP 302 instead
    /// of resolving it internally.
    pub fn action(&self, path: &str) -> Option<&RouteAction> {
        self.routes.iter().find(|r| r.path == path).map(|r| &r.action)
    }

    /// Walks the table in order, following redirects until a view is
    /// reached. Returns `None` for an unknown path or a redirect chain
    /// that never settles.
    pub fn resolve(&self, path: &str) -> Option<Resolved> {
        let mut current = path.to_string();
        for _ in 0..MAX_REDIRECTS {
            match self.action(&current)? {
                RouteAction::Render(view) => {
                    return Some(Resolved {
                        view: *view,
                        path: current,
                    });
                }
                RouteAction::Redirect(to) => {
                    current = to.clone();
                }
            }
        }
        None
    }
}

/// History-based navigation: one entry per successful navigation, with
/// the post-redirect path recorded (a redirect never leaves an extra
/// entry behind).
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `path` and pushes the final path. A path that matches no
    /// route leaves the history untouched.
    pub fn navigate(&mut self, router: &Router, path: &str) -> Option<Resolved> {
        let resolved = router.resolve(path)?;
        self.entries.push(resolved.path.clone());
        Some(resolved)
    }

    /// Pops the current entry and returns the one before it.
    pub fn back(&mut self) -> Option<&str> {
        self.entries.pop();
        self.current()
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
