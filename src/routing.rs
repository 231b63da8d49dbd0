use std::fmt;
use std::sync::Arc;
use url::Url;

/// Decides whether a link target counts as active for the current route.
pub trait ActiveMatcher: Send + Sync {
    fn is_active(&self, current: &str, target: &str, partially: bool) -> bool;
}

/// Default matcher.
///
/// Exact mode compares routes for equality, partial mode checks that the current
/// route starts with the target. Query, fragment and trailing slashes are dropped
/// from both sides before comparing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixMatcher;

impl ActiveMatcher for PrefixMatcher {
    fn is_active(&self, current: &str, target: &str, partially: bool) -> bool {
        let current = normalize(current);
        let target = normalize(target);
        if partially {
            current.starts_with(target)
        } else {
            current == target
        }
    }
}

fn normalize(route: &str) -> &str {
    let route = route.split(['?', '#']).next().unwrap_or_default();
    match route.trim_end_matches('/') {
        "" if route.starts_with('/') => "/",
        trimmed => trimmed,
    }
}

/// Where the page being rendered lives, provided to the render tree as context.
#[derive(Clone)]
pub struct RouteContext {
    pub current: String,
    pub origin: Option<Url>,
    matcher: Arc<dyn ActiveMatcher>,
}

impl RouteContext {
    pub fn new<S: Into<String>>(current: S) -> Self {
        Self {
            current: current.into(),
            origin: None,
            matcher: Arc::new(PrefixMatcher),
        }
    }

    pub fn with_origin(mut self, origin: Option<Url>) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_matcher<M: ActiveMatcher + 'static>(mut self, matcher: M) -> Self {
        self.matcher = Arc::new(matcher);
        self
    }

    pub fn is_active(&self, target: &str, partially: bool) -> bool {
        self.matcher.is_active(&self.current, target, partially)
    }
}

impl PartialEq for RouteContext {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
            && self.origin == other.origin
            && Arc::ptr_eq(&self.matcher, &other.matcher)
    }
}

impl fmt::Debug for RouteContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteContext")
            .field("current", &self.current)
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_match_is_a_prefix_match() {
        let m = PrefixMatcher;
        assert!(m.is_active("/docs/start/intro", "/docs/start", true));
        assert!(m.is_active("/docs/start", "/docs/start", true));
        assert!(!m.is_active("/blog", "/docs/start", true));
        assert!(!m.is_active("/docs", "/docs/start", true));
    }

    #[test]
    fn exact_match_requires_equality() {
        let m = PrefixMatcher;
        assert!(m.is_active("/docs/start", "/docs/start", false));
        assert!(!m.is_active("/docs/start/intro", "/docs/start", false));
    }

    #[test]
    fn trailing_slashes_and_queries_are_ignored() {
        let m = PrefixMatcher;
        assert!(m.is_active("/docs/start/", "/docs/start", false));
        assert!(m.is_active("/docs/start?tab=1#top", "/docs/start/", false));
        assert!(m.is_active("/", "/", false));
    }

    #[test]
    fn target_query_is_ignored() {
        let m = PrefixMatcher;
        assert!(m.is_active("/guide", "/guide?v=2", false));
        assert!(m.is_active("/guide/setup", "/guide#intro", true));
        assert!(!m.is_active("/blog", "/guide?v=2", true));
    }

    #[test]
    fn root_partially_matches_everything() {
        assert!(PrefixMatcher.is_active("/blog", "/", true));
        assert!(!PrefixMatcher.is_active("/blog", "/", false));
    }

    struct Never;

    impl ActiveMatcher for Never {
        fn is_active(&self, _: &str, _: &str, _: bool) -> bool {
            false
        }
    }

    #[test]
    fn matcher_can_be_swapped() {
        let route = RouteContext::new("/docs");
        assert!(route.is_active("/docs", true));

        let route = route.with_matcher(Never);
        assert!(!route.is_active("/docs", true));
    }

    #[test]
    fn equality_tracks_the_shared_matcher() {
        let route = RouteContext::new("/docs");
        assert_eq!(route, route.clone());
        assert_ne!(route, RouteContext::new("/docs"));
        assert_ne!(route, route.clone().with_origin(Url::parse("https://example.com").ok()));
    }
}
