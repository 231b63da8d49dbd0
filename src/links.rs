//! Classification of navigation paths into external and internal links.
//!
//! The decision only looks at the lexical form of the path:
//!
//! | path                               | result                                        |
//! |------------------------------------|-----------------------------------------------|
//! | `//host/x`                         | external, internal if `host` is the site host |
//! | `http(s)://host/x`                 | external, internal if same origin as the site |
//! | `mailto:`, `tel:` and other schemes| external                                      |
//! | `/x`, `#x`, `?x`                   | internal                                      |
//! | anything else (`x/y`, empty)       | internal, with a warning                      |

use url::{Position, Url};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Leaves the site; the original path is kept untouched.
    External(String),
    /// A site route, reduced to path, query and fragment.
    Internal(String),
}

impl LinkTarget {
    pub fn is_external(&self) -> bool {
        matches!(self, LinkTarget::External(_))
    }
}

/// Classifies `path` relative to the site's own `origin`.
///
/// Absolute URLs pointing at `origin` count as internal. With no origin every
/// absolute URL is external.
pub fn classify_path(path: &str, origin: Option<&Url>) -> LinkTarget {
    let absolute = if path.starts_with("//") {
        let scheme = origin.map(Url::scheme).unwrap_or("https");
        Url::parse(&format!("{scheme}:{path}"))
    } else {
        Url::parse(path)
    };

    match absolute {
        Ok(url) if is_same_origin(&url, origin) => {
            LinkTarget::Internal(url[Position::BeforePath..].to_string())
        }
        Ok(_) => LinkTarget::External(path.to_string()),
        Err(_) if path.starts_with(['/', '#', '?']) => LinkTarget::Internal(path.to_string()),
        Err(e) => {
            tracing::warn!("Navigation path {path:?} is neither absolute nor rooted ({e}), treating it as internal");
            LinkTarget::Internal(path.to_string())
        }
    }
}

pub fn is_external_link(path: &str) -> bool {
    classify_path(path, None).is_external()
}

fn is_same_origin(url: &Url, origin: Option<&Url>) -> bool {
    origin.is_some_and(|o| o.origin() == url.origin())
}
