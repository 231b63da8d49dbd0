use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::Html;
use axum::Router;
use dioxus::prelude::*;
use percent_encoding::percent_decode_str;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::services::ServeDir;
use url::Url;

use crate::components::SiteLayout;
use crate::config::Config;
use crate::error::AppError;
use crate::links::{classify_path, LinkTarget};
use crate::models::NavigationSnapshot;
use crate::navigation::{JsonFileSource, NavigationSource};
use crate::routing::{ActiveMatcher, PrefixMatcher, RouteContext};
use crate::theme::Theme;

#[derive(Clone)]
pub struct AppState(pub Arc<InnerState>);

// deref so you can still access the inner fields easily
impl Deref for AppState {
    type Target = InnerState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub struct InnerState {
    pub navigation: NavigationSnapshot,
    pub theme: Theme,
    pub origin: Option<Url>,
    pub site_title: String,
}

impl AppState {
    pub fn new(inner: InnerState) -> Self {
        Self(Arc::new(inner))
    }

    /// Loads navigation data and theme once; nothing changes after startup.
    pub fn load(config: &Config) -> Result<Self, AppError> {
        let navigation = JsonFileSource::new(&config.navigation_data).snapshot()?;
        let theme = match &config.theme {
            Some(path) => Theme::load(path)?,
            None => Theme::default(),
        };
        tracing::info!("Serving {} navigation entries", navigation.len());
        Ok(Self::new(InnerState {
            navigation,
            theme,
            origin: config.origin()?,
            site_title: config.site_title.clone(),
        }))
    }
}

/// A route the site answers with 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub route: String,
    pub title: String,
}

/// The home page plus one page per internal navigation entry, in navigation order.
pub fn site_pages(state: &InnerState) -> Vec<Page> {
    let mut pages = vec![Page {
        route: String::from("/"),
        title: state.site_title.clone(),
    }];
    for entry in state.navigation.iter() {
        let LinkTarget::Internal(href) = classify_path(&entry.path, state.origin.as_ref()) else {
            continue;
        };
        let route = href.split(['?', '#']).next().unwrap_or_default();
        if !route.starts_with('/') {
            continue;
        }
        if pages.iter().any(|p| PrefixMatcher.is_active(&p.route, route, false)) {
            continue;
        }
        pages.push(Page {
            route: route.to_string(),
            title: entry.label.clone(),
        });
    }
    pages
}

pub fn app(public_dir: &Path) -> Router<AppState> {
    Router::new()
        .nest_service("/public", ServeDir::new(PathBuf::from(public_dir)))
        .fallback(page_endpoint)
}

pub fn html_app<S: AsRef<str>>(content: Element, title: S) -> Html<String> {
    // render the rsx! macro to HTML
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <link rel="icon" href="/public/favicon.ico">
    <title>{}</title>
</head>
{}
</html>"#,
        title.as_ref(),
        dioxus_ssr::render_element(rsx! {
            body {
                margin: "0",
                font_family: "'Noto Sans', 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif",
                {content}
            }
        })
    ))
}

/// Renders `route` with the site chrome. Unknown routes get a 404 page that still carries the nav bar.
pub fn render_page(state: &InnerState, route: &str) -> (StatusCode, Html<String>) {
    let page = site_pages(state)
        .into_iter()
        .find(|p| PrefixMatcher.is_active(route, &p.route, false));
    let (status, title, message) = match page {
        Some(page) => (StatusCode::OK, page.title, None),
        None => {
            tracing::debug!("No page for {route}");
            (
                StatusCode::NOT_FOUND,
                String::from("Not Found"),
                Some(format!("Nothing lives at {route}.")),
            )
        }
    };

    let context = RouteContext::new(route).with_origin(state.origin.clone());
    let content = rsx! {
        SiteLayout {
            navigation: state.navigation.clone(),
            theme: state.theme.clone(),
            route: context,
            h1 { "{title}" }
            {message.map(|message| rsx! { p { "{message}" } })}
        }
    };
    (status, html_app(content, &title))
}

async fn page_endpoint(State(state): State<AppState>, uri: Uri) -> (StatusCode, Html<String>) {
    // navigation paths are stored decoded, `/über` arrives as `/%C3%BCber`
    let route = percent_decode_str(uri.path()).decode_utf8_lossy();
    render_page(&state, &route)
}
