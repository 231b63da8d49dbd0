use dioxus::prelude::*;

use crate::components::{ExternalLink, InternalLink};
use crate::links::{classify_path, LinkTarget};
use crate::models::NavigationSnapshot;
use crate::routing::RouteContext;
use crate::theme::{responsive_css, Style, Theme};

pub const TOP_NAV_VARIANT: &str = "links.topNav";

fn value(v: &str) -> Option<String> {
    Some(v.to_string())
}

/// Rules for the bar. The list is hidden below the first breakpoint and laid out
/// as a flex row above it.
pub fn top_nav_stylesheet(theme: &Theme) -> String {
    let list = "ul.top-nav";
    let item = "ul.top-nav > li";
    [
        responsive_css(theme, list, "display", &[value("none"), value("flex")]),
        responsive_css(theme, list, "font-size", &[None, theme.font_size(3)]),
        responsive_css(theme, list, "font-weight", &[value("bold")]),
        responsive_css(theme, list, "justify-content", &[value("space-between")]),
        responsive_css(theme, list, "width", &[None, value("auto"), value("auto")]),
        responsive_css(theme, list, "white-space", &[value("nowrap")]),
        responsive_css(theme, item, "display", &[value("inline")]),
        responsive_css(
            theme,
            item,
            "padding-right",
            &[None, theme.space(5), theme.space(6)],
        ),
    ]
    .concat()
}

fn nav_link(target: LinkTarget, label: String, active_style: Style) -> Element {
    match target {
        LinkTarget::External(href) => rsx! {
            ExternalLink { href: href, target: "_blank", variant: TOP_NAV_VARIANT, {label} }
        },
        LinkTarget::Internal(to) => rsx! {
            InternalLink {
                to: to,
                partially_active: true,
                active_style: active_style,
                variant: TOP_NAV_VARIANT,
                {label}
            }
        },
    }
}

/// The horizontal link bar at the top of every page.
///
/// Takes no props: entries come from the [`NavigationSnapshot`] context and are rendered
/// in source order with upper-cased labels. External entries open in a new tab, internal
/// ones highlight with `colors.primaryBase` while the current route is at or below them.
#[component]
pub fn TopNav() -> Element {
    let theme = use_context::<Theme>();
    let navigation = use_context::<NavigationSnapshot>();
    let route = use_context::<RouteContext>();

    let stylesheet = top_nav_stylesheet(&theme);
    let active_style = Style::new().with("color", theme.colors.primary_base.clone());
    let items = navigation.iter().enumerate().map(|(index, entry)| {
        (
            format!("{}-{}", entry.label, index),
            entry.label.to_uppercase(),
            classify_path(&entry.path, route.origin.as_ref()),
        )
    });

    rsx! {
        style { dangerous_inner_html: "{stylesheet}" }
        ul { class: "top-nav",
            for (key, label, target) in items {
                li { key: "{key}",
                    {nav_link(target, label, active_style.clone())}
                }
            }
        }
    }
}
