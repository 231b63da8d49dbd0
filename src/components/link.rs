use dioxus::prelude::*;

use crate::routing::RouteContext;
use crate::theme::{Style, Theme};

fn variant_class(variant: &str) -> String {
    format!("variant-{}", variant.replace('.', "-"))
}

fn variant_style(theme: &Theme, variant: &str) -> Style {
    match theme.variant(variant) {
        Some(style) => style.clone(),
        None => {
            tracing::debug!("Theme has no {variant} variant");
            Style::new()
        }
    }
}

/// Anchor leaving the site, styled with a theme variant.
#[component]
pub fn ExternalLink(
    #[props(into)] href: String,
    #[props(into)] target: String,
    #[props(into)] variant: String,
    children: Element,
) -> Element {
    let theme = use_context::<Theme>();
    let class = variant_class(&variant);
    let style = variant_style(&theme, &variant).to_css();

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            target: "{target}",
            rel: "noopener noreferrer",
            style: "{style}",
            {children}
        }
    }
}

/// Link to a site route.
///
/// The link is active when the [`RouteContext`] matcher says so; with `partially_active`
/// any route below `to` counts. Active links get `active_style` on top of the variant
/// and `aria-current="page"`.
#[component]
pub fn InternalLink(
    #[props(into)] to: String,
    #[props(default)] partially_active: bool,
    #[props(default)] active_style: Style,
    #[props(into)] variant: String,
    children: Element,
) -> Element {
    let theme = use_context::<Theme>();
    let route = use_context::<RouteContext>();

    let active = route.is_active(&to, partially_active);
    let class = variant_class(&variant);
    let base = variant_style(&theme, &variant);
    let style = if active {
        base.merged(&active_style)
    } else {
        base
    }
    .to_css();
    let aria_current = if active { "page" } else { "false" };

    rsx! {
        a {
            class: "{class}",
            href: "{to}",
            style: "{style}",
            "aria-current": aria_current,
            {children}
        }
    }
}
