use dioxus::prelude::*;

use crate::components::TopNav;
use crate::models::NavigationSnapshot;
use crate::routing::RouteContext;
use crate::theme::Theme;

/// Page chrome shared by every route.
///
/// Provides the navigation snapshot, theme and route to the tree below it, then renders
/// the [`TopNav`] header and the page `children` under it.
#[component]
pub fn SiteLayout(
    navigation: NavigationSnapshot,
    theme: Theme,
    route: RouteContext,
    children: Element,
) -> Element {
    use_context_provider(|| navigation);
    let theme = use_context_provider(|| theme);
    use_context_provider(|| route);

    let body_style = format!(
        "color: {}; background: {};",
        theme.colors.text, theme.colors.background
    );

    rsx! {
        div { class: "site", style: "{body_style}",
            header { class: "site-header",
                nav { TopNav {} }
            }
            main { {children} }
        }
    }
}
