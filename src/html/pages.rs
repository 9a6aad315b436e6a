use super::*;

/// The index page: submission buttons for a signed-in user and the search bar.
pub fn index(ctx: &Context) -> Markup {
    let body = html! {
        (components::submit_actions(ctx))
        (components::search_form())
    };
    wrappers::universal(wrappers::standard(body), "index", "Home")
}
