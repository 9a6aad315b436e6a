use super::*;

/// Search bar. Submits `post_search` to `/search` with a GET request.
pub fn search_form() -> Markup {
    html! {
        form #search action="/search" method="get" {
            input type="search" name="post_search" placeholder="Search posts" aria-label="Search posts";
            button type="submit" {
                span.icon.icon-search aria-hidden="true" {}
            }
        }
    }
}

/// Submission buttons, shown only to a signed-in user. The container is
/// always rendered so the page layout does not shift.
pub fn submit_actions(ctx: &Context) -> Markup {
    html! {
        .actions {
            @if ctx.signed_in() {
                a.button href="/submit_post" { "Submit Post" }
                a.button href="/submit_image" { "Submit Image" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn search_form_targets_search() {
        let form = search_form().into_string();
        assert!(form.starts_with(r#"<form id="search" action="/search" method="get">"#));
        assert_eq!(form.matches(r#"name="post_search""#).count(), 1);
        assert!(form.contains(r#"<button type="submit">"#));
        assert!(form.contains(r#"aria-hidden="true""#));
    }

    #[test]
    fn actions_for_signed_in_user() {
        let ctx = Context::new(Some(User::from(json!({ "id": 1 }))));
        let actions = submit_actions(&ctx).into_string();
        assert_eq!(
            actions,
            concat!(
                r#"<div class="actions">"#,
                r#"<a class="button" href="/submit_post">Submit Post</a>"#,
                r#"<a class="button" href="/submit_image">Submit Image</a>"#,
                "</div>",
            )
        );
    }

    #[test]
    fn actions_container_empty_when_signed_out() {
        let actions = submit_actions(&Context::default()).into_string();
        assert_eq!(actions, r#"<div class="actions"></div>"#);

        let falsy = Context::new(Some(User::from(json!(false))));
        assert_eq!(submit_actions(&falsy).into_string(), actions);
    }
}
