use super::*;

pub async fn index(headers: HeaderMap, State(state): State<AppState>) -> Markup {
    let ctx = html::Context::new(state.identity.user(&headers));
    tracing::debug!(signed_in = ctx.signed_in(), "render index");

    html::pages::index(&ctx)
}
