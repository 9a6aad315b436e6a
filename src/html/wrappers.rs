use maud::DOCTYPE;

use super::*;

/// Common page chrome. `body` fills the main region.
pub(super) fn standard(body: Markup) -> Markup {
    html! {
        header #masthead {
            h1 #title { a href="/" { "Frontpage" } }
        }
        main {
            (body)
        }
    }
}

/// The base layout every page is nested in.
///
/// `resource` names the stylesheet and script loaded for the page.
pub(super) fn universal(body: Markup, resource: &'static str, title: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Frontpage | " (title) }
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                link type="text/css" rel="stylesheet" href={"/style/" (resource) ".css"};
            }
            body {
                (body)
                script type="module" src={"/script/" (resource) ".js"} {};
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universal_wraps_body_in_layout() {
        let page = universal(html! { p #slot { "inner" } }, "index", "Home").into_string();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Frontpage | Home</title>"));
        assert!(page.contains(r#"href="/style/index.css""#));
        assert!(page.contains(r#"src="/script/index.js""#));

        let body = page.find("<body>").unwrap();
        let slot = page.find(r#"<p id="slot">inner</p>"#).unwrap();
        let end = page.find("</body>").unwrap();
        assert!(body < slot && slot < end);
    }

    #[test]
    fn title_is_escaped() {
        let page = universal(html! {}, "index", "<b>").into_string();
        assert!(page.contains("Frontpage | &lt;b&gt;"));
    }

    #[test]
    fn standard_places_body_in_main() {
        let chrome = standard(html! { span { "content" } }).into_string();
        assert!(chrome.contains("<main><span>content</span></main>"));
        assert!(chrome.contains(r#"<a href="/">Frontpage</a>"#));
    }
}
