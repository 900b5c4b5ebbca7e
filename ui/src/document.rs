//! The full HTML document around a page.

use leptos::prelude::*;

use crate::app::{Layout, Shell};
use crate::nav::PageContext;
use crate::routes::Route;

pub const APPLE_TOUCH_ICON: &str = "/img/pencil.png";
pub const STYLESHEET: &str = "/styles/globals.css";

#[component]
pub fn Document(route: Route, page: PageContext, shell: Shell) -> impl IntoView {
    let title = route.title(&shell.site.title);
    let content = route.view(&shell);

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <link rel="apple-touch-icon" href=APPLE_TOUCH_ICON />
                <link rel="stylesheet" href=STYLESHEET />
            </head>
            <body>
                <Layout page shell>{content}</Layout>
            </body>
        </html>
    }
}

/// Render one page to a complete HTML document.
///
/// `page` is normally `route.path(..)`; the preview server passes the requested
/// path instead so an unknown URL renders the 404 page with nothing emphasized.
pub fn render_page(route: Route, page: PageContext, shell: &Shell) -> String {
    use leptos::tachys::view::RenderHtml;

    let doc = view! { <Document route page shell=shell.clone() /> };

    // Leptos doesn't emit a doctype
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::SiteMeta;

    fn shell() -> Shell {
        Shell::new(SiteMeta::default(), true, 2026)
    }

    fn render(route: Route) -> String {
        render_page(route, PageContext::new(route.path(true)), &shell())
    }

    #[test]
    fn document_head() {
        let html = render(Route::Contact);

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<title>Contact | Engineering Blog</title>"));
        assert!(html.contains(r#"rel="apple-touch-icon" href="/img/pencil.png""#));
    }

    #[test]
    fn every_page_has_the_same_frame() {
        for route in Route::ALL {
            let html = render(route);
            let header = html.find("<header").unwrap();
            let main = html.find("<main").unwrap();
            let footer = html.find("<footer").unwrap();
            assert!(header < main && main < footer, "{route:?} out of order");
        }
    }

    #[test]
    fn pages_are_plain_html_with_a_single_shell() {
        for route in Route::ALL {
            let html = render(route);
            assert_eq!(html.matches("<header").count(), 1, "{route:?}");
            assert_eq!(html.matches("<footer").count(), 1, "{route:?}");
            assert!(!html.contains("<script"), "{route:?} ships a script");
        }
    }

    #[test]
    fn about_page_emphasizes_about() {
        let html = render(Route::About);
        let header = &html[..html.find("</header>").unwrap()];

        assert_eq!(header.matches("text-xl font-bold").count(), 1);
        let about = header.find(r#"href="/about/""#).unwrap();
        let emphasized = header.find("text-xl font-bold").unwrap();
        assert!(emphasized > about);
        assert!(header[about..emphasized].find("</a>").is_none());
    }

    #[test]
    fn unknown_path_renders_404_without_emphasis() {
        let html = render_page(Route::NotFound, PageContext::new("/blog/post-1/"), &shell());

        assert!(html.contains("This page could not be found."));
        assert!(!html.contains("text-xl font-bold"));
    }

    #[test]
    fn about_page_has_progress_bars() {
        let html = render(Route::About);
        assert_eq!(html.matches("<rect").count(), SiteMeta::default().skills.len());
    }
}
