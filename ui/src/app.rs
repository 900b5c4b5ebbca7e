use leptos::prelude::*;

use crate::components::Footer;
use crate::nav::{NavEntry, Navigation, PageContext};
use crate::site::SiteMeta;

/// Everything that is the same on every page of one build.
#[derive(Debug, Clone, PartialEq)]
pub struct Shell {
    pub site: SiteMeta,
    pub nav: Vec<NavEntry>,
    pub trailing_slash: bool,
    /// Shown in the footer copyright line.
    pub year: i32,
}

impl Shell {
    pub fn new(site: SiteMeta, trailing_slash: bool, year: i32) -> Self {
        Self {
            site,
            nav: NavEntry::for_routes(trailing_slash),
            trailing_slash,
            year,
        }
    }
}

/// Header, page content, footer. Always in that order; the content region is the
/// only thing a page controls.
#[component]
pub fn Layout(page: PageContext, shell: Shell, children: Children) -> impl IntoView {
    view! {
      <header class="bg-gray-900">
        <Navigation page entries=shell.nav.clone() brand=shell.site.author.clone() />
      </header>

      <main class="min-h-screen">{children()}</main>

      <Footer site=shell.site entries=shell.nav year=shell.year />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn header_then_content_then_footer() {
        let shell = Shell::new(SiteMeta::default(), true, 2026);
        let html = view! {
            <Layout page=PageContext::new("/") shell>
                <p>"page body"</p>
            </Layout>
        }
        .to_html();

        let header = html.find("<header").unwrap();
        let main = html.find("<main").unwrap();
        let body = html.find("page body").unwrap();
        let footer = html.find("<footer").unwrap();
        assert!(header < main && main < body && body < footer);
    }

    #[test]
    fn shell_builds_nav_from_routes() {
        let shell = Shell::new(SiteMeta::default(), false, 2026);
        assert_eq!(shell.nav, NavEntry::for_routes(false));
    }
}
