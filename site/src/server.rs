use std::path::{Component, Path, PathBuf};

use actix_files::{Files, NamedFile};
use actix_web::http::StatusCode;
use actix_web::http::header::{ContentType, LOCATION};
use actix_web::middleware::Logger;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use ui::{PageContext, Route, Shell, render_page};

use crate::config::SiteConfig;

/// How a request path maps onto the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Page(Route),
    /// Known route asked for with the other slash style.
    Redirect(String),
    NotFound,
}

pub fn resolve(path: &str, trailing_slash: bool) -> Resolution {
    match Route::from_path(path, trailing_slash) {
        Route::NotFound => match Route::from_path(path, !trailing_slash) {
            Route::NotFound => Resolution::NotFound,
            route => Resolution::Redirect(route.path(trailing_slash)),
        },
        route => Resolution::Page(route),
    }
}

pub struct RenderState {
    pub shell: Shell,
    pub public_dir: PathBuf,
}

impl RenderState {
    /// A file under the public dir, refusing anything that climbs out of it.
    fn public_file(&self, path: &str) -> Option<PathBuf> {
        let rel = Path::new(path.trim_start_matches('/'));
        if !rel.components().all(|c| matches!(c, Component::Normal(_))) {
            return None;
        }
        let file = self.public_dir.join(rel);
        file.is_file().then_some(file)
    }
}

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

fn redirect(to: String) -> HttpResponse {
    HttpResponse::PermanentRedirect()
        .insert_header((LOCATION, to))
        .finish()
}

async fn render(req: HttpRequest, state: web::Data<RenderState>) -> actix_web::Result<HttpResponse> {
    let path = req.path();

    match resolve(path, state.shell.trailing_slash) {
        Resolution::Page(route) => Ok(html(
            StatusCode::OK,
            render_page(route, PageContext::new(path), &state.shell),
        )),
        Resolution::Redirect(to) => Ok(redirect(to)),
        Resolution::NotFound => {
            if let Some(file) = state.public_file(path) {
                return Ok(NamedFile::open(file)?.into_response(&req));
            }
            Ok(html(
                StatusCode::NOT_FOUND,
                render_page(Route::NotFound, PageContext::new(path), &state.shell),
            ))
        }
    }
}

pub struct ExportState {
    pub out_dir: PathBuf,
    pub trailing_slash: bool,
}

/// Route paths map to the file `build` wrote for them, so `/about` finds
/// `about.html` and `/about/` finds `about/index.html`.
async fn exported(req: HttpRequest, state: web::Data<ExportState>) -> actix_web::Result<HttpResponse> {
    let trailing_slash = state.trailing_slash;

    match resolve(req.path(), trailing_slash) {
        Resolution::Page(route) => {
            let page = NamedFile::open(state.out_dir.join(route.export_file(trailing_slash)))?;
            Ok(page.into_response(&req))
        }
        Resolution::Redirect(to) => Ok(redirect(to)),
        Resolution::NotFound => {
            let page = NamedFile::open(state.out_dir.join(Route::NotFound.export_file(trailing_slash)))?;
            let mut res = page.into_response(&req);
            *res.status_mut() = StatusCode::NOT_FOUND;
            Ok(res)
        }
    }
}

/// Serves an export tree. Route paths in either slash style go through
/// [`exported`]; everything else is a plain file, falling back to `404.html`.
pub fn configure_export(cfg: &mut web::ServiceConfig, out_dir: PathBuf, trailing_slash: bool) {
    cfg.app_data(web::Data::new(ExportState {
        out_dir: out_dir.clone(),
        trailing_slash,
    }));

    let mut paths: Vec<String> = Route::NAV
        .iter()
        .flat_map(|route| [route.path(true), route.path(false)])
        .collect();
    paths.dedup();
    for path in paths {
        cfg.route(&path, web::get().to(exported));
    }

    cfg.service(Files::new("/", out_dir).default_handler(web::to(exported)));
}

/// Export mode serves the files `build` wrote; otherwise pages render per request.
pub async fn serve(config: SiteConfig, addr: &str, year: i32) -> std::io::Result<()> {
    if config.is_export() {
        let out_dir = config.out_dir.clone();
        if !out_dir.join("index.html").is_file() {
            log::warn!("{} has no index.html, run `site build` first", out_dir.display());
        }
        log::info!("serving {} on http://{addr}", out_dir.display());

        let trailing_slash = config.trailing_slash;
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::default())
                .configure(|cfg| configure_export(cfg, out_dir.clone(), trailing_slash))
        })
        .bind(addr)?
        .run()
        .await
    } else {
        log::info!("rendering on request at http://{addr}");

        let state = web::Data::new(RenderState {
            shell: config.shell(year),
            public_dir: config.public_dir.clone(),
        });
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::default())
                .app_data(state.clone())
                .default_service(web::get().to(render))
        })
        .bind(addr)?
        .run()
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;
    use crate::config::OutputMode;
    use pretty_assertions::assert_eq;
    use ui::SiteMeta;

    #[test]
    fn resolves_exact_routes() {
        assert_eq!(resolve("/", true), Resolution::Page(Route::Home));
        assert_eq!(resolve("/about/", true), Resolution::Page(Route::About));
        assert_eq!(resolve("/contact", false), Resolution::Page(Route::Contact));
    }

    #[test]
    fn redirects_other_slash_style() {
        assert_eq!(resolve("/about", true), Resolution::Redirect("/about/".into()));
        assert_eq!(resolve("/contact/", false), Resolution::Redirect("/contact".into()));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(resolve("/blog/post-1/", true), Resolution::NotFound);
        assert_eq!(resolve("/404/", true), Resolution::NotFound);
    }

    fn app_state(public_dir: PathBuf) -> web::Data<RenderState> {
        web::Data::new(RenderState {
            shell: Shell::new(SiteMeta::default(), true, 2026),
            public_dir,
        })
    }

    #[actix_web::test]
    async fn renders_page_on_request() {
        let app = actix_test::init_service(
            App::new()
                .app_data(app_state(PathBuf::from("public")))
                .default_service(web::get().to(render)),
        )
        .await;

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/contact/").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body = actix_test::read_body(res).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("Get in Touch"));
        assert_eq!(body.matches("text-xl font-bold").count(), 1);
    }

    #[actix_web::test]
    async fn redirects_and_404s() {
        let app = actix_test::init_service(
            App::new()
                .app_data(app_state(PathBuf::from("public")))
                .default_service(web::get().to(render)),
        )
        .await;

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/about").to_request()).await;
        assert_eq!(res.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(res.headers().get(LOCATION).unwrap(), "/about/");

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/blog/post-1/").to_request()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = actix_test::read_body(res).await;
        assert!(!std::str::from_utf8(&body).unwrap().contains("text-xl font-bold"));
    }

    #[actix_web::test]
    async fn serves_public_files_but_not_outside() {
        let tmp = tempfile::tempdir().unwrap();
        let public = tmp.path().join("public");
        std::fs::create_dir_all(&public).unwrap();
        std::fs::write(public.join("robots.txt"), "User-agent: *").unwrap();
        std::fs::write(tmp.path().join("secret.txt"), "nope").unwrap();

        let app = actix_test::init_service(
            App::new()
                .app_data(app_state(public))
                .default_service(web::get().to(render)),
        )
        .await;

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/robots.txt").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/../secret.txt").to_request()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    fn exported_site(trailing_slash: bool) -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        let config = SiteConfig {
            output: Some(OutputMode::Export),
            trailing_slash,
            public_dir: tmp.path().join("public"),
            ..SiteConfig::default()
        };
        crate::export::export(&config, tmp.path(), 2026).unwrap();
        tmp
    }

    #[actix_web::test]
    async fn export_preview_serves_flat_files() {
        let site = exported_site(false);
        let out = site.path().to_path_buf();
        let app = actix_test::init_service(
            App::new().configure(|cfg| configure_export(cfg, out, false)),
        )
        .await;

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/about").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = actix_test::read_body(res).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("<title>About | Engineering Blog</title>"));

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/contact/").to_request()).await;
        assert_eq!(res.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(res.headers().get(LOCATION).unwrap(), "/contact");
    }

    #[actix_web::test]
    async fn export_preview_serves_slashed_directories() {
        let site = exported_site(true);
        let out = site.path().to_path_buf();
        let app = actix_test::init_service(
            App::new().configure(|cfg| configure_export(cfg, out, true)),
        )
        .await;

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/about/").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = actix_test::read_body(res).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("<title>About | Engineering Blog</title>"));

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/about").to_request()).await;
        assert_eq!(res.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(res.headers().get(LOCATION).unwrap(), "/about/");

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/404.html").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn export_preview_falls_back_to_404_page() {
        for trailing_slash in [true, false] {
            let site = exported_site(trailing_slash);
            let out = site.path().to_path_buf();
            let app = actix_test::init_service(
                App::new().configure(|cfg| configure_export(cfg, out, trailing_slash)),
            )
            .await;

            let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/blog/post-1/").to_request()).await;
            assert_eq!(res.status(), StatusCode::NOT_FOUND);
            let body = actix_test::read_body(res).await;
            let body = std::str::from_utf8(&body).unwrap();
            assert!(body.contains("This page could not be found."));
            assert!(!body.contains("text-xl font-bold"));
        }
    }
}
