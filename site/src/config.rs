//! Declarative build settings, read from `site.toml`.
//!
//! ```toml
//! output = "export"
//! strict_mode = true
//! trailing_slash = true
//!
//! [images]
//! domains = ["localhost"]
//!
//! [site]
//! title = "Engineering Blog"
//! author = "Eden Reich"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ui::components::progress_bar::check_value;
use ui::{APPLE_TOUCH_ICON, Shell, SiteMeta};
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("image `{src}` is not on the images.domains allow-list")]
    ImageHostNotAllowed { src: String },

    #[error("image source `{src}` is not a valid URL")]
    InvalidImageSource {
        src: String,
        #[source]
        source: url::ParseError,
    },

    #[error("static export needs `output = \"export\"`")]
    NotExportMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Pre-render every page to plain files, no server needed.
    Export,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Unset means pages are rendered on request by `serve`, as with a plain
    /// server build.
    pub output: Option<OutputMode>,
    /// Extra checks during development. Never changes the rendered output.
    pub strict_mode: bool,
    pub images: ImagesConfig,
    pub trailing_slash: bool,
    pub out_dir: PathBuf,
    pub public_dir: PathBuf,
    pub site: SiteMeta,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output: None,
            strict_mode: true,
            images: ImagesConfig::default(),
            trailing_slash: true,
            out_dir: PathBuf::from("out"),
            public_dir: PathBuf::from("public"),
            site: SiteMeta::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Hosts external images may be loaded from.
    pub domains: Vec<String>,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            domains: vec!["localhost".into()],
        }
    }
}

impl ImagesConfig {
    /// Relative sources are always fine; absolute ones need an allowed host.
    pub fn check_source(&self, src: &str) -> Result<(), ConfigError> {
        // protocol-relative, `//cdn.example.com/a.png`
        let parsed = if src.starts_with("//") {
            Url::parse(&format!("https:{src}"))
        } else {
            Url::parse(src)
        };

        let url = match parsed {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => return Ok(()),
            Err(source) => {
                return Err(ConfigError::InvalidImageSource {
                    src: src.to_owned(),
                    source,
                });
            }
        };

        match url.host_str() {
            Some(host) if self.domains.iter().any(|d| d == host) => Ok(()),
            _ => Err(ConfigError::ImageHostNotAllowed {
                src: src.to_owned(),
            }),
        }
    }
}

impl SiteConfig {
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Built-in defaults when there is no config file at all.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("{} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn is_export(&self) -> bool {
        self.output == Some(OutputMode::Export)
    }

    pub fn shell(&self, year: i32) -> Shell {
        Shell::new(self.site.clone(), self.trailing_slash, year)
    }

    /// Every image source the pages reference.
    pub fn image_sources(&self) -> Vec<&str> {
        let mut sources = vec![APPLE_TOUCH_ICON];
        sources.extend(self.site.avatar.as_deref());
        sources
    }

    pub fn check_images(&self) -> Result<(), ConfigError> {
        self.image_sources()
            .into_iter()
            .try_for_each(|src| self.images.check_source(src))
    }

    /// Problems worth a warning while developing. Empty when everything is sane.
    pub fn strict_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for skill in &self.site.skills {
            if let Err(e) = check_value(skill.value) {
                warnings.push(format!("skill `{}`: {e}", skill.label));
            }
        }

        for link in &self.site.social {
            if link.href.trim().is_empty() {
                warnings.push(format!("{} link has an empty href", link.kind.label()));
            }
        }

        if let Err(e) = self.check_images() {
            warnings.push(e.to_string());
        }

        warnings
    }
}
