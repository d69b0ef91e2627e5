//! Configuration management for weld.
//!
//! Parses `weld.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.base_url`

mod expand;
mod sidebar;

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use sidebar::SidebarRecord;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content source directory.
    pub source_dir: Option<PathBuf>,
    /// Override build output directory.
    pub out_dir: Option<PathBuf>,
    /// Override site base URL.
    pub base_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "weld.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity and head defaults.
    pub site: SiteSection,
    /// Content configuration (paths are relative strings from TOML).
    content: ContentSectionRaw,
    /// Sitemap metadata defaults.
    pub sitemap: SitemapDefaults,
    /// SEO head-tag defaults.
    pub seo: SeoDefaults,
    /// Ordered sidebar specification (raw records, validated by weld-nav).
    pub sidebar: Vec<SidebarRecord>,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site identity configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Absolute base URL of the published site (e.g. `https://docs.example.com`).
    pub base_url: String,
    /// Site title, used as the JSON-LD publisher name.
    pub title: String,
    /// Site-wide fallback description.
    pub description: String,
    /// BCP 47 locale emitted as `og:locale`.
    pub locale: String,
    /// Favicon path relative to the site root.
    pub favicon: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            title: "Documentation".to_owned(),
            description: String::new(),
            locale: "en".to_owned(),
            favicon: None,
        }
    }
}

/// Sitemap change frequency per the sitemap protocol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    #[default]
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    /// Protocol string for the `<changefreq>` element.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// Default sitemap metadata applied to routes without per-document overrides.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SitemapDefaults {
    /// Default `<changefreq>` value.
    pub change_frequency: ChangeFrequency,
    /// Default `<priority>` value (0.0 to 1.0).
    pub priority: f32,
}

impl Default for SitemapDefaults {
    fn default() -> Self {
        Self {
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.5,
        }
    }
}

/// SEO head-tag defaults attached to every route.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SeoDefaults {
    /// Open Graph object type (`og:type`).
    pub og_type: String,
    /// Twitter card type (`twitter:card`).
    pub twitter_card: String,
    /// JSON-LD `@type` for the structured-data block.
    pub ld_type: String,
}

impl Default for SeoDefaults {
    fn default() -> Self {
        Self {
            og_type: "article".to_owned(),
            twitter_card: "summary_large_image".to_owned(),
            ld_type: "TechArticle".to_owned(),
        }
    }
}

/// Raw content configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentSectionRaw {
    source_dir: Option<String>,
    out_dir: Option<String>,
    collection: Option<String>,
    extensions: Option<Vec<String>>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug)]
pub struct ContentConfig {
    /// Source directory for content files.
    pub source_dir: PathBuf,
    /// Output directory for build artifacts.
    pub out_dir: PathBuf,
    /// Collection identifier documents are loaded into.
    pub collection: String,
    /// Recognized content file extensions (without dot).
    pub extensions: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("docs"),
            out_dir: PathBuf::from("dist"),
            collection: "docs".to_owned(),
            extensions: vec!["md".to_owned(), "mdx".to_owned()],
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.base_url`").
        field: String,
        /// Error message (e.g., "${`DOCS_BASE_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `weld.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. Validation runs
    /// after overrides so `--base-url` can satisfy a config without one.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the merged configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.content_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(out_dir) = &settings.out_dir {
            self.content_resolved.out_dir.clone_from(out_dir);
        }
        if let Some(base_url) = &settings.base_url {
            self.site.base_url.clone_from(base_url);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteSection::default(),
            content: ContentSectionRaw::default(),
            sitemap: SitemapDefaults::default(),
            seo: SeoDefaults::default(),
            sidebar: Vec::new(),
            content_resolved: ContentConfig {
                source_dir: base.join("docs"),
                out_dir: base.join("dist"),
                ..ContentConfig::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically at the end of [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_sitemap()?;
        self.validate_content()?;
        Ok(())
    }

    /// Validate site configuration.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.base_url, "site.base_url")?;
        require_http_url(&self.site.base_url, "site.base_url")?;
        require_non_empty(&self.site.locale, "site.locale")?;
        Ok(())
    }

    /// Validate sitemap defaults.
    fn validate_sitemap(&self) -> Result<(), ConfigError> {
        let priority = self.sitemap.priority;
        if !(0.0..=1.0).contains(&priority) {
            return Err(ConfigError::Validation(format!(
                "sitemap.priority must be between 0.0 and 1.0, got {priority}"
            )));
        }
        Ok(())
    }

    /// Validate content configuration.
    fn validate_content(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.content_resolved.collection, "content.collection")?;
        if self.content_resolved.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "content.extensions cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.base_url = expand::expand_env(&self.site.base_url, "site.base_url")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let defaults = ContentConfig::default();
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.content_resolved = ContentConfig {
            source_dir: resolve(self.content.source_dir.as_deref(), "docs"),
            out_dir: resolve(self.content.out_dir.as_deref(), "dist"),
            collection: self
                .content
                .collection
                .clone()
                .unwrap_or(defaults.collection),
            extensions: self
                .content
                .extensions
                .clone()
                .unwrap_or(defaults.extensions),
        };
    }
}
