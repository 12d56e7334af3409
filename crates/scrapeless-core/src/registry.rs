//! Template registry: the closed set of actor templates and their sources
//!
//! The registry is a static table loaded for the lifetime of the process and
//! never mutated. Unknown identifiers are rejected at the parse boundary with
//! the full supported list, rather than surfacing as a lookup miss deeper in.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Default base URL for template archives (GitHub zip downloads)
const DEFAULT_TEMPLATE_BASE_URL: &str = "https://codeload.github.com/scrapeless-ai";

/// Environment variable overriding the template base URL
pub const TEMPLATE_URL_ENV: &str = "SCRAPELESS_TEMPLATE_URL";

/// Implementation language of a template / actor project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Go,
    Node,
    Python,
}

impl Language {
    /// Short tag used in user-facing messages ("go", "node", "python")
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Node => "node",
            Language::Python => "python",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Identifier of a supported actor template (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    Golang,
    Node,
    Python,
}

impl Template {
    /// All supported templates, in the stable order used for interactive
    /// selection and for error messages enumerating supported values.
    pub fn all() -> &'static [Template] {
        &[Template::Golang, Template::Node, Template::Python]
    }

    /// Stable string identifier, as accepted by `--tmpl`
    pub fn identifier(&self) -> &'static str {
        match self {
            Template::Golang => "golang-template",
            Template::Node => "node-template",
            Template::Python => "python-template",
        }
    }

    /// All identifiers in presentation order
    pub fn identifiers() -> Vec<String> {
        Self::all().iter().map(|t| t.identifier().to_string()).collect()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

impl FromStr for Template {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::all()
            .iter()
            .find(|t| t.identifier() == s)
            .copied()
            .ok_or_else(|| Error::UnknownTemplate {
                name: s.to_string(),
                supported: Template::identifiers(),
            })
    }
}

/// Registry entry: where a template is fetched from and what language it is
#[derive(Debug, Clone, Copy)]
pub struct TemplateEntry {
    pub template: Template,
    /// Source repository name under the template base URL
    pub repo: &'static str,
    pub language: Language,
}

/// Static template table. Every `Template` value has exactly one entry.
const ENTRIES: &[TemplateEntry] = &[
    TemplateEntry {
        template: Template::Golang,
        repo: "actor-template-go",
        language: Language::Go,
    },
    TemplateEntry {
        template: Template::Node,
        repo: "actor-template-node",
        language: Language::Node,
    },
    TemplateEntry {
        template: Template::Python,
        repo: "actor-template-python",
        language: Language::Python,
    },
];

/// Look up the registry entry for a template. Total: the set is closed and
/// every member is registered.
pub fn entry(template: Template) -> &'static TemplateEntry {
    ENTRIES
        .iter()
        .find(|e| e.template == template)
        .unwrap_or_else(|| unreachable!("template {} missing from registry", template))
}

impl TemplateEntry {
    /// Archive URL for this template's main branch, built from the base URL
    /// (overridable via `SCRAPELESS_TEMPLATE_URL`).
    pub fn source_url(&self) -> Result<Url, Error> {
        let base = std::env::var(TEMPLATE_URL_ENV)
            .unwrap_or_else(|_| DEFAULT_TEMPLATE_BASE_URL.to_string());
        let url_str = format!("{}/{}/zip/refs/heads/main", base.trim_end_matches('/'), self.repo);
        Url::parse(&url_str).map_err(|e| Error::FetchFailed {
            url: url_str,
            source: Box::new(e),
        })
    }
}
