//! Interactive selection boundary
//!
//! Prompting is an external capability: the trait below is all the core flow
//! sees, so template selection can be driven by tests (or any other frontend)
//! without a terminal. The cliclack implementation lives in the `tui` module.

use crate::error::Error;
use crate::project::ProjectName;
use crate::registry::Template;
use crate::templates::{self, MaterializedProject};
use std::path::Path;

/// Capability for prompting the user during interactive creation.
///
/// Both operations return `UserCancelled` when the user aborts.
pub trait TemplatePrompt {
    /// Present the supported templates and return the chosen one
    fn select_template(&self, options: &[Template]) -> Result<Template, Error>;

    /// Prompt for a destination name, pre-filled with `default`. The returned
    /// name has already passed validation.
    fn prompt_name(&self, default: &str) -> Result<ProjectName, Error>;
}

/// Interactive creation flow: select a template and a name, then materialize
/// the project under `parent`.
pub async fn interactive_create<P: TemplatePrompt>(
    prompt: &P,
    parent: &Path,
) -> Result<MaterializedProject, Error> {
    let template = prompt.select_template(Template::all())?;
    let name = prompt.prompt_name(crate::DEFAULT_ACTOR_NAME)?;

    templates::create(template.identifier(), name.as_str(), parent).await
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubPrompt {
        template: Option<Template>,
        name: &'static str,
    }

    impl TemplatePrompt for StubPrompt {
        fn select_template(&self, options: &[Template]) -> Result<Template, Error> {
            assert_eq!(options, Template::all());
            self.template.ok_or(Error::UserCancelled)
        }

        fn prompt_name(&self, default: &str) -> Result<ProjectName, Error> {
            assert_eq!(default, crate::DEFAULT_ACTOR_NAME);
            self.name.parse()
        }
    }

    #[tokio::test]
    async fn cancelled_selection_surfaces_user_cancelled() {
        let tmp = tempfile::tempdir().unwrap();
        let prompt = StubPrompt {
            template: None,
            name: "my-actor",
        };

        let err = interactive_create(&prompt, tmp.path()).await.unwrap_err();
        assert!(matches!(err, Error::UserCancelled));
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn selection_feeds_the_materializer() {
        let tmp = tempfile::tempdir().unwrap();
        // Existing destination proves the flow reached the materializer with
        // the selected name, without needing a network fetch.
        std::fs::create_dir(tmp.path().join("my-actor")).unwrap();

        let prompt = StubPrompt {
            template: Some(Template::Golang),
            name: "my-actor",
        };

        let err = interactive_create(&prompt, tmp.path()).await.unwrap_err();
        assert!(matches!(err, Error::DestinationExists(_)));
    }
}
