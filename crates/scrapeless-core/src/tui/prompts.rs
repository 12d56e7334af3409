//! Charm-style prompts for template and project-name selection

use crate::error::Error;
use crate::project::ProjectName;
use crate::prompt::TemplatePrompt;
use crate::registry::{self, Template};

/// Help text shown for the project-name input
const NAME_HINT: &str = "lowercase letters, hyphens and underscores only";

/// `TemplatePrompt` implementation backed by cliclack
pub struct CliclackPrompt;

impl CliclackPrompt {
    /// Map a prompt I/O error: an interrupted prompt (Esc / Ctrl+C) is a
    /// cancellation, anything else is a real terminal failure.
    fn map_prompt_err(e: std::io::Error) -> Error {
        if e.kind() == std::io::ErrorKind::Interrupted {
            Error::UserCancelled
        } else {
            Error::Io(e)
        }
    }
}

impl TemplatePrompt for CliclackPrompt {
    fn select_template(&self, options: &[Template]) -> Result<Template, Error> {
        let mut select = cliclack::select("Select a template").initial_value(Template::Golang);
        for template in options {
            let entry = registry::entry(*template);
            select = select.item(
                *template,
                template.identifier(),
                entry.language.tag(),
            );
        }
        select.interact().map_err(Self::map_prompt_err)
    }

    fn prompt_name(&self, default: &str) -> Result<ProjectName, Error> {
        let input: String = cliclack::input("Enter the name of the project")
            .default_input(default)
            .validate(|value: &String| {
                if ProjectName::is_valid(value) {
                    Ok(())
                } else {
                    Err(NAME_HINT)
                }
            })
            .interact()
            .map_err(Self::map_prompt_err)?;

        input.parse()
    }
}
