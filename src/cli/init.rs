//! Initialize a semver project
//!
//! Creates the version file after asking for a starting version. The project
//! directory must be a git checkout unless `[init] require-checkout = false`.

use crate::cli::args::GlobalOptions;
use crate::cli::common::{self, Context};
use crate::error::SemverError;
use crate::prompt::{LinePrompt, Prompt};
use crate::vcs;
use crate::version::Version;
use std::path::Path;

/// Result of init command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// A new version file was written
    Created(Version),
    /// An existing version file was replaced
    Overwrote(Version),
    /// The user chose to keep the existing file
    Declined,
}

/// Run the init command
///
/// # Arguments
/// * `force` - Overwrite an existing version file without asking
/// * `initial` - Starting version; prompts when `None`
///
/// # Returns
///
/// Exit code:
/// - 0: Success, or the user kept the existing file
/// - 1: Not a git checkout, I/O error, or input closed
/// - 2: Invalid `--initial` version
pub fn run_init(options: &GlobalOptions, force: bool, initial: Option<&str>) -> i32 {
    common::run(options, |ctx, _out| {
        let mut prompt = LinePrompt::stdio();
        run_init_inner(ctx, &mut prompt, force, initial).map(|_| ())
    })
}

/// Internal implementation of init command
pub fn run_init_inner(
    ctx: &Context,
    prompt: &mut dyn Prompt,
    force: bool,
    initial: Option<&str>,
) -> Result<InitOutcome, SemverError> {
    if ctx.config.init.require_checkout && !vcs::is_checkout(&ctx.dir) {
        return Err(SemverError::NotACheckout {
            dir: ctx.dir.clone(),
        });
    }

    // Validate the flag before asking anything
    let initial = initial.map(Version::parse).transpose()?;
    let label = common::file_label(&ctx.store);

    let existed = ctx.store.exists();
    if existed && !force {
        if !confirm_overwrite(prompt, &label)? {
            prompt.say(&format!("Please delete the {label} file and restart"))?;
            return Ok(InitOutcome::Declined);
        }
        prompt.say(&format!("Overwriting {label} file."))?;
    }

    prompt.say(&format!(
        "Creating Semver for project: {}",
        project_name(&ctx.dir)
    ))?;

    let version = match initial {
        Some(version) => version,
        None => ask_version(prompt, &ctx.config.initial_version()?)?,
    };

    prompt.say(&format!(
        "Creating {label} file with starting version {version}"
    ))?;
    ctx.store.write(&version)?;

    Ok(if existed {
        InitOutcome::Overwrote(version)
    } else {
        InitOutcome::Created(version)
    })
}

/// Asks whether to overwrite until the answer is yes or no
///
/// An empty answer means yes.
fn confirm_overwrite(prompt: &mut dyn Prompt, label: &str) -> Result<bool, SemverError> {
    let question = format!("{label} file was found do you want to overwrite it [Y/n]? ");
    loop {
        let answer = prompt
            .prompt_line(&question)?
            .ok_or(SemverError::PromptClosed)?;

        match answer.trim().to_ascii_lowercase().as_str() {
            "" | "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            other => prompt.say(&format!("I don't understand '{other}'. Please answer y or n."))?,
        }
    }
}

/// Asks for a starting version until a valid one is given
///
/// An empty answer takes `default`.
fn ask_version(prompt: &mut dyn Prompt, default: &Version) -> Result<Version, SemverError> {
    let question = format!("Starting Version [{default}]: ");
    loop {
        let answer = prompt
            .prompt_line(&question)?
            .ok_or(SemverError::PromptClosed)?;

        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(default.clone());
        }

        match Version::parse(answer) {
            Ok(version) => return Ok(version),
            Err(e) => {
                tracing::debug!(error = %e, "rejected starting version");
                prompt.say(&format!(
                    "\"{answer}\" is an invalid semver format. Must be in the form of MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]."
                ))?;
            }
        }
    }
}

fn project_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}
