//! Template materialization with stage-then-rename failure atomicity
//!
//! Archives are extracted into a hidden staging directory next to the
//! destination, then renamed into place. A fetch or extraction failure removes
//! the staging directory; a half-populated tree is never visible under the
//! final project name.

use crate::error::Error;
use crate::project::ProjectName;
use crate::registry::{self, Language, Template};
use crate::templates::fetcher::TemplateFetcher;
use colored::Colorize;
use std::fs;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::ZipArchive;

/// User agent sent when fetching template archives
const USER_AGENT: &str = "scrapeless-cli";

/// A project directory created from a template
#[derive(Debug, Clone)]
pub struct MaterializedProject {
    /// Path of the created directory
    pub path: PathBuf,
    /// Implementation language of the template, from the registry
    pub language: Language,
    /// Number of files written
    pub files: usize,
}

/// Create a new actor project from a template.
///
/// `template_name` must be one of the registry's identifiers and `destination`
/// must satisfy the project-name rule; both are checked before any filesystem
/// or network access. The project is created at `parent/{destination}` and
/// must not already exist.
pub async fn create(
    template_name: &str,
    destination: &str,
    parent: &Path,
) -> Result<MaterializedProject, Error> {
    let template: Template = template_name.parse()?;
    let name: ProjectName = destination.parse()?;
    let entry = registry::entry(template);

    let dest = parent.join(name.as_str());
    if dest.exists() {
        return Err(Error::DestinationExists(dest));
    }

    let url = entry.source_url()?;
    println!(
        "{} {} {}",
        "Fetching".cyan().bold(),
        template.identifier(),
        format!("({})", url).dimmed()
    );

    let bytes = TemplateFetcher::new(USER_AGENT)
        .fetch_archive(&url)
        .await?;

    let files = materialize_archive(&bytes, &dest).map_err(|e| match e {
        // Staging/extraction failures of fetched data carry the source URL
        Error::Io(io_err) => Error::FetchFailed {
            url: url.to_string(),
            source: Box::new(io_err),
        },
        other => other,
    })?;

    Ok(MaterializedProject {
        path: dest,
        language: entry.language,
        files,
    })
}

/// Extract `bytes` (a zip archive) into `dest` via a staging directory.
///
/// The archive's single top-level directory, if any, is stripped so the
/// project's files land directly under `dest`. Returns the number of files in
/// the materialized tree.
pub fn materialize_archive(bytes: &[u8], dest: &Path) -> Result<usize, Error> {
    if dest.exists() {
        return Err(Error::DestinationExists(dest.to_path_buf()));
    }

    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let dir_name = dest
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("template");
    let staging = parent.join(format!(".{}.staging-{}", dir_name, std::process::id()));

    // Leftover staging from an earlier interrupted invocation
    if staging.exists() {
        fs::remove_dir_all(&staging)?;
    }
    fs::create_dir_all(&staging)?;

    if let Err(e) = extract_archive(bytes, &staging) {
        let _ = fs::remove_dir_all(&staging);
        return Err(Error::Io(e));
    }

    if let Err(e) = fs::rename(&staging, dest) {
        let _ = fs::remove_dir_all(&staging);
        return Err(Error::Io(e));
    }

    Ok(file_count(dest))
}

/// Extract all file entries of the archive into `staging`
fn extract_archive(bytes: &[u8], staging: &Path) -> io::Result<()> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(io::Error::from)?;
    let prefix = common_top_level_dir(&mut archive)?;

    for i in 0..archive.len() {
        let mut file = archive.by_index(i).map_err(io::Error::from)?;
        if file.is_dir() || file.enclosed_name().is_none() {
            continue;
        }

        let full_path = file.name().to_string();
        let relative = match &prefix {
            Some(p) if full_path.starts_with(p.as_str()) => &full_path[p.len()..],
            _ => full_path.as_str(),
        };
        if relative.is_empty() {
            continue;
        }

        let target = staging.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)?;
        fs::write(&target, &contents)?;
    }

    Ok(())
}

/// The shared top-level directory of all archive entries (e.g. GitHub branch
/// downloads wrap everything in `{repo}-{branch}/`), or None when entries sit
/// at the archive root.
fn common_top_level_dir(archive: &mut ZipArchive<Cursor<&[u8]>>) -> io::Result<Option<String>> {
    let mut prefix: Option<String> = None;
    for i in 0..archive.len() {
        let file = archive.by_index(i).map_err(io::Error::from)?;
        let name = file.name();
        let top = match name.split_once('/') {
            Some((top, _)) => top,
            // An entry with no directory component: nothing to strip
            None => return Ok(None),
        };
        match &prefix {
            None => prefix = Some(format!("{}/", top)),
            Some(p) if p.trim_end_matches('/') == top => {}
            Some(_) => return Ok(None),
        }
    }
    Ok(prefix)
}

/// Number of files in the materialized tree
fn file_count(path: &Path) -> usize {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    /// Build a fixture archive shaped like a GitHub branch download
    fn fixture_archive(top_dir: Option<&str>, files: &[(&str, &str)]) -> Vec<u8> {
        let mut buffer = Vec::new();
        {
            let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
            let options =
                SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
            for (path, contents) in files {
                let entry_path = match top_dir {
                    Some(dir) => format!("{}/{}", dir, path),
                    None => path.to_string(),
                };
                zip.start_file(entry_path.as_str(), options).unwrap();
                zip.write_all(contents.as_bytes()).unwrap();
            }
            zip.finish().unwrap();
        }
        buffer
    }

    fn go_fixture() -> Vec<u8> {
        fixture_archive(
            Some("actor-template-go-main"),
            &[
                ("go.mod", "module actor\n\ngo 1.22\n"),
                ("main.go", "package main\n\nfunc main() {}\n"),
                ("internal/handler/handler.go", "package handler\n"),
            ],
        )
    }

    #[test]
    fn materialize_strips_archive_top_level_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("my-actor");

        let files = materialize_archive(&go_fixture(), &dest).unwrap();

        assert_eq!(files, 3);
        assert!(dest.join("go.mod").is_file());
        assert!(dest.join("main.go").is_file());
        assert!(dest.join("internal/handler/handler.go").is_file());
        assert!(!dest.join("actor-template-go-main").exists());
    }

    #[test]
    fn materialize_without_wrapper_dir_extracts_as_is() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("my-actor");

        let archive = fixture_archive(None, &[("main.py", "print('hi')\n")]);
        materialize_archive(&archive, &dest).unwrap();

        assert!(dest.join("main.py").is_file());
    }

    #[test]
    fn materialize_refuses_existing_destination() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("my-actor");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("precious.txt"), "keep me").unwrap();

        let err = materialize_archive(&go_fixture(), &dest).unwrap_err();
        assert!(matches!(err, Error::DestinationExists(_)));

        // Pre-existing contents untouched
        assert_eq!(
            fs::read_to_string(dest.join("precious.txt")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn corrupt_archive_leaves_nothing_at_destination() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("my-actor");

        let err = materialize_archive(b"not a zip archive", &dest).unwrap_err();
        assert!(matches!(err, Error::Io(_)));

        assert!(!dest.exists());
        // No staging leftovers either
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn create_rejects_unknown_template_without_touching_fs() {
        let tmp = tempfile::tempdir().unwrap();

        let err = create("unknown-x", "foo", tmp.path()).await.unwrap_err();
        match err {
            Error::UnknownTemplate { name, supported } => {
                assert_eq!(name, "unknown-x");
                assert!(supported.contains(&"golang-template".to_string()));
            }
            other => panic!("expected UnknownTemplate, got {:?}", other),
        }

        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn create_rejects_invalid_name_without_touching_fs() {
        let tmp = tempfile::tempdir().unwrap();

        let err = create("golang-template", "My Actor", tmp.path())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidName(_)));

        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn create_refuses_existing_destination_before_fetching() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("my-actor");
        fs::create_dir(&dest).unwrap();

        let err = create("golang-template", "my-actor", tmp.path())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::DestinationExists(_)));
        assert!(dest.is_dir());
    }
}
