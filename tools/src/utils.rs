use anyhow::{Context, Result};
use ob8::Bank;
use std::{
    io::stdin,
    path::{Path, PathBuf},
};
use tracing::{info, warn};
use walkdir::{DirEntry, WalkDir};

/// The extensions of files picked up when walking folders
pub const SYX_EXTENSIONS: &[&str] = &["syx"];

/// Walk a set of paths for files
///
/// Paths that point to a file directly are always yielded. Files found inside folders are only
/// yielded if they aren't hidden and have one of the given extensions.
pub fn iter_files<'a, I>(
    paths: I,
    recursive: bool,
    extensions: &'a [&'static str],
) -> impl Iterator<Item = PathBuf> + 'a
where
    I: IntoIterator + 'a,
    <I as IntoIterator>::Item: AsRef<Path>,
{
    paths
        .into_iter()
        .flat_map(move |path| {
            let mut walk_dir = WalkDir::new(path.as_ref());
            if !recursive {
                walk_dir = walk_dir.max_depth(1);
            }

            walk_dir
        })
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(error) => {
                warn!("{error}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry.depth() == 0 || (!is_hidden(entry) && has_any_extension(entry.path(), extensions))
        })
        .map(DirEntry::into_path)
}

/// Walk a set of paths for OB-8 dumps and decode them
///
/// Files that can't be read or decoded are reported and skipped.
pub fn load_banks<'a, I>(paths: I, recursive: bool) -> impl Iterator<Item = (PathBuf, Bank)> + 'a
where
    I: IntoIterator + 'a,
    <I as IntoIterator>::Item: AsRef<Path>,
{
    iter_files(paths, recursive, SYX_EXTENSIONS).filter_map(|path| match Bank::from_path(&path) {
        Ok(bank) => {
            info!(programs = bank.len(), "Decoded {}", path.display());
            Some((path, bank))
        }
        Err(error) => {
            let error = anyhow::Error::from(error);
            warn!("Skipping {}: {error:#}", path.display());
            None
        }
    })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn has_any_extension(path: &Path, extensions: &[&str]) -> bool {
    match path.extension() {
        Some(ext) => extensions
            .iter()
            .any(|extension| ext.eq_ignore_ascii_case(extension)),
        None => false,
    }
}

/// Ask the user for confirmation before a file gets overwritten
///
/// Returns whether it's fine to write to the path.
pub fn check_for_overwrite(path: &Path) -> Result<bool> {
    if path.exists() {
        loop {
            println!(
                "{} already exists. Do you want to overwrite it? Y/n",
                path.to_string_lossy()
            );

            let mut line = String::new();
            stdin()
                .read_line(&mut line)
                .context("Could not read terminal input")?;

            match line.trim_end() {
                "Y" => break,
                "n" => return Ok(false),
                _ => (),
            }
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions() {
        assert!(has_any_extension(Path::new("factory.syx"), SYX_EXTENSIONS));
        assert!(has_any_extension(Path::new("FACTORY.SYX"), SYX_EXTENSIONS));
        assert!(!has_any_extension(Path::new("factory.mid"), SYX_EXTENSIONS));
        assert!(!has_any_extension(Path::new("factory"), SYX_EXTENSIONS));
    }

    #[test]
    fn explicit_files_are_always_walked() {
        let fixture = concat!(env!("CARGO_MANIFEST_DIR"), "/../ob8/test/three_programs.syx");
        let files: Vec<_> = iter_files([fixture], false, &["mid"]).collect();
        assert_eq!(files, [PathBuf::from(fixture)]);
    }

    #[test]
    fn folders_are_filtered() {
        let folder = concat!(env!("CARGO_MANIFEST_DIR"), "/../ob8/test");
        assert_eq!(iter_files([folder], false, SYX_EXTENSIONS).count(), 1);
        assert_eq!(iter_files([folder], false, &["mid"]).count(), 0);
    }

    #[test]
    fn missing_files_are_skipped() {
        let fixture = concat!(env!("CARGO_MANIFEST_DIR"), "/../ob8/test/three_programs.syx");
        let banks: Vec<_> = load_banks([fixture, "does/not/exist.syx"], false).collect();

        assert_eq!(banks.len(), 1);
        assert_eq!(banks[0].1.len(), 3);
    }
}
