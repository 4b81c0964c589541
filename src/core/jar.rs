use crate::utils::error::{PrepError, Result};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Seek, Write};
use std::path::{Path, PathBuf};
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

// Builds a reproducible jar: fixed timestamps and permissions so the output
// depends only on file contents and relative paths, never on the host.
// The archive is written to a sibling temp path and renamed on success so a
// failed build cannot leave a plausible-looking jar behind.
pub fn build_jar(output: &Path, dirs: &[PathBuf]) -> Result<()> {
    tracing::debug!("Building jar {} from {} directories", output.display(), dirs.len());
    let tmp = tmp_path(output);
    if let Err(e) = write_archive(&tmp, dirs) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, output)?;
    Ok(())
}

fn tmp_path(output: &Path) -> PathBuf {
    let mut name = output
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    output.with_file_name(name)
}

fn write_archive(path: &Path, dirs: &[PathBuf]) -> Result<()> {
    let file = File::create(path)?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let mut written = HashSet::new();

    for dir in dirs {
        add_tree(&mut zip, &mut written, dir, "")?;
    }

    let mut inner = zip.finish()?;
    inner.flush()?;
    Ok(())
}

fn add_tree<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    written: &mut HashSet<String>,
    dir: &Path,
    prefix: &str,
) -> Result<()> {
    let mut entries = fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
    // read_dir order is filesystem-dependent; sort for reproducibility
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type()?;
        let name = if prefix.is_empty() {
            entry.file_name().to_string_lossy().into_owned()
        } else {
            format!("{}/{}", prefix, entry.file_name().to_string_lossy())
        };

        if file_type.is_dir() {
            // Duplicate directories across input trees are fine
            let dir_name = format!("{}/", name);
            if written.insert(dir_name.clone()) {
                zip.add_directory(dir_name, dir_options())?;
            }
            add_tree(zip, written, &path, &name)?;
        } else if file_type.is_file() {
            if !written.insert(name.clone()) {
                return Err(PrepError::DuplicateJarEntry { path: name });
            }
            zip.start_file(name.as_str(), file_options())?;
            zip.write_all(&fs::read(&path)?)?;
        } else {
            return Err(PrepError::UnexpectedEntryType {
                path: path.display().to_string(),
            });
        }
    }
    Ok(())
}

// Zip's timestamp floor is 1 Jan 1980, the DateTime default
fn file_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default())
        .unix_permissions(0o664)
}

fn dir_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .last_modified_time(zip::DateTime::default())
        .unix_permissions(0o775)
}
