//! File discovery for finding convertible images in the input folder.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ProcessingConfig;

/// Discovers convertible image files directly inside a folder.
pub struct FileDiscovery {
    config: ProcessingConfig,
}

/// Information about a discovered file.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// Full path to the file
    pub path: PathBuf,
    /// File name inside the input folder
    pub file_name: String,
}

impl DiscoveredFile {
    /// Name of the JPEG this file converts to: last extension swapped for `.jpg`.
    pub fn output_name(&self) -> String {
        output_name_for(&self.file_name)
    }
}

impl FileDiscovery {
    /// Create a new file discovery instance.
    pub fn new(config: ProcessingConfig) -> Self {
        Self { config }
    }

    /// List supported files directly inside `dir`, sorted by file name.
    ///
    /// Subdirectories are not descended into and entries that cannot be read
    /// are skipped.
    pub fn discover(&self, dir: &Path) -> Vec<DiscoveredFile> {
        let mut files = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() || !self.is_supported(entry.path()) {
                continue;
            }
            let Some(file_name) = entry.file_name().to_str() else {
                tracing::warn!("Skipping non-UTF-8 file name: {:?}", entry.path());
                continue;
            };
            files.push(DiscoveredFile {
                path: entry.path().to_path_buf(),
                file_name: file_name.to_string(),
            });
        }

        files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        warn_on_collisions(&files);
        files
    }

    /// Check if a file name ends in `.<format>` for a supported format.
    ///
    /// Matches on the name suffix rather than `Path::extension`, so a file
    /// named just `.webp` is selected too.
    fn is_supported(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        let name = name.to_ascii_lowercase();
        self.config.supported_formats.iter().any(|fmt| {
            let ext = fmt.trim_start_matches('.').to_ascii_lowercase();
            !ext.is_empty()
                && name
                    .strip_suffix(ext.as_str())
                    .is_some_and(|stem| stem.ends_with('.'))
        })
    }
}

/// Output file name for an input file name.
///
/// A name with no stem, such as `.webp`, keeps it and gains `.jpg`.
pub fn output_name_for(file_name: &str) -> String {
    Path::new(file_name)
        .with_extension("jpg")
        .to_string_lossy()
        .into_owned()
}

/// Inputs sharing a basename write the same output; the last one to finish wins.
///
/// Outputs are renamed into place whole, so the surviving file is always one
/// complete JPEG.
fn warn_on_collisions(files: &[DiscoveredFile]) {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for file in files {
        let output = file.output_name();
        if let Some(previous) = seen.insert(output.clone(), file.file_name.as_str()) {
            tracing::warn!(
                "{} and {} both convert to {}; only one will be kept",
                previous,
                file.file_name,
                output
            );
        }
    }
}
