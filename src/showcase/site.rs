use crate::error::Result;
use crate::showcase::filter::RepoFilter;
use crate::showcase::page::render_error_document;
use crate::showcase::Showcase;
use std::path::{Path, PathBuf};

/// Writes one page per filter value into `dir`, creating it if needed.
///
/// The pages differ only in the active control and the grid; all of them
/// come from the same in-memory repository list.
pub fn write_site(dir: &Path, showcase: &Showcase) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut view = showcase.clone();
    let mut written = Vec::new();
    for filter in RepoFilter::ALL {
        view.activate(filter);
        let path = dir.join(filter.page_name());
        std::fs::write(&path, view.document())?;
        tracing::info!(path = %path.display(), visible = view.visible().len(), "wrote page");
        written.push(path);
    }
    Ok(written)
}

/// Replaces the index page with the load-failure page and removes the
/// filtered pages left by an earlier run.
pub fn write_error_page(dir: &Path, message: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    for filter in RepoFilter::ALL {
        if filter == RepoFilter::All {
            continue;
        }
        let stale = dir.join(filter.page_name());
        match std::fs::remove_file(&stale) {
            Ok(()) => tracing::debug!(path = %stale.display(), "removed stale page"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }
    let path = dir.join(RepoFilter::All.page_name());
    std::fs::write(&path, render_error_document(message))?;
    Ok(path)
}
