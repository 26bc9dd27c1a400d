use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::store::CatalogStore;
use crate::website::PageTemplate;
use std::fs;
use std::path::Path;
use tracing::info;

/// Renders every movie into `template_path` and writes the page to `output_path`.
pub fn run<S: CatalogStore>(
    store: &S,
    template_path: &Path,
    output_path: &Path,
    page_title: &str,
) -> Result<CmdResult> {
    let source = fs::read_to_string(template_path).map_err(|e| {
        CatalogError::Template(format!(
            "cannot read template {}: {}",
            template_path.display(),
            e
        ))
    })?;
    let template = PageTemplate::parse(&source)?;

    let movies = store.list()?;
    let page = template.render(&movies, page_title);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(CatalogError::Io)?;
        }
    }
    fs::write(output_path, page).map_err(CatalogError::Io)?;
    info!(path = %output_path.display(), movies = movies.len(), "website written");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Website was generated successfully."));
    Ok(result
        .with_listed_movies(movies)
        .with_output_path(output_path.to_path_buf()))
}
