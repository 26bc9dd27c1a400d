use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

use super::helpers::find_exact;

pub fn run<S: CatalogStore>(store: &mut S, title: &str) -> Result<CmdResult> {
    let movie = find_exact(store, title)?;
    store.delete(&movie.title)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Movie '{}' has been deleted.",
        movie.title
    )));
    Ok(result.with_affected_movies(vec![movie]))
}
