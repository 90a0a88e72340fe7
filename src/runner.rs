// src/runner.rs

use std::error::Error;
use std::path::PathBuf;

use crate::{
    config::consts::DEFAULT_OUT_DIR,
    config::options::Params,
    file,
    progress::Progress,
    project, scrape,
};

/// Summary of what was produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

/// Top-level runner: fetch, extract, project, persist.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    params: &Params,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let url = params
        .url
        .as_deref()
        .ok_or("No URL to scrape (see --help)")?;

    let record = scrape::collect(url, !params.basic_only, progress)?;

    let mut value = serde_json::to_value(&record)?;
    if !params.keep_internal {
        value = project::project(&value);
    }

    let path = match &params.out {
        Some(p) => p.clone(),
        None => PathBuf::from(DEFAULT_OUT_DIR).join(file::default_filename(&record)),
    };
    file::write_json(&path, &value)?;

    Ok(RunSummary { files_written: vec![path] })
}
