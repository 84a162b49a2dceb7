// src/scrape.rs
// Fetch + extract. The only I/O in a request is `fetch`; everything after is pure.

use std::{fs, path::PathBuf, time::Instant};

use crate::{
    config::{consts::draw_url, ExtractOptions, ScoreRequest},
    core::net,
    error::Result,
    extract::{self, Report},
};

/// Where the draw page comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    Tournament(String),
    File(PathBuf),
}

impl Source {
    pub fn describe(&self) -> String {
        match self {
            Source::Url(url) => url.clone(),
            Source::Tournament(id) => draw_url(id),
            Source::File(path) => path.display().to_string(),
        }
    }
}

/// Raw page text for `source`.
pub fn fetch(source: &Source) -> Result<String> {
    let t = Instant::now();
    let html = match source {
        Source::Url(url) => net::http_get(url)?,
        Source::Tournament(id) => net::http_get(&draw_url(id))?,
        Source::File(path) => fs::read_to_string(path)?,
    };
    logd!("Fetch {} ({} bytes) in {:?}", source.describe(), html.len(), t.elapsed());
    Ok(html)
}

/// Top-level: validate, fetch, extract.
pub fn run(source: &Source, request: &ScoreRequest, options: &ExtractOptions) -> Result<Report> {
    // input errors never cost a fetch
    request.validate()?;

    let html = fetch(source)?;
    let t = Instant::now();
    let out = extract::extract(&html, request, options);
    logd!("Extract {} in {:?}", source.describe(), t.elapsed());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn tournament_source_expands_to_draw_url() {
        let src = Source::Tournament(s!("1334"));
        assert_eq!(
            src.describe(),
            "https://www.epbf.com/tournaments/eurotour/id/1334/draw-results/"
        );
    }

    #[test]
    fn missing_ids_fail_before_fetch() {
        // an unreadable path proves nothing was fetched
        let src = Source::File(PathBuf::from("/nonexistent/draw.html"));
        let err = run(&src, &ScoreRequest::default(), &ExtractOptions::default()).unwrap_err();
        assert!(matches!(err, Error::MissingParam(_)));
    }

    #[test]
    fn unreadable_file_is_io_error() {
        let src = Source::File(PathBuf::from("/nonexistent/draw.html"));
        let req = ScoreRequest::new(Some(s!("SE20")), None);
        let err = run(&src, &req, &ExtractOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
