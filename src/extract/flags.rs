// src/extract/flags.rs
use crate::config::FlagMode;
use crate::config::consts::{FLAG_EXTENSIONS, SITE_ORIGIN};

/// Flag image `src` rendered per `mode`. Absent or blank → `""`.
pub fn resolve_flag(src: Option<&str>, mode: FlagMode) -> String {
    let Some(src) = src.map(str::trim).filter(|s| !s.is_empty()) else {
        return s!();
    };
    match mode {
        FlagMode::Url => flag_url(src),
        FlagMode::CountryCode => country_code(src),
    }
}

/// Absolute URL for an image path on the draw site.
pub fn flag_url(src: &str) -> String {
    if src.starts_with("http://") || src.starts_with("https://") {
        return s!(src);
    }
    if let Some(rest) = src.strip_prefix("//") {
        return join!("https://", rest);
    }
    let path = src.strip_prefix("..").unwrap_or(src);
    if path.starts_with('/') {
        join!(SITE_ORIGIN, path)
    } else {
        join!(SITE_ORIGIN, "/", path)
    }
}

/// Bare country code: last path segment minus a known image extension.
pub fn country_code(src: &str) -> String {
    let path = src.split(['?', '#']).next().unwrap_or(src);
    let file = path.rsplit('/').next().unwrap_or(path);
    let lower = file.to_ascii_lowercase();
    for ext in FLAG_EXTENSIONS {
        if lower.ends_with(ext) {
            return s!(&file[..file.len() - ext.len()]);
        }
    }
    s!(file)
}
