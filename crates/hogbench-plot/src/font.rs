//! Font discovery and registration.
//!
//! Chart text is laid out with `ab_glyph`, which only knows fonts that were
//! registered explicitly. The font is read once per process.

use hogbench_core::{Error, Result};
use plotters::style::{register_font, FontStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;
use walkdir::WalkDir;

/// Family name every chart element asks for.
pub const FONT_FAMILY: &str = "sans-serif";

const FONT_DIRS: &[&str] = &[
    "/usr/share/fonts",
    "/usr/local/share/fonts",
    "/Library/Fonts",
    "/System/Library/Fonts",
    "C:\\Windows\\Fonts",
];

/// Acceptable font files, most preferred first.
const PREFERRED_FONTS: &[&str] = &[
    "DejaVuSans.ttf",
    "LiberationSans-Regular.ttf",
    "NotoSans-Regular.ttf",
    "FreeSans.ttf",
    "Arial.ttf",
    "Roboto-Regular.ttf",
    "Ubuntu-R.ttf",
];

static REGISTERED: OnceLock<PathBuf> = OnceLock::new();

/// Search the well-known system font directories.
pub fn discover_font() -> Option<PathBuf> {
    discover_in(FONT_DIRS.iter().map(Path::new))
}

/// Return the most preferred font found anywhere below `dirs`.
pub fn discover_in<'a>(dirs: impl IntoIterator<Item = &'a Path>) -> Option<PathBuf> {
    let mut best: Option<(usize, PathBuf)> = None;

    for dir in dirs {
        for entry in WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            let Some(rank) = PREFERRED_FONTS
                .iter()
                .position(|f| f.eq_ignore_ascii_case(name))
            else {
                continue;
            };
            if best.as_ref().map_or(true, |(r, _)| rank < *r) {
                best = Some((rank, entry.into_path()));
            }
        }
    }

    best.map(|(_, path)| path)
}

/// Register the chart font, using `explicit` when given.
///
/// Returns the path of the font in use. Only the first successful call
/// registers anything; later calls return the same path.
pub fn ensure_registered(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = REGISTERED.get() {
        return Ok(path.clone());
    }

    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => discover_font().ok_or_else(|| {
            Error::Font("no usable system font found; set font_path or pass --font".to_string())
        })?,
    };

    let bytes = fs::read(&path)
        .map_err(|e| Error::Font(format!("cannot read {}: {}", path.display(), e)))?;
    // plotters keeps registered fonts for the lifetime of the process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    for style in [FontStyle::Normal, FontStyle::Bold] {
        register_font(FONT_FAMILY, style, bytes)
            .map_err(|_| Error::Font(format!("{} is not a usable font", path.display())))?;
    }

    debug!("Registered chart font {}", path.display());
    Ok(REGISTERED.get_or_init(|| path).clone())
}
