//! JSON design configs and on-disk output.

use std::fs;
use std::path::{Path, PathBuf};

use deltille_tags::CodeTable;
use serde::{Deserialize, Serialize};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::designs::DesignError;
use crate::raster::{check_dpi, InvalidDpi};
use crate::{
    adjust_tag_id_offsets, render_design, BoardDescription, BoardSpec, PageLayout, PaperFormat,
    RasterPage, RenderError, SvgPage,
};

#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Png(#[from] png::EncodingError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Design(#[from] DesignError),
    #[error(transparent)]
    Dpi(#[from] InvalidDpi),
}

fn default_adjust_offsets() -> bool {
    true
}

/// A user-defined design stored as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub boards: Vec<BoardSpec>,
    /// Recompute `tag_id_offset` of every board on load.
    #[serde(default = "default_adjust_offsets")]
    pub adjust_offsets: bool,
}

impl DesignConfig {
    pub fn new(name: impl Into<String>, boards: Vec<BoardSpec>) -> Self {
        Self {
            name: Some(name.into()),
            boards,
            adjust_offsets: true,
        }
    }

    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, OutputError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), OutputError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Boards ready for rendering.
    pub fn into_boards(self) -> Vec<BoardSpec> {
        let mut boards = self.boards;
        if self.adjust_offsets {
            adjust_tag_id_offsets(&mut boards);
        }
        boards
    }
}

/// How a design is written to disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputOptions {
    pub paper: PaperFormat,
    /// Added to every board's tag ids.
    pub tag_id_offset: u32,
    /// Also write a grayscale PNG preview of every page at this resolution.
    pub png_dpi: Option<f64>,
    /// Also write a JSON report next to the description file.
    pub json: bool,
}

/// JSON report of a written design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignReport {
    pub paper: PaperFormat,
    pub tag_id_offset: u32,
    pub boards: Vec<BoardDescription>,
}

/// Paths produced by [`write_design_outputs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrittenFiles {
    pub pages: Vec<PathBuf>,
    pub previews: Vec<PathBuf>,
    pub description: PathBuf,
    pub report: Option<PathBuf>,
}

struct RenderedPage {
    svg: String,
    png: Option<Vec<u8>>,
}

fn sibling(output: &Path, suffix: &str) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pattern".to_string());
    output.with_file_name(format!("{stem}{suffix}"))
}

/// Render `boards` and write one SVG page per board plus the `.dsc` file.
///
/// For `output = dir/pattern.svg` this writes `dir/pattern-<board_id>.svg`,
/// `dir/pattern.dsc` and, when requested, `dir/pattern-<board_id>.png` and
/// `dir/pattern.json`. Every board is rendered and encoded before the first
/// file is created, so a failing board leaves nothing behind.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(table, boards, output, opts), fields(boards = boards.len()))
)]
pub fn write_design_outputs(
    table: &CodeTable,
    boards: &[BoardSpec],
    output: impl AsRef<Path>,
    opts: &OutputOptions,
) -> Result<WrittenFiles, OutputError> {
    let output = output.as_ref();
    if let Some(dpi) = opts.png_dpi {
        check_dpi(dpi)?;
    }
    let rendered = render_design(table, boards, opts.tag_id_offset)?;

    let mut pages = Vec::with_capacity(rendered.len());
    let mut description = String::new();
    for board in &rendered {
        let layout = PageLayout::centered(opts.paper, board);
        let mut svg = SvgPage::new(layout);
        board.draw(&mut svg);
        let png = match opts.png_dpi {
            Some(dpi) => {
                let mut raster = RasterPage::new(layout, dpi)?;
                board.draw(&mut raster);
                Some(raster.encode_png()?)
            }
            None => None,
        };
        pages.push(RenderedPage {
            svg: svg.finish(),
            png,
        });
        description.push_str(&board.description_text());
    }
    let report = if opts.json {
        Some(serde_json::to_string_pretty(&DesignReport {
            paper: opts.paper,
            tag_id_offset: opts.tag_id_offset,
            boards: rendered.iter().map(|b| b.description.clone()).collect(),
        })?)
    } else {
        None
    };

    let mut written = WrittenFiles::default();
    for (board_id, page) in pages.into_iter().enumerate() {
        let path = sibling(output, &format!("-{board_id}.svg"));
        fs::write(&path, page.svg)?;
        written.pages.push(path);
        if let Some(png) = page.png {
            let path = sibling(output, &format!("-{board_id}.png"));
            fs::write(&path, png)?;
            written.previews.push(path);
        }
    }
    written.description = sibling(output, ".dsc");
    fs::write(&written.description, description)?;
    if let Some(report) = report {
        let path = sibling(output, ".json");
        fs::write(&path, report)?;
        written.report = Some(path);
    }

    log::info!(
        "wrote {} page(s) and {}",
        written.pages.len(),
        written.description.display()
    );
    Ok(written)
}
