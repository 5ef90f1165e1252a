//! Paper sizes and board placement.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RenderedBoard;

/// Supported paper formats. Boards are always printed in landscape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperFormat {
    A0,
    #[serde(rename = "a0b")]
    A0b,
    A1,
    A2,
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
}

impl PaperFormat {
    pub const ALL: [PaperFormat; 9] = [
        PaperFormat::A0,
        PaperFormat::A0b,
        PaperFormat::A1,
        PaperFormat::A2,
        PaperFormat::A3,
        PaperFormat::A4,
        PaperFormat::A5,
        PaperFormat::Letter,
        PaperFormat::Legal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PaperFormat::A0 => "a0",
            PaperFormat::A0b => "a0b",
            PaperFormat::A1 => "a1",
            PaperFormat::A2 => "a2",
            PaperFormat::A3 => "a3",
            PaperFormat::A4 => "a4",
            PaperFormat::A5 => "a5",
            PaperFormat::Letter => "letter",
            PaperFormat::Legal => "legal",
        }
    }

    /// Portrait `(width, height)` in millimetres.
    pub fn portrait_mm(self) -> (f64, f64) {
        match self {
            PaperFormat::A0 => (841.0, 1189.0),
            PaperFormat::A0b => (910.0, 1370.0),
            PaperFormat::A1 => (594.0, 841.0),
            PaperFormat::A2 => (420.0, 594.0),
            PaperFormat::A3 => (297.0, 420.0),
            PaperFormat::A4 => (210.0, 297.0),
            PaperFormat::A5 => (148.0, 210.0),
            PaperFormat::Letter => (215.9, 279.4),
            PaperFormat::Legal => (215.9, 355.6),
        }
    }

    /// Landscape `(width, height)` in millimetres.
    pub fn landscape_mm(self) -> (f64, f64) {
        let (w, h) = self.portrait_mm();
        (h, w)
    }
}

impl fmt::Display for PaperFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown paper format '{0}' (expected a0, a0b, a1, a2, a3, a4, a5, letter or legal)")]
pub struct UnknownPaperFormat(pub String);

impl FromStr for PaperFormat {
    type Err = UnknownPaperFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        PaperFormat::ALL
            .into_iter()
            .find(|p| p.name() == lower)
            .ok_or_else(|| UnknownPaperFormat(s.to_string()))
    }
}

/// A landscape page with one board centered on it, unscaled.
///
/// Page coordinates are millimetres with the origin at the lower-left corner
/// and +y pointing up, the same orientation as board coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageLayout {
    pub width_mm: f64,
    pub height_mm: f64,
    /// Translation from board to page coordinates.
    pub offset: (f64, f64),
}

impl PageLayout {
    /// Center `board` on a landscape page of `format`.
    pub fn centered(format: PaperFormat, board: &RenderedBoard) -> Self {
        let (width_mm, height_mm) = format.landscape_mm();
        let Some(rect) = board.bounds() else {
            return Self {
                width_mm,
                height_mm,
                offset: (0.0, 0.0),
            };
        };

        if rect.width() > width_mm || rect.height() > height_mm {
            log::warn!(
                "board {} ({:.1} x {:.1} mm) does not fit on a {} page ({} x {} mm)",
                board.board_id,
                rect.width(),
                rect.height(),
                format,
                width_mm,
                height_mm
            );
        }

        let offset = (
            (width_mm - rect.width()) / 2.0 - rect.min().x,
            (height_mm - rect.height()) / 2.0 - rect.min().y,
        );
        Self {
            width_mm,
            height_mm,
            offset,
        }
    }

    /// Board millimetres to page millimetres.
    #[inline]
    pub fn to_page(&self, x: f64, y: f64) -> (f64, f64) {
        (x + self.offset.0, y + self.offset.1)
    }
}
