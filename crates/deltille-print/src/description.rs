//! Line-oriented board description (`.dsc`) records.
//!
//! ```text
//! <board_id>,<cols-1>,<rows-1>,<edge_length>
//! <tag_family>,<tag_border>
//! <tag_id>,<x_index>,<y_index>,<x_mm>,<y_mm>,0      one line per valid corner
//! ```
//!
//! Corner indices and coordinates are relative to lattice vertex `(1, 1)`.
//! Corners not owned by any marker carry tag id `-1`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Shortest round-trip decimal form, always with a fractional part (`20.0`).
pub fn format_real(v: f64) -> String {
    format!("{v:?}")
}

/// One valid calibration corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CornerRecord {
    /// Marker owning the corner; `None` is written as `-1`.
    pub tag_id: Option<u32>,
    /// Column index relative to vertex `(1, 1)`.
    pub x_index: i32,
    /// Row index relative to vertex `(1, 1)`.
    pub y_index: i32,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl fmt::Display for CornerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag_id.map_or(-1, i64::from);
        write!(
            f,
            "{},{},{},{},{},0",
            tag,
            self.x_index,
            self.y_index,
            format_real(self.x),
            format_real(self.y)
        )
    }
}

/// Everything written to the description file for one board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardDescription {
    pub board_id: usize,
    /// `cols - 1` of the cell grid.
    pub max_x_index: usize,
    /// `rows - 1` of the cell grid.
    pub max_y_index: usize,
    pub edge_length: f64,
    pub tag_family: String,
    pub tag_border: f64,
    pub corners: Vec<CornerRecord>,
}

impl BoardDescription {
    /// Number of corners owned by a marker.
    pub fn tagged_corner_count(&self) -> usize {
        self.corners.iter().filter(|c| c.tag_id.is_some()).count()
    }
}

impl fmt::Display for BoardDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{},{},{},{}",
            self.board_id,
            self.max_x_index,
            self.max_y_index,
            format_real(self.edge_length)
        )?;
        writeln!(f, "{},{}", self.tag_family, format_real(self.tag_border))?;
        for corner in &self.corners {
            writeln!(f, "{corner}")?;
        }
        Ok(())
    }
}

/// Description text that could not be parsed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptionError {
    #[error("line {line}: expected {expected} comma-separated fields, found {found}")]
    FieldCount {
        line: usize,
        expected: &'static str,
        found: usize,
    },
    #[error("line {line}: cannot parse '{value}'")]
    Value { line: usize, value: String },
    #[error("line {line}: corner record before any board header")]
    CornerBeforeHeader { line: usize },
    #[error("line {line}: board header is not followed by a family line")]
    MissingFamily { line: usize },
}

fn field<T: FromStr>(line: usize, raw: &str) -> Result<T, DescriptionError> {
    raw.trim().parse().map_err(|_| DescriptionError::Value {
        line,
        value: raw.to_string(),
    })
}

fn tag_id(line: usize, raw: &str) -> Result<Option<u32>, DescriptionError> {
    let id: i64 = field(line, raw)?;
    match id {
        -1 => Ok(None),
        id => u32::try_from(id).map(Some).map_err(|_| DescriptionError::Value {
            line,
            value: raw.to_string(),
        }),
    }
}

/// Parse a (possibly multi-board) description file.
///
/// Blank lines are ignored; line numbers in errors are 1-based.
pub fn parse_descriptions(text: &str) -> Result<Vec<BoardDescription>, DescriptionError> {
    let mut boards: Vec<BoardDescription> = Vec::new();
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, l)| (idx + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    while let Some((line, raw)) = lines.next() {
        let fields: Vec<&str> = raw.split(',').collect();
        match fields.len() {
            4 => {
                let (family_line, family_raw) =
                    lines.next().ok_or(DescriptionError::MissingFamily { line })?;
                let family: Vec<&str> = family_raw.split(',').collect();
                if family.len() != 2 {
                    return Err(DescriptionError::FieldCount {
                        line: family_line,
                        expected: "2",
                        found: family.len(),
                    });
                }
                boards.push(BoardDescription {
                    board_id: field(line, fields[0])?,
                    max_x_index: field(line, fields[1])?,
                    max_y_index: field(line, fields[2])?,
                    edge_length: field(line, fields[3])?,
                    tag_family: family[0].trim().to_string(),
                    tag_border: field(family_line, family[1])?,
                    corners: Vec::new(),
                });
            }
            6 => {
                let board = boards
                    .last_mut()
                    .ok_or(DescriptionError::CornerBeforeHeader { line })?;
                board.corners.push(CornerRecord {
                    tag_id: tag_id(line, fields[0])?,
                    x_index: field(line, fields[1])?,
                    y_index: field(line, fields[2])?,
                    x: field(line, fields[3])?,
                    y: field(line, fields[4])?,
                    z: field(line, fields[5])?,
                });
            }
            found => {
                return Err(DescriptionError::FieldCount {
                    line,
                    expected: "4 or 6",
                    found,
                })
            }
        }
    }
    Ok(boards)
}
