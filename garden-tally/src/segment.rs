use std::fmt;

use miette::Diagnostic;
use thiserror::Error;
use tracing::debug;

mod constants {
    /// Characters that draw garden walls; every other character is open
    /// ground, including spaces, letters, and name parentheses.
    pub const WALL_CHARS: [char; 5] = ['\\', '|', '-', '/', '+'];

    /// Neighbor offsets for 4-connectivity. Down, Right, Up, Left.
    pub const DELTAS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
}

use constants::*;

#[derive(Debug, Error, Diagnostic)]
#[error("map has no rows")]
#[diagnostic(
    code(garden_tally::empty_map),
    help("the map file must contain at least one line of text")
)]
pub struct EmptyMapError;

/// Wall/open classification of the map. Rows are padded to the widest
/// line; padded cells are walls so no path leaves a short row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: Vec<Vec<bool>>,
    xdim: usize,
    ydim: usize,
}

impl OccupancyGrid {
    pub fn from_lines(lines: &[&str]) -> Result<Self, EmptyMapError> {
        if lines.is_empty() {
            return Err(EmptyMapError);
        }

        let xdim = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let ydim = lines.len();

        let cells = lines
            .iter()
            .map(|line| {
                let mut row = line
                    .chars()
                    .map(|ch| !WALL_CHARS.contains(&ch))
                    .collect::<Vec<_>>();
                row.resize(xdim, false);
                row
            })
            .collect();

        Ok(Self { cells, xdim, ydim })
    }

    pub fn is_open(&self, x: usize, y: usize) -> bool {
        self.cells[y][x]
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.xdim, self.ydim)
    }
}

/// Region labels for every cell: 0 on walls, `1..=region_count` on open
/// cells, numbered densely in row-major discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelGrid {
    labels: Vec<Vec<u32>>,
    region_count: u32,
}

impl LabelGrid {
    pub fn label(&self, x: usize, y: usize) -> u32 {
        self.labels[y][x]
    }

    pub fn row(&self, y: usize) -> &[u32] {
        &self.labels[y]
    }

    pub fn region_count(&self) -> u32 {
        self.region_count
    }
}

impl fmt::Display for LabelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.labels {
            for &label in row {
                match label {
                    0 => write!(f, ".")?,
                    n => write!(f, "{}", n % 10)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Splits the map into 4-connected regions of open cells.
///
/// Diagonal adjacency never joins two cells, so gardens that touch only
/// at a wall corner stay separate regions.
#[tracing::instrument(skip(lines))]
pub fn segment(lines: &[&str]) -> Result<LabelGrid, EmptyMapError> {
    let occupancy = OccupancyGrid::from_lines(lines)?;
    let (xdim, ydim) = occupancy.dimensions();
    debug!("segmenting {}x{} map", xdim, ydim);

    let mut labels = vec![vec![0u32; xdim]; ydim];
    let mut region_count = 0;

    for y in 0..ydim {
        for x in 0..xdim {
            if !occupancy.is_open(x, y) || labels[y][x] != 0 {
                continue;
            }

            region_count += 1;
            flood_fill(&occupancy, &mut labels, (x, y), region_count);
        }
    }

    debug!("found {} regions", region_count);

    Ok(LabelGrid {
        labels,
        region_count,
    })
}

// Stack-based fill to avoid recursion overhead on large open areas.
fn flood_fill(
    occupancy: &OccupancyGrid,
    labels: &mut [Vec<u32>],
    start: (usize, usize),
    label: u32,
) {
    let (xdim, ydim) = occupancy.dimensions();
    let mut stack = vec![start];
    labels[start.1][start.0] = label;

    while let Some((x, y)) = stack.pop() {
        for (dx, dy) in DELTAS {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;

            if nx < 0 || ny < 0 || nx >= xdim as i32 || ny >= ydim as i32 {
                continue;
            }

            let (nx, ny) = (nx as usize, ny as usize);

            if occupancy.is_open(nx, ny) && labels[ny][nx] == 0 {
                labels[ny][nx] = label;
                stack.push((nx, ny));
            }
        }
    }
}
