//! Grid layout and rendering
//!
//! Splits the house list into square pages and turns a page into colored
//! cells.

use super::error::{GridError, GridResult};
use super::types::{GridCell, HouseData, Page};
use crate::color::ColorMapper;

/// Square counts offered by the sidebar
pub const SQUARE_COUNT_OPTIONS: [usize; 12] =
    [25, 36, 49, 64, 81, 100, 121, 144, 169, 196, 225, 256];

/// Square grid of `per_line * per_line` cells per page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    square_count: usize,
    per_line: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::from_option(100)
    }
}

impl GridLayout {
    /// Create a layout; the square count must be a positive perfect square
    pub fn new(square_count: usize) -> GridResult<Self> {
        let layout = Self::from_option(square_count);
        let squared = layout.per_line.checked_mul(layout.per_line);
        if square_count == 0 || squared != Some(square_count) {
            return Err(GridError::InvalidSquareCount(square_count));
        }
        Ok(layout)
    }

    /// Build from a count already known to be a perfect square
    pub(crate) fn from_option(square_count: usize) -> Self {
        let per_line = (square_count as f64).sqrt().round() as usize;
        Self {
            square_count,
            per_line,
        }
    }

    pub fn square_count(&self) -> usize {
        self.square_count
    }

    /// Cells per row (and rows per page)
    pub fn per_line(&self) -> usize {
        self.per_line
    }

    /// CSS `grid-template-columns` value, e.g. `repeat(10, 10%)`
    pub fn column_template(&self) -> String {
        self.template()
    }

    /// CSS `grid-template-rows` value
    pub fn row_template(&self) -> String {
        self.template()
    }

    fn template(&self) -> String {
        format!("repeat({}, {}%)", self.per_line, 100.0 / self.per_line as f64)
    }

    /// Number of pages needed for `house_count` houses
    pub fn page_count(&self, house_count: usize) -> usize {
        house_count.div_ceil(self.square_count)
    }

    /// Split houses into pages numbered from 1
    pub fn paginate<'a>(&self, houses: &'a [HouseData]) -> Vec<Page<'a>> {
        houses
            .chunks(self.square_count)
            .enumerate()
            .map(|(idx, houses)| Page {
                id: idx + 1,
                houses,
            })
            .collect()
    }

    /// Select a single 1-based page
    pub fn page<'a>(&self, houses: &'a [HouseData], page: usize) -> GridResult<Page<'a>> {
        let pages = self.page_count(houses.len());
        if page == 0 || page > pages {
            return Err(GridError::PageOutOfRange { page, pages });
        }
        let start = (page - 1) * self.square_count;
        let end = (start + self.square_count).min(houses.len());
        Ok(Page {
            id: page,
            houses: &houses[start..end],
        })
    }
}

/// Color every house of a page
pub fn render_page(page: &Page<'_>, mapper: &ColorMapper) -> GridResult<Vec<GridCell>> {
    page.houses
        .iter()
        .map(|house| {
            let fill = mapper
                .css(house.temperature_difference)
                .map_err(|source| GridError::Color {
                    house_id: house.id,
                    source,
                })?;
            Ok(GridCell {
                house_id: house.id,
                value: house.temperature_difference,
                fill,
                hvac: house.hvac_status.color(),
            })
        })
        .collect()
}
