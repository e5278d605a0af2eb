//! Column Assembler: table rows -> singular and plural columns.
//!
//! Cells are placed on a grid so that `rowspan`/`colspan` cells show up at
//! every position they cover. The plural accusative, for instance, is one
//! cell spanning both accusative rows in the noun tables.

use crate::dom::DomNode;
use crate::error::{ExtractionError, ExtractionResult};
use crate::forms::{ColumnSequence, WordFormSet};
use crate::normalize::normalize_cell;
use crate::word_class::TableFamily;
use tracing::{debug, trace};

/// Row index of the nominative-looking accusative in declension tables.
const ACCUSATIVE_NOMINATIVE_ROW: usize = 1;
/// Row index of the genitive-looking accusative; folded into the row above.
const ACCUSATIVE_GENITIVE_ROW: usize = 2;

const MAX_SPAN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub singular: ColumnSequence,
    pub plural: ColumnSequence,
}

/// `tr` elements of `table` in order, looking through row groups but not
/// into nested tables.
fn table_rows<N: DomNode>(table: &N) -> Vec<N> {
    let mut rows = Vec::new();
    for child in table.element_children() {
        match child.tag().as_deref() {
            Some("tr") => rows.push(child),
            Some("thead") | Some("tbody") | Some("tfoot") => rows.extend(
                child
                    .element_children()
                    .into_iter()
                    .filter(|row| row.is_element("tr")),
            ),
            _ => {}
        }
    }
    rows
}

fn span(cell: &impl DomNode, attr: &str) -> usize {
    cell.attr(attr)
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, MAX_SPAN)
}

/// One row laid out on the grid: fragments per position.
struct GridRow {
    positions: Vec<Option<Vec<String>>>,
    has_data_cell: bool,
}

impl GridRow {
    fn place(&mut self, index: usize, fragments: Vec<String>) {
        if self.positions.len() <= index {
            self.positions.resize(index + 1, None);
        }
        self.positions[index] = Some(fragments);
    }

    fn occupied(&self, index: usize) -> bool {
        matches!(self.positions.get(index), Some(Some(_)))
    }
}

/// Cells spanning down from earlier rows: (rows still covered, fragments).
type Carried = Vec<Option<(usize, Vec<String>)>>;

fn take_carried(carried: &mut Carried, index: usize) -> Option<Vec<String>> {
    let slot = carried.get_mut(index)?;
    let (remaining, fragments) = slot.as_mut()?;
    let fragments = fragments.clone();
    *remaining -= 1;
    if *remaining == 0 {
        *slot = None;
    }
    Some(fragments)
}

fn layout_row<N: DomNode>(row: &N, carried: &mut Carried) -> GridRow {
    let mut grid = GridRow {
        positions: Vec::new(),
        has_data_cell: false,
    };
    let mut column = 0;

    let cells = row
        .element_children()
        .into_iter()
        .filter(|cell| cell.is_element("td") || cell.is_element("th"));

    for cell in cells {
        while let Some(fragments) = take_carried(carried, column) {
            grid.place(column, fragments);
            column += 1;
        }
        grid.has_data_cell |= cell.is_element("td");

        let fragments = cell.text_fragments();
        let rowspan = span(&cell, "rowspan");
        for _ in 0..span(&cell, "colspan") {
            // A span from above still counts this row even when a wide cell covers it
            take_carried(carried, column);
            if rowspan > 1 {
                if carried.len() <= column {
                    carried.resize(column + 1, None);
                }
                carried[column] = Some((rowspan - 1, fragments.clone()));
            }
            grid.place(column, fragments.clone());
            column += 1;
        }
    }

    // Spans reaching past this row's last cell
    for index in column..carried.len() {
        if !grid.occupied(index) {
            if let Some(fragments) = take_carried(carried, index) {
                grid.place(index, fragments);
            }
        }
    }

    grid
}

fn cell_at(grid: &GridRow, index: usize, row_number: usize) -> ExtractionResult<WordFormSet> {
    let fragments = grid
        .positions
        .get(index)
        .and_then(|slot| slot.as_ref())
        .ok_or_else(|| {
            ExtractionError::malformed(format!(
                "row {} has no cell at position {} ({} positions)",
                row_number,
                index,
                grid.positions.len()
            ))
        })?;
    let forms = normalize_cell(fragments);
    trace!(row = row_number, position = index, ?forms, "cell");
    Ok(forms)
}

/// Replace the nominative-looking accusative with the (nominative, genitive)
/// pair and drop the genitive-looking row from both columns.
fn merge_accusative(columns: &mut Columns) {
    if columns.singular.len() <= ACCUSATIVE_GENITIVE_ROW {
        return;
    }
    let genitive = columns.singular.remove(ACCUSATIVE_GENITIVE_ROW);
    columns.plural.remove(ACCUSATIVE_GENITIVE_ROW);
    let nominative = std::mem::replace(
        &mut columns.singular[ACCUSATIVE_NOMINATIVE_ROW],
        WordFormSet::Empty,
    );
    columns.singular[ACCUSATIVE_NOMINATIVE_ROW] = WordFormSet::compound(nominative, genitive);
}

/// Read the singular and plural columns of `table` for `family`.
pub fn assemble_columns<N: DomNode>(table: &N, family: TableFamily) -> ExtractionResult<Columns> {
    let layout = family.layout();
    let mut columns = Columns {
        singular: Vec::new(),
        plural: Vec::new(),
    };
    let mut carried = Carried::new();

    for (row_number, row) in table_rows(table).iter().enumerate() {
        let grid = layout_row(row, &mut carried);
        if !grid.has_data_cell {
            continue;
        }
        columns
            .singular
            .push(cell_at(&grid, layout.singular_cell, row_number)?);
        columns
            .plural
            .push(cell_at(&grid, layout.plural_cell, row_number)?);
    }

    if columns.singular.is_empty() {
        return Err(ExtractionError::malformed("table has no data rows"));
    }
    debug!(%family, rows = columns.singular.len(), "columns assembled");

    if layout.merges_accusative {
        merge_accusative(&mut columns);
    }
    Ok(columns)
}
