//! Diagram formatter
//!
//! Draws the identifier on the first line and one row per explanation below it. Each
//! row has a `+` under the column its token starts at, a `-` bar running right to the
//! end of the identifier, then the explanation text. Columns claimed by rows further
//! down are carried up as `|`, so every row threads back to its own column:
//!
//!     Standard_D2s_v3
//!     |        ||| |
//!     |        ||| +- version 3
//!     |        ||+--- s feature: premium storage capable
//!     |        |+---- 2 vCPUs
//!     |        +----- D family: general purpose compute
//!     +-------------- Standard tier
//!
//! Rows are built bottom-up from the first explanation, which is why the explanations
//! must be sorted by start. The last explanation is the empty sentinel at the end of
//! the identifier. It has no column of its own and only leaves the row of risers right
//! under the identifier.
//!
//! Trailing whitespace is trimmed from every row.

use crate::vmsize::explaining::Explanation;
use crate::vmsize::formats::registry::{FormatError, Formatter};
use crate::vmsize::pipeline::Decoded;
use std::cmp::Ordering;
use tracing::trace;

const RISER: char = '+';
const BAR: char = '-';
const PASS_THROUGH: char = '|';

fn render_row(width: usize, explanation: &Explanation, active: &mut [bool]) -> String {
    let mut row = String::with_capacity(width + 1 + explanation.text.len());

    for (column, is_active) in active.iter_mut().enumerate() {
        let c = match column.cmp(&explanation.start) {
            Ordering::Equal => {
                *is_active = true;
                RISER
            }
            Ordering::Greater => BAR,
            Ordering::Less if *is_active => PASS_THROUGH,
            Ordering::Less => ' ',
        };
        row.push(c);
    }

    row.push(' ');
    row.push_str(&explanation.text);
    row.truncate(row.trim_end().len());
    row
}

/// Render the diagram for `original`.
///
/// `explanations` must be sorted by ascending start and end with the sentinel.
pub fn render(original: &str, explanations: &[Explanation]) -> String {
    let width = original.len();
    let mut active = vec![false; width];

    let rows: Vec<String> = explanations
        .iter()
        .map(|explanation| {
            let row = render_row(width, explanation, &mut active);
            trace!(start = explanation.start, row = %row, "rendered diagram row");
            row
        })
        .collect();

    let mut output = String::with_capacity((width + 1) * (rows.len() + 1));
    output.push_str(original);
    output.push('\n');
    for row in rows.iter().rev() {
        output.push_str(row);
        output.push('\n');
    }
    output
}

/// Formatter implementation for the diagram format
pub struct DiagramFormatter;

impl Formatter for DiagramFormatter {
    fn name(&self) -> &str {
        "diagram"
    }

    fn serialize(&self, decoded: &Decoded) -> Result<String, FormatError> {
        Ok(render(&decoded.identifier, &decoded.explanations))
    }

    fn description(&self) -> &str {
        "ASCII tree pointing from each part of the identifier to its explanation"
    }
}
