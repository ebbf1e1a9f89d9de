//! Directional navigation command.

use splitpane_core::split::{Direction, PaneId};

use crate::error::CliError;
use crate::util::{Context, require_pane};

/// Navigate command handler
pub fn cmd_navigate(context: &Context, start: &PaneId, direction: Direction) -> Result<(), CliError> {
    let layout = context.open_layout()?;
    require_pane(&layout, start)?;

    let next = layout
        .navigate(start, direction)
        .ok_or_else(|| CliError::NoNeighbor {
            start: start.clone(),
            direction,
        })?;
    println!("{next}");
    Ok(())
}
