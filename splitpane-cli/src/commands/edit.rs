//! Tree edit commands: insert, split, remove, replace, resize, clear.

use splitpane_core::split::{BranchSpec, PaneId, Side, SplitAxis};
use tracing::debug;

use crate::error::CliError;
use crate::util::{Context, require_pane};

/// Insert command handler
pub fn cmd_insert(
    context: &Context,
    target: &PaneId,
    new: &PaneId,
    axis: SplitAxis,
    before: bool,
) -> Result<(), CliError> {
    let mut layout = context.open_layout()?;
    if !layout.is_empty() {
        require_pane(&layout, target)?;
    }

    let side = if before { Side::Before } else { Side::After };
    let spec = BranchSpec::beside(axis, target.clone(), new.clone(), side);
    let was_empty = layout.is_empty();
    layout.insert(target, new, &spec)?;
    layout.flush()?;

    if was_empty {
        println!("Created layout with {target}");
    } else {
        println!("Inserted {new} {side} {target}");
    }
    Ok(())
}

/// Split command handler
pub fn cmd_split(context: &Context, target: &PaneId, axis: SplitAxis) -> Result<(), CliError> {
    let mut layout = context.open_layout()?;
    if !layout.is_empty() {
        require_pane(&layout, target)?;
    }

    let id = layout.insert_empty(target, axis)?;
    layout.flush()?;
    println!("{id}");
    Ok(())
}

/// Remove command handler
pub fn cmd_remove(context: &Context, id: &PaneId) -> Result<(), CliError> {
    let mut layout = context.open_layout()?;
    if !layout.remove(id)?.is_applied() {
        return Err(CliError::PaneNotFound(id.clone()));
    }
    if layout.focused() == Some(id) {
        debug!(pane = %id, "Clearing focus of removed pane");
        layout.set_focused(None);
    }
    layout.flush()?;
    println!("Removed {id}");
    Ok(())
}

/// Replace command handler
pub fn cmd_replace(
    context: &Context,
    target: &PaneId,
    replacement: &PaneId,
) -> Result<(), CliError> {
    let mut layout = context.open_layout()?;
    require_pane(&layout, target)?;

    if layout.replace(target, replacement)?.is_applied() {
        if layout.focused() == Some(target) {
            layout.set_focused(Some(replacement.clone()));
        }
        layout.flush()?;
    }
    println!("Replaced {target} with {replacement}");
    Ok(())
}

/// Resize command handler
pub fn cmd_resize(context: &Context, id: &PaneId, size: f64) -> Result<(), CliError> {
    let mut layout = context.open_layout()?;
    require_pane(&layout, id)?;

    if !layout.resize(id, size)?.is_applied() {
        return Err(CliError::Unchanged(format!(
            "{id} fills the layout and has no split to resize"
        )));
    }
    layout.flush()?;
    println!("Resized split holding {id} to {size}%");
    Ok(())
}

/// Clear command handler
pub fn cmd_clear(context: &Context) -> Result<(), CliError> {
    let mut layout = context.open_layout()?;
    let count = layout.pane_count();
    layout.set_root(None);
    layout.set_focused(None);
    layout.flush()?;
    println!("Removed {count} pane(s)");
    Ok(())
}
