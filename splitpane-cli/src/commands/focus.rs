//! Focus command.

use splitpane_core::split::PaneId;

use crate::error::CliError;
use crate::util::{Context, require_pane};

/// Focus command handler
pub fn cmd_focus(context: &Context, id: Option<PaneId>) -> Result<(), CliError> {
    let mut layout = context.open_layout()?;

    let Some(id) = id else {
        match layout.focused() {
            Some(focused) => println!("{focused}"),
            None => println!("(none)"),
        }
        return Ok(());
    };

    require_pane(&layout, &id)?;
    layout.set_focused(Some(id.clone()));
    layout.flush()?;
    println!("Focused {id}");
    Ok(())
}
