//! Drag gesture command.

use splitpane_core::drag_drop::DragEndEvent;

use crate::error::CliError;
use crate::util::Context;

/// Drag command handler
pub fn cmd_drag(context: &Context, source: String, target: String) -> Result<(), CliError> {
    let mut layout = context.open_layout()?;
    let event = DragEndEvent {
        source: Some(source),
        target: Some(target),
    };

    if layout.handle_drag_end(&event)?.is_applied() {
        layout.flush()?;
        println!("Layout updated");
    } else {
        println!("No change");
    }
    Ok(())
}
