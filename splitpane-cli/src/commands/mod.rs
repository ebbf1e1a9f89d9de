//! Command handler modules for the CLI.

mod completions;
mod drag;
mod edit;
mod focus;
mod navigate;
mod rects;
mod show;

use crate::cli::Commands;
use crate::error::CliError;
use crate::util::Context;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(context: &Context, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Show { format } => show::cmd_show(context, format),
        Commands::Insert {
            target,
            new,
            axis,
            before,
        } => edit::cmd_insert(context, &target, &new, axis, before),
        Commands::Split { target, axis } => edit::cmd_split(context, &target, axis),
        Commands::Remove { id } => edit::cmd_remove(context, &id),
        Commands::Replace {
            target,
            replacement,
        } => edit::cmd_replace(context, &target, &replacement),
        Commands::Resize { id, size } => edit::cmd_resize(context, &id, size),
        Commands::Navigate { start, direction } => {
            navigate::cmd_navigate(context, &start, direction)
        }
        Commands::Drag { source, target } => drag::cmd_drag(context, source, target),
        Commands::Rects { format } => rects::cmd_rects(context, format),
        Commands::Focus { id } => focus::cmd_focus(context, id),
        Commands::Clear => edit::cmd_clear(context),
        Commands::Completions { shell } => completions::cmd_completions(shell),
    }
}
