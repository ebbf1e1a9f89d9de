//! Pane rectangles command.

use std::fmt::Write as _;

use splitpane_core::split::SplitRect;

use crate::cli::RectsFormat;
use crate::error::CliError;
use crate::util::{Context, fmt_unit};

/// Rects command handler
pub fn cmd_rects(context: &Context, format: RectsFormat) -> Result<(), CliError> {
    let layout = context.open_layout()?;
    let rects = layout.layout_rects();

    match format {
        RectsFormat::Json => println!("{}", serde_json::to_string_pretty(&rects)?),
        RectsFormat::Table => print!("{}", format_table(&rects)?),
    }
    Ok(())
}

fn format_table(rects: &[SplitRect]) -> Result<String, CliError> {
    let id_width = rects
        .iter()
        .map(|r| r.id.as_str().len())
        .max()
        .unwrap_or(0)
        .max("ID".len());

    let mut out = String::new();
    writeln!(
        out,
        "{:<id_width$}  {:>6}  {:>6}  {:>6}  {:>6}",
        "ID", "X", "Y", "WIDTH", "HEIGHT"
    )?;
    for rect in rects {
        writeln!(
            out,
            "{:<id_width$}  {:>6}  {:>6}  {:>6}  {:>6}",
            rect.id.as_str(),
            fmt_unit(rect.x),
            fmt_unit(rect.y),
            fmt_unit(rect.width),
            fmt_unit(rect.height)
        )?;
    }
    Ok(out)
}
