//! Show layout command.

use splitpane_core::split::{PaneId, SplitNode};

use crate::cli::ShowFormat;
use crate::error::CliError;
use crate::util::Context;

/// Show layout command handler
pub fn cmd_show(context: &Context, format: ShowFormat) -> Result<(), CliError> {
    let layout = context.open_layout()?;

    match format {
        ShowFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&layout.root())?);
        }
        ShowFormat::Tree => match layout.root() {
            Some(root) => print!("{}", render_tree(root, layout.focused())?),
            None => println!("(empty layout)"),
        },
    }
    Ok(())
}

/// Renders the tree with `ascii_tree`, marking the focused pane with `*`.
pub fn render_tree(root: &SplitNode, focused: Option<&PaneId>) -> Result<String, CliError> {
    let mut out = String::new();
    ascii_tree::write_tree(&mut out, &to_ascii_tree(root, focused))?;
    Ok(out)
}

fn to_ascii_tree(node: &SplitNode, focused: Option<&PaneId>) -> ascii_tree::Tree {
    match node {
        SplitNode::Leaf(id) => {
            let label = if Some(id) == focused {
                format!("{id} *")
            } else {
                id.to_string()
            };
            ascii_tree::Tree::Leaf(vec![label])
        }
        SplitNode::Branch(branch) => ascii_tree::Tree::Node(
            format!("{} {}%", branch.axis, branch.size),
            vec![
                to_ascii_tree(&branch.before, focused),
                to_ascii_tree(&branch.after, focused),
            ],
        ),
    }
}
