//! Terminal output of a generation run

use console::Style;

use crate::tree::{Action, ActionKind, summarize};

/// One summary line: `CREATE src/app/core/core.module.ts (812 bytes)`
pub fn format_action(action: &Action) -> String {
    let style = match action.kind {
        ActionKind::Create => Style::new().green(),
        ActionKind::Overwrite | ActionKind::Update => Style::new().cyan(),
    };
    format!(
        "{} {} ({} bytes)",
        style.apply_to(action.kind.label()).bold(),
        action.path,
        action.size
    )
}

/// Summary lines for a run, one per touched path
pub fn summary_lines(actions: &[Action]) -> Vec<String> {
    summarize(actions).iter().map(format_action).collect()
}

/// Print the summary of a run to stdout
pub fn print_summary(actions: &[Action], dry_run: bool) {
    for line in summary_lines(actions) {
        println!("{line}");
    }
    if dry_run {
        println!();
        println!(
            "{}",
            Style::new()
                .yellow()
                .apply_to("Dry run: no files were written.")
        );
    }
}
