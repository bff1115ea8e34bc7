use comfy_table::{ContentArrangement, Table};

use kb_chat::Dispatcher;

pub fn run() -> Result<(), String> {
    let dispatcher = Dispatcher::new();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Command", "Arguments", "Description"]);

    for spec in dispatcher.commands() {
        let args = if spec.arg_names.is_empty() {
            "—".to_string()
        } else {
            spec.arg_names.join(", ")
        };
        table.add_row(vec![
            format!("!{}", spec.trigger),
            args,
            spec.description.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} commands", dispatcher.commands().len());

    Ok(())
}
