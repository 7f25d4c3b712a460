use anyhow::{anyhow, Result};
use log::info;
use std::io::{self, IsTerminal};

use super::display::print_person_list;
use super::ui::{self, read_command_line};
use crate::logic::{CommandResult, LogicManager};
use crate::templates::TemplateStorage;

/// Run the interactive command loop until `exit` or the user cancels.
pub fn run_shell<T: TemplateStorage>(logic: &mut LogicManager<T>) -> Result<()> {
    if !io::stdin().is_terminal() {
        return Err(anyhow!(
            "Interactive shell requires a terminal. Pass a command instead:\n  \
            reachout run list\n  \
            reachout run find n/alex\n  \
            Run 'reachout --help' for all options."
        ));
    }

    info!("event=shell_start");
    print_person_list(&logic.filtered_person_list());

    loop {
        let Some(line) = read_command_line()? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match logic.execute(&line) {
            Ok(result) => {
                show_result(logic, &result);
                if result.exit {
                    break;
                }
            }
            Err(e) => ui::error(&e.to_string()),
        }
    }

    info!("event=shell_stop");
    Ok(())
}

/// Run a single command line and print its outcome.
pub fn run_once<T: TemplateStorage>(logic: &mut LogicManager<T>, input: &str) -> Result<()> {
    let result = logic.execute(input)?;
    show_result(logic, &result);
    Ok(())
}

fn show_result<T: TemplateStorage>(logic: &LogicManager<T>, result: &CommandResult) {
    ui::status(&result.feedback);
    if !result.show_help && !result.exit {
        println!();
        print_person_list(&logic.filtered_person_list());
    }
}
