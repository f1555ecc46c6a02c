use std::io::{self, BufRead, Write};

use super::handlers::{self, MSG_GOODBYE, MSG_INVALID_CHOICE};
use super::{MenuChoice, Shell};
use crate::domain::BookRepository;
use crate::models::NewBook;

/// Run the menu loop until Quit or end of input.
pub fn run<R, I, O>(shell: &mut Shell<R>, mut input: I, mut output: O) -> io::Result<()>
where
    R: BookRepository,
    I: BufRead,
    O: Write,
{
    loop {
        print_menu(&mut output)?;

        let Some(line) = prompt(&mut input, &mut output, "Enter your choice: ")? else {
            writeln!(output, "{}", MSG_GOODBYE)?;
            break;
        };

        let Ok(choice) = line.parse::<MenuChoice>() else {
            writeln!(output, "{}", MSG_INVALID_CHOICE)?;
            continue;
        };

        tracing::debug!("Menu choice: {:?}", choice);
        if choice == MenuChoice::Quit {
            writeln!(output, "{}", MSG_GOODBYE)?;
            break;
        }

        match dispatch(shell, choice, &mut input, &mut output)? {
            Some(message) => writeln!(output, "{}", message)?,
            None => {
                writeln!(output, "{}", MSG_GOODBYE)?;
                break;
            }
        }
    }

    output.flush()
}

/// Collect the form for `choice` and run it. `None` means input ran out.
fn dispatch<R, I, O>(
    shell: &mut Shell<R>,
    choice: MenuChoice,
    input: &mut I,
    output: &mut O,
) -> io::Result<Option<String>>
where
    R: BookRepository,
    I: BufRead,
    O: Write,
{
    let message = match choice {
        MenuChoice::AddBook => {
            writeln!(output, "Add a Book")?;
            let mut fields: [String; 4] = Default::default();
            let labels = ["Title: ", "Author: ", "ISBN: ", "Available Copies: "];
            for (slot, label) in fields.iter_mut().zip(labels) {
                match prompt(input, output, label)? {
                    Some(value) => *slot = value,
                    None => return Ok(None),
                }
            }
            let [title, author, isbn, copies] = fields;
            handlers::submit_add_book(&mut shell.catalog, NewBook::new(title, author, isbn, copies))
        }
        MenuChoice::BorrowBook => {
            let Some(isbn) = prompt(input, output, "Enter ISBN of the book to borrow: ")? else {
                return Ok(None);
            };
            let now = shell.now();
            handlers::submit_borrow_book(&mut shell.catalog, &isbn, now)
        }
        MenuChoice::ReturnBook => {
            let Some(isbn) = prompt(input, output, "Enter ISBN of the book to return: ")? else {
                return Ok(None);
            };
            let now = shell.now();
            let currency = shell.currency().to_string();
            handlers::submit_return_book(&mut shell.catalog, &isbn, now, &currency)
        }
        MenuChoice::ListBooks => handlers::list_books(&shell.catalog),
        MenuChoice::SearchBooks => {
            let Some(query) = prompt(input, output, "Enter search query (title or author): ")?
            else {
                return Ok(None);
            };
            handlers::submit_search_books(&shell.catalog, &query)
        }
        MenuChoice::Export => handlers::export_catalog(&shell.catalog),
        MenuChoice::Quit => MSG_GOODBYE.to_string(),
    };

    Ok(Some(message))
}

fn print_menu<O: Write>(output: &mut O) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Library Management System")?;
    for (i, choice) in MenuChoice::ALL.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, choice.label())?;
    }
    Ok(())
}

/// Print `label` and read one trimmed line; `None` at end of input.
fn prompt<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
