//! Interactive menu loop.
//!
//! One menu prompt per iteration, five actions, until Exit or end of input.
//! Input mistakes and unknown ids print `Error` and return to the menu;
//! storage failures end the session with the error.

use bookshelf::api::ShelfApi;
use bookshelf::error::Result;
use bookshelf::store::DataStore;
use std::io::{self, BufRead, Write};
use tracing::debug;

mod print;

pub const MENU: &str = "1. Add book | 2. Remove book | 3. List books | 4. Search | 5. Exit";
pub const SEARCH_MENU: &str = "Search by 1. id | 2. title | 3. author | 4. year";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    Remove,
    List,
    Search,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Remove),
            "3" => Some(MenuChoice::List),
            "4" => Some(MenuChoice::Search),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Next line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(len);
        Ok(Some(line))
    }

    /// Prints `label` and reads the answer. End of input reads as empty.
    fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

pub fn run_session<S, R, W>(api: &mut ShelfApi<S>, console: &mut Console<R, W>) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(console.output, "{}", MENU)?;
        let Some(line) = console.read_line()? else {
            debug!("end of input");
            return handle_exit(api, console);
        };

        let outcome = match MenuChoice::parse(&line) {
            Some(MenuChoice::Add) => handle_add(api, console),
            Some(MenuChoice::Remove) => handle_remove(api, console),
            Some(MenuChoice::List) => handle_list(api, console),
            Some(MenuChoice::Search) => handle_search(api, console),
            Some(MenuChoice::Exit) => return handle_exit(api, console),
            None => continue,
        };

        match outcome {
            Ok(()) => {}
            Err(e) if e.is_user_error() => {
                debug!(error = %e, "menu action failed");
                print::print_error(&mut console.output)?;
            }
            Err(e) => return Err(e),
        }
    }
}

fn handle_add<S: DataStore, R: BufRead, W: Write>(
    api: &mut ShelfApi<S>,
    console: &mut Console<R, W>,
) -> Result<()> {
    let title = console.prompt("Title: ")?;
    let author = console.prompt("Author: ")?;
    let year = console.prompt("Year: ")?;

    let result = api.add_book(title, author, &year)?;
    print::print_messages(&mut console.output, &result.messages)?;
    Ok(())
}

fn handle_remove<S: DataStore, R: BufRead, W: Write>(
    api: &mut ShelfApi<S>,
    console: &mut Console<R, W>,
) -> Result<()> {
    let id = console.prompt("Id: ")?;

    let result = api.remove_book(&id)?;
    print::print_messages(&mut console.output, &result.messages)?;
    Ok(())
}

fn handle_list<S: DataStore, R: BufRead, W: Write>(
    api: &mut ShelfApi<S>,
    console: &mut Console<R, W>,
) -> Result<()> {
    let result = api.list_books()?;
    print::print_books(&mut console.output, &result.listed_books)?;
    print::print_messages(&mut console.output, &result.messages)?;
    Ok(())
}

fn handle_search<S: DataStore, R: BufRead, W: Write>(
    api: &mut ShelfApi<S>,
    console: &mut Console<R, W>,
) -> Result<()> {
    writeln!(console.output, "{}", SEARCH_MENU)?;
    let mode = console.read_line()?.unwrap_or_default();
    let keyword = console.prompt("Keyword: ")?;

    let result = api.search_books(&mode, &keyword)?;
    print::print_books(&mut console.output, &result.listed_books)?;
    print::print_messages(&mut console.output, &result.messages)?;
    Ok(())
}

/// Writes the CSV export. The JSON snapshot is already current from the last
/// add or remove, so it is not saved again.
fn handle_exit<S: DataStore, R: BufRead, W: Write>(
    api: &mut ShelfApi<S>,
    console: &mut Console<R, W>,
) -> Result<()> {
    let result = api.export()?;
    print::print_messages(&mut console.output, &result.messages)?;
    console.output.flush()?;
    Ok(())
}
