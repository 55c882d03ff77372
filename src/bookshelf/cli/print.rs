use bookshelf::api::{CmdMessage, MessageLevel};
use bookshelf::model::Book;
use colored::Colorize;
use std::io::{self, Write};

pub(super) fn print_books<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    for book in books {
        writeln!(out, "{}", book)?;
    }
    Ok(())
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let styled = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Error => message.content.red(),
        };
        writeln!(out, "{}", styled)?;
    }
    Ok(())
}

/// The same text for every recoverable failure: bad input and a missing
/// book are not told apart.
pub(super) fn print_error<W: Write>(out: &mut W) -> io::Result<()> {
    print_messages(out, &[CmdMessage::error("Error")])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn books_use_listing_format() {
        let mut out = Vec::new();
        print_books(
            &mut out,
            &[
                Book::new(0, "Dune", "Frank Herbert", 1965),
                Book::new(3, "Солярис", "Станислав Лем", 1961),
            ],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0. Dune (Frank Herbert, 1965)\n3. Солярис (Станислав Лем, 1961)\n"
        );
    }

    #[test]
    fn messages_keep_their_text() {
        let mut out = Vec::new();
        print_messages(
            &mut out,
            &[CmdMessage::success("Book added!"), CmdMessage::info("No books found.")],
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Book added!"));
        assert!(text.contains("No books found."));
    }

    #[test]
    fn failures_print_one_generic_line() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_error(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Error\n");
    }
}
