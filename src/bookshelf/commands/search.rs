use crate::catalog::{Catalog, SearchField};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &Catalog, field: SearchField, keyword: &str) -> Result<CmdResult> {
    let matches = catalog.search(field, keyword)?;
    let mut result = CmdResult::default().with_listed_books(matches);
    if result.listed_books.is_empty() {
        result.add_message(CmdMessage::info("No matching books."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::model::Book;

    fn library() -> Catalog {
        Catalog::from_books(vec![
            Book::new(0, "The Hobbit", "J. R. R. Tolkien", 1937),
            Book::new(1, "Dune", "Frank Herbert", 1965),
            Book::new(2, "Thesaurus", "Peter Roget", 1852),
        ])
    }

    #[test]
    fn finds_title_prefixes() {
        let result = run(&library(), SearchField::Title, "THE").unwrap();
        let ids: Vec<i64> = result.listed_books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn no_match_adds_info_message() {
        let result = run(&library(), SearchField::Author, "Asimov").unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].content, "No matching books.");
    }

    #[test]
    fn bad_number_propagates() {
        let err = run(&library(), SearchField::Year, "abc").unwrap_err();
        assert!(matches!(err, ShelfError::InvalidNumber(_)));
    }
}
