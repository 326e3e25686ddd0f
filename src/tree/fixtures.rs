//! Shared test fixtures: the note document and the CD catalog

use crate::path::{evaluate, Path};
use crate::tree::{string_value, ArenaTree, NodeId, TreeAccess, TreeBuilder};

/// (title, artist, country, company, price, year)
const CATALOG: &[(&str, &str, &str, &str, &str, &str)] = &[
    ("Empire Burlesque", "Bob Dylan", "USA", "Columbia", "10.90", "1985"),
    ("Hide your heart", "Bonnie Tyler", "UK", "CBS Records", "9.90", "1988"),
    ("Greatest Hits", "Dolly Parton", "USA", "RCA", "9.90", "1982"),
    ("Still got the blues", "Gary More", "UK", "Virgin records", "10.20", "1990"),
    ("Eros", "Eros Ramazzotti", "EU", "BMG", "9.90", "1997"),
    ("One night only", "Bee Gees", "UK", "Polydor", "10.90", "1998"),
    ("Sylvias Mother", "Dr.Hook", "UK", "CBS", "8.10", "1973"),
    ("Maggie May", "Rod Stewart", "UK", "Pickwick", "8.50", "1990"),
    ("Romanza", "Andrea Bocelli", "EU", "Polydor", "10.80", "1996"),
    ("When a man loves a woman", "Percy Sledge", "USA", "Atlantic", "8.70", "1987"),
    ("Black angel", "Savage Rose", "EU", "Mega", "10.90", "1995"),
    ("1999 Grammy Nominees", "Many", "USA", "Grammy", "10.20", "1999"),
    ("For the good times", "Kenny Rogers", "UK", "Mucik Master", "8.70", "1995"),
    ("Big Willie style", "Will Smith", "USA", "Columbia", "9.90", "1997"),
    ("Tupelo Honey", "Van Morrison", "UK", "Polydor", "8.20", "1971"),
    ("Soulsville", "Jorn Hoel", "Norway", "WEA", "7.90", "1996"),
    ("The very best of", "Cat Stevens", "UK", "Island", "8.90", "1990"),
    ("Stop", "Sam Brown", "UK", "A and M", "8.90", "1988"),
    ("Bridge of Spies", "T'Pau", "UK", "Siren", "7.90", "1987"),
    ("Private Dancer", "Tina Turner", "UK", "Capitol", "8.90", "1983"),
    ("Midt om natten", "Kim Larsen", "EU", "Medley", "7.80", "1983"),
    ("Pavarotti Gala Concert", "Luciano Pavarotti", "UK", "DECCA", "9.90", "1991"),
    ("The dock of the bay", "Otis Redding", "USA", "Stax Records", "7.90", "1968"),
    ("Picture book", "Simply Red", "EU", "Elektra", "7.20", "1985"),
    ("Red", "The Communards", "UK", "London", "7.80", "1987"),
    ("Unchain my heart", "Joe Cocker", "USA", "EMI", "8.20", "1987"),
];

/// A four-field note document
pub fn note() -> ArenaTree {
    let mut b = TreeBuilder::new();
    b.open("note");
    b.element("to", "Tove");
    b.element("from", "Jani");
    b.element("heading", "Reminder");
    b.element("body", "Don't forget me this weekend!");
    b.close();
    b.finish()
}

/// The 26-entry CD catalog
pub fn catalog() -> ArenaTree {
    let mut b = TreeBuilder::new();
    b.open("CATALOG");
    for &(title, artist, country, company, price, year) in CATALOG {
        b.open("CD");
        b.element("TITLE", title);
        b.element("ARTIST", artist);
        b.element("COUNTRY", country);
        b.element("COMPANY", company);
        b.element("PRICE", price);
        b.element("YEAR", year);
        b.close();
    }
    b.close();
    b.finish()
}

/// Typed projection of a `CD` element
#[derive(Debug, Clone, PartialEq)]
pub struct Cd {
    pub title: String,
    pub artist: String,
    pub country: String,
    pub company: String,
    pub price: f32,
    pub year: i32,
}

impl Cd {
    /// Build the record with one sub-query per field. Value conversion
    /// (price, year) is this caller's step, not the engine's.
    pub fn from_node<T: TreeAccess>(tree: &T, node: NodeId) -> Cd {
        let field = |name: &str| -> String {
            let id = evaluate(tree, node, name).expect("field query")[0];
            string_value(tree, id).expect("field text")
        };
        Cd {
            title: field("TITLE"),
            artist: field("ARTIST"),
            country: field("COUNTRY"),
            company: field("COMPANY"),
            price: field("PRICE").parse().expect("price parses"),
            year: field("YEAR").parse().expect("year parses"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::query;

    #[test]
    fn test_catalog_shape() {
        let tree = catalog();
        assert_eq!(tree.root_name(), Some("CATALOG"));
        let path = Path::parse("CATALOG/CD").unwrap();
        let count = query(&tree, tree.document_id(), &path)
            .unwrap()
            .filter_map(Result::ok)
            .count();
        assert_eq!(count, 26);
    }

    #[test]
    fn test_note_shape() {
        let tree = note();
        assert_eq!(tree.root_name(), Some("note"));
        // note + 4 fields + 4 text nodes + document
        assert_eq!(tree.node_count(), 10);
    }
}
