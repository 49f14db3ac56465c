//! Fixed book catalog used by the constrained prompt strategy

/// Books the catalog strategy is allowed to recommend, in prompt order.
pub const BOOK_CATALOG: &[CatalogBook] = &[
    CatalogBook::new("1984", "George Orwell"),
    CatalogBook::new("Pride and Prejudice", "Jane Austen"),
    CatalogBook::new("The Hobbit", "J.R.R. Tolkien"),
    CatalogBook::new("Moby Dick", "Herman Melville"),
    CatalogBook::new("The Catcher in the Rye", "J.D. Salinger"),
    CatalogBook::new("The Great Gatsby", "F. Scott Fitzgerald"),
    CatalogBook::new("Fahrenheit 451", "Ray Bradbury"),
    CatalogBook::new("The Girl on the Train", "Paula Hawkins"),
    CatalogBook::new(
        "Sapiens: A Brief History of Humankind",
        "Yuval Noah Harari",
    ),
    CatalogBook::new("To Kill a Mockingbird", "Harper Lee"),
    CatalogBook::new("The Odyssey", "Homer"),
    CatalogBook::new("Crime and Punishment", "Fyodor Dostoevsky"),
    CatalogBook::new("War and Peace", "Leo Tolstoy"),
    CatalogBook::new("The Brothers Karamazov", "Fyodor Dostoevsky"),
    CatalogBook::new("Brave New World", "Aldous Huxley"),
    CatalogBook::new("The Picture of Dorian Gray", "Oscar Wilde"),
    CatalogBook::new("The Shining", "Stephen King"),
    CatalogBook::new("The Alchemist", "Paulo Coelho"),
    CatalogBook::new("Catch-22", "Joseph Heller"),
    CatalogBook::new("The Lord of the Rings", "J.R.R. Tolkien"),
    CatalogBook::new("The Road", "Cormac McCarthy"),
    CatalogBook::new("The Outsiders", "S.E. Hinton"),
    CatalogBook::new("The Chronicles of Narnia", "C.S. Lewis"),
    CatalogBook::new("100 Years of Solitude", "Gabriel García Márquez"),
    CatalogBook::new("The Bell Jar", "Sylvia Plath"),
    CatalogBook::new("The Handmaid's Tale", "Margaret Atwood"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogBook {
    pub title: &'static str,
    pub author: &'static str,
}

impl CatalogBook {
    pub const fn new(title: &'static str, author: &'static str) -> Self {
        Self { title, author }
    }

    /// "Title by Author", the form used inside the prompt
    pub fn display_line(&self) -> String {
        format!("{} by {}", self.title, self.author)
    }
}

/// Catalog lines joined with newlines, ready to embed in a prompt.
pub fn catalog_listing() -> String {
    BOOK_CATALOG
        .iter()
        .map(CatalogBook::display_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Returns the first catalog book named in `text` (ASCII case-insensitive).
///
/// A title only counts as a whole phrase: it must sit on word boundaries and
/// must not run on into another capitalized word ("The Road Not Taken").
/// All-digit titles such as "1984" also need the author's surname in the text.
/// Longer titles are checked first.
pub fn find_mentioned_book(text: &str) -> Option<&'static CatalogBook> {
    let haystack = text.to_ascii_lowercase();
    let mut books: Vec<&'static CatalogBook> = BOOK_CATALOG.iter().collect();
    books.sort_by_key(|b| std::cmp::Reverse(b.title.len()));
    books
        .into_iter()
        .find(|b| book_is_mentioned(text, &haystack, b))
}

fn book_is_mentioned(text: &str, haystack: &str, book: &CatalogBook) -> bool {
    let title = book.title.to_ascii_lowercase();
    let title_found = haystack
        .match_indices(&title)
        .any(|(start, _)| is_whole_title(text, start, start + title.len()));

    if !title_found {
        return false;
    }

    if book.title.chars().all(|c| c.is_ascii_digit()) {
        let surname = book.author.rsplit(' ').next().unwrap_or(book.author);
        return haystack.contains(&surname.to_ascii_lowercase());
    }

    true
}

// `to_ascii_lowercase` keeps byte offsets, so indices into the haystack are valid in `text`
fn is_whole_title(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    if before.is_some_and(char::is_alphanumeric) {
        return false;
    }

    let rest = &text[end..];
    match rest.chars().next() {
        None => true,
        Some(c) if c.is_alphanumeric() => false,
        Some(c) if c.is_whitespace() => {
            let next_word: String = rest
                .trim_start()
                .chars()
                .take_while(|c| c.is_alphanumeric())
                .collect();
            let continues_title = next_word.chars().next().is_some_and(char::is_uppercase)
                && !next_word.eq_ignore_ascii_case("by");
            !continues_title
        }
        Some(_) => true,
    }
}
