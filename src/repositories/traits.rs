use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book.
///
/// The book is always loaded and saved as a whole snapshot, enabling
/// different implementations (JSON file, in-memory mock).
pub trait BookRepository {
    /// Load the stored book, or an empty one if nothing has been saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
