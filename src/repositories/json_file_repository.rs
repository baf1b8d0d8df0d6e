use crate::error::StorageResult;
use crate::models::AddressBook;
use crate::repositories::traits::BookRepository;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Book repository backed by a pretty-printed JSON file.
///
/// Saving writes to a sibling `.tmp` file first and renames it over the
/// target, so a crash mid-save never leaves a half-written book behind.
#[derive(Debug, Clone)]
pub struct JsonFileBookRepository {
    path: PathBuf,
}

impl JsonFileBookRepository {
    /// Create a repository storing the book at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl BookRepository for JsonFileBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No address book at {}, starting empty", self.path.display());
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let book: AddressBook = serde_json::from_reader(BufReader::new(file))?;
        info!(
            "Loaded {} contacts from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let tmp_path = self.temp_path();

        if let Err(e) = self.write_and_replace(&tmp_path, book) {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                debug!("Could not remove {}: {}", tmp_path.display(), cleanup);
            }
            return Err(e);
        }
        debug!("Saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }
}

impl JsonFileBookRepository {
    fn write_and_replace(&self, tmp_path: &Path, book: &AddressBook) -> StorageResult<()> {
        let mut writer = BufWriter::new(File::create(tmp_path)?);
        serde_json::to_writer_pretty(&mut writer, book)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        drop(writer);

        fs::rename(tmp_path, &self.path)?;
        Ok(())
    }
}
