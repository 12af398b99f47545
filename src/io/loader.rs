//! Populate a transaction store from a CSV file
//!
//! Rows are added in file order, so file order becomes the store's
//! insertion order. Malformed rows and duplicate IDs are logged and skipped.

use crate::core::TransactionStore;
use crate::io::sync_reader::SyncReader;
use crate::types::LedgerError;
use log::{info, warn};
use std::path::Path;

/// Read every row of `path` into a new store
///
/// # Returns
///
/// * `Ok(TransactionStore)` holding every valid, first-seen transaction
/// * `Err(LedgerError)` if the file cannot be opened
pub fn load_store(path: &Path) -> Result<TransactionStore, LedgerError> {
    let mut store = TransactionStore::new();
    let reader = SyncReader::new(path)?;

    let mut skipped = 0usize;
    for result in reader {
        match result {
            Ok(tx) => {
                let id = tx.id();
                if !store.add(tx) {
                    warn!("Duplicate transaction {} ignored", id);
                    skipped += 1;
                }
            }
            Err(e) => {
                warn!("{}", e);
                skipped += 1;
            }
        }
    }

    info!(
        "Loaded {} transactions from {} ({} rows skipped)",
        store.count(),
        path.display(),
        skipped
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionStatus;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_load_store_keeps_file_order_and_first_duplicate() {
        let file = create_temp_csv(
            "id,status,from,to,amount\n\
             3,SUCCESSFUL,a,b,1.00\n\
             1,FAILED,a,b,2.00\n\
             3,ABORTED,x,y,9.00\n\
             bad,FAILED,a,b,1.00\n\
             2,SUCCESSFUL,a,b,3.00\n",
        );

        let store = load_store(file.path()).unwrap();

        assert_eq!(store.count(), 3);
        assert_eq!(store.iter().map(|tx| tx.id()).collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(
            store.get_by_id(3).unwrap().status(),
            TransactionStatus::Successful
        );
    }

    #[test]
    fn test_load_store_missing_file() {
        let result = load_store(Path::new("does/not/exist.csv"));
        assert!(matches!(result, Err(LedgerError::FileNotFound { .. })));
    }
}
