use std::path::PathBuf;

use super::super::*;
use csv::Reader;

const IMPORT_PATH: &str = "./data/contacts.csv";

/// Adds every record of a .csv file through the store. Ids found in the
/// file are ignored; the store assigns fresh ones, so imported contacts
/// never collide with existing entries.
pub fn import_contacts_from_csv(
    store: &mut dyn ContactStore,
    src: Option<&str>,
) -> Result<(PathBuf, u64), AppError> {
    let file_path = PathBuf::from(src.unwrap_or(IMPORT_PATH));

    if !file_path.exists() {
        return Err(AppError::NotFound("CSV file".to_string()));
    }

    if file_path.extension().is_some_and(|ext| ext != "csv") {
        return Err(AppError::Validation("File not .csv".to_string()));
    }

    let mut reader = Reader::from_path(&file_path)?;

    let mut counter: u64 = 0;
    for result in reader.deserialize() {
        let record: Contact = result?;
        store.add(record)?;
        counter += 1;
    }

    Ok((file_path, counter))
}
