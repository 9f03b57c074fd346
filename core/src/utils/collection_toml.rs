use crate::{error::CollectionError, structs::toml::CollectionToml};
use log::error;
use std::str::from_utf8;

impl CollectionToml {
    /// Parse the TOML collection file
    pub(crate) fn parse_collection_toml(toml_data: &[u8]) -> Result<CollectionToml, CollectionError> {
        let toml_results = toml::from_str(from_utf8(toml_data).unwrap_or_default());
        let mut collection: CollectionToml = match toml_results {
            Ok(results) => results,
            Err(err) => {
                error!("[core] Failed to parse TOML data. Error: {err:?}");
                return Err(CollectionError::BadToml);
            }
        };

        // Format is always lowercase
        collection.output.format = collection.output.format.to_lowercase();
        Ok(collection)
    }
}
