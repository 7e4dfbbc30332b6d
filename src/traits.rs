//! Loading and saving models stored as JSON files.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde::{Serialize, de::DeserializeOwned};

use crate::error::Error;

/// A model kept on disk as one JSON document.
///
/// Every load runs [`ModelFile::normalize`], so fields a hand-written model may
/// leave out are filled in before anything reads them.
///
/// # Example
///
/// ```rust,no_run
/// use intlgen::{ResourceCollection, traits::ModelFile};
/// let collection = ResourceCollection::load("l10n/model.json")?;
/// collection.save("l10n/model_copy.json")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait ModelFile: Serialize + DeserializeOwned {
    /// Completes a freshly deserialized model.
    fn normalize(&mut self) {}

    fn from_json_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut model: Self = serde_json::from_reader(reader)?;
        model.normalize();
        Ok(model)
    }

    fn from_json(s: &str) -> Result<Self, Error> {
        let mut model: Self = serde_json::from_str(s)?;
        model.normalize();
        Ok(model)
    }

    fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Writes pretty-printed JSON.
    fn to_json_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_json_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
