use std::path::PathBuf;

use crate::error::Result;

/// Key-value persistence behind the store. Implementations map a namespace
/// key to wherever the document actually lives.
pub trait Storage {
    /// Returns the stored document, or `None` when the key is absent or
    /// unreadable. Callers treat both the same way.
    fn load(&self, key: &str) -> Option<String>;

    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed storage: key `K` lives at `<dir>/K.json`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStore {
    fn load(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
pub mod test_support {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::error::PennyError;

    /// In-memory storage for unit tests. `fail_saves` makes every save
    /// return an error, to exercise the best-effort persistence path.
    #[derive(Default)]
    pub struct MemStore {
        pub entries: RefCell<HashMap<String, String>>,
        pub fail_saves: bool,
    }

    impl Storage for MemStore {
        fn load(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn save(&self, key: &str, value: &str) -> Result<()> {
            if self.fail_saves {
                return Err(PennyError::Other("save refused".into()));
            }
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
