use crate::api::VaultApi;
use crate::store::fs::FsStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// A file-backed vault in a throwaway directory.
pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub api: VaultApi<FsStore>,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().join("vault");
        let api = VaultApi::new(FsStore::new(&root));
        Self {
            _temp_dir: temp_dir,
            api,
            root,
        }
    }

    /// A second handle on the same directory, as another process would have.
    pub fn reopen(&self) -> VaultApi<FsStore> {
        VaultApi::new(FsStore::new(&self.root))
    }
}
