//! Shared, observable handle around a [`VfsMem`].

use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::watch;

use crate::backend::VfsBackend;
use crate::backends::VfsMem;
use crate::error::VfsResult;
use crate::types::FsNode;

/// Cloneable handle that app code injects instead of a global store.
///
/// Mutations go through [`update`](Self::update); whenever one changes the
/// version counter the new value is published to every
/// [`subscribe`](Self::subscribe)r.
#[derive(Debug, Clone)]
pub struct SharedVfs {
    inner: Arc<RwLock<VfsMem>>,
    version_tx: Arc<watch::Sender<u64>>,
}

impl SharedVfs {
    pub fn new(vfs: VfsMem) -> Self {
        let (version_tx, _) = watch::channel(vfs.version());
        Self {
            inner: Arc::new(RwLock::new(vfs)),
            version_tx: Arc::new(version_tx),
        }
    }

    /// Receiver that observes the version counter.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.version_tx.subscribe()
    }

    /// Run `f` against a read-only view of the tree.
    pub fn read<R>(&self, f: impl FnOnce(&VfsMem) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }

    /// Run `f` with exclusive access, then publish the version if it moved.
    ///
    /// Publishing happens under the write lock, so subscribers never see the
    /// counter go backwards.
    pub fn update<R>(&self, f: impl FnOnce(&mut VfsMem) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let result = f(&mut *guard);
        let version = guard.version();
        self.version_tx.send_if_modified(|current| {
            if version > *current {
                *current = version;
                true
            } else {
                false
            }
        });
        result
    }
}

impl Default for SharedVfs {
    fn default() -> Self {
        Self::new(VfsMem::new())
    }
}

impl From<VfsMem> for SharedVfs {
    fn from(vfs: VfsMem) -> Self {
        Self::new(vfs)
    }
}

#[async_trait::async_trait]
impl VfsBackend for SharedVfs {
    async fn resolve(&self, cwd: &str, path: &str) -> (Option<FsNode>, String) {
        self.read(|fs| {
            let resolved = fs.resolve(cwd, path);
            (resolved.node.cloned(), resolved.absolute_path)
        })
    }

    async fn read_file(&self, path: &str) -> Option<String> {
        self.read(|fs| fs.read_file(path).map(str::to_string))
    }

    async fn write_file(&self, path: &str, content: &str) -> VfsResult<()> {
        self.update(|fs| fs.write_file(path, content))
    }

    async fn mkdir(&self, path: &str) -> VfsResult<()> {
        self.update(|fs| fs.mkdir(path))
    }

    async fn rm(&self, path: &str, recursive: bool) -> VfsResult<()> {
        self.update(|fs| fs.rm(path, recursive))
    }

    async fn mv(&self, src: &str, dest: &str) -> VfsResult<()> {
        self.update(|fs| fs.mv(src, dest))
    }

    async fn cp(&self, src: &str, dest: &str) -> VfsResult<()> {
        self.update(|fs| fs.cp(src, dest))
    }

    async fn ls(&self, path: &str) -> Vec<FsNode> {
        self.read(|fs| fs.ls(path).into_iter().cloned().collect())
    }

    async fn stat(&self, path: &str) -> Option<FsNode> {
        self.read(|fs| fs.stat(path).cloned())
    }

    async fn exists(&self, path: &str) -> bool {
        self.read(|fs| fs.exists(path))
    }

    async fn version(&self) -> u64 {
        self.read(VfsMem::version)
    }
}
