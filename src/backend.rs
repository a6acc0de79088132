use crate::error::VfsResult;
use crate::types::FsNode;

/// Filesystem operations as consumed by explorer, terminal and file-open code.
///
/// Returned nodes are snapshots. Holders should re-fetch once
/// [`version`](VfsBackend::version) moves instead of keeping them around.
#[async_trait::async_trait]
pub trait VfsBackend: Send + Sync + 'static {
    /// Resolve `path` against `cwd`, returning the node and its absolute path.
    async fn resolve(&self, cwd: &str, path: &str) -> (Option<FsNode>, String);

    async fn read_file(&self, path: &str) -> Option<String>;

    async fn write_file(&self, path: &str, content: &str) -> VfsResult<()>;

    async fn mkdir(&self, path: &str) -> VfsResult<()>;

    async fn rm(&self, path: &str, recursive: bool) -> VfsResult<()>;

    async fn mv(&self, src: &str, dest: &str) -> VfsResult<()>;

    async fn cp(&self, src: &str, dest: &str) -> VfsResult<()>;

    async fn ls(&self, path: &str) -> Vec<FsNode>;

    async fn stat(&self, path: &str) -> Option<FsNode>;

    async fn exists(&self, path: &str) -> bool {
        self.stat(path).await.is_some()
    }

    async fn version(&self) -> u64;
}
