//! Core VfsMem implementation.

use std::time::SystemTime;

use tracing::debug;

use crate::config::{SeedTree, VfsConfig};
use crate::error::{VfsError, VfsResult};
use crate::path::{self, ANCHOR, HOME};
use crate::types::{FsNode, NodeMap, Resolved};

use super::seed::default_drives;

/// In-memory drive forest.
///
/// Each drive (`C:`, `D:`, ...) is an independent directory tree. Every
/// successful mutation bumps [`version`](Self::version) by exactly one;
/// failed calls leave both the tree and the counter untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct VfsMem {
    drives: NodeMap,
    version: u64,
    home: String,
}

impl VfsMem {
    /// Create a filesystem seeded with the default desktop tree
    pub fn new() -> Self {
        Self::seeded(SeedTree::Default, HOME.to_string())
    }

    /// Build from `config`, rejecting a `home` that is not drive-rooted.
    pub fn from_config(config: &VfsConfig) -> VfsResult<Self> {
        let config = config.clone().validated()?;
        Ok(Self::seeded(config.seed, config.home))
    }

    fn seeded(seed: SeedTree, home: String) -> Self {
        let drives = match seed {
            SeedTree::Default => default_drives(),
            SeedTree::Empty => NodeMap::new(),
        };
        Self {
            drives,
            version: 0,
            home,
        }
    }

    /// Coarse change counter; compare snapshots of it to detect mutations.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    /// Drive keys in creation order.
    pub fn drives(&self) -> impl Iterator<Item = &str> + '_ {
        self.drives.names()
    }

    fn absolute(&self, path: &str) -> (String, Vec<String>) {
        let absolute = path::to_absolute_in(&self.home, ANCHOR, path);
        let segments = path::split_path(&absolute);
        (absolute, segments)
    }

    fn node_at(&self, segments: &[String]) -> Option<&FsNode> {
        let (drive, rest) = segments.split_first()?;
        let mut node = self.drives.get(drive)?;
        for name in rest {
            node = node.children()?.get(name)?;
        }
        Some(node)
    }

    fn node_at_mut(&mut self, segments: &[String]) -> Option<&mut FsNode> {
        let (drive, rest) = segments.split_first()?;
        let mut node = self.drives.get_mut(drive)?;
        for name in rest {
            node = node.children_mut()?.get_mut(name)?;
        }
        Some(node)
    }

    /// Children of the directory at `segments`.
    fn dir_at(&self, segments: &[String]) -> VfsResult<&NodeMap> {
        let path = path::join_segments(segments);
        self.node_at(segments)
            .ok_or_else(|| VfsError::NotFound(path.clone()))?
            .children()
            .ok_or(VfsError::NotADirectory(path))
    }

    fn dir_at_mut(&mut self, segments: &[String]) -> VfsResult<&mut NodeMap> {
        let path = path::join_segments(segments);
        self.node_at_mut(segments)
            .ok_or_else(|| VfsError::NotFound(path.clone()))?
            .children_mut()
            .ok_or(VfsError::NotADirectory(path))
    }

    /// Check that every existing node along `segments` is a directory.
    ///
    /// Returns `true` when the whole chain already exists.
    fn check_dir_chain(&self, segments: &[String]) -> VfsResult<bool> {
        let Some((drive, rest)) = segments.split_first() else {
            return Err(VfsError::InvalidPath("empty path".into()));
        };
        let Some(mut node) = self.drives.get(drive) else {
            return Ok(false);
        };
        for (depth, name) in rest.iter().enumerate() {
            let children = node.children().ok_or_else(|| {
                VfsError::NotADirectory(path::join_segments(&segments[..=depth]))
            })?;
            match children.get(name) {
                Some(child) => node = child,
                None => return Ok(false),
            }
        }
        if node.is_dir() {
            Ok(true)
        } else {
            Err(VfsError::NotADirectory(path::join_segments(segments)))
        }
    }

    /// `mkdir -p` for `segments`, returning the innermost directory's children.
    ///
    /// The chain is validated before anything is created.
    fn ensure_dir_chain(
        &mut self,
        segments: &[String],
        now: SystemTime,
    ) -> VfsResult<&mut NodeMap> {
        self.check_dir_chain(segments)?;
        let Some((drive, rest)) = segments.split_first() else {
            return Err(VfsError::InvalidPath("empty path".into()));
        };

        if !self.drives.contains(drive) {
            self.drives.insert(FsNode::dir(drive.as_str(), NodeMap::new(), now));
        }
        let mut current = self
            .drives
            .get_mut(drive)
            .and_then(FsNode::children_mut)
            .ok_or_else(|| VfsError::NotADirectory(drive.clone()))?;

        for (depth, name) in rest.iter().enumerate() {
            if !current.contains(name) {
                current.insert(FsNode::dir(name.as_str(), NodeMap::new(), now));
            }
            current = current
                .get_mut(name)
                .and_then(FsNode::children_mut)
                .ok_or_else(|| {
                    VfsError::NotADirectory(path::join_segments(&segments[..=depth + 1]))
                })?;
        }
        Ok(current)
    }

    /// Where `mv`/`cp` should place `source_name` for the destination `dest`.
    ///
    /// An existing directory receives the node under its current name;
    /// anything else is taken as the full target path.
    fn destination(
        &self,
        dest: &[String],
        source_name: &str,
    ) -> VfsResult<(Vec<String>, String)> {
        if self.node_at(dest).is_some_and(FsNode::is_dir) {
            return Ok((dest.to_vec(), source_name.to_string()));
        }
        let Some((name, parent)) = dest.split_last().filter(|(_, parent)| !parent.is_empty())
        else {
            return Err(VfsError::InvalidPath(format!(
                "no parent directory for {}",
                path::join_segments(dest)
            )));
        };
        self.dir_at(parent)?;
        Ok((parent.to_vec(), name.clone()))
    }

    /// Bump the version for a successful mutation and log the outcome.
    ///
    /// `mv`/`cp` report where the node landed as `dest`.
    fn commit(
        &mut self,
        op: &'static str,
        path: &str,
        result: VfsResult<Option<String>>,
    ) -> VfsResult<()> {
        match result {
            Ok(dest) => {
                self.version += 1;
                debug!(
                    op,
                    path,
                    dest = dest.as_deref(),
                    version = self.version,
                    "vfs mutation applied"
                );
                Ok(())
            }
            Err(err) => {
                debug!(op, path, %err, "vfs mutation rejected");
                Err(err)
            }
        }
    }

    /// Resolve `path` relative to `cwd`.
    pub fn resolve(&self, cwd: &str, path: &str) -> Resolved<'_> {
        let absolute_path = path::to_absolute_in(&self.home, cwd, path);
        let segments = path::split_path(&absolute_path);
        Resolved {
            node: self.node_at(&segments),
            absolute_path,
        }
    }

    /// Text content of the file at `path`; `""` when the file has none.
    pub fn read_file(&self, path: &str) -> Option<&str> {
        self.stat(path)
            .filter(|node| node.is_file())
            .map(|node| node.content().unwrap_or(""))
    }

    /// Create or overwrite a text file, creating missing parent directories.
    pub fn write_file(&mut self, path: &str, content: &str) -> VfsResult<()> {
        let (absolute, segments) = self.absolute(path);
        let result = self.write_file_at(&segments, content).map(|()| None);
        self.commit("write_file", &absolute, result)
    }

    fn write_file_at(&mut self, segments: &[String], content: &str) -> VfsResult<()> {
        let Some((name, parent)) = segments.split_last().filter(|(_, parent)| !parent.is_empty())
        else {
            return Err(VfsError::InvalidPath(format!(
                "cannot write to drive root {}",
                path::join_segments(segments)
            )));
        };

        if self.check_dir_chain(parent)?
            && self.node_at(segments).is_some_and(FsNode::is_dir)
        {
            return Err(VfsError::IsADirectory(path::join_segments(segments)));
        }

        let now = SystemTime::now();
        let children = self.ensure_dir_chain(parent, now)?;
        children.insert(FsNode::file(name.as_str(), content, now));
        Ok(())
    }

    /// Create a directory and any missing ancestors, including the drive.
    pub fn mkdir(&mut self, path: &str) -> VfsResult<()> {
        let (absolute, segments) = self.absolute(path);
        let result = self
            .ensure_dir_chain(&segments, SystemTime::now())
            .map(|_| None);
        self.commit("mkdir", &absolute, result)
    }

    /// Remove a file or directory; non-empty directories need `recursive`.
    pub fn rm(&mut self, path: &str, recursive: bool) -> VfsResult<()> {
        let (absolute, segments) = self.absolute(path);
        let result = self.rm_at(&segments, recursive).map(|()| None);
        self.commit("rm", &absolute, result)
    }

    fn rm_at(&mut self, segments: &[String], recursive: bool) -> VfsResult<()> {
        let path = path::join_segments(segments);
        let Some((name, parent)) = segments.split_last().filter(|(_, parent)| !parent.is_empty())
        else {
            return Err(VfsError::InvalidPath(format!("cannot remove drive root {path}")));
        };

        let children = self.dir_at_mut(parent)?;
        let target = children
            .get(name)
            .ok_or_else(|| VfsError::NotFound(path.clone()))?;
        if !recursive && target.children().is_some_and(|c| !c.is_empty()) {
            return Err(VfsError::DirectoryNotEmpty(path));
        }
        children.remove(name);
        Ok(())
    }

    /// Move `src` to `dest`, or into `dest` when it is an existing directory.
    pub fn mv(&mut self, src: &str, dest: &str) -> VfsResult<()> {
        let (source, src_segments) = self.absolute(src);
        let (_, dest_segments) = self.absolute(dest);
        let result = self.mv_at(&src_segments, &dest_segments).map(Some);
        self.commit("mv", &source, result)
    }

    /// Returns the absolute path the node was moved to.
    fn mv_at(&mut self, src: &[String], dest: &[String]) -> VfsResult<String> {
        let source = path::join_segments(src);
        let Some((src_name, src_parent)) =
            src.split_last().filter(|(_, parent)| !parent.is_empty())
        else {
            return Err(VfsError::InvalidPath(format!("cannot move drive root {source}")));
        };
        self.dir_at(src_parent)?
            .get(src_name)
            .ok_or_else(|| VfsError::NotFound(source.clone()))?;

        let (dest_parent, dest_name) = self.destination(dest, src_name)?;
        if dest_parent.starts_with(src) {
            return Err(VfsError::MoveIntoSelf(source));
        }

        let mut node = self
            .dir_at_mut(src_parent)?
            .remove(src_name)
            .ok_or_else(|| VfsError::NotFound(source.clone()))?;
        node.rename(&dest_name);
        node.touch(SystemTime::now());
        self.dir_at_mut(&dest_parent)?.insert(node);
        Ok(format!("{}/{dest_name}", path::join_segments(&dest_parent)))
    }

    /// Deep-copy `src` to `dest`, or into `dest` when it is an existing directory.
    pub fn cp(&mut self, src: &str, dest: &str) -> VfsResult<()> {
        let (source, src_segments) = self.absolute(src);
        let (_, dest_segments) = self.absolute(dest);
        let result = self.cp_at(&src_segments, &dest_segments).map(Some);
        self.commit("cp", &source, result)
    }

    fn cp_at(&mut self, src: &[String], dest: &[String]) -> VfsResult<String> {
        let mut copy = self
            .node_at(src)
            .cloned()
            .ok_or_else(|| VfsError::NotFound(path::join_segments(src)))?;

        let (dest_parent, dest_name) = self.destination(dest, copy.name())?;
        copy.rename(&dest_name);
        copy.touch(SystemTime::now());
        self.dir_at_mut(&dest_parent)?.insert(copy);
        Ok(format!("{}/{dest_name}", path::join_segments(&dest_parent)))
    }

    /// Immediate children of the directory at `path`, in insertion order.
    pub fn ls(&self, path: &str) -> Vec<&FsNode> {
        self.stat(path)
            .and_then(FsNode::children)
            .map(|children| children.iter().collect())
            .unwrap_or_default()
    }

    pub fn stat(&self, path: &str) -> Option<&FsNode> {
        self.resolve(ANCHOR, path).node
    }

    pub fn exists(&self, path: &str) -> bool {
        self.stat(path).is_some()
    }
}

impl Default for VfsMem {
    fn default() -> Self {
        Self::new()
    }
}
