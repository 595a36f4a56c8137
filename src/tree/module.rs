//! Module logger nodes.
//!
//! # Responsibilities
//! - Own a node's threshold and its children
//! - Resolve, create and get-or-create descendants
//! - Propagate threshold changes to the whole subtree
//!
//! # Design Decisions
//! - Threshold is an `AtomicU8`; children live in a `DashMap` whose entry
//!   guard makes check-then-insert atomic per node
//! - Walks go strictly root-to-leaf and never hold a parent's guard while
//!   touching a child, so no lock-order cycle exists
//! - Nodes are never removed; the tree only grows

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::emit::{Level, Logger, Module};
use crate::tree::path;
use crate::tree::root::RootContext;
use crate::tree::TreeError;

/// One node of the module namespace.
pub struct ModuleLogger {
    /// Full dotted name from the root; empty for the root itself.
    name: String,
    /// Current threshold, stored as `Level as u8`.
    level: AtomicU8,
    /// Process-wide facts shared with the root. Owns no nodes.
    root: Arc<RootContext>,
    /// Local segment -> child node.
    children: DashMap<String, Arc<ModuleLogger>>,
}

impl ModuleLogger {
    pub(crate) fn new(name: String, level: Level, root: Arc<RootContext>) -> Self {
        Self {
            name,
            level: AtomicU8::new(level as u8),
            root,
            children: DashMap::new(),
        }
    }

    /// Full dotted name of this module.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current threshold.
    pub fn threshold(&self) -> Level {
        Level::from(self.level.load(Ordering::Acquire))
    }

    /// Set the threshold of this module and every existing descendant.
    ///
    /// Descendants created while this runs keep the threshold they were
    /// created with.
    pub fn set_threshold(&self, level: Level) {
        tracing::trace!(module = %self.name, level = %level, "Propagating threshold");
        self.propagate_threshold(level);
    }

    fn propagate_threshold(&self, level: Level) {
        self.level.store(level as u8, Ordering::Release);

        // Explicit stack keeps deep trees off the call stack. Each node's
        // children are snapshotted so no shard guard is held while descending.
        let mut pending = self.snapshot_children();
        while let Some(node) = pending.pop() {
            node.level.store(level as u8, Ordering::Release);
            pending.extend(node.snapshot_children());
        }
    }

    fn snapshot_children(&self) -> Vec<Arc<ModuleLogger>> {
        self.children
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    /// Shared root context (sink and module field).
    pub fn root(&self) -> &RootContext {
        &self.root
    }

    /// Local names of the direct children, sorted.
    pub fn child_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.children.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Emission handle for this module with no attached fields.
    pub fn logger(self: &Arc<Self>) -> Logger {
        Logger::new(Arc::clone(self))
    }

    /// Find an existing descendant.
    ///
    /// `path` may be relative (`"http"`) or fully qualified (`"svc.http"`
    /// when called on `svc`). Empty segments are dropped, and a path with
    /// no segments left is this module itself.
    pub fn lookup(self: &Arc<Self>, path: &str) -> Result<Arc<ModuleLogger>, TreeError> {
        let normalized = path::normalize(path);
        if normalized.is_empty() {
            return Ok(Arc::clone(self));
        }

        let qualified = path::qualify(&self.name, &normalized);
        let mut node = Arc::clone(self);
        loop {
            let (local, rest) = path::split_local(&node.name, &qualified);
            let child = node
                .children
                .get(local)
                .map(|entry| Arc::clone(entry.value()))
                .ok_or_else(|| TreeError::NotFound(path::join(&node.name, local)))?;

            if rest.is_empty() {
                return Ok(child);
            }
            node = child;
        }
    }

    /// Create a descendant, materializing missing intermediate modules with
    /// the same `level`.
    ///
    /// Fails only when the terminal module already exists.
    pub fn create(self: &Arc<Self>, path: &str, level: Level) -> Result<Arc<ModuleLogger>, TreeError> {
        let normalized = path::normalize(path);
        if normalized.is_empty() {
            return Err(TreeError::AlreadyExists(self.name.clone()));
        }

        let (module, created) = self.materialize(&normalized, level);
        if created {
            Ok(module)
        } else {
            Err(TreeError::AlreadyExists(module.name.clone()))
        }
    }

    /// Find a descendant, creating it if missing. Never fails.
    ///
    /// A concurrent creator that wins the insert for a segment hands its
    /// node to every loser, so all callers get the same module.
    pub fn get_or_create(self: &Arc<Self>, path: &str, level: Level) -> Arc<ModuleLogger> {
        if let Ok(module) = self.lookup(path) {
            return module;
        }

        let normalized = path::normalize(path);
        if normalized.is_empty() {
            return Arc::clone(self);
        }

        let (module, created) = self.materialize(&normalized, level);
        if !created {
            tracing::trace!(module = %module.name, "Lost module creation race, using existing module");
        }
        module
    }

    /// Walk a normalized, non-empty `path`, inserting missing segments.
    ///
    /// Returns the terminal module and whether this call created it. Every
    /// step consumes one non-empty segment, so the walk is bounded by the
    /// path length.
    fn materialize(self: &Arc<Self>, path: &str, level: Level) -> (Arc<ModuleLogger>, bool) {
        let qualified = path::qualify(&self.name, path);
        let mut node = Arc::clone(self);
        loop {
            let (local, rest) = path::split_local(&node.name, &qualified);
            let (child, created) = node.child_entry(local, level);
            if created {
                tracing::debug!(module = %child.name, level = %level, "Created module logger");
            }

            if rest.is_empty() {
                return (child, created);
            }
            node = child;
        }
    }

    /// Return the child at `local`, inserting a new one if missing.
    ///
    /// The check and the insert happen under one entry guard.
    fn child_entry(&self, local: &str, level: Level) -> (Arc<ModuleLogger>, bool) {
        match self.children.entry(local.to_string()) {
            Entry::Occupied(entry) => (Arc::clone(entry.get()), false),
            Entry::Vacant(entry) => {
                let child = Arc::new(ModuleLogger::new(
                    path::join(&self.name, local),
                    level,
                    Arc::clone(&self.root),
                ));
                entry.insert(Arc::clone(&child));
                (child, true)
            }
        }
    }
}

impl Module for ModuleLogger {
    fn full_name(&self) -> &str {
        &self.name
    }

    fn threshold(&self) -> Level {
        ModuleLogger::threshold(self)
    }

    fn context(&self) -> &RootContext {
        &self.root
    }
}

impl Drop for ModuleLogger {
    // Unlink descendants one at a time instead of recursing per level.
    fn drop(&mut self) {
        let mut pending: Vec<Arc<ModuleLogger>> = std::mem::take(&mut self.children)
            .into_iter()
            .map(|(_, child)| child)
            .collect();

        while let Some(child) = pending.pop() {
            if let Some(mut owned) = Arc::into_inner(child) {
                pending.extend(
                    std::mem::take(&mut owned.children)
                        .into_iter()
                        .map(|(_, grandchild)| grandchild),
                );
            }
        }
    }
}

impl fmt::Debug for ModuleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleLogger")
            .field("name", &self.name)
            .field("threshold", &self.threshold())
            .field("children", &self.child_names())
            .finish()
    }
}
