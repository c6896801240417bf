//! The concurrency-guarded ordered collection of sibling folders.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use mailhub_core::error::AppError;
use mailhub_core::result::AppResult;
use mailhub_core::traits::diagnostics::{DiagnosticSink, Severity, codes};
use mailhub_core::traits::ImapSettings;
use mailhub_core::types::{AccountId, FolderId};
use mailhub_entity::folder::{CreateFolder, FolderStore};

use crate::node::FolderNode;
use crate::path;

/// Collaborators shared by every directory in one hierarchy.
pub(crate) struct DirectoryContext {
    pub(crate) store: Arc<dyn FolderStore>,
    pub(crate) diagnostics: Arc<dyn DiagnosticSink>,
    pub(crate) settings: Arc<dyn ImapSettings>,
}

/// The ordered set of direct child folders sharing one parent (or the
/// account root).
///
/// A directory instance always represents "the direct children of
/// `parent_id` within `account_id`". Each instance guards its own child
/// list with its own lock; descending into a child's subdirectory crosses
/// into a different instance and a different lock. Lookups clone the `Arc`
/// child list under the lock and release it before descending, so a
/// recursive walk holds at most one lock at a time.
///
/// Children are kept in ascending folder-id order, the order the store
/// returns them in.
pub struct FolderDirectory {
    account_id: AccountId,
    parent_id: FolderId,
    children: Mutex<Vec<Arc<FolderNode>>>,
    ctx: Arc<DirectoryContext>,
}

impl FolderDirectory {
    /// Create the root directory of an account's folder tree (or of the
    /// shared namespace when `account_id` is [`AccountId::PUBLIC`]).
    ///
    /// The directory is empty until [`refresh`](Self::refresh) or a
    /// creation call populates it.
    pub fn new_root(
        account_id: AccountId,
        store: Arc<dyn FolderStore>,
        diagnostics: Arc<dyn DiagnosticSink>,
        settings: Arc<dyn ImapSettings>,
    ) -> Self {
        let ctx = Arc::new(DirectoryContext {
            store,
            diagnostics,
            settings,
        });
        Self::child_of(account_id, FolderId::NONE, ctx)
    }

    pub(crate) fn child_of(
        account_id: AccountId,
        parent_id: FolderId,
        ctx: Arc<DirectoryContext>,
    ) -> Self {
        Self {
            account_id,
            parent_id,
            children: Mutex::new(Vec::new()),
            ctx,
        }
    }

    /// The account whose folders this directory enumerates.
    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// The id of the folder these children live under, [`FolderId::NONE`]
    /// for a top-level collection.
    pub fn parent_id(&self) -> FolderId {
        self.parent_id
    }

    /// Diagnostic label for this collection: `"PublicFolders"` for the
    /// shared namespace, `"Folders"` otherwise.
    pub fn collection_name(&self) -> &'static str {
        if self.account_id.is_public() {
            "PublicFolders"
        } else {
            "Folders"
        }
    }

    /// Reload the entire folder tree of this account from the store,
    /// replacing all previously held nodes.
    ///
    /// Intended for the account root: rows without a parent become this
    /// directory's children. Rows referencing a parent that is not among
    /// the fetched rows are dropped for this cycle and reported through the
    /// diagnostic sink; they never fail the refresh. If the store query
    /// itself fails, the previous in-memory state is left untouched.
    ///
    /// The child-list lock is held from before the store query until the
    /// swap, so a creation cannot commit a row mid-reload only to have the
    /// swap install a tree fetched before that row existed.
    ///
    /// Nodes already returned to callers remain valid snapshots; only this
    /// directory's own child list is swapped.
    pub async fn refresh(&self) -> AppResult<()> {
        let mut children = self.children.lock().await;
        let rows = self.ctx.store.list_by_account(self.account_id).await?;

        // Pass 1: one node per row, indexed by id. The fetch order is kept
        // in a separate list because the id map does not preserve it and
        // sibling order must follow ascending folder id.
        let mut nodes_by_id: HashMap<FolderId, Arc<FolderNode>> =
            HashMap::with_capacity(rows.len());
        let mut fetch_order: Vec<FolderId> = Vec::with_capacity(rows.len());
        for row in rows {
            let id = row.id;
            fetch_order.push(id);
            nodes_by_id.insert(id, Arc::new(FolderNode::new(row, Arc::clone(&self.ctx))));
        }

        // Pass 2: attach children to parents in the preserved order. Rows
        // can arrive child-before-parent, so attachment cannot happen in
        // pass 1.
        let mut roots: Vec<Arc<FolderNode>> = Vec::new();
        for id in &fetch_order {
            let Some(node) = nodes_by_id.get(id) else {
                continue;
            };
            let node = Arc::clone(node);
            let parent_id = node.parent_id();

            if parent_id.is_none() {
                roots.push(node);
            } else if parent_id == node.id() {
                // A row naming itself as parent would otherwise pin itself
                // in memory through its own child list.
                self.report_orphan(parent_id, node.id());
            } else if let Some(parent) = nodes_by_id.get(&parent_id) {
                parent.subfolders().push_child(node).await;
            } else {
                self.report_orphan(parent_id, node.id());
            }
        }

        *children = roots;
        Ok(())
    }

    /// Find the first direct child whose name matches case-insensitively.
    ///
    /// With `recursive` set, a miss on the direct children falls through to
    /// a depth-first search of every child's own subdirectory, in child
    /// order.
    pub async fn get_folder_by_name(
        &self,
        name: &str,
        recursive: bool,
    ) -> Option<Arc<FolderNode>> {
        let direct: Vec<Arc<FolderNode>> = self.children.lock().await.clone();

        for child in &direct {
            if child.name_matches(name) {
                return Some(Arc::clone(child));
            }
        }

        if recursive {
            for child in &direct {
                let found =
                    Box::pin(child.subfolders().get_folder_by_name(name, true)).await;
                if found.is_some() {
                    return found;
                }
            }
        }

        None
    }

    /// Resolve a full mailbox path such as `"Inbox.Work.Reports"`.
    ///
    /// The path is split on the hierarchy delimiter currently exposed by
    /// the settings collaborator and resolved segment by segment with
    /// non-recursive name lookups.
    pub async fn get_folder_by_full_path(&self, full_path: &str) -> Option<Arc<FolderNode>> {
        let delimiter = self.ctx.settings.hierarchy_delimiter();
        let segments = path::split(full_path, &delimiter);
        self.get_folder_by_segments(&segments).await
    }

    /// Resolve an already-split mailbox path.
    ///
    /// Returns `None` as soon as any segment fails to resolve; remaining
    /// segments are not attempted. An empty segment sequence yields `None`.
    pub async fn get_folder_by_segments<S>(&self, segments: &[S]) -> Option<Arc<FolderNode>>
    where
        S: AsRef<str> + Sync,
    {
        let mut current: Option<Arc<FolderNode>> = None;
        for segment in segments {
            let next = match &current {
                Some(node) => {
                    node.subfolders()
                        .get_folder_by_name(segment.as_ref(), false)
                        .await?
                }
                None => self.get_folder_by_name(segment.as_ref(), false).await?,
            };
            current = Some(next);
        }
        current
    }

    /// Ensure every folder along `segments` exists under this directory,
    /// creating only the missing suffix.
    ///
    /// Existing folders are matched case-insensitively and descended into;
    /// missing ones are persisted through the store (which assigns the
    /// durable id) and appended to their container. If persisting a segment
    /// fails, the call aborts without mutating memory for that segment;
    /// segments committed earlier in the same call remain, so a retry
    /// resumes at the missing suffix.
    ///
    /// Returns the node for the final segment.
    pub async fn create_path<S>(
        &self,
        segments: &[S],
        auto_subscribe: bool,
    ) -> AppResult<Arc<FolderNode>>
    where
        S: AsRef<str> + Sync,
    {
        if segments.is_empty() {
            return Err(AppError::validation("Folder path is empty"));
        }

        let delimiter = self.ctx.settings.hierarchy_delimiter();
        debug!(
            path = %path::join(segments, &delimiter),
            account = %self.account_id,
            "Creating IMAP folder path"
        );

        let mut current: Option<Arc<FolderNode>> = None;
        for segment in segments {
            let name = segment.as_ref();
            if name.is_empty() {
                return Err(AppError::validation(
                    "Folder path contains an empty segment",
                ));
            }

            let node = match &current {
                Some(node) => {
                    node.subfolders()
                        .ensure_child(name, auto_subscribe)
                        .await?
                }
                None => self.ensure_child(name, auto_subscribe).await?,
            };
            current = Some(node);
        }

        current.ok_or_else(|| AppError::internal("Folder path resolved to no node"))
    }

    /// Ensure the path exists, subscribing newly created folders per the
    /// configured default.
    ///
    /// Shorthand for [`create_path`](Self::create_path) with the
    /// subscription flag taken from the settings collaborator, read at call
    /// time like the hierarchy delimiter.
    pub async fn create_path_default<S>(&self, segments: &[S]) -> AppResult<Arc<FolderNode>>
    where
        S: AsRef<str> + Sync,
    {
        let auto_subscribe = self.ctx.settings.auto_subscribe_created();
        self.create_path(segments, auto_subscribe).await
    }

    /// Create a single folder directly under this directory.
    ///
    /// Unlike [`create_path`](Self::create_path), an existing sibling with
    /// the same case-insensitive name is a user-visible conflict here, not
    /// an "already present" success.
    pub async fn create_folder(
        &self,
        name: &str,
        is_subscribed: bool,
    ) -> AppResult<Arc<FolderNode>> {
        if name.is_empty() {
            return Err(AppError::validation("Folder name is empty"));
        }

        let mut children = self.children.lock().await;
        if children.iter().any(|c| c.name_matches(name)) {
            return Err(AppError::conflict(format!(
                "Folder '{name}' already exists"
            )));
        }
        self.persist_new_child(&mut children, name, is_subscribed)
            .await
    }

    /// Detach the direct child with the given id.
    ///
    /// Only direct children are searched. The detached node keeps its whole
    /// subtree and is returned to the caller; no persisted delete is issued
    /// (removing rows is the caller's concern). Returns `None` when the id
    /// is not a direct child.
    pub async fn remove_folder(&self, id: FolderId) -> Option<Arc<FolderNode>> {
        let mut children = self.children.lock().await;
        let position = children.iter().position(|c| c.id() == id)?;
        Some(children.remove(position))
    }

    /// Depth-first search by durable id across this directory and every
    /// descendant directory, in child order.
    pub async fn find_by_id(&self, id: FolderId) -> Option<Arc<FolderNode>> {
        let direct: Vec<Arc<FolderNode>> = self.children.lock().await.clone();

        for child in &direct {
            if child.id() == id {
                return Some(Arc::clone(child));
            }
            let found = Box::pin(child.subfolders().find_by_id(id)).await;
            if found.is_some() {
                return found;
            }
        }

        None
    }

    /// Snapshot of the direct children, in ascending folder-id order.
    pub async fn folders(&self) -> Vec<Arc<FolderNode>> {
        self.children.lock().await.clone()
    }

    /// Overwrite the pending row's owner fields with this directory's own
    /// identity.
    ///
    /// Invoked before any child row of this directory is written, so a
    /// caller-supplied folder can never be persisted under the wrong
    /// account or parent.
    pub fn stamp_ownership(&self, folder: &mut CreateFolder) {
        folder.account_id = self.account_id;
        folder.parent_id = self.parent_id;
    }

    /// Return the existing case-insensitive match for `name` or create,
    /// persist, and append a new child.
    ///
    /// The children lock is held across the store round-trip so a
    /// concurrent caller cannot create the same name twice; the new node is
    /// appended only after the insert succeeded.
    async fn ensure_child(
        &self,
        name: &str,
        auto_subscribe: bool,
    ) -> AppResult<Arc<FolderNode>> {
        let mut children = self.children.lock().await;

        if let Some(existing) = children.iter().find(|c| c.name_matches(name)) {
            return Ok(Arc::clone(existing));
        }

        self.persist_new_child(&mut children, name, auto_subscribe)
            .await
    }

    async fn persist_new_child(
        &self,
        children: &mut Vec<Arc<FolderNode>>,
        name: &str,
        is_subscribed: bool,
    ) -> AppResult<Arc<FolderNode>> {
        let mut pending = CreateFolder::new(name, is_subscribed);
        self.stamp_ownership(&mut pending);

        let created = self.ctx.store.insert(&pending).await?;
        let node = Arc::new(FolderNode::new(created, Arc::clone(&self.ctx)));
        // Store ids are monotonically increasing, so appending keeps the
        // ascending-id sibling order.
        children.push(Arc::clone(&node));
        Ok(node)
    }

    pub(crate) async fn push_child(&self, node: Arc<FolderNode>) {
        self.children.lock().await.push(node);
    }

    fn report_orphan(&self, missing_parent: FolderId, orphan: FolderId) {
        self.ctx.diagnostics.report(
            Severity::Medium,
            codes::ORPHANED_FOLDER_ROW,
            "FolderDirectory::refresh",
            &format!("Parent folder with id {missing_parent} not found for folder id {orphan}"),
        );
    }
}

impl fmt::Debug for FolderDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FolderDirectory")
            .field("account_id", &self.account_id)
            .field("parent_id", &self.parent_id)
            .finish_non_exhaustive()
    }
}
