//! Board reconciliation over the remote task collection.

use std::sync::Arc;

use crate::board::{
    domain::{ColumnPartition, Task, partition},
    ports::{AuthGateway, TaskStore, TaskStoreResult},
};

/// Owns the authoritative in-memory task list and its column projection.
///
/// The list changes only on a successful [`reload`](Self::reload) or an
/// explicit [`clear`](Self::clear); a failed reload leaves the previous
/// board visible. Every accepted change bumps the revision, which is the
/// signal a retained-mode view diffs against using task identifiers as
/// stable keys.
pub struct BoardReconciler<S, A>
where
    S: TaskStore,
    A: AuthGateway,
{
    store: Arc<S>,
    auth: Arc<A>,
    tasks: Vec<Task>,
    revision: u64,
}

impl<S, A> BoardReconciler<S, A>
where
    S: TaskStore,
    A: AuthGateway,
{
    /// Creates a reconciler with an empty task list.
    #[must_use]
    pub const fn new(store: Arc<S>, auth: Arc<A>) -> Self {
        Self {
            store,
            auth,
            tasks: Vec::new(),
            revision: 0,
        }
    }

    /// Replaces the task list with a fresh fetch from the store.
    ///
    /// The round trip result is applied only when the user that issued it
    /// is still signed in; a reload resolving after sign-out, or after a
    /// different user signed in, is discarded so a cleared board stays
    /// cleared.
    ///
    /// # Errors
    ///
    /// Returns the store error when the fetch fails; the previous list is
    /// left untouched.
    pub async fn reload(&mut self) -> TaskStoreResult<()> {
        let issued_for = self.auth.current_user().map(|user| user.id().clone());
        let fetched = self.store.list().await?;

        let signed_in = self.auth.current_user().map(|user| user.id().clone());
        if signed_in.is_none() || signed_in != issued_for {
            tracing::debug!("discarding stale task reload after auth transition");
            return Ok(());
        }

        tracing::debug!(count = fetched.len(), "applied task reload");
        self.tasks = fetched;
        self.revision += 1;
        Ok(())
    }

    /// Drops every task and signals a re-render.
    ///
    /// Sign-out is the one path that empties the board without a reload.
    pub fn clear(&mut self) {
        self.tasks.clear();
        self.revision += 1;
    }

    /// Returns the current task list in fetch order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the revision of the displayed list.
    ///
    /// The value increases every time the displayed list changes.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Projects the current list into the three status columns.
    #[must_use]
    pub fn partition(&self) -> ColumnPartition {
        partition(&self.tasks)
    }
}
