//! Dashboard operations over the user store.
//!
//! `UserDashboard` owns the repositories and the UI collaborators. Every
//! mutation follows the same sequence: persist the changed list, render it,
//! then notify. The in-memory list only changes once storage accepted the
//! write; a failed write is reported with an error toast. Taking `&mut self`
//! keeps a single mutator at a time; the only await points are image
//! conversion and the login call.

use crate::messages::{
    CONFIRM_DELETE, IMAGE_FAILED, LOGGED_OUT, LOGIN_FAILED, LOGIN_REJECTED, LOGIN_SUCCEEDED,
    SAVE_FAILED, USER_ADDED, USER_DELETED, USER_UPDATED, duplicate_id,
};
use crate::{DashboardError, Result as DashboardErrorResult};

use um_core::image::resolve_or_placeholder;
use um_core::{
    Confirmer, CoreError, Credentials, EditForm, ImageSource, LoginGateway, NewUser,
    NotificationKind, Notifier, Renderer, UserFilter, UserPatch, UserRecord, filter_users,
    generate_id_with,
};
use um_db::{KeyValueStorage, Result as DbErrorResult, SessionRepository, UserRepository};

use std::sync::Arc;

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Draws allowed before giving up on finding an unused generated id
pub const MAX_ID_ATTEMPTS: usize = 64;

pub struct UserDashboard<S, N, C, R> {
    users: UserRepository<Arc<S>>,
    session: SessionRepository<Arc<S>>,
    notifier: N,
    confirmer: C,
    renderer: R,
    rng: StdRng,
}

impl<S, N, C, R> UserDashboard<S, N, C, R>
where
    S: KeyValueStorage,
    N: Notifier,
    C: Confirmer,
    R: Renderer,
{
    /// Load the stored users and wire up the collaborators.
    pub fn open(storage: S, notifier: N, confirmer: C, renderer: R) -> DashboardErrorResult<Self> {
        Self::open_with_rng(storage, notifier, confirmer, renderer, StdRng::from_os_rng())
    }

    /// Like [`open`](Self::open) with a deterministic id generator.
    pub fn open_with_seed(
        storage: S,
        notifier: N,
        confirmer: C,
        renderer: R,
        seed: u64,
    ) -> DashboardErrorResult<Self> {
        Self::open_with_rng(
            storage,
            notifier,
            confirmer,
            renderer,
            StdRng::seed_from_u64(seed),
        )
    }

    fn open_with_rng(
        storage: S,
        notifier: N,
        confirmer: C,
        renderer: R,
        rng: StdRng,
    ) -> DashboardErrorResult<Self> {
        let storage = Arc::new(storage);
        let users = UserRepository::open(Arc::clone(&storage))?;
        let session = SessionRepository::new(storage);
        debug!("Dashboard opened with {} users", users.len());

        Ok(Self {
            users,
            session,
            notifier,
            confirmer,
            renderer,
            rng,
        })
    }

    pub fn users(&self) -> &[UserRecord] {
        self.users.all()
    }

    pub fn find(&self, id: &str) -> Option<&UserRecord> {
        self.users.find_by_id(id)
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn confirmer(&self) -> &C {
        &self.confirmer
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    // =========================================================================
    // CRUD
    // =========================================================================

    /// Add a user at the end of the list.
    ///
    /// Without an id a fresh 6-digit id is drawn; without an image the
    /// placeholder is stored. A supplied id that is already taken is rejected.
    pub async fn create(&mut self, input: NewUser) -> DashboardErrorResult<UserRecord> {
        if let Some(ref id) = input.id
            && self.users.contains(id)
        {
            warn!("Rejected create with duplicate id {id}");
            self.notifier.notify(&duplicate_id(id), NotificationKind::Error);
            return Err(CoreError::duplicate_id(id.clone()).into());
        }

        let image = self.convert_image(input.image.as_ref(), true).await?;
        let image = image.unwrap_or_default();

        let id = match input.id.clone() {
            Some(id) => id,
            None => self.fresh_id()?,
        };

        let record = UserRecord::from_new(input, id, image);
        let saved = self.users.push(record.clone());
        self.report_save(saved)?;

        info!("Created user {} ({})", record.id, record.name);
        self.renderer.render(self.users.all());
        self.notifier.notify(USER_ADDED, NotificationKind::Success);

        Ok(record)
    }

    /// Merge `patch` into the user with this id, keeping its position.
    ///
    /// Unknown ids are ignored and yield `None`: nothing is persisted,
    /// rendered or notified.
    pub async fn update(
        &mut self,
        id: &str,
        patch: UserPatch,
    ) -> DashboardErrorResult<Option<UserRecord>> {
        let Some(index) = self.users.position(id) else {
            debug!("Update ignored, no user with id {id}");
            return Ok(None);
        };

        let image = self.convert_image(patch.image.as_ref(), false).await?;

        let Some(current) = self.users.all().get(index) else {
            return Ok(None);
        };
        let updated = current.merged(&patch, image);

        let saved = self.users.replace_at(index, updated.clone());
        self.report_save(saved)?;

        info!("Updated user {}", updated.id);
        self.renderer.render(self.users.all());
        self.notifier.notify(USER_UPDATED, NotificationKind::Success);

        Ok(Some(updated))
    }

    /// Delete every user with this id after confirmation.
    ///
    /// Returns whether the prompt was accepted. A declined prompt leaves the
    /// store untouched and emits nothing.
    pub fn delete(&mut self, id: &str) -> DashboardErrorResult<bool> {
        if !self.confirmer.confirm(CONFIRM_DELETE) {
            debug!("Delete of {id} declined");
            return Ok(false);
        }

        let saved = self.users.remove_by_id(id);
        let removed = self.report_save(saved)?;

        info!("Deleted {removed} user(s) with id {id}");
        self.renderer.render(self.users.all());
        self.notifier.notify(USER_DELETED, NotificationKind::Success);

        Ok(true)
    }

    // =========================================================================
    // Query / edit
    // =========================================================================

    /// Filter by name substring and optional role, render and return the view.
    pub fn search(&self, term: &str, category: Option<&str>) -> Vec<UserRecord> {
        let filter = UserFilter::new(term, category.map(str::to_string));
        let view = filter_users(self.users.all(), &filter);
        debug!(
            "Search '{term}' in {:?} matched {} of {}",
            category,
            view.len(),
            self.users.len()
        );
        self.renderer.render(&view);
        view
    }

    /// Render the whole list.
    pub fn render_all(&self) {
        self.renderer.render(self.users.all());
    }

    /// Prefilled form for editing the user with this id.
    pub fn begin_edit(&self, id: &str) -> Option<EditForm> {
        self.users.find_by_id(id).map(EditForm::from_record)
    }

    /// Apply the edited form values to the user the form was opened for.
    ///
    /// Only fields that differ from the prefilled values end up in the patch.
    pub async fn submit_edit(
        &mut self,
        form: &EditForm,
        name: &str,
        role: &str,
        email: &str,
        contact: &str,
        image: Option<ImageSource>,
    ) -> DashboardErrorResult<Option<UserRecord>> {
        let mut patch = form.diff(name, role, email, contact);
        patch.image = image;
        self.update(&form.editing_id, patch).await
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Check the credentials against the gateway and open a session.
    ///
    /// Returns whether the session is active afterwards. A gateway failure is
    /// reported as a toast, not as an error.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
        gateway: &dyn LoginGateway,
    ) -> DashboardErrorResult<bool> {
        let credentials = Credentials::new(username, password);

        match gateway.login(&credentials).await {
            Ok(response) if response.success => {
                self.session.set_logged_in()?;
                info!("User '{username}' logged in");
                self.notifier
                    .notify(LOGIN_SUCCEEDED, NotificationKind::Success);
                self.check_auth()
            }
            Ok(_) => {
                info!("Login rejected for '{username}'");
                self.notifier.notify(LOGIN_REJECTED, NotificationKind::Error);
                Ok(false)
            }
            Err(e) => {
                warn!("Login request failed: {e}");
                self.notifier.notify(LOGIN_FAILED, NotificationKind::Error);
                Ok(false)
            }
        }
    }

    pub fn logout(&self) -> DashboardErrorResult<()> {
        self.session.clear()?;
        info!("Logged out");
        self.notifier.notify(LOGGED_OUT, NotificationKind::Success);
        Ok(())
    }

    /// Whether a session is active; renders the list when it is.
    pub fn check_auth(&self) -> DashboardErrorResult<bool> {
        let logged_in = self.session.is_logged_in()?;
        if logged_in {
            self.render_all();
        }
        Ok(logged_in)
    }

    /// Session state without rendering.
    pub fn is_logged_in(&self) -> DashboardErrorResult<bool> {
        Ok(self.session.is_logged_in()?)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Convert an optional upload, reporting read failures as a toast.
    ///
    /// With `placeholder` set a missing image resolves to the placeholder URI,
    /// otherwise to `None`.
    async fn convert_image(
        &self,
        image: Option<&ImageSource>,
        placeholder: bool,
    ) -> DashboardErrorResult<Option<String>> {
        let converted = match (image, placeholder) {
            (None, false) => return Ok(None),
            (image, true) => resolve_or_placeholder(image).await,
            (Some(source), false) => source.to_data_uri().await,
        };

        match converted {
            Ok(uri) => Ok(Some(uri)),
            Err(e) => {
                warn!("Image conversion failed: {e}");
                self.notifier.notify(IMAGE_FAILED, NotificationKind::Error);
                Err(e.into())
            }
        }
    }

    /// Pass a storage result through, toasting and logging a failed write.
    fn report_save<T>(&self, saved: DbErrorResult<T>) -> DashboardErrorResult<T> {
        match saved {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!("Saving users failed: {e}");
                self.notifier.notify(SAVE_FAILED, NotificationKind::Error);
                Err(e.into())
            }
        }
    }

    fn fresh_id(&mut self) -> DashboardErrorResult<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = generate_id_with(&mut self.rng);
            if !self.users.contains(&id) {
                return Ok(id);
            }
            debug!("Generated id {id} already taken, drawing again");
        }
        Err(DashboardError::id_space_exhausted(MAX_ID_ATTEMPTS))
    }
}
