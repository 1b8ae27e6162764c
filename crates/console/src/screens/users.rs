//! User list and the user profile card.

use std::sync::Arc;

use uavfleet_client::FleetGateway;
use uavfleet_core::listing::{apply_filter, enumerate, Pager};
use uavfleet_core::models::user::{UserProfileEdit, NO_PROFILE_CHANGES};
use uavfleet_core::models::User;

use crate::notice::{Notice, CHANGES_SAVED};
use crate::routes::Route;

// ---------------------------------------------------------------------------
// User list
// ---------------------------------------------------------------------------

pub struct UserList {
    gateway: Arc<dyn FleetGateway>,
    all: Vec<User>,
    displayed: Vec<User>,
    search: String,
    pub pager: Pager,
    pub notice: Notice,
}

impl UserList {
    pub fn new(gateway: Arc<dyn FleetGateway>) -> Self {
        Self {
            gateway,
            all: Vec::new(),
            displayed: Vec::new(),
            search: String::new(),
            pager: Pager::default(),
            notice: Notice::default(),
        }
    }

    pub async fn load(&mut self) {
        let users = self.notice.absorb(self.gateway.get_users().await);
        self.all = enumerate(users);
        self.displayed = apply_filter(&self.all, &self.search);
    }

    pub fn rows(&self) -> &[User] {
        &self.displayed
    }

    pub fn set_search(&mut self, needle: impl Into<String>) {
        self.search = needle.into();
        self.displayed = apply_filter(&self.all, &self.search);
        self.pager.reset();
    }

    pub fn open(&self, index: usize) -> Option<Route> {
        self.displayed.get(index).map(|u| Route::UserCard {
            login: u.login.clone(),
        })
    }

    /// Delete the given logins (already confirmed) and reload.
    pub async fn delete(&mut self, logins: &[String]) {
        let selected: Vec<User> = self
            .all
            .iter()
            .filter(|u| logins.contains(&u.login))
            .cloned()
            .collect();
        if selected.is_empty() {
            return;
        }
        self.notice.clear();
        let result = self.gateway.delete_users(&selected).await;
        if self.notice.succeeded(result) {
            self.notice.say(if selected.len() == 1 {
                "Пользователь удален."
            } else {
                "Пользователи удалены."
            });
        }
        self.load().await;
    }
}

// ---------------------------------------------------------------------------
// User card
// ---------------------------------------------------------------------------

pub struct UserCard {
    gateway: Arc<dyn FleetGateway>,
    loaded: Option<User>,
    pub edit: Option<UserProfileEdit>,
    pub notice: Notice,
}

impl UserCard {
    pub fn new(gateway: Arc<dyn FleetGateway>) -> Self {
        Self {
            gateway,
            loaded: None,
            edit: None,
            notice: Notice::default(),
        }
    }

    pub async fn load(&mut self, login: &str) {
        match self.gateway.get_user(login).await {
            Ok(user) => {
                self.edit = Some(UserProfileEdit::from_user(&user));
                self.loaded = Some(user);
            }
            Err(err) => {
                self.notice.fail(&err);
                self.loaded = None;
                self.edit = None;
            }
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.loaded.as_ref()
    }

    pub fn title(&self) -> String {
        self.loaded
            .as_ref()
            .map(User::profile_title)
            .unwrap_or_default()
    }

    /// Save the profile. Saving an unchanged profile only reports that
    /// nothing changed.
    pub async fn submit(&mut self) {
        let (Some(loaded), Some(edit)) = (&self.loaded, &self.edit) else {
            return;
        };
        self.notice.clear();
        if !edit.has_changes(loaded) {
            self.notice.say(NO_PROFILE_CHANGES);
            return;
        }
        let user = edit.to_user(&loaded.login);
        let result = self.gateway.update_user(&user).await;
        if self.notice.succeeded(result) {
            self.notice.say(CHANGES_SAVED);
        }
    }
}
