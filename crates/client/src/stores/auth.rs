//! Auth store.
//!
//! Signing in stores the session token in the shared [`Session`], so every
//! later request is authenticated.

use std::{fmt, sync::Arc};

use morsel::{
    store::Resource,
    users::{Credentials, ProfileUpdate, Registration, Role, User},
    validation::{validate_registration, validate_sign_in},
};

use crate::{
    http::Session,
    services::AuthService,
    stores::{Slice, StoreError},
};

/// Parts of the auth slice a request can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthChannel {
    /// Sign-in and sign-up.
    Session,

    /// Loading or updating the profile.
    Profile,
}

/// Auth slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Signed-in user's profile, once loaded
    pub user: Option<User>,

    /// Role of the signed-in account
    pub role: Option<Role>,
}

/// Auth store.
pub struct AuthStore {
    service: Arc<dyn AuthService>,
    session: Session,
    slice: Slice<AuthState, AuthChannel>,
}

impl fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthStore")
            .field("session", &self.session)
            .field("slice", &self.slice)
            .finish_non_exhaustive()
    }
}

impl AuthStore {
    #[must_use]
    pub fn new(service: Arc<dyn AuthService>, session: Session) -> Self {
        Self {
            service,
            session,
            slice: Slice::new("auth", AuthState::default()),
        }
    }

    /// Read the slice.
    pub fn read<R>(&self, read: impl FnOnce(&Resource<AuthState, AuthChannel>) -> R) -> R {
        self.slice.read(read)
    }

    /// Dismiss the current error.
    pub fn clear_error(&self) {
        self.slice.clear_error();
    }

    /// Returns true while a session token is held.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session.is_signed_in()
    }

    /// Sign in.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] for blank credentials, or
    /// [`StoreError::Request`] if the request fails.
    pub async fn sign_in(&self, credentials: Credentials) -> Result<(), StoreError> {
        validate_sign_in(&credentials)?;

        self.slice
            .run(
                AuthChannel::Session,
                self.service.sign_in(credentials),
                |state, response| {
                    self.session.set(response.jwt.clone());
                    state.role = Some(response.role);
                },
            )
            .await
            .map_err(StoreError::from)
    }

    /// Create an account and sign in.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] if the registration fails validation, or
    /// [`StoreError::Request`] if the request fails.
    pub async fn sign_up(
        &self,
        registration: Registration,
        confirm_password: &str,
    ) -> Result<(), StoreError> {
        validate_registration(&registration, confirm_password)?;

        self.slice
            .run(
                AuthChannel::Session,
                self.service.sign_up(registration),
                |state, response| {
                    self.session.set(response.jwt.clone());
                    state.role = Some(response.role);
                },
            )
            .await
            .map_err(StoreError::from)
    }

    /// Load the signed-in user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Request`] if the request fails.
    pub async fn load_profile(&self) -> Result<(), StoreError> {
        self.slice
            .run(AuthChannel::Profile, self.service.profile(), |state, user| {
                state.role = Some(user.role);
                state.user = Some(user);
            })
            .await
            .map_err(StoreError::from)
    }

    /// Update the signed-in user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Request`] if the request fails.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<(), StoreError> {
        self.slice
            .run(
                AuthChannel::Profile,
                self.service.update_profile(update),
                |state, user| {
                    state.role = Some(user.role);
                    state.user = Some(user);
                },
            )
            .await
            .map_err(StoreError::from)
    }

    /// Drop the session token and the user's profile.
    pub fn sign_out(&self) {
        self.session.clear();
        self.slice.update(|state| *state = AuthState::default());
    }
}
