// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization for staff accounts.
//!
//! Authentication turns an email and password into a server-side session
//! and later turns the session token back into an actor. Authorization
//! decides what that actor may do, using the rule table in the domain
//! crate against the ticket's state as stored.

use repairdesk_domain::{
    Role, Ticket, TicketStatus, can_assign_technician, can_create_ticket, can_edit,
    can_manage_users, format_timestamp, normalize_email, parse_timestamp,
};
use repairdesk_persistence::{Persistence, PersistenceError, SessionData, UserData, verify_password};
use time::{Duration, OffsetDateTime};
use tracing::{debug, info, warn};

use crate::error::AuthError;

/// The message returned for every failed login.
///
/// Unknown email and wrong password are deliberately indistinguishable.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// An authenticated staff member with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The user's database id.
    pub user_id: i64,
    /// The user's (normalized) email.
    pub email: String,
    /// The role assigned to this user.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    #[must_use]
    pub const fn new(user_id: i64, email: String, role: Role) -> Self {
        Self {
            user_id,
            email,
            role,
        }
    }

    /// Builds an actor from a stored user record.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored role is not a known role.
    pub fn from_user(user: &UserData) -> Result<Self, AuthError> {
        let role: Role = user.role.parse().map_err(|_| AuthError::Internal {
            message: format!("User {} has unknown role '{}'", user.user_id, user.role),
        })?;
        Ok(Self::new(user.user_id, user.email.clone(), role))
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if the actor may create staff accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not an admin.
    pub fn authorize_manage_users(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        if can_manage_users(actor.role) {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: String::from("create_user"),
                required_role: String::from("admin"),
            })
        }
    }

    /// Checks if the actor may open new tickets.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is neither admin nor cs.
    pub fn authorize_create_ticket(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        if can_create_ticket(actor.role) {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: String::from("create_ticket"),
                required_role: String::from("admin or cs"),
            })
        }
    }

    /// Checks if the actor may apply an update to `ticket`.
    ///
    /// `ticket` must be the state before the update is applied. When
    /// `reassigns_technician` is set (the update names a technician other
    /// than the one stored) the actor must additionally be allowed to
    /// assign technicians.
    ///
    /// # Errors
    ///
    /// Returns an error if the edit table or the assignment rule forbids
    /// the update.
    pub fn authorize_update_ticket(
        actor: &AuthenticatedActor,
        ticket: &Ticket,
        reassigns_technician: bool,
    ) -> Result<(), AuthError> {
        if !can_edit(actor.role, actor.user_id, ticket) {
            let required_role: &str = match ticket.status {
                TicketStatus::Received | TicketStatus::InProgress => {
                    "admin, cs, or the assigned teknisi"
                }
                TicketStatus::Completed => "admin or kasir",
                TicketStatus::Cancelled | TicketStatus::PickedUp => "admin",
            };
            return Err(AuthError::Unauthorized {
                action: format!("update_ticket {}", ticket.service_code),
                required_role: required_role.to_string(),
            });
        }

        if reassigns_technician && !can_assign_technician(actor.role) {
            return Err(AuthError::Unauthorized {
                action: String::from("assign_technician"),
                required_role: String::from("admin or cs"),
            });
        }

        Ok(())
    }
}

/// Authentication service for login and session management.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Default session lifetime.
    pub const DEFAULT_SESSION_TTL: Duration = Duration::days(7);

    /// Authenticates a user and creates a session.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `email` - The email as typed; it is normalized before lookup
    /// * `password` - The plain-text password
    /// * `now` - The current time
    /// * `ttl` - How long the new session stays valid
    ///
    /// # Returns
    ///
    /// A tuple of (`session`, `authenticated_actor`, `user_data`)
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` with the same reason for an unknown
    /// email or a wrong password, or `Internal` if the store fails.
    pub fn login(
        persistence: &mut Persistence,
        email: &str,
        password: &str,
        now: OffsetDateTime,
        ttl: Duration,
    ) -> Result<(SessionData, AuthenticatedActor, UserData), AuthError> {
        let invalid = || AuthError::AuthenticationFailed {
            reason: String::from(INVALID_CREDENTIALS),
        };

        let Ok(email) = normalize_email(email) else {
            return Err(invalid());
        };

        let Some(user) = persistence
            .get_user_by_email(&email)
            .map_err(Self::map_persistence_error)?
        else {
            debug!("Login attempt for unknown email");
            return Err(invalid());
        };

        let matches: bool =
            verify_password(password, &user.password_hash).map_err(Self::map_persistence_error)?;
        if !matches {
            warn!(user_id = user.user_id, "Login attempt with wrong password");
            return Err(invalid());
        }

        let actor: AuthenticatedActor = AuthenticatedActor::from_user(&user)?;

        let session_token: String = Self::generate_session_token();
        let now_str: String = Self::timestamp(now)?;
        let expires_at: OffsetDateTime =
            now.checked_add(ttl).ok_or_else(|| AuthError::Internal {
                message: String::from("Session expiration out of range"),
            })?;
        let expires_at: String = Self::timestamp(expires_at)?;

        persistence
            .create_session(&session_token, user.user_id, &now_str, &expires_at)
            .map_err(Self::map_persistence_error)?;

        let session: SessionData = persistence
            .get_session_by_token(&session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::Internal {
                message: String::from("Session not found after creation"),
            })?;

        info!(user_id = user.user_id, role = %actor.role, "User logged in");
        Ok((session, actor, user))
    }

    /// Validates a session token and returns the authenticated actor.
    ///
    /// A valid session has its activity timestamp refreshed.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` if the token is unknown or expired,
    /// or if its user no longer exists.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
        now: OffsetDateTime,
    ) -> Result<(AuthenticatedActor, UserData), AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime =
            parse_timestamp(&session.expires_at).map_err(|e| AuthError::Internal {
                message: format!("Failed to parse session expiration: {e}"),
            })?;

        if now >= expires_at {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let user: UserData = persistence
            .get_user_by_id(session.user_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("User not found"),
            })?;

        let actor: AuthenticatedActor = AuthenticatedActor::from_user(&user)?;

        persistence
            .update_session_activity(session.session_id, &Self::timestamp(now)?)
            .map_err(Self::map_persistence_error)?;

        Ok((actor, user))
    }

    /// Logs out by deleting the session.
    ///
    /// Deleting an unknown token is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        let deleted: usize = persistence
            .delete_session(session_token)
            .map_err(Self::map_persistence_error)?;
        debug!(deleted, "Session deleted");
        Ok(())
    }

    /// Deletes every session that has expired at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn purge_expired_sessions(
        persistence: &mut Persistence,
        now: OffsetDateTime,
    ) -> Result<usize, AuthError> {
        let purged: usize = persistence
            .delete_expired_sessions(&Self::timestamp(now)?)
            .map_err(Self::map_persistence_error)?;
        if purged > 0 {
            info!(purged, "Purged expired sessions");
        }
        Ok(purged)
    }

    /// Generates an opaque 256-bit session token, hex encoded.
    fn generate_session_token() -> String {
        format!(
            "{:016x}{:016x}{:016x}{:016x}",
            rand::random::<u64>(),
            rand::random::<u64>(),
            rand::random::<u64>(),
            rand::random::<u64>()
        )
    }

    fn timestamp(at: OffsetDateTime) -> Result<String, AuthError> {
        format_timestamp(at).map_err(|e| AuthError::Internal {
            message: e.to_string(),
        })
    }

    /// Maps persistence errors to authentication errors.
    fn map_persistence_error(err: PersistenceError) -> AuthError {
        AuthError::Internal {
            message: format!("Database error: {err}"),
        }
    }
}
