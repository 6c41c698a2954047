// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions.
//!
//! Each handler takes the persistence layer, an already-validated actor
//! where the operation needs one, and the clock. Handlers authorize
//! first, then validate, then touch the store.

use repairdesk::{Command, NewTicket, TransitionResult, apply, apply_create};
use repairdesk_domain::{
    Money, Role, ServiceCode, Ticket, TicketStatus, format_timestamp, normalize_email,
    normalize_name, normalize_optional, validate_password,
};
use repairdesk_persistence::{
    NewUserData, Persistence, PersistenceError, TicketStats, TicketUpdateError, UserData,
};
use time::{Duration, OffsetDateTime};
use tracing::{debug, info, warn};

use crate::auth::{AuthenticatedActor, AuthenticationService, AuthorizationService};
use crate::capabilities::compute_ticket_capabilities;
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    CreateTicketRequest, CreateUserRequest, ListTicketsResponse, ListUsersResponse, LoginRequest,
    LoginResponse, TicketInfo, TicketListEntry, TicketStatsResponse, UpdateTicketRequest,
    UserInfo,
};

fn ticket_not_found() -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Service"),
        message: String::from("Service not found"),
    }
}

// ========================================================================
// Account Handlers
// ========================================================================

/// Creates a staff account.
///
/// While no account exists, the request may be unauthenticated and must
/// create an admin. Afterwards only admins may create accounts.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The create user request
/// * `authenticated_actor` - The caller, if a session was presented
/// * `now` - The current time
///
/// # Errors
///
/// Returns an error if:
/// - Accounts exist and the caller is missing or not an admin
/// - The first account is not an admin
/// - A field is invalid
/// - The email is already registered
/// - Database operations fail
pub fn create_user(
    persistence: &mut Persistence,
    request: CreateUserRequest,
    authenticated_actor: Option<&AuthenticatedActor>,
    now: OffsetDateTime,
) -> Result<UserInfo, ApiError> {
    let user_count: i64 = persistence
        .count_users()
        .map_err(|e| translate_persistence_error(e, "Failed to count users"))?;

    if user_count > 0 {
        let actor: &AuthenticatedActor =
            authenticated_actor.ok_or_else(|| ApiError::AuthenticationFailed {
                reason: String::from("Authentication required"),
            })?;
        AuthorizationService::authorize_manage_users(actor)?;
    }

    let role: Role = request.role.parse().map_err(translate_domain_error)?;
    if user_count == 0 {
        if role != Role::Admin {
            return Err(ApiError::InvalidInput {
                field: String::from("role"),
                message: String::from("The first account must be an admin"),
            });
        }
        info!("Creating first admin account");
    }

    let name: String = normalize_name(&request.name).map_err(translate_domain_error)?;
    let email: String = normalize_email(&request.email).map_err(translate_domain_error)?;
    validate_password(&request.password).map_err(translate_domain_error)?;
    let phone: Option<String> = normalize_optional(request.phone);
    let address: Option<String> = normalize_optional(request.address);
    let photo: Option<String> = normalize_optional(request.photo);
    let now: String = format_timestamp(now).map_err(translate_domain_error)?;

    let new_user: NewUserData<'_> = NewUserData {
        name: &name,
        phone: phone.as_deref(),
        address: address.as_deref(),
        photo: photo.as_deref(),
        role: role.as_str(),
        email: &email,
        password: &request.password,
    };

    let user_id: i64 = match persistence.create_user(&new_user, &now) {
        Ok(user_id) => user_id,
        Err(PersistenceError::UniqueViolation { .. }) => {
            return Err(ApiError::AlreadyExists {
                resource_type: String::from("User"),
                message: String::from("Email already exists"),
            });
        }
        Err(e) => return Err(translate_persistence_error(e, "Failed to create user")),
    };

    let user: UserData = persistence
        .get_user_by_id(user_id)
        .map_err(|e| translate_persistence_error(e, "Failed to load user"))?
        .ok_or_else(|| ApiError::Internal {
            message: String::from("User not found after creation"),
        })?;

    Ok(UserInfo::from(user))
}

/// Lists all staff accounts, newest first.
///
/// Any authenticated user may list accounts (the technician picker needs
/// them).
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_users(
    persistence: &mut Persistence,
    _authenticated_actor: &AuthenticatedActor,
) -> Result<ListUsersResponse, ApiError> {
    let users: Vec<UserData> = persistence
        .list_users()
        .map_err(|e| translate_persistence_error(e, "Failed to list users"))?;

    Ok(ListUsersResponse {
        users: users.into_iter().map(UserInfo::from).collect(),
    })
}

// ========================================================================
// Authentication Handlers
// ========================================================================

/// Authenticates a user and creates a session.
///
/// # Errors
///
/// Returns `AuthenticationFailed` for an unknown email or a wrong
/// password (same message for both), or `Internal` if the store fails.
pub fn login(
    persistence: &mut Persistence,
    request: &LoginRequest,
    now: OffsetDateTime,
    session_ttl: Duration,
) -> Result<LoginResponse, ApiError> {
    let (session, _actor, user) = AuthenticationService::login(
        persistence,
        &request.email,
        &request.password,
        now,
        session_ttl,
    )?;

    Ok(LoginResponse {
        user: UserInfo::from(user),
        token: session.session_token,
        expires_at: session.expires_at,
    })
}

/// Logs out by deleting the session.
///
/// # Errors
///
/// Returns an error if the logout fails.
pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), ApiError> {
    AuthenticationService::logout(persistence, session_token)?;
    Ok(())
}

/// Returns the profile of the session's user.
#[must_use]
pub fn whoami(user: &UserData) -> UserInfo {
    UserInfo::from(user.clone())
}

// ========================================================================
// Ticket Handlers
// ========================================================================

/// Opens a new service ticket.
///
/// Only admin and cs may open tickets. The ticket starts in `terima`
/// with zero costs and a fresh service code.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is neither admin nor cs
/// - The customer name or item type is blank
/// - No service code could be allocated (`Conflict`)
/// - Database operations fail
pub fn create_ticket(
    persistence: &mut Persistence,
    request: CreateTicketRequest,
    authenticated_actor: &AuthenticatedActor,
    now: OffsetDateTime,
) -> Result<TicketInfo, ApiError> {
    AuthorizationService::authorize_create_ticket(authenticated_actor)?;

    let command: Command = Command::CreateTicket {
        customer_name: request.customer_name,
        customer_phone: request.customer_phone,
        customer_address: request.customer_address,
        item_type: request.item_type,
        completeness: request.completeness,
        serial_number: request.serial_number,
        notes: request.notes,
    };

    let new_ticket: NewTicket = apply_create(command, now).map_err(translate_core_error)?;

    let ticket: Ticket = persistence
        .create_ticket(&new_ticket)
        .map_err(|e| translate_persistence_error(e, "Failed to create ticket"))?;

    info!(
        user_id = authenticated_actor.user_id,
        service_code = %ticket.service_code,
        "Ticket opened"
    );
    Ok(TicketInfo::from(ticket))
}

/// Looks up a ticket by its service code.
///
/// This is the public status check; no session is needed. A malformed
/// code is reported the same way as an unknown one.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no ticket carries the code, or
/// `Internal` if the database query fails.
pub fn get_ticket(
    persistence: &mut Persistence,
    service_code: &str,
) -> Result<TicketInfo, ApiError> {
    let Ok(code) = service_code.parse::<ServiceCode>() else {
        debug!(service_code, "Rejected malformed service code");
        return Err(ticket_not_found());
    };

    persistence
        .get_ticket_by_code(&code)
        .map_err(|e| translate_persistence_error(e, "Failed to load ticket"))?
        .map(TicketInfo::from)
        .ok_or_else(ticket_not_found)
}

/// Lists all tickets, most recent first, with the caller's capabilities
/// on each.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_tickets(
    persistence: &mut Persistence,
    authenticated_actor: &AuthenticatedActor,
) -> Result<ListTicketsResponse, ApiError> {
    let tickets: Vec<Ticket> = persistence
        .list_tickets()
        .map_err(|e| translate_persistence_error(e, "Failed to list tickets"))?;

    let services: Vec<TicketListEntry> = tickets
        .into_iter()
        .map(|ticket| TicketListEntry {
            capabilities: compute_ticket_capabilities(authenticated_actor, &ticket),
            ticket: TicketInfo::from(ticket),
        })
        .collect();

    Ok(ListTicketsResponse { services })
}

/// Applies a partial update to a ticket.
///
/// The role rule table is evaluated against the ticket as stored, before
/// the update. Changing `technicianId` additionally requires admin or cs;
/// sending back the technician already on the ticket is not a change.
/// Authorization, the merge and the write happen in one store
/// transaction, so concurrent updates cannot drop each other's fields.
///
/// # Errors
///
/// Returns an error if:
/// - No ticket has the id
/// - The actor may not edit the ticket, or may not assign technicians
/// - A cost is negative, the status is unknown, or the total overflows
/// - Database operations fail
pub fn update_ticket(
    persistence: &mut Persistence,
    request: UpdateTicketRequest,
    authenticated_actor: &AuthenticatedActor,
    now: OffsetDateTime,
) -> Result<TicketInfo, ApiError> {
    let ticket_id: i64 = request.id;

    let result: TransitionResult = persistence
        .update_ticket_with(ticket_id, |current: &Ticket| {
            revise_ticket(current, request, authenticated_actor, now)
        })
        .map_err(|e| match e {
            TicketUpdateError::Rejected(api_error) => api_error,
            TicketUpdateError::Store(PersistenceError::NotFound(_)) => ticket_not_found(),
            TicketUpdateError::Store(other) => {
                translate_persistence_error(other, "Failed to update ticket")
            }
        })?;

    info!(
        user_id = authenticated_actor.user_id,
        service_code = %result.new_ticket.service_code,
        changed = ?result.changed_fields,
        "Ticket updated"
    );
    Ok(TicketInfo::from(result.new_ticket))
}

/// Authorizes and applies `request` to the stored `current` ticket.
fn revise_ticket(
    current: &Ticket,
    request: UpdateTicketRequest,
    authenticated_actor: &AuthenticatedActor,
    now: OffsetDateTime,
) -> Result<TransitionResult, ApiError> {
    let reassigns_technician: bool = request
        .technician_id
        .is_some_and(|technician_id| current.technician_id != Some(technician_id));

    if let Err(e) = AuthorizationService::authorize_update_ticket(
        authenticated_actor,
        current,
        reassigns_technician,
    ) {
        warn!(
            user_id = authenticated_actor.user_id,
            role = %authenticated_actor.role,
            service_code = %current.service_code,
            status = %current.status,
            "Ticket update refused"
        );
        return Err(ApiError::from(e));
    }

    let repair_cost: Option<Money> = request
        .repair_cost
        .map(|value| Money::new("repairCost", value))
        .transpose()
        .map_err(translate_domain_error)?;
    let parts_cost: Option<Money> = request
        .parts_cost
        .map(|value| Money::new("partsCost", value))
        .transpose()
        .map_err(translate_domain_error)?;
    let status: Option<TicketStatus> = request
        .status
        .as_deref()
        .map(str::parse::<TicketStatus>)
        .transpose()
        .map_err(translate_domain_error)?;

    let command: Command = Command::UpdateTicket {
        technician_id: request.technician_id,
        damage_report: request.damage_report,
        repair_cost,
        parts_cost,
        status,
    };

    apply(current, command, now).map_err(translate_core_error)
}

/// Counts tickets per status.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn ticket_stats(
    persistence: &mut Persistence,
    _authenticated_actor: &AuthenticatedActor,
) -> Result<TicketStatsResponse, ApiError> {
    let stats: TicketStats = persistence
        .ticket_stats()
        .map_err(|e| translate_persistence_error(e, "Failed to compute ticket stats"))?;

    Ok(TicketStatsResponse::from(stats))
}
