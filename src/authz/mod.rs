//! Role-based access policy.
//!
//! Pure, I/O-free predicates over [`Role`] and the verified request
//! identity, so the same decision logic gates single-record handlers and
//! bulk list endpoints, and everything here is unit-testable without a
//! database. Every decision is an exhaustive match over the closed role
//! set: adding a role forces each policy to be revisited at compile time.

use uuid::Uuid;

use crate::{
    auth::CurrentUser,
    models::{Case, Role},
};

/// Who may create, update, or delete cases.
pub fn can_manage_cases(role: Role) -> bool {
    match role {
        Role::Admin | Role::Attorney => true,
        Role::Paralegal | Role::Client => false,
    }
}

/// Who may create, update, or delete customer records.
pub fn can_manage_customers(role: Role) -> bool {
    match role {
        Role::Admin | Role::Attorney | Role::Paralegal => true,
        Role::Client => false,
    }
}

/// Who may run the reporting endpoints.
pub fn can_view_reports(role: Role) -> bool {
    match role {
        Role::Admin | Role::Attorney => true,
        Role::Paralegal | Role::Client => false,
    }
}

/// Who may administer user accounts.
pub fn can_manage_users(role: Role) -> bool {
    match role {
        Role::Admin => true,
        Role::Attorney | Role::Paralegal | Role::Client => false,
    }
}

/// Whether `user` may read the customer record `customer_id`.
///
/// Staff roles see every customer; a Client sees only the customer record
/// its account is bound to.
pub fn can_access_customer(user: &CurrentUser, customer_id: Uuid) -> bool {
    match user.role {
        Role::Admin | Role::Attorney | Role::Paralegal => true,
        Role::Client => user.customer_id == Some(customer_id),
    }
}

/// Whether `user` may read an individual case.
///
/// Admin always; an Attorney when assigned to the case; a Client when the
/// case belongs to their customer record. Paralegals work through list
/// views and have no standing single-case grant.
pub fn can_access_case(user: &CurrentUser, case: &Case) -> bool {
    match user.role {
        Role::Admin => true,
        Role::Attorney => case.assigned_attorney == Some(user.user_id),
        Role::Client => user.customer_id == Some(case.client_id),
        Role::Paralegal => false,
    }
}

/// Narrow a result set to the rows the caller owns.
///
/// Staff roles see the set unmodified; a Client keeps only rows whose
/// owning customer id (as reported by `owner_of`) matches their binding.
/// A Client with no customer binding gets nothing (fail closed).
pub fn filter_by_role<T>(
    user: &CurrentUser,
    rows: Vec<T>,
    owner_of: impl Fn(&T) -> Uuid,
) -> Vec<T> {
    match user.role {
        Role::Admin | Role::Attorney | Role::Paralegal => rows,
        Role::Client => match user.customer_id {
            Some(customer_id) => rows
                .into_iter()
                .filter(|row| owner_of(row) == customer_id)
                .collect(),
            None => Vec::new(),
        },
    }
}
