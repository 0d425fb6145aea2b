//! Authorization gates
//!
//! Per-handler checks used where public and protected methods share a
//! route path (so route-level layering would not compose).

use crate::AppError;
use crate::auth::CurrentUser;
use crate::security_log;

/// Require the caller to be an administrator.
pub fn require_admin(user: &CurrentUser) -> Result<(), AppError> {
    if !user.is_admin {
        security_log!("WARN", "admin_required", user_id = user.id.clone());
        return Err(AppError::forbidden("Access denied: Admins only."));
    }
    Ok(())
}

/// Require the caller to own the resource.
///
/// Admins get no exemption here — delivery confirmation belongs to the
/// customer.
pub fn require_owner(user: &CurrentUser, owner_id: &str) -> Result<(), AppError> {
    if user.id != owner_id {
        security_log!(
            "WARN",
            "ownership_denied",
            user_id = user.id.clone(),
            owner_id = owner_id.to_string()
        );
        return Err(AppError::forbidden("Access denied: Not your order."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, is_admin: bool) -> CurrentUser {
        CurrentUser {
            id: id.to_string(),
            is_admin,
        }
    }

    #[test]
    fn admin_gate() {
        assert!(require_admin(&user("user:a", true)).is_ok());
        assert!(require_admin(&user("user:a", false)).is_err());
    }

    #[test]
    fn owner_gate_ignores_admin_flag() {
        assert!(require_owner(&user("user:a", false), "user:a").is_ok());
        assert!(require_owner(&user("user:admin", true), "user:a").is_err());
    }
}
