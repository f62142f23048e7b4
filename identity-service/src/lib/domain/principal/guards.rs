use super::errors::AuthError;
use super::models::Principal;

/// Guard for endpoints that require an active principal.
///
/// Currently a passthrough: every authenticated principal is accepted.
/// This is the extension hook for activation policy; the future condition
/// is `principal.active` (e.g. once email confirmation or suspension
/// exists). Kept in the chain so activation checks slot in without
/// touching any route.
pub fn require_active(principal: Principal) -> Result<Principal, AuthError> {
    Ok(principal)
}

/// Guard for admin-only endpoints.
///
/// Composes through `require_active` — the chain is never skipped — then
/// rejects principals without the admin role.
///
/// # Errors
/// * `Forbidden` - Principal role is not admin
pub fn require_admin(principal: Principal) -> Result<Principal, AuthError> {
    let principal = require_active(principal)?;

    if !principal.role.is_admin() {
        return Err(AuthError::Forbidden);
    }

    Ok(principal)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::principal::models::EmailAddress;
    use crate::domain::principal::models::PrincipalId;
    use crate::domain::principal::models::Role;

    fn principal(role: Role) -> Principal {
        Principal {
            id: PrincipalId::new(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            role,
            active: true,
            password_hash: "unused".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_active_accepts_any_authenticated_principal() {
        assert!(require_active(principal(Role::User)).is_ok());
        assert!(require_active(principal(Role::Admin)).is_ok());
    }

    #[test]
    fn test_admin_rejects_ordinary_user() {
        assert!(matches!(
            require_admin(principal(Role::User)),
            Err(AuthError::Forbidden)
        ));
    }

    #[test]
    fn test_admin_accepts_admin() {
        let resolved = require_admin(principal(Role::Admin)).expect("admin should pass");
        assert!(resolved.role.is_admin());
    }
}
