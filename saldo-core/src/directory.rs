//! Account directory: registration, authentication and administrative
//! overrides.
//!
//! The administrator is a reserved, synthetic identity resolved before any
//! directory read and never written to the store. It is modeled explicitly
//! as a [`Principal`] variant so it cannot be persisted by accident.

use crate::errors::WalletError;
use crate::models::{Account, EducationTier, Role};
use crate::store::WalletStore;
use crate::Result;

/// Reserved login identifier for the synthetic administrator.
pub const ADMIN_IDENTIFIER: &str = "admin";
/// Reserved secret for the synthetic administrator.
pub const ADMIN_SECRET: &str = "123";
/// Session pointer value of the synthetic administrator.
pub const ADMIN_ID: &str = "admin-super-id";

/// Starting balance assigned to payer accounts at registration.
pub const PAYER_STARTING_BALANCE: u64 = 500_000;

/// Candidate profile for [`AccountDirectory::register`].
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub education: EducationTier,
}

/// Who a session resolves to.
///
/// The synthetic administrator exists only in memory; resolving it never
/// touches the account table and no code path can store it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    /// A regular account backed by the directory.
    Stored(Account),
    /// The reserved administrator identity.
    SyntheticAdministrator,
}

impl Principal {
    /// Materialize the principal as an account record.
    pub fn into_account(self) -> Account {
        match self {
            Principal::Stored(account) => account,
            Principal::SyntheticAdministrator => synthetic_admin(),
        }
    }

    /// Borrowing variant of [`Principal::into_account`].
    pub fn account(&self) -> Account {
        self.clone().into_account()
    }

    pub fn is_administrator(&self) -> bool {
        match self {
            Principal::Stored(account) => account.role == Role::Administrator,
            Principal::SyntheticAdministrator => true,
        }
    }
}

/// The in-memory record the reserved administrator presents as.
fn synthetic_admin() -> Account {
    Account {
        id: ADMIN_ID.to_string(),
        name: "Super Admin".to_string(),
        email: ADMIN_IDENTIFIER.to_string(),
        password: ADMIN_SECRET.to_string(),
        role: Role::Administrator,
        education: EducationTier::Degree,
        balance: 0,
    }
}

/// Identity and credential lookup over the persistent store.
#[derive(Debug, Clone)]
pub struct AccountDirectory {
    store: WalletStore,
}

impl AccountDirectory {
    pub fn new(store: WalletStore) -> Self {
        Self { store }
    }

    /// Register a new account and log it in.
    ///
    /// Fails with [`WalletError::DuplicateIdentity`] when the email is
    /// already taken (exact compare; display name collisions are not
    /// checked). The starting balance is role-scoped: payers receive
    /// [`PAYER_STARTING_BALANCE`], everyone else starts at zero.
    pub fn register(&self, candidate: NewAccount) -> Result<Account> {
        let mut accounts = self.store.load_accounts();

        if accounts.iter().any(|a| a.email == candidate.email) {
            return Err(WalletError::DuplicateIdentity);
        }

        let account = Account {
            id: uuid::Uuid::new_v4().to_string(),
            name: candidate.name,
            email: candidate.email,
            password: candidate.password,
            role: candidate.role,
            education: candidate.education,
            balance: match candidate.role {
                Role::Payer => PAYER_STARTING_BALANCE,
                _ => 0,
            },
        };

        accounts.push(account.clone());
        self.store.save_accounts(accounts)?;

        // Registration implies login.
        self.store.set_session(Some(account.id.clone()))?;

        tracing::info!(account_id = %account.id, role = %account.role, "registered account");
        Ok(account)
    }

    /// Authenticate by email or display name plus secret.
    ///
    /// The reserved administrator credentials are checked before any
    /// directory lookup. Identifier matching is case-insensitive; the secret
    /// must match exactly.
    pub fn authenticate(&self, identifier: &str, secret: &str) -> Result<Principal> {
        if identifier == ADMIN_IDENTIFIER && secret == ADMIN_SECRET {
            self.store.set_session(Some(ADMIN_ID.to_string()))?;
            tracing::info!("administrator login");
            return Ok(Principal::SyntheticAdministrator);
        }

        let wanted = identifier.to_lowercase();
        let account = self
            .store
            .load_accounts()
            .into_iter()
            .find(|a| {
                (a.email.to_lowercase() == wanted || a.name.to_lowercase() == wanted)
                    && a.password == secret
            })
            .ok_or(WalletError::InvalidCredentials)?;

        self.store.set_session(Some(account.id.clone()))?;
        tracing::info!(account_id = %account.id, "login");
        Ok(Principal::Stored(account))
    }

    /// Resolve the session pointer to the authenticated principal, if any.
    pub fn current_account(&self) -> Option<Principal> {
        let id = self.store.session()?;
        if id == ADMIN_ID {
            return Some(Principal::SyntheticAdministrator);
        }
        self.find(&id).map(Principal::Stored)
    }

    /// Re-read one account's current state, e.g. after a settlement changed
    /// its balance.
    pub fn refresh(&self, id: &str) -> Option<Account> {
        if id == ADMIN_ID {
            return Some(synthetic_admin());
        }
        self.find(id)
    }

    /// Clear the session pointer.
    pub fn clear_session(&self) -> Result<()> {
        self.store.set_session(None)
    }

    /// All stored accounts. The synthetic administrator is never among them.
    pub fn list_all(&self) -> Vec<Account> {
        self.store.load_accounts()
    }

    /// Remove an account. Administrative override; the caller is responsible
    /// for checking that an administrator is acting.
    pub fn remove(&self, id: &str) -> Result<()> {
        let mut accounts = self.store.load_accounts();
        let before = accounts.len();
        accounts.retain(|a| a.id != id);
        if accounts.len() == before {
            return Err(WalletError::AccountNotFound(id.to_string()));
        }
        self.store.save_accounts(accounts)
    }

    /// Set an account's balance directly. Administrative override.
    pub fn set_balance(&self, id: &str, new_balance: u64) -> Result<()> {
        self.update(id, |account| account.balance = new_balance)
    }

    /// Set an account's role directly. Administrative override.
    pub fn set_role(&self, id: &str, new_role: Role) -> Result<()> {
        self.update(id, |account| account.role = new_role)
    }

    fn find(&self, id: &str) -> Option<Account> {
        self.store.load_accounts().into_iter().find(|a| a.id == id)
    }

    fn update(&self, id: &str, mutate: impl FnOnce(&mut Account)) -> Result<()> {
        let mut accounts = self.store.load_accounts();
        let account = accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| WalletError::AccountNotFound(id.to_string()))?;
        mutate(account);
        self.store.save_accounts(accounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> (tempfile::TempDir, AccountDirectory) {
        let temp_dir = tempfile::tempdir().unwrap();
        let directory = AccountDirectory::new(WalletStore::new(temp_dir.path()));
        (temp_dir, directory)
    }

    fn candidate(name: &str, email: &str, role: Role) -> NewAccount {
        NewAccount {
            name: name.to_string(),
            email: email.to_string(),
            password: "secret".to_string(),
            role,
            education: EducationTier::SeniorSecondary,
        }
    }

    #[test]
    fn test_register_sets_role_scoped_balance() {
        let (_tmp, directory) = directory();

        let payer = directory
            .register(candidate("Alice", "alice@example.com", Role::Payer))
            .unwrap();
        let payee = directory
            .register(candidate("Bob", "bob@example.com", Role::Payee))
            .unwrap();

        assert_eq!(payer.balance, PAYER_STARTING_BALANCE);
        assert_eq!(payee.balance, 0);
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let (_tmp, directory) = directory();

        directory
            .register(candidate("Alice", "alice@example.com", Role::Payer))
            .unwrap();
        let err = directory
            .register(candidate("Other", "alice@example.com", Role::Payee))
            .unwrap_err();

        assert!(matches!(err, WalletError::DuplicateIdentity));
        assert_eq!(directory.list_all().len(), 1);
    }

    #[test]
    fn test_login_by_name_is_case_insensitive() {
        let (_tmp, directory) = directory();
        directory
            .register(candidate("Alice", "alice@example.com", Role::Payer))
            .unwrap();

        let principal = directory.authenticate("ALICE", "secret").unwrap();
        assert_eq!(principal.account().name, "Alice");

        let principal = directory.authenticate("Alice@Example.COM", "secret").unwrap();
        assert_eq!(principal.account().name, "Alice");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let (_tmp, directory) = directory();
        directory
            .register(candidate("Alice", "alice@example.com", Role::Payer))
            .unwrap();

        let err = directory.authenticate("alice@example.com", "wrong").unwrap_err();
        assert!(matches!(err, WalletError::InvalidCredentials));
    }

    #[test]
    fn test_reserved_admin_bypasses_directory() {
        let (_tmp, directory) = directory();

        let principal = directory.authenticate(ADMIN_IDENTIFIER, ADMIN_SECRET).unwrap();
        assert_eq!(principal, Principal::SyntheticAdministrator);
        assert!(principal.is_administrator());

        // Never persisted.
        assert!(directory.list_all().iter().all(|a| a.id != ADMIN_ID));

        // Session resolves back to the synthetic record.
        let current = directory.current_account().unwrap();
        assert_eq!(current.account().id, ADMIN_ID);
    }

    #[test]
    fn test_overrides_require_existing_account() {
        let (_tmp, directory) = directory();

        assert!(matches!(
            directory.set_balance("missing", 1).unwrap_err(),
            WalletError::AccountNotFound(_)
        ));
        assert!(matches!(
            directory.remove("missing").unwrap_err(),
            WalletError::AccountNotFound(_)
        ));
    }

    #[test]
    fn test_set_role_and_balance() {
        let (_tmp, directory) = directory();
        let account = directory
            .register(candidate("Alice", "alice@example.com", Role::Payee))
            .unwrap();

        directory.set_balance(&account.id, 42).unwrap();
        directory.set_role(&account.id, Role::Payer).unwrap();

        let refreshed = directory.refresh(&account.id).unwrap();
        assert_eq!(refreshed.balance, 42);
        assert_eq!(refreshed.role, Role::Payer);
    }
}
