//! Ledger engine: settlement between two accounts plus the append-only
//! transaction history.

use crate::errors::WalletError;
use crate::models::Transaction;
use crate::store::WalletStore;
use crate::Result;

/// Executes settlements and serves ordered history queries.
#[derive(Debug, Clone)]
pub struct LedgerEngine {
    store: WalletStore,
}

impl LedgerEngine {
    pub fn new(store: WalletStore) -> Self {
        Self { store }
    }

    /// Move `amount` from payer to payee and append the transaction record.
    ///
    /// The balance mutation and the ledger append land in one store write,
    /// so no observer ever sees one without the other. On any failure the
    /// store is untouched.
    ///
    /// # Errors
    ///
    /// - [`WalletError::AccountNotFound`] when either id is absent
    /// - [`WalletError::SelfSettlement`] when payer and payee are the same
    /// - [`WalletError::InsufficientFunds`] when the payer cannot cover
    ///   the amount
    pub fn settle(&self, payer_id: &str, payee_id: &str, amount: u64) -> Result<Transaction> {
        let mut accounts = self.store.load_accounts();

        let payer_idx = accounts
            .iter()
            .position(|a| a.id == payer_id)
            .ok_or_else(|| WalletError::AccountNotFound(payer_id.to_string()))?;
        let payee_idx = accounts
            .iter()
            .position(|a| a.id == payee_id)
            .ok_or_else(|| WalletError::AccountNotFound(payee_id.to_string()))?;

        if payer_idx == payee_idx {
            return Err(WalletError::SelfSettlement);
        }

        if accounts[payer_idx].balance < amount {
            return Err(WalletError::InsufficientFunds {
                required: amount,
                available: accounts[payer_idx].balance,
            });
        }

        accounts[payer_idx].balance -= amount;
        accounts[payee_idx].balance += amount;

        let transaction = Transaction::new(&accounts[payer_idx], &accounts[payee_idx], amount);
        self.store.commit_settlement(accounts, transaction.clone())?;

        tracing::info!(
            transaction_id = %transaction.id,
            payer = %transaction.payer_id,
            payee = %transaction.payee_id,
            amount,
            "settlement completed"
        );
        Ok(transaction)
    }

    /// All transactions the account participated in, newest first.
    ///
    /// Timestamp ties keep insertion order (stable sort).
    pub fn history(&self, account_id: &str) -> Vec<Transaction> {
        let mut transactions: Vec<_> = self
            .store
            .load_transactions()
            .into_iter()
            .filter(|t| t.involves(account_id))
            .collect();
        transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        transactions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{AccountDirectory, NewAccount};
    use crate::models::{Account, EducationTier, Role};

    fn setup() -> (tempfile::TempDir, LedgerEngine, Account, Account) {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = WalletStore::new(temp_dir.path());
        let directory = AccountDirectory::new(store.clone());

        let payer = directory
            .register(NewAccount {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                password: "pw".to_string(),
                role: Role::Payer,
                education: EducationTier::Degree,
            })
            .unwrap();
        let payee = directory
            .register(NewAccount {
                name: "Bob".to_string(),
                email: "bob@example.com".to_string(),
                password: "pw".to_string(),
                role: Role::Payee,
                education: EducationTier::Diploma,
            })
            .unwrap();

        (temp_dir, LedgerEngine::new(store), payer, payee)
    }

    #[test]
    fn test_settle_moves_balance_and_appends_record() {
        let (_tmp, ledger, payer, payee) = setup();

        let tx = ledger.settle(&payer.id, &payee.id, 100_000).unwrap();
        assert_eq!(tx.amount, 100_000);
        assert_eq!(tx.payer_id, payer.id);
        assert_eq!(tx.payee_id, payee.id);

        let directory = AccountDirectory::new(WalletStore::new(_tmp.path()));
        assert_eq!(directory.refresh(&payer.id).unwrap().balance, 400_000);
        assert_eq!(directory.refresh(&payee.id).unwrap().balance, 100_000);
    }

    #[test]
    fn test_insufficient_funds_has_no_side_effects() {
        let (_tmp, ledger, payer, payee) = setup();

        let err = ledger.settle(&payer.id, &payee.id, 600_000).unwrap_err();
        assert!(matches!(err, WalletError::InsufficientFunds { .. }));

        assert!(ledger.history(&payer.id).is_empty());
        let directory = AccountDirectory::new(WalletStore::new(_tmp.path()));
        assert_eq!(directory.refresh(&payer.id).unwrap().balance, 500_000);
        assert_eq!(directory.refresh(&payee.id).unwrap().balance, 0);
    }

    #[test]
    fn test_unknown_account_rejected() {
        let (_tmp, ledger, payer, _payee) = setup();

        let err = ledger.settle(&payer.id, "missing", 100).unwrap_err();
        assert!(matches!(err, WalletError::AccountNotFound(_)));

        let err = ledger.settle("missing", &payer.id, 100).unwrap_err();
        assert!(matches!(err, WalletError::AccountNotFound(_)));
    }

    #[test]
    fn test_self_payment_rejected() {
        let (_tmp, ledger, payer, _payee) = setup();

        let err = ledger.settle(&payer.id, &payer.id, 100).unwrap_err();
        assert!(matches!(err, WalletError::SelfSettlement));
        assert!(ledger.history(&payer.id).is_empty());
    }

    #[test]
    fn test_history_is_newest_first() {
        let (_tmp, ledger, payer, payee) = setup();

        ledger.settle(&payer.id, &payee.id, 100).unwrap();
        ledger.settle(&payer.id, &payee.id, 200).unwrap();
        ledger.settle(&payer.id, &payee.id, 300).unwrap();

        let history = ledger.history(&payer.id);
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].amount, 300);
        assert!(history[0].timestamp >= history[1].timestamp);
        assert!(history[1].timestamp >= history[2].timestamp);
    }

    #[test]
    fn test_history_only_involves_participant() {
        let (_tmp, ledger, payer, payee) = setup();
        ledger.settle(&payer.id, &payee.id, 100).unwrap();

        assert_eq!(ledger.history(&payer.id).len(), 1);
        assert_eq!(ledger.history(&payee.id).len(), 1);
        assert!(ledger.history("stranger").is_empty());
    }
}
