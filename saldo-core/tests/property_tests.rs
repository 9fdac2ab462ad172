//! Property-based tests for saldo-core.

use proptest::prelude::*;
use saldo_core::{
    EducationTier, LedgerEngine, NewAccount, PaymentRequest, Role, SessionGate, WalletStore,
};

proptest! {
    /// The codec round-trips any valid payload.
    #[test]
    fn test_request_codec_round_trips(
        payee_id in "[a-zA-Z0-9-]{1,40}",
        payee_name in ".{0,50}",
        amount in 1u64..1_000_000_000u64
    ) {
        let request = PaymentRequest::new(payee_id, payee_name, amount);
        let decoded = PaymentRequest::decode(&request.encode().unwrap()).unwrap();
        prop_assert_eq!(decoded, request);
    }

    /// Settlement conserves the sum of all balances, whether it succeeds or
    /// fails.
    #[test]
    fn test_settlement_conserves_total_balance(amounts in prop::collection::vec(1u64..200_000, 1..8)) {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = WalletStore::new(temp_dir.path());
        let gate = SessionGate::new(store.clone());
        let ledger = LedgerEngine::new(store.clone());

        let payer = gate.register(NewAccount {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "pw".to_string(),
            role: Role::Payer,
            education: EducationTier::Degree,
        }).unwrap();
        let payee = gate.register(NewAccount {
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
            password: "pw".to_string(),
            role: Role::Payee,
            education: EducationTier::Diploma,
        }).unwrap();

        let total_before: u64 = store.load_accounts().iter().map(|a| a.balance).sum();

        let mut succeeded = 0usize;
        for amount in amounts {
            if ledger.settle(&payer.id, &payee.id, amount).is_ok() {
                succeeded += 1;
            }
        }

        let accounts = store.load_accounts();
        let total_after: u64 = accounts.iter().map(|a| a.balance).sum();
        prop_assert_eq!(total_before, total_after);

        // Exactly one ledger record per successful settlement.
        prop_assert_eq!(ledger.history(&payer.id).len(), succeeded);
    }

    /// Decoding never panics on arbitrary input.
    #[test]
    fn test_decode_is_total(raw in ".{0,200}") {
        let _ = PaymentRequest::decode(&raw);
    }
}
