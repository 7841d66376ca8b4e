#![allow(dead_code)]

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

// Roll back by default so a test never depends on what another one committed.
// Flip per-binary with `AGORA_TXN_POLICY=commit`.
#[ctor::ctor]
fn init_txn_policy() {
    let policy = match std::env::var("AGORA_TXN_POLICY")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "commit" => agora::db::txn_policy::TxnPolicy::CommitOnOk,
        _ => agora::db::txn_policy::TxnPolicy::RollbackOnOk,
    };

    agora::db::txn_policy::set_txn_policy(policy);
}
