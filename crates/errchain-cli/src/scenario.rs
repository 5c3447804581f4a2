//! A failing transaction: the network layer fails, and every layer above it
//! wraps the failure with its own context.

use errchain::{ChainError, data};

pub const BANK: &str = "bank_123456";

pub fn create_transaction(id: &str) -> errchain::Result<()> {
    update_database().map_err(|err| {
        errchain::wrap_data!(
            err,
            data! { "transactionId" => id, "userId" => "67890" },
            "failed to complete the transaction on {}",
            BANK
        )
    })
}

fn update_database() -> errchain::Result<()> {
    create_connection().map_err(|err| {
        ChainError::wrap_with_data(
            err,
            data! { "tableName" => "transactions", "operation" => "update" },
            "failed to update the database",
        )
    })
}

fn create_connection() -> errchain::Result<()> {
    open().map_err(|err| {
        ChainError::wrap_with_data(
            err,
            data! { "server" => "db-server-01", "timeoutSeconds" => 30 },
            "connection timeout",
        )
    })
}

fn open() -> errchain::Result<()> {
    Err(ChainError::with_data(
        data! { "network" => "internal", "severity" => "high" },
        "network instability detected",
    ))
}
