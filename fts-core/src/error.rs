//! Error taxonomy for the ledger, mirroring the `thiserror`-based `BtcError`
//! style used elsewhere in this workspace's ancestry: fatal conditions get a
//! variant here and are propagated with `?`; diagnostic-only conditions (see
//! [`crate::integrity`]) are returned as data instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FtsError {
    /// A transaction's outputs ask for more value than its inputs carry (§4.3).
    #[error("transaction {txhash} outputs exceed inputs")]
    OutputsExceedInputs { txhash: String },

    /// An `edge` event referenced an outpoint not present in the forward map (§4.4).
    #[error("edge references unknown utxo {outpoint}")]
    MissingUtxo { outpoint: String },

    /// Attempted to construct a `SatoshiRange` with `lo >= hi`.
    #[error("malformed range [{lo}, {hi})")]
    MalformedRange { lo: u64, hi: u64 },
}

pub type Result<T> = std::result::Result<T, FtsError>;
