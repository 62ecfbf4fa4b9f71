use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{account::TransactionRecord, command::CommandError, identity::Cpf};

pub mod in_memory_ledger;

/// Which side of a transfer an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferSide {
    Source,
    Destination,
}

impl fmt::Display for TransferSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Source => "origem",
            Self::Destination => "destino",
        })
    }
}

/// Error `Display` strings are the user-facing messages the shell prints
/// verbatim, hence the language.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("Cliente não encontrado. Verifique o CPF.")]
    AccountNotFound { cpf: Cpf },
    #[error("Cliente de {side} não encontrado. Verifique o CPF.")]
    TransferPartyNotFound { cpf: Cpf, side: TransferSide },
    #[error("Senha incorreta. Operação cancelada.")]
    AuthenticationFailed { cpf: Cpf },
    #[error("Saldo insuficiente para a transferência.")]
    InsufficientFunds {
        cpf: Cpf,
        balance: Decimal,
        amount: Decimal,
    },
}

impl From<crate::identity::CpfParseError> for LedgerError {
    fn from(err: crate::identity::CpfParseError) -> Self {
        Self::Command(err.into())
    }
}

/// Ledger interface, plus the "in memory" implementation in
/// [`in_memory_ledger`].
///
/// NOTE: Technically this interface is not necessary, but it is the natural
/// integration point to swap the in-memory maps for something persistent
/// later. Raw identifier strings cross this boundary; normalization happens
/// inside.
pub trait Ledger {
    /// Creates an account with balance zero and an empty history. Returns the
    /// canonical identity, never a handle into internal state.
    fn register(
        &mut self,
        raw_cpf: &str,
        name: &str,
        credential: &str,
    ) -> Result<Cpf, LedgerError>;

    /// Credits `amount` and appends one history record, both-or-neither.
    /// Returns the resulting balance.
    fn deposit(
        &mut self,
        raw_cpf: &str,
        credential: &str,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError>;

    /// Moves `amount` between two accounts as one unit, authenticating the
    /// source only. Returns both post-transfer balances.
    fn transfer(
        &mut self,
        raw_source: &str,
        raw_dest: &str,
        amount: Decimal,
        credential: &str,
    ) -> Result<(Decimal, Decimal), LedgerError>;

    /// Records in insertion order, oldest first. An empty slice is a valid
    /// answer and distinct from an unknown identity.
    fn history(&self, raw_cpf: &str) -> Result<&[TransactionRecord], LedgerError>;
}
