use std::collections::hash_map::Entry;

use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;

use crate::{
    account::Account,
    identity::{Cpf, CpfParseError},
};

/// Minimum accepted credential length, in characters.
pub const MIN_CREDENTIAL_LEN: usize = 4;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    InvalidIdentity(#[from] CpfParseError),
    #[error("CPF já cadastrado. Use outro CPF.")]
    DuplicateAccount { cpf: Cpf },
    #[error("A senha deve ter pelo menos {MIN_CREDENTIAL_LEN} caracteres.")]
    WeakCredential { len: usize },
    #[error("Valor inválido. Insira um valor positivo.")]
    InvalidAmount { amount: Decimal },
}

/// Validated registration input. Parsing happens against the account map's
/// entry so the duplicate check uses the normalized identity, never the raw
/// input.
#[derive(Debug)]
pub struct RegisterCommand {
    pub cpf: Cpf,
    pub name: String,
    pub credential: String,
}

impl RegisterCommand {
    pub fn parse(
        entry: &Entry<'_, Cpf, Account>,
        name: &str,
        credential: &str,
    ) -> Result<Self, CommandError> {
        let Entry::Vacant(entry) = entry else {
            return Err(CommandError::DuplicateAccount {
                cpf: entry.key().clone(),
            });
        };
        let len = credential.chars().count();
        if len < MIN_CREDENTIAL_LEN {
            return Err(CommandError::WeakCredential { len });
        }
        Ok(Self {
            cpf: entry.key().clone(),
            name: name.to_string(),
            credential: credential.to_string(),
        })
    }
}

/// Validated transfer input. The amount is checked before either identifier
/// is parsed, and both identifiers before any account lookup happens.
#[derive(Debug)]
pub struct TransferCommand {
    pub source: Cpf,
    pub dest: Cpf,
    pub amount: Decimal,
    pub credential: String,
}

impl TransferCommand {
    pub fn parse(
        raw_source: &str,
        raw_dest: &str,
        amount: Decimal,
        credential: &str,
    ) -> Result<Self, CommandError> {
        let amount = positive_amount(amount)?;
        Ok(Self {
            source: Cpf::parse(raw_source)?,
            dest: Cpf::parse(raw_dest)?,
            amount,
            credential: credential.to_string(),
        })
    }
}

/// Shared guard for deposit and transfer amounts.
pub fn positive_amount(amount: Decimal) -> Result<Decimal, CommandError> {
    if amount > Decimal::zero() {
        Ok(amount)
    } else {
        Err(CommandError::InvalidAmount { amount })
    }
}
