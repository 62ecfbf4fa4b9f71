use std::fmt;

use rust_decimal::Decimal;

use crate::identity::Cpf;

/// One immutable entry in an account's history.
///
/// A transfer produces exactly two of these, one per side, appended in the
/// same logical step. `Display` renders the human-readable line shown in the
/// history listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionRecord {
    Deposit { amount: Decimal },
    TransferSent { amount: Decimal, to: String },
    TransferReceived { amount: Decimal, from: String },
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit { amount } => {
                write!(f, "Depósito de R${amount:.2} realizado com sucesso.")
            }
            Self::TransferSent { amount, to } => {
                write!(f, "Transferência enviada: R${amount:.2} para {to}.")
            }
            Self::TransferReceived { amount, from } => {
                write!(f, "Transferência recebida: R${amount:.2} de {from}.")
            }
        }
    }
}

/// A registered account holder. Balance is modified only through [`apply`],
/// which trusts the record; all validation happens before a record is built.
///
/// [`apply`]: Account::apply
#[derive(Debug)]
pub struct Account {
    id: u64,
    cpf: Cpf,
    name: String,
    credential: String,
    balance: Decimal,
}

impl Account {
    pub fn new(id: u64, cpf: Cpf, name: String, credential: String) -> Self {
        Self {
            id,
            cpf,
            name,
            credential,
            balance: Decimal::ZERO,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn cpf(&self) -> &Cpf {
        &self.cpf
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Plain equality, nothing cryptographic.
    pub fn credential_matches(&self, candidate: &str) -> bool {
        self.credential == candidate
    }

    pub fn apply(&mut self, record: &TransactionRecord) {
        match record {
            TransactionRecord::Deposit { amount } => self.balance += amount,
            TransactionRecord::TransferSent { amount, .. } => self.balance -= amount,
            TransactionRecord::TransferReceived { amount, .. } => self.balance += amount,
        }
    }
}
