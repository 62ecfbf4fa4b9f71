use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::{
    account::{Account, TransactionRecord},
    command::{RegisterCommand, TransferCommand, positive_amount},
    identity::Cpf,
};

use super::{Ledger, LedgerError, TransferSide};

/// Whether transfers may overdraw the source account. The historical
/// behavior never re-checks the balance, so overdrafts are the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SolvencyPolicy {
    #[default]
    AllowOverdraft,
    RejectInsufficient,
}

/// In-memory [`Ledger`].
///
/// `accounts` and `histories` always hold the same key set: both entries are
/// created together in [`register`] and nothing ever removes them. All
/// mutation goes through `&mut self`, so ownership serializes operations the
/// way the single-threaded original did.
///
/// [`register`]: Ledger::register
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    accounts: HashMap<Cpf, Account>,
    histories: HashMap<Cpf, Vec<TransactionRecord>>,
    solvency: SolvencyPolicy,
    // monotonic, never derived from the map length
    next_account_id: u64,
}

impl InMemoryLedger {
    pub fn with_policy(solvency: SolvencyPolicy) -> Self {
        Self {
            solvency,
            ..Self::default()
        }
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

impl Ledger for InMemoryLedger {
    fn register(
        &mut self,
        raw_cpf: &str,
        name: &str,
        credential: &str,
    ) -> Result<Cpf, LedgerError> {
        let cpf = Cpf::parse(raw_cpf)?;
        let entry = self.accounts.entry(cpf);
        let cmd = RegisterCommand::parse(&entry, name, credential)?;
        self.next_account_id += 1;
        let account = Account::new(
            self.next_account_id,
            cmd.cpf.clone(),
            cmd.name,
            cmd.credential,
        );
        entry.insert_entry(account);
        self.histories.insert(cmd.cpf.clone(), Vec::new());
        tracing::info!(cpf = %cmd.cpf, id = self.next_account_id, "account registered");
        Ok(cmd.cpf)
    }

    fn deposit(
        &mut self,
        raw_cpf: &str,
        credential: &str,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        let cpf = Cpf::parse(raw_cpf)?;
        let Some(account) = self.accounts.get_mut(&cpf) else {
            return Err(LedgerError::AccountNotFound { cpf });
        };
        if !account.credential_matches(credential) {
            return Err(LedgerError::AuthenticationFailed { cpf });
        }
        let amount = positive_amount(amount)?;
        let record = TransactionRecord::Deposit { amount };
        account.apply(&record);
        let balance = account.balance();
        self.histories.entry(cpf.clone()).or_default().push(record);
        tracing::debug!(%cpf, %amount, %balance, "deposit applied");
        Ok(balance)
    }

    fn transfer(
        &mut self,
        raw_source: &str,
        raw_dest: &str,
        amount: Decimal,
        credential: &str,
    ) -> Result<(Decimal, Decimal), LedgerError> {
        let cmd = TransferCommand::parse(raw_source, raw_dest, amount, credential)?;

        // every check runs before either leg is applied
        let Some(source) = self.accounts.get(&cmd.source) else {
            return Err(LedgerError::TransferPartyNotFound {
                cpf: cmd.source,
                side: TransferSide::Source,
            });
        };
        let Some(dest) = self.accounts.get(&cmd.dest) else {
            return Err(LedgerError::TransferPartyNotFound {
                cpf: cmd.dest,
                side: TransferSide::Destination,
            });
        };
        if !source.credential_matches(&cmd.credential) {
            return Err(LedgerError::AuthenticationFailed { cpf: cmd.source });
        }
        if self.solvency == SolvencyPolicy::RejectInsufficient && source.balance() < cmd.amount {
            return Err(LedgerError::InsufficientFunds {
                cpf: cmd.source,
                balance: source.balance(),
                amount: cmd.amount,
            });
        }

        let sent = TransactionRecord::TransferSent {
            amount: cmd.amount,
            to: dest.name().to_string(),
        };
        let received = TransactionRecord::TransferReceived {
            amount: cmd.amount,
            from: source.name().to_string(),
        };

        let (source_balance, dest_balance) = if cmd.source == cmd.dest {
            // both legs land on the same account and net to zero
            let Some(account) = self.accounts.get_mut(&cmd.source) else {
                return Err(LedgerError::TransferPartyNotFound {
                    cpf: cmd.source,
                    side: TransferSide::Source,
                });
            };
            account.apply(&sent);
            account.apply(&received);
            (account.balance(), account.balance())
        } else {
            let Some(source) = self.accounts.get_mut(&cmd.source) else {
                return Err(LedgerError::TransferPartyNotFound {
                    cpf: cmd.source,
                    side: TransferSide::Source,
                });
            };
            source.apply(&sent);
            let source_balance = source.balance();
            let Some(dest) = self.accounts.get_mut(&cmd.dest) else {
                return Err(LedgerError::TransferPartyNotFound {
                    cpf: cmd.dest,
                    side: TransferSide::Destination,
                });
            };
            dest.apply(&received);
            (source_balance, dest.balance())
        };

        self.histories
            .entry(cmd.source.clone())
            .or_default()
            .push(sent);
        self.histories
            .entry(cmd.dest.clone())
            .or_default()
            .push(received);
        tracing::debug!(
            source = %cmd.source,
            dest = %cmd.dest,
            amount = %cmd.amount,
            "transfer applied"
        );
        Ok((source_balance, dest_balance))
    }

    fn history(&self, raw_cpf: &str) -> Result<&[TransactionRecord], LedgerError> {
        let cpf = Cpf::parse(raw_cpf)?;
        match self.histories.get(&cpf) {
            Some(records) => Ok(records.as_slice()),
            None => Err(LedgerError::AccountNotFound { cpf }),
        }
    }
}
