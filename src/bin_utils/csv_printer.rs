use std::io::Write;

use csv::Writer;
use serde::Serialize;

use crate::account::Account;

/// One row of the end-of-session summary. Balance is pre-formatted so the
/// output always carries two decimal places.
#[derive(Debug, Serialize)]
pub struct AccountRow {
    pub id: u64,
    pub cpf: String,
    pub nome: String,
    pub saldo: String,
}

impl From<&Account> for AccountRow {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id(),
            cpf: account.cpf().to_string(),
            nome: account.name().to_string(),
            saldo: format!("{:.2}", account.balance()),
        }
    }
}

pub fn print_accounts<W>(
    output: &mut W,
    accounts: impl Iterator<Item = AccountRow>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for row in accounts {
        if let Err(err) = writer.serialize(row) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::FromPrimitive;
    use rust_decimal::Decimal;

    use crate::{account::TransactionRecord, identity::Cpf};

    use super::*;

    #[test]
    fn rows_carry_two_decimal_places() {
        let mut account = Account::new(
            1,
            Cpf::parse("12345678901").unwrap(),
            "Ana".to_string(),
            "senha1".to_string(),
        );
        let row = AccountRow::from(&account);
        assert_eq!(row.saldo, "0.00");

        account.apply(&TransactionRecord::Deposit {
            amount: Decimal::from_u32(50).unwrap(),
        });
        let row = AccountRow::from(&account);
        assert_eq!(row.cpf, "123.456.789-01");
        assert_eq!(row.saldo, "50.00");
    }

    #[test]
    fn prints_header_and_rows() {
        let mut output = Vec::new();
        let rows = vec![AccountRow {
            id: 1,
            cpf: "123.456.789-01".to_string(),
            nome: "Ana".to_string(),
            saldo: "20.00".to_string(),
        }];
        print_accounts(&mut output, rows.into_iter()).unwrap();
        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed, "id,cpf,nome,saldo\n1,123.456.789-01,Ana,20.00\n");
    }
}
