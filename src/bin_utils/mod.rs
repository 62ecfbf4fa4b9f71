//! This module could be a separate crate on its own, to bootstrap the ledger
//! within a binary, but for simplicity purposes, I include this module
//! directly in the library so the integration test can drive a full session.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rust_decimal::Decimal;

use crate::{
    command::MIN_CREDENTIAL_LEN,
    identity::{CPF_DIGITS, Cpf},
    ledger::{Ledger, LedgerError, in_memory_ledger::InMemoryLedger},
};
use csv_printer::{AccountRow, print_accounts};
use menu::MenuOption;

pub mod csv_printer;
pub mod menu;

/// Interactive menu shell over any reader/writer pair. The shell owns all
/// prompting and retry loops; the ledger validates once and fails fast.
pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: BufRead,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let mut ledger = InMemoryLedger::default();

        loop {
            self.say(menu::MENU)?;
            self.prompt("Escolha uma opção: ")?;
            let Some(choice) = self.try_read_line()? else {
                // end of input counts as leaving the session
                break;
            };
            match MenuOption::parse(&choice) {
                Some(MenuOption::Register) => self.register(&mut ledger)?,
                Some(MenuOption::Transfer) => self.transfer(&mut ledger)?,
                Some(MenuOption::History) => self.history(&ledger)?,
                Some(MenuOption::Deposit) => self.deposit(&mut ledger)?,
                Some(MenuOption::Exit) => {
                    self.say("Saindo do sistema. Até mais!")?;
                    break;
                }
                None => self.say("Opção inválida. Tente novamente.\n")?,
            }
        }

        print_accounts(self.output, ledger.accounts().map(AccountRow::from))
    }

    fn register(&mut self, ledger: &mut InMemoryLedger) -> Result<()> {
        self.say("\nAdicionando um novo cliente...")?;
        let nome = self.ask("Digite o nome do cliente: ")?;
        let cpf = self.ask_cpf("Digite o CPF do cliente (apenas números): ")?;
        let senha = loop {
            let senha = self.ask("Crie uma senha para sua conta: ")?;
            if senha.chars().count() >= MIN_CREDENTIAL_LEN {
                break senha;
            }
            self.say("A senha deve ter pelo menos 4 caracteres.")?;
        };
        match ledger.register(&cpf, &nome, &senha) {
            Ok(_) => self.say(&format!("Cliente {nome} adicionado com sucesso!\n")),
            Err(err) => self.report(&err),
        }
    }

    fn deposit(&mut self, ledger: &mut InMemoryLedger) -> Result<()> {
        self.say("\nAdicionando dinheiro à conta...")?;
        let cpf = self.ask_cpf("Digite o CPF do cliente (apenas números): ")?;
        let senha = self.ask("Digite a senha: ")?;
        let Some(valor) = self.ask_amount("Digite o valor a ser adicionado à conta: R$ ")? else {
            return Ok(());
        };
        match ledger.deposit(&cpf, &senha, valor) {
            Ok(_) => {
                self.say(&format!(
                    "Depósito de R${valor:.2} registrado com sucesso!"
                ))?;
                self.say("Boleto enviado ao e-mail para depósito bancário.\n")
            }
            Err(err) => self.report(&err),
        }
    }

    fn transfer(&mut self, ledger: &mut InMemoryLedger) -> Result<()> {
        self.say("\nIniciando transferência de fundos...")?;
        let origem = self.ask_cpf("Digite o CPF do cliente de origem (apenas números): ")?;
        let destino = self.ask_cpf("Digite o CPF do cliente de destino (apenas números): ")?;
        let Some(valor) = self.ask_amount("Digite o valor a ser transferido: R$ ")? else {
            return Ok(());
        };
        let senha = self.ask("Digite a senha: ")?;
        match ledger.transfer(&origem, &destino, valor, &senha) {
            Ok((saldo_origem, saldo_destino)) => {
                self.say(&format!(
                    "Transferência de R${valor:.2} realizada com sucesso!"
                ))?;
                self.say(&format!("Novo saldo da origem: R${saldo_origem:.2}"))?;
                self.say(&format!("Novo saldo do destino: R${saldo_destino:.2}\n"))
            }
            Err(err) => self.report(&err),
        }
    }

    fn history(&mut self, ledger: &InMemoryLedger) -> Result<()> {
        self.say("\nExibindo histórico de transações...")?;
        let raw = self.ask_cpf("Digite o CPF do cliente (apenas números): ")?;
        match ledger.history(&raw) {
            Ok(records) => {
                let cpf = Cpf::parse(&raw)?;
                self.say(&format!("Histórico de transações para o CPF {cpf}:"))?;
                for record in records {
                    self.say(&format!("- {record}"))?;
                }
                self.say("")
            }
            Err(err) => self.report(&err),
        }
    }

    /// Every ledger error is recoverable: print its message and go back to
    /// the menu.
    fn report(&mut self, err: &LedgerError) -> Result<()> {
        self.say(&format!("{err}\n"))
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        self.prompt(question)?;
        self.read_line()
    }

    /// Retries until the input looks like a raw CPF, mirroring the original
    /// terminal loop. The ledger still validates for real.
    fn ask_cpf(&mut self, question: &str) -> Result<String> {
        loop {
            let raw = self.ask(question)?;
            if raw.len() == CPF_DIGITS && raw.bytes().all(|b| b.is_ascii_digit()) {
                return Ok(raw);
            }
            self.say("CPF inválido. Certifique-se de digitar 11 números.")?;
        }
    }

    /// `None` means the input was not a number; the caller returns to the
    /// menu after the message has been printed.
    fn ask_amount(&mut self, question: &str) -> Result<Option<Decimal>> {
        let raw = self.ask(question)?;
        match raw.parse::<Decimal>() {
            Ok(valor) => Ok(Some(valor)),
            Err(_) => {
                self.say("Valor inválido. Insira um valor positivo.")?;
                Ok(None)
            }
        }
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn prompt(&mut self, question: &str) -> Result<()> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        Ok(())
    }

    fn try_read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn read_line(&mut self) -> Result<String> {
        self.try_read_line()?
            .context("input ended before the session was over")
    }
}
