use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Raw input must be exactly this many digits.
pub const CPF_DIGITS: usize = 11;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CpfParseError {
    #[error("CPF inválido. Certifique-se de digitar 11 números.")]
    WrongLength { len: usize },
    #[error("CPF inválido. Certifique-se de digitar 11 números.")]
    NotNumeric,
}

/// A CPF in its canonical `XXX.XXX.XXX-XX` form.
///
/// Parsing accepts only the raw 11-digit input; an already formatted value is
/// rejected rather than re-normalized. Equality and hashing work on the
/// canonical string, so two raw inputs that normalize the same way denote the
/// same account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl Cpf {
    pub fn parse(raw: &str) -> Result<Self, CpfParseError> {
        if raw.len() != CPF_DIGITS {
            return Err(CpfParseError::WrongLength { len: raw.len() });
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CpfParseError::NotNumeric);
        }
        Ok(Self(format!(
            "{}.{}.{}-{}",
            &raw[..3],
            &raw[3..6],
            &raw[6..9],
            &raw[9..]
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_inserts_separators() {
        let cpf = Cpf::parse("12345678901").unwrap();
        assert_eq!(cpf.as_str(), "123.456.789-01");
        assert_eq!(cpf.to_string(), "123.456.789-01");
    }

    #[test]
    fn parse_is_pure() {
        assert_eq!(Cpf::parse("11111111111"), Cpf::parse("11111111111"));
    }

    #[test]
    fn rejects_wrong_length() {
        let err = Cpf::parse("123").unwrap_err();
        assert_eq!(err, CpfParseError::WrongLength { len: 3 });
        let err = Cpf::parse("123456789012").unwrap_err();
        assert_eq!(err, CpfParseError::WrongLength { len: 12 });
    }

    #[test]
    fn rejects_non_numeric() {
        let err = Cpf::parse("1234567890a").unwrap_err();
        assert_eq!(err, CpfParseError::NotNumeric);
    }

    #[test]
    fn formatted_value_is_never_reparsed() {
        // 14 chars, so it fails on length before anything else
        let err = Cpf::parse("123.456.789-01").unwrap_err();
        assert_eq!(err, CpfParseError::WrongLength { len: 14 });
    }
}
