/// CPF validation and normalization into the canonical `XXX.XXX.XXX-XX` form,
/// which doubles as the account key.
pub mod identity;

/// All logic related to account holder state and balances.
/// State is modified by applying history records, which are created only
/// after every check has passed.
pub mod account;

/// Validated input commands that later are executed by [`ledger`].
pub mod command;

/// Ledger interface, plus "in memory" implementation.
/// Coordinates identity lookup, balance mutation and the history append.
pub mod ledger;

/// Interactive shell bootstrap. Could live in its own crate, but keeping it
/// here lets the integration test drive a whole session through it.
pub mod bin_utils;
