//! Logging helpers.

/// Logs through `msg!` only when the `debug-logs` feature is enabled.
///
/// Intermediate math and ledger readings go through this macro; the operation
/// entry, failure and summary lines always use `msg!` directly.
#[macro_export]
macro_rules! debug_msg {
    ($($arg:tt)*) => {
        if cfg!(feature = "debug-logs") {
            solana_program::msg!($($arg)*);
        }
    };
}
