//! Yes/no confirmation used before destructive operations.
//!
//! The core never talks to a terminal or a dialog box. Callers hand in a
//! [`Confirm`] implementation; the CLI asks on stdin, tests use
//! [`AlwaysConfirm`] / [`NeverConfirm`] or a closure.

/// Blocking yes/no question. Returns `true` to proceed.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        false
    }
}
