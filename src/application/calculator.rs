// src/application/calculator.rs
use crate::application::BackendGateway;
use crate::domain::calculator::KeyPress;
use crate::domain::{DomainError, Keypad};
use tracing::debug;

/// Drives the keypad and submits expressions for server-side
/// evaluation. A failed submission leaves `Error` on the display and
/// still surfaces the failure to the caller.
pub struct CalculatorSession<G: BackendGateway> {
    gateway: G,
    keypad: Keypad,
}

impl<G: BackendGateway> CalculatorSession<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            keypad: Keypad::new(),
        }
    }

    pub fn display(&self) -> &str {
        self.keypad.display()
    }

    pub async fn press(&mut self, key: char) -> Result<(), DomainError> {
        match self.keypad.press(key) {
            KeyPress::Updated => Ok(()),
            KeyPress::Submit(expression) => {
                debug!(%expression, "Submitting expression for evaluation");
                match self.gateway.evaluate_expression(&expression).await {
                    Ok(result) => {
                        self.keypad.show_result(&result);
                        Ok(())
                    }
                    Err(err) => {
                        self.keypad.show_error();
                        Err(err)
                    }
                }
            }
        }
    }

    /// Feed a whole keystroke sequence. If the sequence leaves an
    /// expression pending, a final `=` is pressed on the caller's
    /// behalf.
    pub async fn run_keys(&mut self, keys: &str) -> Result<(), DomainError> {
        for key in keys.chars() {
            self.press(key).await?;
        }
        if !self.keypad.pending_expression().is_empty() {
            self.press('=').await?;
        }
        Ok(())
    }
}
