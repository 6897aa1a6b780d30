// src/domain/calculator.rs

/// Display shown before any key has been pressed, and after `C`.
pub const EMPTY_DISPLAY: &str = "0";

/// Display shown when a submitted expression could not be evaluated.
pub const ERROR_DISPLAY: &str = "Error";

/// Outcome of a single keypress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPress {
    /// The display changed locally; nothing to submit.
    Updated,
    /// The `=` key was pressed: carries the pending expression with
    /// operator glyphs already translated for submission.
    Submit(String),
}

/// Calculator keypad state.
///
/// Keystrokes accumulate into a literal expression string; the client
/// never evaluates arithmetic itself. `=` hands the expression off for
/// server-side evaluation, `C` resets, and a fresh digit replaces an
/// `0` or `Error` display instead of appending to it.
#[derive(Debug, Clone)]
pub struct Keypad {
    display: String,
    expression: String,
}

impl Keypad {
    pub fn new() -> Self {
        Self {
            display: EMPTY_DISPLAY.to_string(),
            expression: String::new(),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Expression accumulated since the last submit or clear.
    pub fn pending_expression(&self) -> &str {
        &self.expression
    }

    pub fn press(&mut self, key: char) -> KeyPress {
        match key {
            'C' => {
                self.display = EMPTY_DISPLAY.to_string();
                self.expression.clear();
                KeyPress::Updated
            }
            '=' => {
                let expression = sanitize_expression(&self.expression);
                self.expression.clear();
                KeyPress::Submit(expression)
            }
            _ => {
                if self.display == EMPTY_DISPLAY || self.display == ERROR_DISPLAY {
                    self.display = key.to_string();
                    self.expression = key.to_string();
                } else {
                    self.display.push(key);
                    self.expression.push(key);
                }
                KeyPress::Updated
            }
        }
    }

    /// Show the server's evaluation result verbatim.
    pub fn show_result(&mut self, result: &str) {
        self.display = result.to_string();
    }

    /// Show the error indicator after a failed submission.
    pub fn show_error(&mut self) {
        self.display = ERROR_DISPLAY.to_string();
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate the keypad's operator glyphs into the operators the backend
/// evaluates: every `×` becomes `*` and every `÷` becomes `/`.
pub fn sanitize_expression(expression: &str) -> String {
    expression.replace('×', "*").replace('÷', "/")
}
