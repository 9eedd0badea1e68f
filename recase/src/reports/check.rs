//! Check command report data structures.

use super::output::{Output, Report};

/// Report data from input validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Number of inputs checked.
    pub checked: usize,
    /// Error messages, one per invalid input.
    pub errors: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        if !self.is_valid() {
            out.newline();
            out.value(&format!(
                "✗ {} of {} input{} invalid",
                self.errors.len(),
                self.checked,
                if self.checked == 1 { "" } else { "s" }
            ));
            return;
        }

        out.value(&format!(
            "✓ {} input{} valid",
            self.checked,
            if self.checked == 1 { "" } else { "s" }
        ));
    }
}
