//! Convert operation - batch case conversion.

use recase_core::{Case, convert_bytes};

use crate::reports::{ConvertEntry, ConvertReport};

/// Execute the convert operation.
///
/// Inputs are raw bytes so non-UTF-8 values are reported instead of being
/// lost. Unless `keep_going` is set, conversion stops at the first failure.
pub fn convert<I: AsRef<[u8]>>(case: Case, inputs: &[I], keep_going: bool) -> ConvertReport {
    let mut entries = Vec::with_capacity(inputs.len());
    let mut skipped = 0;

    for (i, input) in inputs.iter().enumerate() {
        let bytes = input.as_ref();
        let display = String::from_utf8_lossy(bytes);

        match convert_bytes(case, bytes) {
            Ok(output) => entries.push(ConvertEntry::converted(display, output)),
            Err(e) => {
                entries.push(ConvertEntry::failed(display, &e));
                if !keep_going {
                    skipped = inputs.len() - i - 1;
                    break;
                }
            }
        }
    }

    ConvertReport {
        case,
        entries,
        skipped,
    }
}
