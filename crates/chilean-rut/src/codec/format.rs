//! Rendering of RUTs in each [`RutFormat`].

use crate::model::{Rut, RutFormat};

/// Renders a RUT in the given format.
///
/// The empty sentinel renders as an empty string in every format.
pub fn format(rut: &Rut, mode: RutFormat) -> String {
    let Some(check) = rut.check() else {
        return String::new();
    };

    match mode {
        RutFormat::Full => format!("{}-{}", group_thousands(rut.body()), check),
        RutFormat::OnlyDash => format!("{}-{}", rut.body(), check),
        RutFormat::Escaped => format!("{}{}", rut.body(), check),
    }
}

/// Inserts `.` every 3 digits counting from the right.
pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
