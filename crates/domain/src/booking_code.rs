// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Human-facing booking reference codes.

/// Prefix shared by every booking code.
pub const BOOKING_CODE_PREFIX: &str = "BKG-";

/// Number of random characters following the prefix.
const CODE_LENGTH: usize = 9;

/// Characters drawn for the random portion of a code.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a booking reference code of the form `BKG-XXXXXXXXX`.
///
/// Codes are random, not sequential. Uniqueness is enforced where
/// bookings are stored; callers must generate a fresh code if storage
/// reports a collision.
#[must_use]
pub fn generate_booking_code() -> String {
    let mut code = String::with_capacity(BOOKING_CODE_PREFIX.len() + CODE_LENGTH);
    code.push_str(BOOKING_CODE_PREFIX);
    for _ in 0..CODE_LENGTH {
        let index = rand::random_range(0..CODE_ALPHABET.len());
        code.push(char::from(CODE_ALPHABET[index]));
    }
    code
}
