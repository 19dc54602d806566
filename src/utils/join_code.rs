use rand::Rng;

/// Uppercase letters and digits without the easily confused 0/O and 1/I/L
const JOIN_CODE_ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";

pub fn generate_join_code(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| JOIN_CODE_ALPHABET[rng.gen_range(0..JOIN_CODE_ALPHABET.len())] as char)
        .collect()
}

/// Normalize user input before lookup: trimmed, uppercase.
pub fn normalize_join_code(input: &str) -> String {
    input.trim().to_uppercase()
}
