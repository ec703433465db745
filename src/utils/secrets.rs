use rand::{distributions::Alphanumeric, thread_rng, Rng};

pub const TEMP_PASSWORD_LEN: usize = 8;

/// Ephemeral onboarding password mailed to a newly created candidate.
pub fn generate_temp_password() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TEMP_PASSWORD_LEN)
        .map(char::from)
        .collect()
}

/// Six-digit numeric code for password reset, valid for a short window.
pub fn generate_otp_code() -> String {
    thread_rng().gen_range(100_000..1_000_000).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_password_shape() {
        let pw = generate_temp_password();
        assert_eq!(pw.len(), TEMP_PASSWORD_LEN);
        assert!(pw.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn otp_code_is_six_digits() {
        for _ in 0..50 {
            let code = generate_otp_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
