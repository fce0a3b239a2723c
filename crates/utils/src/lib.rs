use rand::Rng;

/// Generates a random alphanumeric secret of the given length
pub fn create_random_secret(secret_len: usize) -> String {
    let rng = rand::thread_rng();
    rng.sample_iter(&rand::distributions::Alphanumeric)
        .take(secret_len)
        .map(char::from)
        .collect()
}

/// Creates a storage-safe file name from an uploaded file name by
/// prefixing a random token and stripping characters that object
/// stores tend to reject.
pub fn create_secure_file_name(original: &str) -> String {
    let sanitized: String = original
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}_{}", create_random_secret(8), sanitized)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn creates_secret_of_expected_length() {
        for len in [1, 16, 64].iter() {
            assert_eq!(create_random_secret(*len).len(), *len);
        }
    }

    #[test]
    fn sanitizes_file_names() {
        let name = create_secure_file_name("site plan (v2).pdf");
        assert!(name.ends_with("site_plan__v2_.pdf"));
        assert!(!name.contains(' '));
    }
}
