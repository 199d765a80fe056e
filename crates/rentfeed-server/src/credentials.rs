use thiserror::Error;

use rentfeed_core::ServiceConfig;

/// Credential check failures.
///
/// Every variant maps to the same failure envelope on the wire; the variant
/// only changes what the handler logs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("missing credentials")]
    Missing,
    #[error("invalid secret key")]
    InvalidKey,
    #[error("invalid secret password")]
    InvalidPassword,
}

/// Plain equality check against the configured pair.
///
/// Absent and empty headers both report `Missing`. Check order is fixed:
/// missing, then key, then password. No logging here; the caller owns that.
pub fn validate(
    config: &ServiceConfig,
    secret_key: Option<&str>,
    secret_password: Option<&str>,
) -> Result<(), CredentialError> {
    let key = secret_key.unwrap_or_default();
    let password = secret_password.unwrap_or_default();
    if key.is_empty() || password.is_empty() {
        return Err(CredentialError::Missing);
    }
    if key != config.secret_key {
        return Err(CredentialError::InvalidKey);
    }
    if password != config.secret_password {
        return Err(CredentialError::InvalidPassword);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rentfeed_core::RecordCount;

    use super::*;

    fn test_config() -> ServiceConfig {
        ServiceConfig::new(
            "key".to_string(),
            "password".to_string(),
            RecordCount::new(3).expect("valid count"),
            0,
        )
        .expect("valid config")
    }

    #[test]
    fn accepts_matching_pair() {
        let config = test_config();
        assert_eq!(validate(&config, Some("key"), Some("password")), Ok(()));
    }

    #[test]
    fn absent_and_empty_are_both_missing() {
        let config = test_config();
        assert_eq!(
            validate(&config, None, Some("password")),
            Err(CredentialError::Missing)
        );
        assert_eq!(
            validate(&config, Some("key"), None),
            Err(CredentialError::Missing)
        );
        assert_eq!(
            validate(&config, Some(""), Some("password")),
            Err(CredentialError::Missing)
        );
        assert_eq!(
            validate(&config, Some("key"), Some("")),
            Err(CredentialError::Missing)
        );
    }

    #[test]
    fn wrong_key_reported_before_password() {
        let config = test_config();
        assert_eq!(
            validate(&config, Some("nope"), Some("nope")),
            Err(CredentialError::InvalidKey)
        );
        assert_eq!(
            validate(&config, Some("key"), Some("nope")),
            Err(CredentialError::InvalidPassword)
        );
    }
}
