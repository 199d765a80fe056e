/// Header names for the shared-secret credential pair.
pub const SECRET_KEY_HEADER: &str = "X-Secret-Key";
pub const SECRET_PASSWORD_HEADER: &str = "X-Secret-Password";

/// Environment variables consulted when no CLI flag is given.
pub mod env {
    pub const SECRET_KEY: &str = "RENTFEED_SECRET_KEY";
    pub const SECRET_PASSWORD: &str = "RENTFEED_SECRET_PASSWORD";
    pub const RECORDS: &str = "RENTFEED_RECORDS";
    pub const PORT: &str = "PORT";
}

/// Built-in defaults matching the upstream mock deployment.
pub mod defaults {
    pub const SECRET_KEY: &str = "secure_key_123";
    pub const SECRET_PASSWORD: &str = "82a0ffb8demshb019075fd8277f0p132d00jsndaaaab570f69";
    pub const PORT: u16 = 5001;
}
