use std::env;

/// Server configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub listen_addr: String,
    /// Directory holding the SQLite database file.
    pub db_path: String,
    /// Argon2 PHC hash of the UI password. When unset the login gate is
    /// open (single-user local mode).
    pub password_hash: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let listen_addr =
            env::var("POSEIDON_LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let db_path = env::var("POSEIDON_DB_PATH").unwrap_or_else(|_| "./data".to_string());
        let password_hash = env::var("POSEIDON_AUTH_PASSWORD_HASH")
            .ok()
            .filter(|hash| !hash.trim().is_empty());

        Config {
            listen_addr,
            db_path,
            password_hash,
        }
    }
}
