use std::env;

#[derive(Clone)]
pub struct Config {
    /// Port the HTTP server binds on
    pub port: u16,
    /// Logical database name the movie store is scoped to
    pub database_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "movies".to_string()),
        }
    }
}
