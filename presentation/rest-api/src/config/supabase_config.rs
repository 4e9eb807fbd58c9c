use std::env;

/// Settings of the auth service that issues owner bearer tokens.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub audience: String,
    /// Shared secret of projects still signing tokens with HS256.
    pub jwt_secret: Option<String>,
}

impl SupabaseConfig {
    /// Environment variables:
    /// - SUPABASE_URL: Project URL (required)
    /// - SUPABASE_JWT_AUDIENCE: Expected `aud` claim (default: "authenticated")
    /// - SUPABASE_JWT_SECRET: Legacy HS256 secret; when unset tokens are
    ///   verified against the project's JWKS
    pub fn from_env() -> anyhow::Result<Self> {
        let url = env::var("SUPABASE_URL")
            .map_err(|_| anyhow::anyhow!("SUPABASE_URL must be set"))?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            audience: env::var("SUPABASE_JWT_AUDIENCE")
                .unwrap_or_else(|_| "authenticated".to_string()),
            jwt_secret: env::var("SUPABASE_JWT_SECRET")
                .ok()
                .filter(|secret| !secret.is_empty()),
        })
    }

    pub fn issuer(&self) -> String {
        format!("{}/auth/v1", self.url)
    }

    pub fn jwks_url(&self) -> String {
        format!("{}/auth/v1/.well-known/jwks.json", self.url)
    }
}
