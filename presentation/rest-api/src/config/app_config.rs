use super::{
    checkout_config::CheckoutConfig, cors_config, server_config::ServerConfig,
    supabase_config::SupabaseConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub supabase: SupabaseConfig,
    pub checkout: CheckoutConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            supabase: SupabaseConfig::from_env()?,
            checkout: CheckoutConfig::from_env(),
        })
    }
}
