use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use jsonwebtoken::jwk::{AlgorithmParameters, Jwk, JwkSet, KeyAlgorithm};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use once_cell::sync::{Lazy, OnceCell};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::Deserialize;

use crate::config::supabase_config::SupabaseConfig;

const CACHE_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, thiserror::Error)]
enum AuthError {
    #[error("auth.not_configured")]
    NotConfigured,
    #[error("auth.keys_fetch_failed: {0}")]
    KeysFetch(String),
    #[error("auth.invalid_token_header: {0}")]
    InvalidHeader(String),
    #[error("auth.missing_kid")]
    MissingKid,
    #[error("auth.unknown_kid")]
    UnknownKid,
    #[error("auth.keys_not_loaded")]
    KeysNotLoaded,
    #[error("auth.token_validation_failed: {0}")]
    Validation(String),
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct SupabaseClaims {
    sub: String,
    exp: u64,
    email: Option<String>,
    role: Option<String>,
}

#[derive(Clone)]
struct SigningKey {
    key: DecodingKey,
    algorithm: Algorithm,
}

struct CachedKeys {
    keys: HashMap<String, SigningKey>,
    fetched_at: Instant,
}

static CONFIG: OnceCell<SupabaseConfig> = OnceCell::new();
static KEYS_CACHE: Lazy<RwLock<Option<CachedKeys>>> = Lazy::new(|| RwLock::new(None));

/// Installs the auth settings used by `SupabaseBearer`. Later calls are ignored.
pub fn init(config: SupabaseConfig) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Auth configuration already initialized");
    }
}

fn algorithm_for(jwk: &Jwk) -> Option<Algorithm> {
    match jwk.common.key_algorithm {
        Some(KeyAlgorithm::ES256) => Some(Algorithm::ES256),
        Some(KeyAlgorithm::ES384) => Some(Algorithm::ES384),
        Some(KeyAlgorithm::RS256) => Some(Algorithm::RS256),
        Some(KeyAlgorithm::RS384) => Some(Algorithm::RS384),
        Some(KeyAlgorithm::RS512) => Some(Algorithm::RS512),
        Some(KeyAlgorithm::PS256) => Some(Algorithm::PS256),
        Some(KeyAlgorithm::EdDSA) => Some(Algorithm::EdDSA),
        Some(_) => None,
        None => match jwk.algorithm {
            AlgorithmParameters::EllipticCurve(_) => Some(Algorithm::ES256),
            AlgorithmParameters::RSA(_) => Some(Algorithm::RS256),
            AlgorithmParameters::OctetKeyPair(_) => Some(Algorithm::EdDSA),
            AlgorithmParameters::OctetKey(_) => None,
        },
    }
}

async fn fetch_signing_keys(jwks_url: &str) -> Result<HashMap<String, SigningKey>, AuthError> {
    let set: JwkSet = reqwest::get(jwks_url)
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| AuthError::KeysFetch(e.to_string()))?
        .json()
        .await
        .map_err(|e| AuthError::KeysFetch(e.to_string()))?;

    let mut keys = HashMap::new();
    for jwk in &set.keys {
        let (Some(kid), Some(algorithm)) = (jwk.common.key_id.clone(), algorithm_for(jwk)) else {
            continue;
        };
        match DecodingKey::from_jwk(jwk) {
            Ok(key) => {
                keys.insert(kid, SigningKey { key, algorithm });
            }
            Err(e) => tracing::warn!("Skipping unusable signing key {}: {}", kid, e),
        }
    }

    Ok(keys)
}

/// Loads the signing keys unless a fresh copy is cached. `force` refetches
/// regardless, for tokens signed by a key rotated in since the last fetch.
async fn ensure_signing_keys(config: &SupabaseConfig, force: bool) -> Result<(), AuthError> {
    if !force {
        let cache = KEYS_CACHE.read().map_err(|_| AuthError::KeysNotLoaded)?;
        if let Some(cached) = cache.as_ref()
            && cached.fetched_at.elapsed() < CACHE_TTL
        {
            return Ok(());
        }
    }

    let keys = fetch_signing_keys(&config.jwks_url()).await?;

    let mut cache = KEYS_CACHE.write().map_err(|_| AuthError::KeysNotLoaded)?;
    *cache = Some(CachedKeys {
        keys,
        fetched_at: Instant::now(),
    });
    Ok(())
}

fn uses_shared_secret(token: &str, config: &SupabaseConfig) -> bool {
    config.jwt_secret.is_some()
        && decode_header(token)
            .map(|header| header.alg == Algorithm::HS256)
            .unwrap_or(false)
}

/// Verifies `token` and returns its subject, the owner's business id.
fn business_id_from_token(token: &str, config: &SupabaseConfig) -> Result<String, AuthError> {
    let header = decode_header(token).map_err(|e| AuthError::InvalidHeader(e.to_string()))?;

    let signing_key = match &config.jwt_secret {
        Some(secret) if header.alg == Algorithm::HS256 => SigningKey {
            key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm: Algorithm::HS256,
        },
        _ => {
            let kid = header.kid.ok_or(AuthError::MissingKid)?;
            let cache = KEYS_CACHE.read().map_err(|_| AuthError::KeysNotLoaded)?;
            let cached = cache.as_ref().ok_or(AuthError::KeysNotLoaded)?;
            cached.keys.get(&kid).cloned().ok_or(AuthError::UnknownKid)?
        }
    };

    let mut validation = Validation::new(signing_key.algorithm);
    validation.set_audience(&[&config.audience]);
    validation.set_issuer(&[config.issuer()]);
    validation.validate_exp = true;

    let token_data = decode::<SupabaseClaims>(token, &signing_key.key, &validation)
        .map_err(|e| AuthError::Validation(e.to_string()))?;

    Ok(token_data.claims.sub)
}

async fn verify(token: &str) -> Result<String, AuthError> {
    let config = CONFIG.get().ok_or(AuthError::NotConfigured)?;

    if uses_shared_secret(token, config) {
        return business_id_from_token(token, config);
    }

    ensure_signing_keys(config, false).await?;
    match business_id_from_token(token, config) {
        Err(AuthError::UnknownKid) => {
            ensure_signing_keys(config, true).await?;
            business_id_from_token(token, config)
        }
        other => other,
    }
}

/// Bearer token issued by the auth service to a business owner. Holds the
/// verified `sub` claim.
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    bearer_format = "JWT",
    checker = "supabase_bearer_checker"
)]
pub struct SupabaseBearer(pub String);

async fn supabase_bearer_checker(
    _req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<String> {
    match verify(&bearer.token).await {
        Ok(business_id) => Some(business_id),
        Err(e @ (AuthError::NotConfigured | AuthError::KeysFetch(_))) => {
            tracing::error!("Bearer verification unavailable: {e}");
            None
        }
        Err(e) => {
            tracing::warn!("Bearer rejected: {e}");
            None
        }
    }
}
