use anyhow::{Context, Result, bail};
use clap::Parser;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::{Map, Value, json};

/// Mint an HMAC-signed access token shaped like the hosted auth provider's, for local testing.
///
/// Prints the token on stdout. With `--verbose`, the decoded claims are printed to stderr.
#[derive(Parser, Debug)]
#[command(name = "token-gen", version, about)]
struct Args {
    /// Shared signing secret (same value as the server's AUTH_JWT_SECRET)
    #[arg(long, env = "AUTH_JWT_SECRET", hide_env_values = true)]
    secret: String,

    /// Subject (user id)
    #[arg(long)]
    sub: String,

    #[arg(long)]
    email: Option<String>,

    /// Lifetime in seconds; negative values mint an already expired token
    #[arg(long, default_value_t = 3600, allow_hyphen_values = true)]
    ttl_seconds: i64,

    #[arg(long, default_value = "authenticated")]
    audience: String,

    #[arg(long)]
    issuer: Option<String>,

    /// Set user_metadata.is_admin = true
    #[arg(long, default_value_t = false)]
    admin: bool,

    /// Extra user_metadata entries as key=value (repeatable)
    #[arg(long = "meta", value_name = "KEY=VALUE")]
    meta: Vec<String>,

    /// HS256, HS384 or HS512
    #[arg(long, default_value = "HS256")]
    algorithm: String,

    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn parse_algorithm(raw: &str) -> Result<Algorithm> {
    match raw.to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => bail!("unsupported algorithm: {other} (expected HS256/HS384/HS512)"),
    }
}

fn user_metadata(args: &Args) -> Result<Map<String, Value>> {
    let mut meta = Map::new();
    for entry in &args.meta {
        let (key, value) = entry
            .split_once('=')
            .with_context(|| format!("--meta expects KEY=VALUE, got {entry:?}"))?;
        meta.insert(key.trim().to_string(), Value::String(value.to_string()));
    }
    if args.admin {
        meta.insert("is_admin".to_string(), Value::Bool(true));
    }
    Ok(meta)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.secret.trim().is_empty() {
        bail!("--secret must not be empty");
    }
    if args.sub.trim().is_empty() {
        bail!("--sub must not be empty");
    }

    let algorithm = parse_algorithm(&args.algorithm)?;
    let metadata = user_metadata(&args)?;
    let iat = chrono::Utc::now().timestamp();

    let mut claims = json!({
        "sub": &args.sub,
        "aud": &args.audience,
        "iat": iat,
        "exp": iat + args.ttl_seconds,
        "role": "authenticated",
        "user_metadata": metadata,
        "app_metadata": {},
    });
    if let Some(email) = &args.email {
        claims["email"] = json!(email);
    }
    if let Some(issuer) = &args.issuer {
        claims["iss"] = json!(issuer);
    }

    let mut header = Header::new(algorithm);
    header.typ = Some("JWT".to_string());
    let token = jsonwebtoken::encode(
        &header,
        &claims,
        &EncodingKey::from_secret(args.secret.as_bytes()),
    )
    .context("failed to sign token")?;

    if args.verbose {
        eprintln!("claims = {}", serde_json::to_string_pretty(&claims)?);
    }
    println!("{token}");

    Ok(())
}
