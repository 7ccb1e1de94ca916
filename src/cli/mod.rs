use clap::Parser;

/// Financial Assistant Bot
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Beam Endpoint Args ---
    /// Beam deployment identifier, forms the endpoint host (https://<id>.apps.beam.cloud)
    #[arg(long, env = "BEAM_DEPLOYMENT_ID")]
    pub deployment_id: Option<String>,

    /// Token sent as `Authorization: Basic <token>` to the Beam endpoint
    #[arg(long, env = "BEAM_AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: Option<String>,

    /// Full endpoint URL. Overrides the URL derived from BEAM_DEPLOYMENT_ID.
    #[arg(long, env = "BEAM_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Upper bound in seconds for a single call to the endpoint
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "120")]
    pub request_timeout_secs: u64,

    // --- General App Args ---
    /// Host address and port for the chat UI server to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "0.0.0.0:7860")]
    pub server_addr: String,
}
