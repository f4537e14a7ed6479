use config::Config;
use serde::Deserialize;
use std::net::IpAddr;

#[derive(Debug, Deserialize)]
pub struct AdivinaConfig {
    pub address: IpAddr,
    pub port: u16,
    pub public_dir: String,
    pub stats_file: String,
    /// Capability flag for an enhanced hint backend, decided at startup
    pub ai_hints: bool,
    /// Lower bound of the simulated hint latency, zero disables it
    pub hint_delay_ms: u64,
}

pub fn load_config() -> AdivinaConfig {
    let config = Config::builder()
        .add_source(config::File::with_name("Server").required(false))
        .add_source(config::Environment::with_prefix("ADIVINA"))
        .set_default("address", "0.0.0.0")
        .unwrap()
        .set_default("port", 8000)
        .unwrap()
        .set_default("public_dir", "public")
        .unwrap()
        .set_default("stats_file", "stats.json")
        .unwrap()
        .set_default("ai_hints", false)
        .unwrap()
        .set_default("hint_delay_ms", 500)
        .unwrap()
        .build()
        .expect("failed to read config");
    config
        .try_deserialize()
        .expect("failed to deserialize config")
}
