//! Roster service entry-point: loads settings, wires the learning platform
//! client into the aggregation service, and serves HTTP.

mod server;

use std::ffi::OsString;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use roster::inbound::http::health::HealthState;
use roster::settings::RosterSettings;
use server::{ServerConfig, build_roster_query, create_server};

/// Load settings from CLI arguments, environment and config files.
fn load_settings(args: Vec<OsString>) -> Result<RosterSettings> {
    RosterSettings::load_from_iter(args).map_err(|error| eyre!("failed to load settings: {error}"))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = load_settings(std::env::args_os().collect::<Vec<OsString>>())?;
    let roster = build_roster_query(&settings).wrap_err("failed to wire roster service")?;
    let bind_addr = settings.bind_addr().wrap_err("invalid bind address")?;

    let config = ServerConfig::new(bind_addr, roster);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(server::build_prometheus()?));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "roster service listening");
    server.await.wrap_err("server terminated abnormally")
}

#[cfg(test)]
mod tests {
    use super::*;
    use env_lock::lock_env;

    #[test]
    fn settings_load_from_process_arguments() {
        let _guard = lock_env([
            ("ROSTER_API_KEY", Some("from-env")),
            ("ROSTER_JOIN_MODE", None),
            ("ROSTER_BIND_ADDR", None),
            ("ROSTER_FIXTURE_MODE", None),
        ]);

        let settings = load_settings(vec![OsString::from("roster")]).expect("settings load");

        assert_eq!(settings.api_key().expect("key set").as_str(), "from-env");
        assert_eq!(
            settings.bind_addr().expect("default bind").to_string(),
            "0.0.0.0:8080"
        );
    }
}
