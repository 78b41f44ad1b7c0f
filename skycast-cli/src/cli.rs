use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use skycast_core::{
    Config, IpLocator, RenderContext, WeatherCache, WeatherClient, WeatherFlow, render,
};

use crate::consent::ConsentGate;
use crate::net::TcpProbe;
use crate::term::{self, StderrProgress};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Current weather for where you are")]
pub struct Cli {
    /// Locale tag used for unit selection, e.g. "en-US". Defaults to $LANG.
    #[arg(long, global = true)]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the last known weather, then fetch a fresh reading for the
    /// current location.
    Show,

    /// Fetch again from the current location, skipping the permission flow.
    Refresh,

    /// Interactive settings: API key, location toggle, permission reset.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let locale = term::locale_tag(self.locale);

        match self.command {
            Command::Show => {
                let config = Config::load()?;
                let flow = build_flow(&config)?;
                let offset = *Local::now().offset();

                // Last known state first, network second.
                let mut prior_icon = None;
                if let Some(cached) = flow.cached() {
                    let fields = render(
                        &cached,
                        &RenderContext { locale: locale.clone(), offset, prior_icon },
                    );
                    prior_icon = fields.icon;
                    term::print_fields(&fields);
                    println!();
                }

                match flow.run().await {
                    Ok(fresh) => {
                        let fields = render(&fresh, &RenderContext { locale, offset, prior_icon });
                        term::print_fields(&fields);
                    }
                    Err(err) => term::print_notice(&err),
                }
            }

            Command::Refresh => {
                let config = Config::load()?;
                let flow = build_flow(&config)?;
                let offset = *Local::now().offset();

                match flow.refresh().await {
                    Ok(fresh) => {
                        let fields =
                            render(&fresh, &RenderContext { locale, offset, prior_icon: None });
                        term::print_fields(&fields);
                    }
                    Err(err) => term::print_notice(&err),
                }
            }

            Command::Configure => configure()?,
        }

        Ok(())
    }
}

fn build_flow(config: &Config) -> Result<WeatherFlow> {
    let client = WeatherClient::new(config.api_key()?.to_string(), config.units.clone());

    Ok(WeatherFlow::new(
        Box::new(ConsentGate::new(config.location_consent)),
        Box::new(IpLocator::new(config.location_enabled)?),
        Box::new(TcpProbe),
        Box::new(StderrProgress),
        client,
        WeatherCache::open_default()?,
    ))
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let key = inquire::Text::new("OpenWeatherMap API key:")
        .with_initial_value(config.api_key.as_deref().unwrap_or(""))
        .prompt()?;
    let key = key.trim();
    if !key.is_empty() {
        config.api_key = Some(key.to_string());
    }

    config.location_enabled = inquire::Confirm::new("Enable location services?")
        .with_default(config.location_enabled)
        .prompt()?;

    if config.location_consent.is_some() {
        let reset = inquire::Confirm::new("Ask again for location permission next time?")
            .with_default(false)
            .prompt()?;
        if reset {
            config.location_consent = None;
        }
    }

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
