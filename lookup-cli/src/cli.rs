use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Text};
use lookup_core::{Config, QueryController, ViewMode, project, provider_from_config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "lookup", version, about = "City weather lookup")]
pub struct Cli {
    /// Runs the interactive prompt when no subcommand is given.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Look up current weather for a city and exit.
    Show {
        /// City name.
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city }) => show_once(&city).await,
            None => interactive_loop().await,
        }
    }
}

fn configure() -> Result<()> {
    let key = Text::new("OpenWeather API key:").prompt()?;

    let mut cfg = Config::load()?;
    cfg.set_api_key(key.trim().to_string());
    cfg.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

fn new_controller() -> Result<QueryController> {
    let cfg = Config::load()?;
    let provider = provider_from_config(&cfg)?;
    Ok(QueryController::new(provider))
}

/// One-shot lookup. Exits non-zero when the query ends in the error banner.
async fn show_once(city: &str) -> Result<()> {
    let mut controller = new_controller()?;
    controller.set_city_text(city);
    controller.submit().await;

    match project(controller.state()) {
        ViewMode::Snapshot(panel) => {
            print_panel(&panel);
            Ok(())
        }
        ViewMode::Error(message) => Err(anyhow!(message)),
        ViewMode::Idle => Err(anyhow!("No weather data received")),
    }
}

/// The widget loop: prompt for a city, submit on Enter, render the
/// projected view. Esc or Ctrl-C leaves the loop.
async fn interactive_loop() -> Result<()> {
    let mut controller = new_controller()?;

    println!("Enter a city name to look up current weather.");
    loop {
        match Text::new("City name:").prompt() {
            Ok(input) => {
                controller.set_city_text(input);
                controller.submit().await;
                render(&project(controller.state()));
            }
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn render(view: &ViewMode) {
    match view {
        ViewMode::Idle => {}
        ViewMode::Error(message) => println!("! {message}"),
        ViewMode::Snapshot(panel) => print_panel(panel),
    }
}

fn print_panel(panel: &lookup_core::SnapshotPanel) {
    println!();
    println!(
        "{} {}, {} ({})",
        panel.icon.glyph(),
        panel.city,
        panel.country,
        panel.coordinates
    );
    println!("  {}", panel.description);
    println!(
        "  Temperature: {} (feels like {}, min {}, max {})",
        panel.temperature, panel.feels_like, panel.temp_min, panel.temp_max
    );
    println!("  Wind: {}", panel.wind);
    println!("  Humidity: {}", panel.humidity);
    println!("  Sunrise: {}  Sunset: {}", panel.sunrise, panel.sunset);
    println!();
}
