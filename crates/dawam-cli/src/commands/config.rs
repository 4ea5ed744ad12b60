use clap::Subcommand;
use dawam_core::{geo, Settings};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show all settings
    Show,
    /// Read one value by dotted key path (e.g. work.country)
    Get { key: String },
    /// Set one value by dotted key path
    Set { key: String, value: String },
    /// Default the country from IP geolocation (runs once unless --force)
    DetectCountry {
        #[arg(long)]
        force: bool,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let settings = Settings::load()?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        ConfigAction::Get { key } => {
            let settings = Settings::load()?;
            println!("{}", serde_json::to_string_pretty(&settings.get_key(&key)?)?);
        }
        ConfigAction::Set { key, value } => {
            let mut settings = Settings::load()?;
            settings.set_key(&key, &value)?;
            settings.save()?;
            println!("{}", serde_json::to_string_pretty(&settings.get_key(&key)?)?);
        }
        ConfigAction::DetectCountry { force } => {
            let mut settings = Settings::load()?;
            if settings.country_detected && !force {
                println!(
                    "country already detected ({}); use --force to re-run",
                    settings.work.country
                );
                return Ok(());
            }

            let runtime = tokio::runtime::Runtime::new()?;
            let (profile, detected) = runtime.block_on(geo::detect_or_default());

            settings.work.country = profile.code.to_string();
            settings.work.weekend_days = profile.default_weekend_set();
            settings.country_detected = true;
            settings.save()?;

            let output = serde_json::json!({
                "country": profile.code,
                "name": { "en": profile.name_en, "ar": profile.name_ar },
                "weekend_days": profile.default_weekend,
                "detected_from_network": detected,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
