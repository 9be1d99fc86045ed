use clap::Parser;
use image_palette::config::cli::{LogFormat, OutputMode};
use image_palette::utils::{logger, validation::Validate};
use image_palette::{CliConfig, PaletteError, PaletteService};
use serde::Serialize;

fn render<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn exit_with_config_error(e: PaletteError) -> ! {
    tracing::error!("❌ Configuration validation failed: {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with_config_error(e);
    }
    let client_config = match config.client_config() {
        Ok(client_config) => client_config,
        Err(e) => exit_with_config_error(e),
    };
    let service = match PaletteService::http(&client_config) {
        Ok(service) => service,
        Err(e) => exit_with_config_error(e),
    };

    let output = match config.mode {
        OutputMode::Palette => match service.get_palette(&config.url).await {
            Some(palette) => Some(render(&palette, config.pretty)?),
            None => None,
        },
        OutputMode::TextColor => match service.get_text_color(&config.url).await {
            Some(text_color) => Some(render(&text_color, config.pretty)?),
            None => None,
        },
        OutputMode::Combo => match service.get_combo(&config.url).await {
            Some(combo) => Some(render(&combo, config.pretty)?),
            None => None,
        },
    };

    match output {
        Some(json) => println!("{}", json),
        None => {
            eprintln!("❌ No palette result for {}", config.url);
            std::process::exit(1);
        }
    }

    Ok(())
}
