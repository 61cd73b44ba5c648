use crate::cli::Args;
use crate::error::CheckError;
use crate::logger::initialize as LoggerInitialize;
use crate::report::{CheckReport, FieldReport};

use form_core::{
    AvailabilityClient, ControllerSettings, FormConfig, FormController, MemoryView,
};

use common::ErrorLocation;
use models::Field;

use std::panic::Location;

use log::{debug, info};

/// Resolve configuration, then drive the form controller with the values from
/// `args` the way a user filling in the page would.
///
/// # Errors
///
/// Returns [`CheckError`] when nothing was asked, or when logging, configuration
/// or the HTTP client cannot be set up. Rejected values are not errors; they
/// are reported in the returned [`CheckReport`].
pub async fn run(args: Args) -> Result<CheckReport, CheckError> {
    LoggerInitialize(args.log_dir.as_deref(), args.log_level())?;

    if args.long.is_none() && args.short.is_none() {
        return Err(CheckError::Usage {
            message: "Nothing to check: pass --long and/or --short".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let config = resolve_config(&args)?;
    info!("Checking against {}", config.base_url());

    let client = AvailabilityClient::with_timeout(config.base_url(), config.request_timeout())
        .map_err(|e| CheckError::Client {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let settings = ControllerSettings::new(client.base_url())
        .with_min_slug_length(config.slug.min_length)
        .with_messages(config.messages.clone());
    let controller = FormController::new(MemoryView::new(), client, settings);

    controller.initialize(args.short.is_some());

    let mut report = CheckReport {
        prefix: controller.view().prefix(),
        fields: Vec::new(),
    };

    if let Some(long) = args.long.as_deref() {
        controller.view().set_value(Field::Long, long);
        let outcome = controller.validate_long(long).await;
        debug!("Long URL outcome: {outcome:?}");
        report.fields.push(FieldReport {
            field: Field::Long,
            state: controller.view().field(Field::Long),
            outcome,
        });
    }

    if let Some(short) = args.short.as_deref() {
        controller.view().set_value(Field::Short, short);
        let outcome = controller.set_custom_slug_enabled(true, short).await;
        debug!("Custom slug outcome: {outcome:?}");
        report.fields.push(FieldReport {
            field: Field::Short,
            state: controller.view().field(Field::Short),
            outcome,
        });
    }

    Ok(report)
}

/// Config file, then `SHORTY_BASE_URL`, then `--base-url`; validated once merged.
fn resolve_config(args: &Args) -> Result<FormConfig, CheckError> {
    let config_dir = match &args.config_dir {
        Some(dir) => dir.clone(),
        None => FormConfig::default_dir().map_err(|e| CheckError::Config {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
    };

    let mut config = FormConfig::read(&config_dir).map_err(|e| CheckError::Config {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    config.apply_env_overrides();
    if let Some(base_url) = &args.base_url {
        config.service.base_url = Some(base_url.clone());
    }

    config.validate().map_err(|e| CheckError::Config {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    if args.save_config {
        config.save(&config_dir).map_err(|e| CheckError::Config {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
    }

    Ok(config)
}
