use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SpendzError};
use crate::settings::DisplaySettings;
use crate::store::StorageBackend;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigAction {
    ShowAll,
    Set(String, String),
}

pub fn run<B: StorageBackend>(backend: &B, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match action {
        ConfigAction::ShowAll => {
            // A corrupt settings blob degrades to defaults; only the record
            // collection gets a loud corruption notice.
            result = result.with_settings(DisplaySettings::load(backend).unwrap_or_default());
        }
        ConfigAction::Set(key, value) => {
            let mut settings = DisplaySettings::load(backend).unwrap_or_default();
            match key.as_str() {
                "base-currency" => {
                    let code = value.trim().to_uppercase();
                    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                        return Err(SpendzError::Api(format!(
                            "Invalid currency code '{}' (expected three letters, e.g. USD)",
                            value
                        )));
                    }
                    settings.base_currency = code;
                }
                "rate-eur" => settings.rate_eur = parse_rate(&value)?,
                "rate-gbp" => settings.rate_gbp = parse_rate(&value)?,
                other => {
                    return Err(SpendzError::Api(format!("Unknown config key: {}", other)));
                }
            }
            settings.save(backend)?;
            result.add_message(CmdMessage::success(format!("Set {}", key)));
            result = result.with_settings(settings);
        }
    }
    Ok(result)
}

fn parse_rate(value: &str) -> Result<f64> {
    let rate: f64 = value
        .trim()
        .parse()
        .map_err(|_| SpendzError::Api(format!("Invalid rate '{}'", value)))?;
    if !rate.is_finite() || rate <= 0.0 {
        return Err(SpendzError::Api(format!("Invalid rate '{}'", value)));
    }
    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn show_returns_defaults_when_nothing_is_saved() {
        let backend = MemBackend::new();
        let result = run(&backend, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.settings, Some(DisplaySettings::default()));
    }

    #[test]
    fn set_base_currency_normalizes_and_persists() {
        let backend = MemBackend::new();
        run(
            &backend,
            ConfigAction::Set("base-currency".into(), "eur".into()),
        )
        .unwrap();

        let settings = DisplaySettings::load(&backend).unwrap();
        assert_eq!(settings.base_currency, "EUR");
    }

    #[test]
    fn set_rates_keeps_the_other_fields() {
        let backend = MemBackend::new();
        run(
            &backend,
            ConfigAction::Set("base-currency".into(), "GBP".into()),
        )
        .unwrap();
        run(&backend, ConfigAction::Set("rate-eur".into(), "1.17".into())).unwrap();

        let settings = DisplaySettings::load(&backend).unwrap();
        assert_eq!(settings.base_currency, "GBP");
        assert_eq!(settings.rate_eur, 1.17);
        assert_eq!(settings.rate_gbp, 1.0);
    }

    #[test]
    fn rejects_malformed_currency_codes() {
        let backend = MemBackend::new();
        for bad in ["US", "DOLLARS", "U5D", ""] {
            let result = run(
                &backend,
                ConfigAction::Set("base-currency".into(), bad.into()),
            );
            assert!(matches!(result, Err(SpendzError::Api(_))), "accepted {:?}", bad);
        }
    }

    #[test]
    fn rejects_non_positive_rates() {
        let backend = MemBackend::new();
        for bad in ["0", "-1.2", "abc", "inf"] {
            let result = run(&backend, ConfigAction::Set("rate-eur".into(), bad.into()));
            assert!(matches!(result, Err(SpendzError::Api(_))), "accepted {:?}", bad);
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let backend = MemBackend::new();
        let result = run(&backend, ConfigAction::Set("color".into(), "red".into()));
        assert!(matches!(result, Err(SpendzError::Api(_))));
    }
}
