//! Contrôle et nettoyage des métadonnées JSON du participant

use crate::config::PipelineConfig;
use crate::error::{EtlError, Result};
use chrono::{Datelike, NaiveDate};
use serde_json::{Map, Value};

/// Format des dates des métadonnées
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Valeur texte d'un champ `section.key`
fn text_field<'a>(metadata: &'a Value, section: &str, key: &str) -> Result<&'a str> {
    metadata
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(Value::as_str)
        .ok_or_else(|| EtlError::MissingField(format!("{section}.{key}")))
}

fn date_field(metadata: &Value, section: &str, key: &str) -> Result<NaiveDate> {
    let value = text_field(metadata, section, key)?;
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| EtlError::InvalidDate {
        field: format!("{section}.{key}"),
        value: value.to_string(),
    })
}

/// Âge en années révolues à la date `today`
pub fn participant_age(metadata: &Value, today: NaiveDate) -> Result<i32> {
    let birth = date_field(metadata, "individual_metadata", "date_of_birth")?;
    let before_birthday = (today.month(), today.day()) < (birth.month(), birth.day());
    Ok(today.year() - birth.year() - i32::from(before_birthday))
}

/// Vérifie que le participant a au moins `min_age` ans
pub fn check_age(metadata: &Value, min_age: i32, today: NaiveDate) -> Result<()> {
    let age = participant_age(metadata, today)?;
    if age < min_age {
        return Err(EtlError::ParticipantTooYoung { age, min: min_age });
    }
    Ok(())
}

/// Vérifie la chronologie prélèvement → demande → réalisation
pub fn check_dates(metadata: &Value, today: NaiveDate, cfg: &PipelineConfig) -> Result<()> {
    let requested = date_field(metadata, "test_metadata", "date_requested")?;
    let completed = date_field(metadata, "test_metadata", "date_completed")?;
    let collected = date_field(metadata, "sample_metadata", "collection_date")?;

    if !(collected <= requested && requested <= completed && completed <= today) {
        return Err(EtlError::InconsistentDates(format!(
            "prélèvement {collected}, demande {requested}, réalisation {completed}, aujourd'hui {today}"
        )));
    }

    let turnaround = (completed - requested).num_days();
    if turnaround > cfg.max_turnaround_days {
        return Err(EtlError::InconsistentDates(format!(
            "{turnaround} jours entre demande et réalisation > {}",
            cfg.max_turnaround_days
        )));
    }

    let sample_age = (requested - collected).num_days();
    if sample_age > cfg.max_sample_age_days {
        return Err(EtlError::InconsistentDates(format!(
            "{sample_age} jours entre prélèvement et demande > {}",
            cfg.max_sample_age_days
        )));
    }

    Ok(())
}

/// `true` si toutes les dates sont valides et cohérentes
pub fn dates_valid(metadata: &Value, today: NaiveDate, cfg: &PipelineConfig) -> bool {
    check_dates(metadata, today, cfg).is_ok()
}

fn check_lengths_at(value: &Value, path: &str, max: usize) -> Result<()> {
    match value {
        Value::String(s) => {
            let len = s.chars().count();
            if len > max {
                return Err(EtlError::ValueTooLong {
                    path: path.to_string(),
                    len,
                    max,
                });
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                check_lengths_at(item, &format!("{path}[{i}]"), max)?;
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                let child = if path.is_empty() { key.clone() } else { format!("{path}.{key}") };
                check_lengths_at(item, &child, max)?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Vérifie qu'aucune valeur texte ne dépasse `max` caractères
pub fn check_value_lengths(metadata: &Value, max: usize) -> Result<()> {
    check_lengths_at(metadata, "", max)
}

pub fn values_length_valid(metadata: &Value, max: usize) -> bool {
    check_value_lengths(metadata, max).is_ok()
}

/// Copie des métadonnées sans les clés commençant par `prefix`, à toute profondeur
pub fn remove_sensitive_data(metadata: &Value, prefix: &str) -> Value {
    match metadata {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(key, _)| !key.starts_with(prefix))
                .map(|(key, value)| (key.clone(), remove_sensitive_data(value, prefix)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| remove_sensitive_data(item, prefix))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Âge, dates puis longueurs; la première règle violée est renvoyée
pub fn validate_metadata(metadata: &Value, cfg: &PipelineConfig, today: NaiveDate) -> Result<()> {
    check_age(metadata, cfg.min_participant_age, today)?;
    check_dates(metadata, today, cfg)?;
    check_value_lengths(metadata, cfg.max_value_length)?;
    Ok(())
}
