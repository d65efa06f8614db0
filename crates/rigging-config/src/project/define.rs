//! Global constant values.
//!
//! serde_json maps NaN and infinities to `null`, which would silently change
//! a define. Values are therefore checked against figment's value model,
//! which keeps the original float.

use figment::Figment;
use figment::value::{Num, Value as RawValue};
use serde::Serialize;
use serde::ser::Error as _;
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Convert `value` to the JSON form stored in [`Project::define`](super::Project).
pub(crate) fn literal<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<Value> {
    let malformed = |source| ConfigError::MalformedDefine {
        key: key.to_string(),
        source,
    };

    let json = serde_json::to_value(value).map_err(malformed)?;
    if RawValue::serialize(value).is_ok_and(|raw| has_non_finite(&raw)) {
        return Err(malformed(non_finite()));
    }
    Ok(json)
}

/// Reject non-finite numbers under `define` before figment extraction
/// turns them into `null`.
pub(crate) fn check_figment(figment: &Figment) -> Result<()> {
    let Ok(define) = figment.find_value("define") else {
        return Ok(());
    };
    let Some(entries) = define.as_dict() else {
        return Ok(());
    };

    match entries.iter().find(|(_, raw)| has_non_finite(raw)) {
        Some((key, _)) => Err(ConfigError::MalformedDefine {
            key: key.to_string(),
            source: non_finite(),
        }),
        None => Ok(()),
    }
}

fn has_non_finite(raw: &RawValue) -> bool {
    match raw {
        RawValue::Num(_, Num::F32(n)) => !n.is_finite(),
        RawValue::Num(_, Num::F64(n)) => !n.is_finite(),
        RawValue::Array(_, items) => items.iter().any(has_non_finite),
        RawValue::Dict(_, entries) => entries.values().any(has_non_finite),
        _ => false,
    }
}

fn non_finite() -> serde_json::Error {
    serde_json::Error::custom("NaN and infinite numbers have no JSON literal")
}
