//! Rust structs that represent the stored health records.
//!
//! These models define the structure of data as it is kept in and retrieved
//! from the profile and metric stores. They double as the wire models for
//! the API, so field naming follows the external JSON contract.

use serde::{Deserialize, Serialize};

/// Kinds of measurements a user can record against their profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthMetricType {
    HeartRate,
    BloodOxygenLevel,
    BloodGlucoseLevel,
    BodyTemperature,
    SleepHours,
}

/// Per-user health profile. `username` is the unique key; at most one
/// profile may exist per username.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

/// A single measurement owned by exactly one profile, referenced by
/// username. The owning profile must exist when the metric is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetric {
    pub username: String,
    #[serde(rename = "type")]
    pub metric_type: HealthMetricType,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_serializes_with_external_field_names() {
        let metric = HealthMetric {
            username: "testuser".into(),
            metric_type: HealthMetricType::BloodOxygenLevel,
            value: 1.0,
        };

        let json = serde_json::to_string(&metric).unwrap();
        assert!(json.contains("\"type\":\"BLOOD_OXYGEN_LEVEL\""));
        assert!(json.contains("\"value\":1.0"));
    }

    #[test]
    fn profile_deserializes_from_username_only() {
        let profile: HealthProfile = serde_json::from_str(r#"{"username":"aUsername"}"#).unwrap();
        assert_eq!(profile.username, "aUsername");
        assert!(profile.full_name.is_none());
        assert!(profile.email.is_none());
    }
}
