//! Power ranger record types.

use serde::{Deserialize, Serialize};

/// One row of the `powerranger` table. `id` travels as a JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PowerRanger {
    #[serde(with = "id_string")]
    pub id: i64,
    pub color: String,
    pub name: String,
    pub power: f64,
}

/// Insert payload. The store assigns the id; an `id` sent by the client is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPowerRanger {
    pub color: String,
    pub name: String,
    pub power: f64,
}

impl NewPowerRanger {
    pub fn with_id(self, id: i64) -> PowerRanger {
        PowerRanger {
            id,
            color: self.color,
            name: self.name,
            power: self.power,
        }
    }
}

mod id_string {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(id: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}
