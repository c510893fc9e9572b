use serde::{de, Deserialize, Deserializer, Serialize};

use super::{MemberIds, ProjectId};

/// Every mutable field of a project. Columns are nullable, so a field the
/// caller leaves out is stored as `NULL`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectDetails {
    #[serde(alias = "nombre_proyecto")]
    pub name: Option<String>,
    #[serde(alias = "usuario_instagram")]
    pub owner_handle: Option<String>,
    #[serde(alias = "tickets")]
    pub ticket_info: Option<String>,
    #[serde(alias = "tarifa_setter", deserialize_with = "deserialize_decimal")]
    pub setter_rate: Option<f64>,
    #[serde(alias = "objetivo_ventas", deserialize_with = "deserialize_decimal")]
    pub sales_goal: Option<f64>,
    #[serde(alias = "facturacion_estimada", deserialize_with = "deserialize_decimal")]
    pub estimated_revenue: Option<f64>,
    #[serde(alias = "usuarios")]
    pub member_ids: MemberIds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    #[serde(flatten)]
    pub details: ProjectDetails,
}

impl Project {
    pub fn new(id: ProjectId, details: ProjectDetails) -> Self {
        Self { id, details }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DecimalField {
    Number(f64),
    Text(String),
}

/// Reads a decimal sent either as a JSON number or as numeric text, the way
/// form inputs submit it. Blank text is treated as absent.
pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<DecimalField>::deserialize(deserializer)? {
        None => Ok(None),
        Some(DecimalField::Number(value)) => Ok(Some(value)),
        Some(DecimalField::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(DecimalField::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid decimal: {text:?}"))),
    }
}
