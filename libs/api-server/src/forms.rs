use serde::Deserialize;

use student_api::{NewRecord, RecordId, RecordUpdate};

use crate::error::ApiError;

// ═══════════════════════════════════════════════════════════════
//  Raw URL-encoded forms
// ═══════════════════════════════════════════════════════════════
//
// Every field is optional at the wire level so a missing field becomes
// `ApiError::InvalidInput` like any other undecodable body. Values are
// not otherwise constrained; empty strings pass.

#[derive(Debug, Deserialize)]
pub(crate) struct InsertForm {
    name: Option<String>,
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateForm {
    id: Option<String>,
    name: Option<String>,
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeleteForm {
    id: Option<String>,
}

fn require(field: Option<String>, name: &'static str) -> Result<String, ApiError> {
    field.ok_or_else(|| ApiError::InvalidInput(format!("missing form field '{name}'")))
}

impl TryFrom<InsertForm> for NewRecord {
    type Error = ApiError;

    fn try_from(form: InsertForm) -> Result<Self, Self::Error> {
        Ok(NewRecord {
            name: require(form.name, "name")?,
            value: require(form.value, "value")?,
        })
    }
}

impl TryFrom<UpdateForm> for RecordUpdate {
    type Error = ApiError;

    fn try_from(form: UpdateForm) -> Result<Self, Self::Error> {
        Ok(RecordUpdate {
            id: RecordId::new(require(form.id, "id")?),
            name: require(form.name, "name")?,
            value: require(form.value, "value")?,
        })
    }
}

impl TryFrom<DeleteForm> for RecordId {
    type Error = ApiError;

    fn try_from(form: DeleteForm) -> Result<Self, Self::Error> {
        Ok(RecordId::new(require(form.id, "id")?))
    }
}
