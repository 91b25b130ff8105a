use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub fn ok() -> Self { Self { status: "ok" } }
}

/// Body returned by every successful DELETE.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeleteStatus {
    pub status: String,
    pub message: String,
}

impl DeleteStatus {
    pub fn deleted(entity: &str) -> Self {
        Self {
            status: "true".into(),
            message: format!("The {} has been deleted", entity.to_lowercase()),
        }
    }
}
