use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LogPlotError, LogPlotResult};
use crate::render::Renderer;

use super::{EngineSnapshot, LogPlotEngine};

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope: `{ "schema_version": 1, "snapshot": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl From<EngineSnapshot> for EngineSnapshotJsonContractV1 {
    fn from(snapshot: EngineSnapshot) -> Self {
        Self {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot,
        }
    }
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> LogPlotResult<String> {
        let envelope = EngineSnapshotJsonContractV1::from(self.clone());
        serde_json::to_string_pretty(&envelope).map_err(|e| snapshot_json_error("encode", e))
    }

    /// Reads either a v1 envelope or a bare snapshot object.
    ///
    /// A document carrying `schema_version` is always treated as an envelope,
    /// so an unknown version is reported instead of being misread as a bare
    /// snapshot.
    pub fn from_json_compat_str(input: &str) -> LogPlotResult<Self> {
        let document: Value =
            serde_json::from_str(input).map_err(|e| snapshot_json_error("parse", e))?;

        let Some(version) = document.get("schema_version") else {
            return serde_json::from_value(document).map_err(|e| snapshot_json_error("decode", e));
        };
        if version.as_u64() != Some(u64::from(ENGINE_SNAPSHOT_JSON_SCHEMA_V1)) {
            return Err(LogPlotError::InvalidData(format!(
                "unsupported snapshot schema version: {version}"
            )));
        }
        let envelope: EngineSnapshotJsonContractV1 =
            serde_json::from_value(document).map_err(|e| snapshot_json_error("decode", e))?;
        Ok(envelope.snapshot)
    }
}

fn snapshot_json_error(stage: &str, err: serde_json::Error) -> LogPlotError {
    LogPlotError::InvalidData(format!("failed to {stage} snapshot json: {err}"))
}

impl<R: Renderer> LogPlotEngine<R> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> LogPlotResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
