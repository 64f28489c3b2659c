use super::ExportError;
use crate::store::ResultStore;

/// 两空格缩进的JSON对象，键顺序与报告一致
pub fn to_json(store: &ResultStore) -> Result<Vec<u8>, ExportError> {
    Ok(serde_json::to_vec_pretty(store)?)
}

pub fn from_json(bytes: &[u8]) -> Result<ResultStore, ExportError> {
    Ok(serde_json::from_slice(bytes)?)
}
