//! Data Transfer Objects

use std::collections::BTreeMap;

use serde::Serialize;

use crate::application::CategoryRecord;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 成功响应格式: `{success: true, ...payload}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

// ============================================================================
// Category DTOs
// ============================================================================

/// 分类映射 `{"<id>": "<type>"}`，按 id 排序
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: Vec<CategoryRecord>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_flattens_payload() {
        #[derive(Serialize)]
        struct Payload {
            message: &'static str,
        }

        let body = serde_json::to_value(ApiResponse::success(Payload {
            message: "Question created",
        }))
        .unwrap();
        assert_eq!(body, json!({"success": true, "message": "Question created"}));
    }

    #[test]
    fn test_category_map_uses_string_keys() {
        let map = category_map(vec![
            CategoryRecord {
                id: 2,
                kind: "Art".to_string(),
            },
            CategoryRecord {
                id: 1,
                kind: "Science".to_string(),
            },
        ]);
        let body = serde_json::to_string(&map).unwrap();
        assert_eq!(body, r#"{"1":"Science","2":"Art"}"#);
    }
}
