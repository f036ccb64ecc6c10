// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::engines::traits::{CookieLoader, EngineError};

/// 文件Cookie加载器
///
/// 从磁盘上的JSON存储文件加载Cookie载荷。
/// 文件不存在或内容为空视为无Cookie，解析失败视为加载器错误。
pub struct FileCookieLoader {
    path: PathBuf,
}

impl FileCookieLoader {
    /// 创建指向给定存储文件的加载器
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 判断载荷是否为空存储
    fn is_empty_payload(value: &serde_json::Value) -> bool {
        match value {
            serde_json::Value::Null => true,
            serde_json::Value::Array(items) => items.is_empty(),
            serde_json::Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }
}

#[async_trait]
impl CookieLoader for FileCookieLoader {
    /// 加载Cookie载荷
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(Value))` - 非空的Cookie载荷
    /// * `Ok(None)` - 存储不存在或为空
    /// * `Err(EngineError)` - 读取或解析失败
    async fn load_cookies(&self) -> Result<Option<serde_json::Value>, EngineError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(EngineError::Io(e)),
        };

        if raw.trim().is_empty() {
            return Ok(None);
        }

        let value: serde_json::Value = serde_json::from_str(&raw).map_err(|e| {
            EngineError::InvalidPayload(format!("cookie store {}: {}", self.path.display(), e))
        })?;

        if Self::is_empty_payload(&value) {
            return Ok(None);
        }

        Ok(Some(value))
    }

    /// 获取加载器名称
    fn name(&self) -> &'static str {
        "file"
    }
}
