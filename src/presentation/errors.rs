// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::engines::traits::EngineError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口。
/// 引擎内部的失败统一映射为502，而不是让错误无处理地传播。
#[derive(Error, Debug)]
pub enum ApiError {
    /// 请求缺少必填的url字段
    #[error("URL is required")]
    MissingUrl,
    /// 尚无可用的抓取数据
    #[error("No data available")]
    NoData,
    /// 无可用的Cookie
    #[error("No cookies available")]
    NoCookies,
    /// 外部协作方失败
    #[error("{0}")]
    Engine(#[from] EngineError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingUrl => StatusCode::BAD_REQUEST,
            ApiError::NoData | ApiError::NoCookies => StatusCode::NOT_FOUND,
            ApiError::Engine(e) => {
                error!("Collaborator failure: {}", e);
                StatusCode::BAD_GATEWAY
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
