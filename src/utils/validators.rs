// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 校验请求中的URL字段
///
/// 缺失或仅含空白字符的URL视为无效
///
/// # 参数
///
/// * `url` - 请求体中的url字段
///
/// # 返回值
///
/// 去除首尾空白后的URL，无效时返回None
pub fn non_empty_url(url: Option<&str>) -> Option<&str> {
    let url = url?.trim();
    if url.is_empty() {
        return None;
    }
    Some(url)
}
