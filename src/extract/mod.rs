// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 提取模块
///
/// 把结果页里不规则的TVOTOS表转换为结构化得票记录：
/// 先按斑马纹判别值分组，再按行角色装配记录
pub mod extractor;
pub mod grouping;
pub mod rows;
