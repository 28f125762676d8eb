// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 参考数据模块
///
/// 提供选区、省份与职位的静态参考数据
pub mod tables;
