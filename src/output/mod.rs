// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 输出模块
///
/// 装配最终输出记录并以ASCII安全的JSON行格式写出
pub mod assembler;
pub mod json_writer;
