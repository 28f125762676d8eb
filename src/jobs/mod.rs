// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 任务模块
///
/// 定义抓取任务描述符并按参考数据枚举全部任务
pub mod descriptor;
pub mod enumerator;
