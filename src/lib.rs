// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体
pub mod domain;

/// 引擎模块
///
/// 实现结果页的抓取引擎
pub mod engines;

/// 提取模块
///
/// 实现行分组与得票记录提取
pub mod extract;

/// 任务模块
///
/// 任务描述符与确定性的任务枚举
pub mod jobs;

/// 输出模块
///
/// 结果装配与ASCII安全的JSON写出
pub mod output;

/// 参考数据模块
///
/// 选区、省份与职位的静态参考数据
pub mod reference;

/// 运行器模块
///
/// 按任务隔离失败的顺序批处理循环
pub mod runner;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
