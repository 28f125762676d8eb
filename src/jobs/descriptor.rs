// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 抓取任务描述符
///
/// 每个（选区，职位）组合对应一个任务。元数据在枚举时
/// 一次性填充，之后只读；各处理阶段以返回值传递结果，
/// 不回写描述符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDescriptor {
    /// 目标URL
    pub url: String,
    /// 选区ID（4位数字串）
    pub district_id: String,
    /// 省份ID（选区ID的前两位）
    pub province_id: String,
    /// 职位代码
    pub race_id: String,
    /// 职位显示名称
    pub race_name: String,
}
