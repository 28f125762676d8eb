// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 表头单元格承载的标识
///
/// agrupación、lista与fórmula行的表头单元格结构相同：
/// id属性加显示文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sigla {
    /// 标识符，取自表头单元格的id属性
    pub id: String,
    /// 显示名称
    pub nombre: String,
}

/// 单个agrupación（政党或联盟）的得票记录
///
/// 每个行组恰好产出一条。agrupación始终存在；
/// listas与fórmula字段仅在对应行角色出现时序列化
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    /// 顶层agrupación标识
    pub agrupacion: Sigla,
    /// 附属lista列表（可能为空）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub listas: Vec<Sigla>,
    /// fórmula（候选人组合）标识符
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula_id: Option<String>,
    /// fórmula显示名称
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula_nombre: Option<String>,
    /// 得票数
    pub vote_count: u64,
}
