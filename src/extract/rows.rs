// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 行角色判定
//!
//! 源页面仅靠class属性里的标记区分行的用途，这里把
//! 子串匹配逻辑集中起来，便于独立测试

/// 行角色的封闭集合
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRole {
    /// 开启新agrupación的首行
    Opening,
    /// 附属lista行
    Lista,
    /// 附属fórmula行
    Formula,
}

/// 判别某行是否带有斑马纹标记 "r1"
///
/// 同一agrupación的各行共享同一纹路，相邻agrupación之间
/// 交替，因此该标记可直接用作分段判别值
pub fn stripe_marker(row_class: &str) -> bool {
    row_class.contains("r1")
}

/// 按class属性对行进行角色分类
///
/// 行class不含 "agrupa" 标记的是首行；附属行里表头单元格
/// class含 "agrupa" 的是lista行，其余为fórmula行
pub fn classify(row_class: &str, header_class: &str) -> RowRole {
    if !row_class.contains("agrupa") {
        RowRole::Opening
    } else if header_class.contains("agrupa") {
        RowRole::Lista
    } else {
        RowRole::Formula
    }
}

/// 判别单元格是否为本期得票数单元格
///
/// class须含 "vot" 且不含上一期得票的 "pvot" 标记；
/// 纯子串匹配，"pvot" 本身也含 "vot"，排除条件不可省略
pub fn is_vote_cell(cell_class: &str) -> bool {
    cell_class.contains("vot") && !cell_class.contains("pvot")
}
