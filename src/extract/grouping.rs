// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// 将行序列划分为判别值相同的最大连续段
///
/// 相邻元素判别值相同则归入同一段，判别值变化处即段边界；
/// 首元素的判别值决定首段归属；输入为空时返回空序列。
/// 单次前向遍历，结果直接物化，不暴露迭代状态。
///
/// 调用方必须先剔除表的标题行，否则标题会被当作首段的
/// 开头。若相邻两组因页面标记损坏而判别值未交替，两组会
/// 被静默合并为一个过大的段，这是源格式固有的脆弱点
pub fn group_rows<T, F>(rows: Vec<T>, discriminator: F) -> Vec<Vec<T>>
where
    F: Fn(&T) -> bool,
{
    let mut groups: Vec<Vec<T>> = Vec::new();
    let mut prev: Option<bool> = None;

    for row in rows {
        let curr = discriminator(&row);
        if prev == Some(curr) {
            if let Some(group) = groups.last_mut() {
                group.push(row);
            }
        } else {
            groups.push(vec![row]);
            prev = Some(curr);
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_no_groups() {
        let groups = group_rows(Vec::<u8>::new(), |_| true);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_uniform_discriminator_single_group() {
        let groups = group_rows(vec![10, 20, 30], |_| true);
        assert_eq!(groups, vec![vec![10, 20, 30]]);
    }

    #[test]
    fn test_alternating_discriminator_boundaries() {
        // Discriminator values: T F F T F → group sizes 1, 2, 1, 1
        let rows = vec![(true, "a"), (false, "b"), (false, "c"), (true, "d"), (false, "e")];
        let groups = group_rows(rows, |(flag, _)| *flag);

        let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
        assert_eq!(sizes, [1, 2, 1, 1]);

        let order: Vec<&str> = groups.iter().flatten().map(|(_, name)| *name).collect();
        assert_eq!(order, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_first_row_seeds_first_group() {
        let groups = group_rows(vec![false, false, true], |flag| *flag);
        assert_eq!(groups, vec![vec![false, false], vec![true]]);
    }

    #[test]
    fn test_non_alternating_groups_merge_silently() {
        // Two logical groups whose rows all carry the same discriminator
        // value cannot be told apart and come back as one oversized group
        let rows = vec!["a1", "a2", "b1", "b2"];
        let groups = group_rows(rows, |_| true);
        assert_eq!(groups, vec![vec!["a1", "a2", "b1", "b2"]]);
    }
}
