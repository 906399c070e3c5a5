//! Quiz Context - 抽题规则

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::question::CategoryId;

/// 答题范围
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    /// 全部分类（前端以 id = 0 表示）
    All,
    /// 单一分类
    Category(CategoryId),
}

impl QuizScope {
    pub fn from_category_id(id: i64) -> Self {
        if id == CategoryId::ALL {
            QuizScope::All
        } else {
            QuizScope::Category(CategoryId::new(id))
        }
    }

    /// 仓储查询用的分类过滤条件
    pub fn category(&self) -> Option<CategoryId> {
        match self {
            QuizScope::All => None,
            QuizScope::Category(id) => Some(*id),
        }
    }
}

/// 从候选题目中排除已答题目后均匀随机抽取一道
///
/// 没有剩余候选时返回 None
pub fn pick_next_question<R>(candidates: &[i64], previous: &[i64], rng: &mut R) -> Option<i64>
where
    R: Rng + ?Sized,
{
    let asked: HashSet<i64> = previous.iter().copied().collect();
    let remaining: Vec<i64> = candidates
        .iter()
        .copied()
        .filter(|id| !asked.contains(id))
        .collect();

    remaining.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scope_from_category_id() {
        assert_eq!(QuizScope::from_category_id(0), QuizScope::All);
        assert_eq!(
            QuizScope::from_category_id(4),
            QuizScope::Category(CategoryId::new(4))
        );
        assert_eq!(QuizScope::All.category(), None);
    }

    #[test]
    fn test_empty_candidates() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_next_question(&[], &[], &mut rng), None);
    }

    #[test]
    fn test_all_candidates_asked() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_next_question(&[1, 2, 3], &[3, 1, 2], &mut rng), None);
    }

    #[test]
    fn test_never_repeats_previous_question() {
        let mut rng = StdRng::seed_from_u64(42);
        let candidates = [10, 11, 12, 13, 14];
        let previous = [10, 12, 14];

        for _ in 0..200 {
            let picked = pick_next_question(&candidates, &previous, &mut rng).unwrap();
            assert!(picked == 11 || picked == 13);
        }
    }

    #[test]
    fn test_every_remaining_candidate_reachable() {
        let mut rng = StdRng::seed_from_u64(1);
        let candidates = [1, 2, 3];
        let mut seen = HashSet::new();

        for _ in 0..200 {
            seen.insert(pick_next_question(&candidates, &[], &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_unknown_previous_ids_ignored() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(pick_next_question(&[8], &[99, 100], &mut rng), Some(8));
    }
}
