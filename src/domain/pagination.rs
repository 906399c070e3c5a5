//! 分页窗口
//!
//! 页码从 1 开始，每页固定条数

/// 默认每页题目数
pub const DEFAULT_QUESTIONS_PER_PAGE: usize = 10;

/// 分页窗口：按页码计算的连续切片
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    offset: usize,
    limit: usize,
}

impl PageWindow {
    /// 根据页码与每页条数计算窗口
    ///
    /// 页码小于 1 时返回 None（不存在对应窗口）
    pub fn new(page: i64, per_page: usize) -> Option<Self> {
        if page < 1 || per_page == 0 {
            return None;
        }
        let offset = usize::try_from(page - 1).ok()?.checked_mul(per_page)?;
        Some(Self {
            offset,
            limit: per_page,
        })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// 对总数为 `total` 的集合，窗口内实际包含的条数
    pub fn len_within(&self, total: usize) -> usize {
        total.saturating_sub(self.offset).min(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let window = PageWindow::new(1, DEFAULT_QUESTIONS_PER_PAGE).unwrap();
        assert_eq!(window.offset(), 0);
        assert_eq!(window.limit(), 10);
    }

    #[test]
    fn test_nth_page_offset() {
        let window = PageWindow::new(3, 10).unwrap();
        assert_eq!(window.offset(), 20);
    }

    #[test]
    fn test_non_positive_page_has_no_window() {
        assert!(PageWindow::new(0, 10).is_none());
        assert!(PageWindow::new(-4, 10).is_none());
        assert!(PageWindow::new(1, 0).is_none());
    }

    #[test]
    fn test_len_within() {
        let window = PageWindow::new(2, 10).unwrap();
        assert_eq!(window.len_within(25), 10);
        assert_eq!(window.len_within(19), 9);
        assert_eq!(window.len_within(10), 0);
        assert_eq!(window.len_within(0), 0);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        assert!(PageWindow::new(i64::MAX, usize::MAX).is_none());
    }
}
