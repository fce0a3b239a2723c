use serde::{Deserialize, Serialize};

const DEFAULT_PER_PAGE: i64 = 20;
const MAX_PER_PAGE: i64 = 100;

/// Page window shared by every list endpoint. Whatever a client sends,
/// `page` ends up >= 1 and `per_page` within [1, 100].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: i64,
    pub per_page: i64,
}

impl PaginationParams {
    pub fn parse(page: Option<i64>, per_page: Option<i64>) -> Self {
        let page = page.unwrap_or(1).max(1);
        let per_page = per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .max(1)
            .min(MAX_PER_PAGE);
        Self { page, per_page }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    pub fn total_pages(&self, total: i64) -> i64 {
        if total == 0 {
            0
        } else {
            (total + self.per_page - 1) / self.per_page
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn clamps_page_to_at_least_one() {
        assert_eq!(PaginationParams::parse(Some(0), None).page, 1);
        assert_eq!(PaginationParams::parse(Some(-5), None).page, 1);
        assert_eq!(PaginationParams::parse(None, None).page, 1);
    }

    #[test]
    fn clamps_per_page_to_at_most_hundred() {
        assert_eq!(PaginationParams::parse(None, Some(1000)).per_page, 100);
        assert_eq!(PaginationParams::parse(None, Some(0)).per_page, 1);
        assert_eq!(PaginationParams::parse(None, None).per_page, 20);
    }

    #[test]
    fn computes_offset_and_total_pages() {
        let params = PaginationParams::parse(Some(3), Some(20));
        assert_eq!(params.offset(), 40);
        assert_eq!(params.total_pages(41), 3);
        assert_eq!(params.total_pages(0), 0);
    }
}
