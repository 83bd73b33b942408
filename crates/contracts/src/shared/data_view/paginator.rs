/// Срез страницы `page` (нумерация с 1) размером `page_size`.
///
/// Страница за пределами данных даёт пустой срез.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Количество страниц; 0 для пустого списка
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Состояние пагинации списка. Страницы нумеруются с 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    current_page: usize,
    page_size: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, count: usize) -> usize {
        total_pages(count, self.page_size)
    }

    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.current_page, self.page_size)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, count: usize) -> bool {
        self.current_page < self.total_pages(count)
    }

    /// Перейти на страницу с ограничением `[1, total_pages]`
    pub fn jump(&mut self, page: usize, count: usize) {
        let last = self.total_pages(count).max(1);
        self.current_page = page.clamp(1, last);
    }

    pub fn next(&mut self, count: usize) {
        self.jump(self.current_page + 1, count);
    }

    pub fn prev(&mut self, count: usize) {
        self.jump(self.current_page.saturating_sub(1), count);
    }

    /// Вернуться на первую страницу (после смены фильтра)
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Удержать текущую страницу в границах после уменьшения списка
    pub fn clamp(&mut self, count: usize) {
        self.jump(self.current_page, count);
    }

    /// Номера первой и последней записи на странице (с 1) для подписи
    /// "11–12 of 12"; `None` для пустой страницы.
    pub fn visible_range(&self, count: usize) -> Option<(usize, usize)> {
        let start = (self.current_page - 1).saturating_mul(self.page_size);
        if start >= count {
            return None;
        }
        let end = start.saturating_add(self.page_size).min(count);
        Some((start + 1, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_items_ten_per_page() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(total_pages(items.len(), 10), 2);
        assert_eq!(paginate(&items, 1, 10), &items[..10]);
        assert_eq!(paginate(&items, 2, 10), &[11, 12]);
        assert!(paginate(&items, 3, 10).is_empty());
    }

    #[test]
    fn test_page_length_formula() {
        for len in 0..30usize {
            let items: Vec<usize> = (0..len).collect();
            for size in 1..8usize {
                let pages = total_pages(len, size);
                for page in 1..=pages + 2 {
                    let expected = if page > pages {
                        0
                    } else {
                        size.min(len - (page - 1) * size)
                    };
                    assert_eq!(paginate(&items, page, size).len(), expected);
                }
            }
        }
    }

    #[test]
    fn test_empty_list_has_no_pages() {
        let items: Vec<u8> = Vec::new();
        assert_eq!(total_pages(0, 10), 0);
        assert!(paginate(&items, 1, 10).is_empty());
        let p = Paginator::new(10);
        assert!(!p.has_next(0));
        assert!(!p.has_prev());
        assert_eq!(p.visible_range(0), None);
    }

    #[test]
    fn test_navigation_clamps() {
        let mut p = Paginator::new(10);
        p.prev(25);
        assert_eq!(p.current_page(), 1);
        p.next(25);
        p.next(25);
        p.next(25);
        assert_eq!(p.current_page(), 3);
        p.jump(99, 25);
        assert_eq!(p.current_page(), 3);
        p.jump(0, 25);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut p = Paginator::new(10);
        p.jump(3, 21);
        assert_eq!(p.current_page(), 3);
        p.clamp(20);
        assert_eq!(p.current_page(), 2);
        p.clamp(0);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn test_visible_range() {
        let mut p = Paginator::new(10);
        p.jump(2, 12);
        assert_eq!(p.visible_range(12), Some((11, 12)));
        assert!(!p.has_next(12));
        assert!(p.has_prev());
    }

    #[test]
    fn test_zero_page_size_is_bumped() {
        assert_eq!(Paginator::new(0).page_size(), 1);
    }
}
